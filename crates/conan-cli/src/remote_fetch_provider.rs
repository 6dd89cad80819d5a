// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_build::LocalRecipeProvider;
use conan_foundation::Reference;
use conan_remote::{RemoteList, RemoteManager};
use conan_schema::RecipeManifest;
use conan_solve::RecipeProvider;
use conan_storage::ConanPaths;

/// A [`RecipeProvider`] that fills the local cache from the configured
/// remotes on a miss before delegating to [`LocalRecipeProvider`], so the
/// graph builder's recursive recipe retrieval (§4.3 step 1) works the same
/// whether a dependency was already exported locally or only lives on a
/// remote. `RecipeProvider::manifest_for` is a synchronous trait method, so
/// the remote fetch is driven through the current Tokio runtime handle
/// (Design Notes §9's "dedicated runtime handle" pattern).
pub struct RemoteFetchingProvider<'a> {
    paths: &'a ConanPaths,
    remotes: &'a RemoteList,
    remote_manager: &'a dyn RemoteManager,
    local: LocalRecipeProvider<'a>,
}

impl<'a> RemoteFetchingProvider<'a> {
    pub fn new(paths: &'a ConanPaths, remotes: &'a RemoteList, remote_manager: &'a dyn RemoteManager) -> Self {
        Self {
            paths,
            remotes,
            remote_manager,
            local: LocalRecipeProvider::new(paths),
        }
    }
}

impl<'a> RecipeProvider for RemoteFetchingProvider<'a> {
    fn manifest_for(&self, reference: &Reference) -> conan_solve::Result<RecipeManifest> {
        if !self.paths.recipe_exists(reference) {
            let dest = self.paths.export_folder(reference);
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    for remote in self.remotes.iter() {
                        if self.remote_manager.get_recipe(&remote.name, reference, &dest).await.is_ok() {
                            return;
                        }
                    }
                })
            });
        }
        self.local.manifest_for(reference)
    }
}
