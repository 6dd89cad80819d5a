// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_foundation::Reference;
use conan_schema::{RecipeLoader, RecipeManifest};
use conan_solve::RecipeProvider;
use conan_storage::ConanPaths;

#[cfg(test)]
#[path = "./recipe_provider_test.rs"]
mod recipe_provider_test;

/// The [`RecipeProvider`] the graph builder is driven with once a command's
/// recipe-retrieval phase (exporter, or a prior install's remote fetch) has
/// already populated the local cache: every reference a recipe requires
/// must already have an exported recipe on disk, or graph building fails
/// with the same `RecipeNotFound` a direct `RecipeLoader` call would raise.
pub struct LocalRecipeProvider<'a> {
    paths: &'a ConanPaths,
    loader: RecipeLoader,
}

impl<'a> LocalRecipeProvider<'a> {
    pub fn new(paths: &'a ConanPaths) -> Self {
        Self {
            paths,
            loader: RecipeLoader::new(),
        }
    }
}

impl<'a> RecipeProvider for LocalRecipeProvider<'a> {
    fn manifest_for(&self, reference: &Reference) -> conan_solve::Result<RecipeManifest> {
        let export_folder = self.paths.export_folder(reference);
        Ok(self.loader.load_manifest(&export_folder)?)
    }
}
