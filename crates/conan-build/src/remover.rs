// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_foundation::Reference;
use conan_remote::RemoteManager;
use conan_storage::ConanPaths;
use regex::Regex;

use crate::package_pattern::PackagePattern;
use crate::store_scan;
use crate::Result;

#[cfg(test)]
#[path = "./remover_test.rs"]
mod remover_test;

/// Implements §4.6's remove half: a reference glob/regex plus optional
/// package-id filter, against the local store and (optionally) a remote.
/// Source-tree removal is opt-in, matching the `src` flag.
pub struct Remover<'a> {
    paths: &'a ConanPaths,
}

impl<'a> Remover<'a> {
    pub fn new(paths: &'a ConanPaths) -> Self {
        Self { paths }
    }

    pub fn matching(&self, pattern: &PackagePattern) -> Result<Vec<Reference>> {
        Ok(store_scan::local_references(self.paths.root())?
            .into_iter()
            .filter(|r| pattern.matches(&r.to_string()))
            .collect())
    }

    fn reference_dir(&self, reference: &Reference) -> std::path::PathBuf {
        self.paths
            .export_folder(reference)
            .parent()
            .expect("export folder has a parent")
            .to_path_buf()
    }

    /// Removes `reference` from the local store. With `package_ids` given,
    /// only its matching `build`/`package` subdirectories are deleted and
    /// the recipe export and source tree are left alone. Without a filter,
    /// the whole recipe (export, build, package, locks) is removed; the
    /// source tree only if `remove_source` is set.
    pub fn remove_local(&self, reference: &Reference, package_ids: Option<&Regex>, remove_source: bool) -> Result<()> {
        let reference_dir = self.reference_dir(reference);

        if let Some(re) = package_ids {
            for subdir in ["package", "build"] {
                let dir = reference_dir.join(subdir);
                if !dir.is_dir() {
                    continue;
                }
                for entry in std::fs::read_dir(&dir)? {
                    let entry = entry?;
                    let name = entry.file_name().to_string_lossy().into_owned();
                    if re.is_match(&name) {
                        std::fs::remove_dir_all(entry.path())?;
                    }
                }
            }
            return Ok(());
        }

        for subdir in ["export", "build", "package", "locks"] {
            let dir = reference_dir.join(subdir);
            if dir.is_dir() {
                std::fs::remove_dir_all(&dir)?;
            }
        }
        if remove_source {
            let source_dir = reference_dir.join("source");
            if source_dir.is_dir() {
                std::fs::remove_dir_all(&source_dir)?;
            }
        }
        Ok(())
    }

    pub async fn remove_remote(
        &self,
        remote_manager: &dyn RemoteManager,
        remote_name: &str,
        reference: &Reference,
        package_id: Option<&str>,
    ) -> Result<()> {
        match package_id {
            Some(package_id) => remote_manager.delete_package(remote_name, reference, package_id).await?,
            None => remote_manager.delete_recipe(remote_name, reference).await?,
        }
        Ok(())
    }
}
