// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use conan_foundation::Reference;

/// Maps references and package ids onto the on-disk cache layout rooted at a
/// single storage directory:
///
/// ```text
/// <root>/<name>/<version>/<user>/<channel>/
///   export/              recipe files (conanfile.yml, exported sources)
///   export/conanmanifest.txt
///   source/              materialized, setting-independent sources
///   build/<package_id>/   scratch build directory, one per package id
///   package/<package_id>/ the installed binary
///   package/<package_id>/conaninfo.txt
///   package/<package_id>/conanmanifest.txt
///   locks/<package_id>.lock
/// ```
#[derive(Clone, Debug)]
pub struct ConanPaths {
    root: PathBuf,
}

impl ConanPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn reference_dir(&self, reference: &Reference) -> PathBuf {
        self.root
            .join(reference.name())
            .join(reference.version())
            .join(reference.user())
            .join(reference.channel())
    }

    pub fn export_folder(&self, reference: &Reference) -> PathBuf {
        self.reference_dir(reference).join("export")
    }

    pub fn recipe_manifest_path(&self, reference: &Reference) -> PathBuf {
        self.export_folder(reference).join("conanmanifest.txt")
    }

    pub fn source_folder(&self, reference: &Reference) -> PathBuf {
        self.reference_dir(reference).join("source")
    }

    pub fn build_folder(&self, reference: &Reference, package_id: &str) -> PathBuf {
        self.reference_dir(reference).join("build").join(package_id)
    }

    pub fn package_folder(&self, reference: &Reference, package_id: &str) -> PathBuf {
        self.reference_dir(reference).join("package").join(package_id)
    }

    pub fn package_info_path(&self, reference: &Reference, package_id: &str) -> PathBuf {
        self.package_folder(reference, package_id).join("conaninfo.txt")
    }

    pub fn package_manifest_path(&self, reference: &Reference, package_id: &str) -> PathBuf {
        self.package_folder(reference, package_id).join("conanmanifest.txt")
    }

    pub fn build_lock_path(&self, reference: &Reference, package_id: &str) -> PathBuf {
        self.reference_dir(reference)
            .join("locks")
            .join(format!("{package_id}.lock"))
    }

    pub fn package_exists(&self, reference: &Reference, package_id: &str) -> bool {
        self.package_manifest_path(reference, package_id).is_file()
    }

    pub fn recipe_exists(&self, reference: &Reference) -> bool {
        self.recipe_manifest_path(reference).is_file()
    }
}

#[cfg(test)]
#[path = "./paths_test.rs"]
mod paths_test;
