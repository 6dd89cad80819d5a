// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use conan_foundation::Reference;
use conan_schema::ConanInfo;
use conan_storage::ConanPaths;
use regex::Regex;

use crate::package_pattern::PackagePattern;
use crate::store_scan;
use crate::Result;

#[cfg(test)]
#[path = "./search_test.rs"]
mod search_test;

/// One reference's matching packages, keyed by package id.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchResult {
    pub reference: Reference,
    pub packages: BTreeMap<String, ConanInfo>,
}

/// Implements §4.7: a glob-or-regex over references against the local
/// store, and delegation to a remote's own search endpoint.
pub struct Search<'a> {
    paths: &'a ConanPaths,
}

impl<'a> Search<'a> {
    pub fn new(paths: &'a ConanPaths) -> Self {
        Self { paths }
    }

    pub fn local(&self, reference_pattern: &PackagePattern, package_id_pattern: Option<&Regex>) -> Result<Vec<SearchResult>> {
        let mut out = Vec::new();
        for reference in store_scan::local_references(self.paths.root())? {
            if !reference_pattern.matches(&reference.to_string()) {
                continue;
            }
            let packages_root = self
                .paths
                .export_folder(&reference)
                .parent()
                .expect("export folder has a parent")
                .join("package");
            let mut packages = BTreeMap::new();
            if packages_root.is_dir() {
                for entry in std::fs::read_dir(&packages_root)? {
                    let entry = entry?;
                    if !entry.path().is_dir() {
                        continue;
                    }
                    let package_id = entry.file_name().to_string_lossy().into_owned();
                    if let Some(re) = package_id_pattern {
                        if !re.is_match(&package_id) {
                            continue;
                        }
                    }
                    let info_path = self.paths.package_info_path(&reference, &package_id);
                    if let Ok(text) = std::fs::read_to_string(&info_path) {
                        if let Ok(info) = ConanInfo::load(&text) {
                            packages.insert(package_id, info);
                        }
                    }
                }
            }
            out.push(SearchResult { reference, packages });
        }
        Ok(out)
    }

    pub async fn remote(
        &self,
        remote_manager: &dyn conan_remote::RemoteManager,
        remote_name: &str,
        pattern: &str,
    ) -> Result<Vec<Reference>> {
        Ok(remote_manager.search(remote_name, pattern).await?)
    }
}
