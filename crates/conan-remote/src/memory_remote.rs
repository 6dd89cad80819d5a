// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use async_trait::async_trait;
use conan_foundation::Reference;
use dashmap::DashMap;

use crate::{Error, RemoteManager, Result};

#[cfg(test)]
#[path = "./memory_remote_test.rs"]
mod memory_remote_test;

fn copy_dir(src: &Path, dest: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dest)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let target = dest.join(entry.file_name());
        if path.is_dir() {
            copy_dir(&path, &target)?;
        } else {
            std::fs::copy(&path, &target)?;
        }
    }
    Ok(())
}

/// An in-memory [`RemoteManager`] test double: recipes and packages are
/// copied into and out of a `DashMap` keyed by reference/package id rather
/// than going over the network. Never wired into production command paths;
/// exists purely so `conan-build`/`conan-cli` tests can exercise upload and
/// install flows without a real server.
#[derive(Default)]
pub struct MemoryRemote {
    recipes: DashMap<String, std::path::PathBuf>,
    packages: DashMap<(String, String), std::path::PathBuf>,
    store_root: tempfile::TempDir,
}

impl MemoryRemote {
    pub fn new() -> Self {
        Self {
            recipes: DashMap::new(),
            packages: DashMap::new(),
            store_root: tempfile::tempdir().expect("can create a temp dir for the memory remote"),
        }
    }
}

#[async_trait]
impl RemoteManager for MemoryRemote {
    async fn get_recipe(&self, remote: &str, reference: &Reference, dest: &Path) -> Result<()> {
        let key = reference.to_string();
        let src = self
            .recipes
            .get(&key)
            .ok_or_else(|| Error::NotFoundError {
                remote: remote.to_string(),
                reference: key.clone(),
            })?
            .clone();
        copy_dir(&src, dest)?;
        Ok(())
    }

    async fn get_package(
        &self,
        remote: &str,
        reference: &Reference,
        package_id: &str,
        dest: &Path,
    ) -> Result<()> {
        let key = (reference.to_string(), package_id.to_string());
        let src = self
            .packages
            .get(&key)
            .ok_or_else(|| Error::NotFoundError {
                remote: remote.to_string(),
                reference: format!("{reference}:{package_id}"),
            })?
            .clone();
        copy_dir(&src, dest)?;
        Ok(())
    }

    async fn upload_recipe(&self, _remote: &str, reference: &Reference, src: &Path) -> Result<()> {
        let key = reference.to_string();
        let dest = self.store_root.path().join("recipes").join(&key);
        copy_dir(src, &dest)?;
        self.recipes.insert(key, dest);
        Ok(())
    }

    async fn upload_package(
        &self,
        _remote: &str,
        reference: &Reference,
        package_id: &str,
        src: &Path,
    ) -> Result<()> {
        let key = (reference.to_string(), package_id.to_string());
        let dest = self
            .store_root
            .path()
            .join("packages")
            .join(format!("{}-{}", reference, package_id));
        copy_dir(src, &dest)?;
        self.packages.insert(key, dest);
        Ok(())
    }

    async fn search(&self, _remote: &str, pattern: &str) -> Result<Vec<Reference>> {
        let glob_pattern = glob::Pattern::new(pattern).map_err(|e| Error::RemoteError {
            remote: _remote.to_string(),
            detail: e.to_string(),
        })?;
        let mut found: Vec<Reference> = self
            .recipes
            .iter()
            .filter_map(|entry| {
                let reference: Reference = entry.key().parse().ok()?;
                glob_pattern.matches(entry.key()).then_some(reference)
            })
            .collect();
        found.sort();
        Ok(found)
    }

    async fn authenticate(&self, _remote: &str, user: &str, password: &str) -> Result<String> {
        Ok(format!("token-for-{user}-{}", conan_foundation::sha1_hex(password.as_bytes())))
    }

    async fn delete_recipe(&self, _remote: &str, reference: &Reference) -> Result<()> {
        let key = reference.to_string();
        self.recipes.remove(&key);
        self.packages.retain(|(r, _), _| r != &key);
        Ok(())
    }

    async fn delete_package(&self, _remote: &str, reference: &Reference, package_id: &str) -> Result<()> {
        let key = (reference.to_string(), package_id.to_string());
        self.packages.remove(&key);
        Ok(())
    }
}
