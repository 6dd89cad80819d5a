// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dashmap::DashMap;
use fs2::FileExt;
use tokio::sync::Mutex;

use crate::Result;

#[cfg(test)]
#[path = "./lock_test.rs"]
mod lock_test;

/// Identifies the (reference, package id) a build lock guards.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PackageKey {
    pub reference: String,
    pub package_id: String,
}

impl PackageKey {
    pub fn new(reference: impl Into<String>, package_id: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            package_id: package_id.into(),
        }
    }
}

/// Guarantees at most one concurrent build of a given (reference, package
/// id): an in-process `tokio::sync::Mutex` serializes tasks within this
/// process cheaply, and an `fs2` advisory exclusive lock on a per-package
/// lock file serializes across processes sharing the same cache directory.
/// The in-process mutex is acquired first, so two tasks in this process
/// racing for the same package never both block on the (comparatively
/// expensive) file lock.
pub struct BuildLockManager {
    locks: DashMap<PackageKey, Arc<Mutex<()>>>,
}

impl Default for BuildLockManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildLockManager {
    pub fn new() -> Self {
        Self { locks: DashMap::new() }
    }

    fn in_process_lock(&self, key: &PackageKey) -> Arc<Mutex<()>> {
        self.locks.entry(key.clone()).or_insert_with(|| Arc::new(Mutex::new(()))).clone()
    }

    /// Acquires both the in-process and the cross-process lock for `key`,
    /// creating `lock_path`'s parent directory if necessary. The returned
    /// guard releases both when dropped.
    pub async fn acquire(&self, key: PackageKey, lock_path: &Path) -> Result<BuildLockGuard> {
        let in_process = self.in_process_lock(&key);
        let permit = in_process.lock_owned().await;

        if let Some(parent) = lock_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).write(true).open(lock_path)?;
        let file = tokio::task::spawn_blocking({
            let file = file;
            move || -> std::io::Result<File> {
                file.lock_exclusive()?;
                Ok(file)
            }
        })
        .await
        .expect("lock task does not panic")?;

        Ok(BuildLockGuard {
            _permit: permit,
            file,
            path: lock_path.to_path_buf(),
        })
    }
}

/// Held for the duration of a single package build. Dropping it releases
/// the advisory file lock (via `File`'s `Drop`, which on Unix closes the fd
/// and so releases any `flock`) and the in-process permit.
pub struct BuildLockGuard {
    _permit: tokio::sync::OwnedMutexGuard<()>,
    file: File,
    path: PathBuf,
}

impl BuildLockGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for BuildLockGuard {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}
