// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

#[cfg(test)]
#[path = "./login_test.rs"]
mod login_test;

#[derive(Clone, Debug, Deserialize, Serialize, Eq, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

/// A per-remote credential store persisted as JSON. Writes are atomic: the
/// new content lands in a sibling temp file first, which is then renamed
/// over the real path, so a crash mid-write never leaves a half-written
/// file other commands would choke on.
pub struct LoginDb {
    path: PathBuf,
}

impl LoginDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, Credentials>> {
        if !self.path.is_file() {
            return Ok(BTreeMap::new());
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn store_all(&self, entries: &BTreeMap<String, Credentials>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.tmp_path();
        std::fs::write(&tmp_path, serde_json::to_string_pretty(entries)?)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| format!(".{}.tmp", n.to_string_lossy()))
            .unwrap_or_else(|| ".login.json.tmp".to_string());
        self.path
            .parent()
            .map(|p| p.join(&file_name))
            .unwrap_or_else(|| PathBuf::from(&file_name))
    }

    pub fn get(&self, remote: &str) -> Result<Option<Credentials>> {
        Ok(self.load()?.get(remote).cloned())
    }

    pub fn set(&self, remote: &str, username: &str, token: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.insert(
            remote.to_string(),
            Credentials {
                username: username.to_string(),
                token: token.to_string(),
            },
        );
        self.store_all(&entries)
    }

    pub fn remove(&self, remote: &str) -> Result<()> {
        let mut entries = self.load()?;
        entries.remove(remote);
        self.store_all(&entries)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
