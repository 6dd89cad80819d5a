// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::Path;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./manifest_test.rs"]
mod manifest_test;

/// A content manifest over a directory tree: every regular file's path
/// (relative to the tree root, `/`-separated) mapped to its SHA-1 digest,
/// plus the Unix timestamp the manifest was computed at. Used both to
/// detect an export conflicting with what's already cached and, diffed
/// against a previous manifest, to drive incremental uploads.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Manifest {
    pub timestamp: i64,
    pub files: BTreeMap<String, String>,
}

impl Manifest {
    /// Walks `root` recursively and hashes every regular file found.
    pub fn compute(root: &Path, timestamp: i64) -> Result<Self> {
        let mut files = BTreeMap::new();
        if root.is_dir() {
            Self::walk(root, root, &mut files)?;
        }
        Ok(Manifest { timestamp, files })
    }

    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, String>) -> Result<()> {
        let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
        entries.sort_by_key(|e| e.file_name());
        for entry in entries {
            let path = entry.path();
            if path.is_dir() {
                Self::walk(root, &path, out)?;
            } else if path.is_file() {
                let relative = path
                    .strip_prefix(root)
                    .expect("walked path is under root")
                    .to_string_lossy()
                    .replace('\\', "/");
                let data = std::fs::read(&path)?;
                out.insert(relative, conan_foundation::sha1_hex(&data));
            }
        }
        Ok(())
    }

    /// Files present, and different, in `self` compared to `other` —
    /// additions, modifications. A file removed entirely is reported too,
    /// with an empty digest, so an uploader knows to delete it remotely.
    pub fn diff(&self, other: &Manifest) -> Vec<String> {
        let mut changed: Vec<String> = self
            .files
            .iter()
            .filter(|(path, digest)| other.files.get(*path).map(|d| d != *digest).unwrap_or(true))
            .map(|(path, _)| path.clone())
            .collect();
        changed.extend(
            other
                .files
                .keys()
                .filter(|path| !self.files.contains_key(*path))
                .cloned(),
        );
        changed.sort();
        changed.dedup();
        changed
    }

    pub fn dumps(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.timestamp.to_string());
        out.push('\n');
        for (path, digest) in &self.files {
            out.push_str(path);
            out.push_str(": ");
            out.push_str(digest);
            out.push('\n');
        }
        out
    }

    pub fn load(text: &str) -> Result<Self> {
        let mut lines = text.lines();
        let timestamp: i64 = lines
            .next()
            .ok_or_else(|| Error::Foundation(conan_foundation::Error::ConfigurationError("empty manifest".to_string())))?
            .parse()
            .map_err(|_| Error::Foundation(conan_foundation::Error::ConfigurationError("malformed manifest timestamp".to_string())))?;
        let mut files = BTreeMap::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let (path, digest) = line.split_once(": ").ok_or_else(|| {
                Error::Foundation(conan_foundation::Error::ConfigurationError(format!(
                    "malformed manifest line: {line:?}"
                )))
            })?;
            files.insert(path.to_string(), digest.to_string());
        }
        Ok(Manifest { timestamp, files })
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.dumps())?;
        Ok(())
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::load(&text)
    }
}
