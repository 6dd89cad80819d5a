// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::{Path, PathBuf};

use conan_foundation::Reference;

use crate::Result;

#[cfg(test)]
#[path = "./store_scan_test.rs"]
mod store_scan_test;

/// Enumerates every `<name>/<version>/<user>/<channel>` leaf directory under
/// a store root as a [`Reference`], mirroring `ConanPaths`' on-disk layout.
/// Used by search and remove, which both need to discover what references
/// exist locally without `conan-storage` exposing that walk itself.
pub(crate) fn local_references(root: &Path) -> Result<Vec<Reference>> {
    let mut out = Vec::new();
    if !root.is_dir() {
        return Ok(out);
    }
    for name_dir in subdirs(root)? {
        for version_dir in subdirs(&name_dir)? {
            for user_dir in subdirs(&version_dir)? {
                for channel_dir in subdirs(&user_dir)? {
                    let reference = Reference::new(
                        dir_name(&name_dir),
                        dir_name(&version_dir),
                        dir_name(&user_dir),
                        dir_name(&channel_dir),
                    );
                    if let Ok(reference) = reference {
                        out.push(reference);
                    }
                }
            }
        }
    }
    out.sort_by_key(|r| r.to_string());
    Ok(out)
}

fn subdirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            out.push(entry.path());
        }
    }
    Ok(out)
}

fn dir_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}
