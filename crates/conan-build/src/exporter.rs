// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use conan_foundation::Reference;
use conan_schema::RecipeManifest;
use conan_storage::{ConanPaths, Manifest};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./exporter_test.rs"]
mod exporter_test;

/// Copies a local recipe's exported files into the store and writes its
/// manifest, per spec §4.5: loads the recipe from `src` with the default
/// settings context upstream of this type (the caller owns recipe loading),
/// then this type handles the file copy / conflict check / manifest write.
pub struct Exporter<'a> {
    paths: &'a ConanPaths,
}

impl<'a> Exporter<'a> {
    pub fn new(paths: &'a ConanPaths) -> Self {
        Self { paths }
    }

    /// Exports the files `manifest.exports` selects (or everything under
    /// `src` if the list is empty) for `reference`. Fails with
    /// `ExportConflictError` if the destination already holds a manifest
    /// whose contents differ, unless `overwrite` is set.
    pub fn export(
        &self,
        reference: &Reference,
        manifest: &RecipeManifest,
        src: &Path,
        timestamp: i64,
        overwrite: bool,
    ) -> Result<()> {
        let export_folder = self.paths.export_folder(reference);
        let manifest_path = self.paths.recipe_manifest_path(reference);

        let relative_files = collect_matching(src, &manifest.exports)?;
        let mut files = BTreeMap::new();
        for rel in &relative_files {
            let data = std::fs::read(src.join(rel))?;
            files.insert(to_relpath(rel), conan_foundation::sha1_hex(&data));
        }
        let new_manifest = Manifest { timestamp, files };

        if !overwrite {
            if let Ok(existing) = Manifest::read_from(&manifest_path) {
                if existing.files != new_manifest.files {
                    return Err(Error::Storage(conan_storage::Error::ExportConflictError {
                        reference: reference.to_string(),
                        path: manifest_path,
                    }));
                }
                return Ok(());
            }
        }

        std::fs::create_dir_all(&export_folder)?;
        for rel in &relative_files {
            let dest = export_folder.join(rel);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(src.join(rel), &dest)?;
        }
        new_manifest.write_to(&manifest_path)?;
        Ok(())
    }
}

fn to_relpath(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Every regular file under `src`, relative to `src`, that matches one of
/// `patterns` (or every file, if `patterns` is empty).
fn collect_matching(src: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut all = Vec::new();
    if src.is_dir() {
        walk(src, src, &mut all)?;
    }
    if patterns.is_empty() {
        return Ok(all);
    }
    let globs: Vec<glob::Pattern> = patterns
        .iter()
        .filter_map(|p| glob::Pattern::new(p).ok())
        .collect();
    Ok(all
        .into_iter()
        .filter(|rel| globs.iter().any(|g| g.matches(&to_relpath(rel))))
        .collect())
}

fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk(root, &path, out)?;
        } else if path.is_file() {
            out.push(path.strip_prefix(root).expect("walked path is under root").to_path_buf());
        }
    }
    Ok(())
}
