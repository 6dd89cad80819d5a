// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use conan_schema::ImportPattern;
use conan_solve::{DepGraph, NodeId};
use conan_storage::ConanPaths;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./importer_test.rs"]
mod importer_test;

/// Implements §4.8's importer half: walks a consumer's *visible* subgraph
/// (stopping at private edges, same traversal `conan-build`'s
/// `deps_cpp_info_compose` uses) and, for each dependency, copies files out
/// of its package folder matching the consumer's `imports()` patterns into
/// the consumer's workspace.
pub struct Importer<'a> {
    paths: &'a ConanPaths,
}

impl<'a> Importer<'a> {
    pub fn new(paths: &'a ConanPaths) -> Self {
        Self { paths }
    }

    /// Applies every pattern in `imports` against every dependency visible
    /// from `root`, copying matches into `dest`. Returns the destination
    /// paths written, in traversal then pattern order.
    pub fn import(
        &self,
        graph: &DepGraph,
        root: NodeId,
        package_ids: &HashMap<NodeId, String>,
        imports: &[ImportPattern],
        dest: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut visited = std::collections::HashSet::new();
        self.visit(graph, root, package_ids, imports, dest, &mut visited, &mut written)?;
        Ok(written)
    }

    fn visit(
        &self,
        graph: &DepGraph,
        id: NodeId,
        package_ids: &HashMap<NodeId, String>,
        imports: &[ImportPattern],
        dest: &Path,
        visited: &mut std::collections::HashSet<NodeId>,
        written: &mut Vec<PathBuf>,
    ) -> Result<()> {
        for edge in graph.public_edges(id) {
            if !visited.insert(edge.target) {
                continue;
            }
            let node = graph.node(edge.target);
            let package_id = package_ids
                .get(&edge.target)
                .expect("every visible dependency has a resolved package id");
            let package_folder = self.paths.package_folder(&node.reference, package_id);
            for pattern in imports {
                written.extend(self.apply_pattern(&package_folder, pattern, dest)?);
            }
            self.visit(graph, edge.target, package_ids, imports, dest, visited, written)?;
        }
        Ok(())
    }

    fn apply_pattern(&self, package_folder: &Path, pattern: &ImportPattern, dest: &Path) -> Result<Vec<PathBuf>> {
        let src_root = match &pattern.src_subdir {
            Some(sub) => package_folder.join(sub),
            None => package_folder.to_path_buf(),
        };
        let dst_root = dest.join(&pattern.dst_subdir);
        let glob_pattern = glob::Pattern::new(&pattern.pattern).map_err(|e| Error::InvalidPatternError {
            pattern: pattern.pattern.clone(),
            detail: e.to_string(),
        })?;

        let mut written = Vec::new();
        if !src_root.is_dir() {
            return Ok(written);
        }
        for relative in walk(&src_root)? {
            if !glob_pattern.matches(&relative.to_string_lossy().replace('\\', "/")) {
                continue;
            }
            let from = src_root.join(&relative);
            let to = dst_root.join(&relative);
            if let Some(parent) = to.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(&from, &to)?;
            written.push(to);
        }
        Ok(written)
    }
}

/// Every regular file under `root`, relative to `root`, in sorted order.
fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    walk_into(root, root, &mut out)?;
    Ok(out)
}

fn walk_into(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            walk_into(root, &path, out)?;
        } else if path.is_file() {
            out.push(path.strip_prefix(root).expect("walked path is under root").to_path_buf());
        }
    }
    Ok(())
}
