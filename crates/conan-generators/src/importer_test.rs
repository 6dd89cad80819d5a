// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::Arc;

use conan_foundation::{OptionsValues, Reference, Settings, SettingsTree};
use conan_schema::{RecipeManifest, RequireEntry};
use conan_solve::{GraphBuilder, RecipeProvider};

use super::*;

struct MapProvider(HashMap<String, RecipeManifest>);

impl RecipeProvider for MapProvider {
    fn manifest_for(&self, reference: &Reference) -> conan_solve::Result<RecipeManifest> {
        Ok(self
            .0
            .get(&format!("{}/{}", reference.name(), reference.version()))
            .cloned()
            .unwrap_or_default())
    }
}

fn manifest(name: &str, requires: &[(&str, bool)]) -> RecipeManifest {
    RecipeManifest {
        name: name.to_string(),
        version: "1.0".to_string(),
        requires: requires
            .iter()
            .map(|(r, private)| RequireEntry {
                reference: r.to_string(),
                private: *private,
            })
            .collect(),
        ..Default::default()
    }
}

fn build_app_zlib_graph(private: bool) -> (conan_solve::DepGraph, Reference) {
    let zlib_ref: Reference = "zlib/1.0@conan/stable".parse().unwrap();
    let mut provider = HashMap::new();
    provider.insert("zlib/1.0".to_string(), manifest("zlib", &[]));
    let provider = MapProvider(provider);

    let settings = Settings::new(Arc::new(SettingsTree::new()));
    let options = OptionsValues::new();
    let builder = GraphBuilder::new(&provider, &settings, &options);
    let root_manifest = manifest("app", &[("zlib/1.0@conan/stable", private)]);
    let root_ref: Reference = "app/1.0@conan/stable".parse().unwrap();
    let (graph, _) = builder.build(root_ref, root_manifest).unwrap();
    (graph, zlib_ref)
}

#[test]
fn test_import_copies_matching_files_from_visible_dependency() {
    let store = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(store.path());

    let (graph, zlib_ref) = build_app_zlib_graph(false);
    let zlib_id = graph.find_by_name("zlib").unwrap();
    let package_id = "a".repeat(40);
    let package_folder = paths.package_folder(&zlib_ref, &package_id);
    std::fs::create_dir_all(package_folder.join("bin")).unwrap();
    std::fs::write(package_folder.join("bin/zlib.dll"), b"binary").unwrap();

    let mut package_ids = HashMap::new();
    package_ids.insert(zlib_id, package_id);

    let dest = tempfile::tempdir().unwrap();
    let pattern = ImportPattern {
        pattern: "*.dll".to_string(),
        src_subdir: Some("bin".to_string()),
        dst_subdir: "bin".to_string(),
    };

    let importer = Importer::new(&paths);
    let written = importer
        .import(&graph, graph.root, &package_ids, &[pattern], dest.path())
        .unwrap();

    assert_eq!(written.len(), 1);
    assert!(dest.path().join("bin/zlib.dll").is_file());
}

#[test]
fn test_import_skips_private_edges() {
    let store = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(store.path());

    let (graph, zlib_ref) = build_app_zlib_graph(true);
    let zlib_id = graph.find_by_name("zlib").unwrap();
    let package_id = "b".repeat(40);
    let package_folder = paths.package_folder(&zlib_ref, &package_id);
    std::fs::create_dir_all(package_folder.join("bin")).unwrap();
    std::fs::write(package_folder.join("bin/zlib.dll"), b"binary").unwrap();

    let mut package_ids = HashMap::new();
    package_ids.insert(zlib_id, package_id);

    let dest = tempfile::tempdir().unwrap();
    let pattern = ImportPattern {
        pattern: "*.dll".to_string(),
        src_subdir: Some("bin".to_string()),
        dst_subdir: "bin".to_string(),
    };

    let importer = Importer::new(&paths);
    let written = importer
        .import(&graph, graph.root, &package_ids, &[pattern], dest.path())
        .unwrap();

    assert!(written.is_empty());
}
