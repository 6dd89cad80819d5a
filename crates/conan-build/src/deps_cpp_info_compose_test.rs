// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

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

fn cpp_info_with(dir: &str) -> CppInfo {
    let mut info = CppInfo::default();
    info.include_dirs.push(dir.to_string());
    info
}

#[test]
fn test_private_dependency_subgraph_is_excluded() {
    let mut provider = HashMap::new();
    provider.insert(
        "app/1.0".to_string(),
        manifest(
            "app",
            &[
                ("zlib/1.0@conan/stable", false),
                ("openssl/1.0@conan/stable", true),
            ],
        ),
    );
    provider.insert("zlib/1.0".to_string(), manifest("zlib", &[]));
    provider.insert("openssl/1.0".to_string(), manifest("openssl", &[]));
    let provider = MapProvider(provider);

    let definition: SettingsTree = Default::default();
    let settings = Settings::new(std::sync::Arc::new(definition));
    let options = OptionsValues::new();
    let builder = GraphBuilder::new(&provider, &settings, &options);
    let root_ref = Reference::new("app", "1.0", "conan", "stable").unwrap();
    let root_manifest = manifest(
        "app",
        &[
            ("zlib/1.0@conan/stable", false),
            ("openssl/1.0@conan/stable", true),
        ],
    );
    let (graph, _) = builder.build(root_ref, root_manifest).unwrap();

    let zlib_id = graph.find_by_name("zlib").unwrap();
    let openssl_id = graph.find_by_name("openssl").unwrap();
    let mut cpp_infos = HashMap::new();
    cpp_infos.insert(zlib_id, cpp_info_with("zlib/include"));
    cpp_infos.insert(openssl_id, cpp_info_with("openssl/include"));

    let composed = compose(&graph, graph.root, &cpp_infos);
    assert_eq!(composed.root().include_dirs, vec!["zlib/include".to_string()]);
    assert_eq!(composed.deps().keys().collect::<Vec<_>>(), vec!["zlib"]);
}

#[test]
fn test_diamond_dependency_contributes_once() {
    let mut provider = HashMap::new();
    provider.insert(
        "app/1.0".to_string(),
        manifest("app", &[("a/1.0@conan/stable", false), ("b/1.0@conan/stable", false)]),
    );
    provider.insert("a/1.0".to_string(), manifest("a", &[("zlib/1.0@conan/stable", false)]));
    provider.insert("b/1.0".to_string(), manifest("b", &[("zlib/1.0@conan/stable", false)]));
    provider.insert("zlib/1.0".to_string(), manifest("zlib", &[]));
    let provider = MapProvider(provider);

    let definition: SettingsTree = Default::default();
    let settings = Settings::new(std::sync::Arc::new(definition));
    let options = OptionsValues::new();
    let builder = GraphBuilder::new(&provider, &settings, &options);
    let root_ref = Reference::new("app", "1.0", "conan", "stable").unwrap();
    let root_manifest = manifest("app", &[("a/1.0@conan/stable", false), ("b/1.0@conan/stable", false)]);
    let (graph, _) = builder.build(root_ref, root_manifest).unwrap();

    let mut cpp_infos = HashMap::new();
    for name in ["a", "b", "zlib"] {
        let id = graph.find_by_name(name).unwrap();
        cpp_infos.insert(id, cpp_info_with(&format!("{name}/include")));
    }

    let composed = compose(&graph, graph.root, &cpp_infos);
    assert_eq!(composed.deps().len(), 3);
    assert_eq!(
        composed.root().include_dirs,
        vec!["a/include".to_string(), "zlib/include".to_string(), "b/include".to_string()]
    );
}
