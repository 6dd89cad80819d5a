// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_foundation::Reference;
use conan_schema::RecipeManifest;

use super::*;
use crate::graph::Edge;
use conan_schema::Visibility;

fn node(name: &str) -> GraphNode {
    GraphNode {
        name: name.to_string(),
        reference: Reference::new(name, "1.0", "conan", "stable").unwrap(),
        manifest: RecipeManifest {
            name: name.to_string(),
            version: "1.0".to_string(),
            ..Default::default()
        },
        settings: vec![],
        options: vec![],
        edges: vec![],
    }
}

#[test]
fn test_leaf_package_id_depends_only_on_own_settings() {
    let mut zlib = node("zlib");
    zlib.settings = vec![("os".to_string(), "Linux".to_string())];
    let graph = DepGraph {
        nodes: vec![zlib],
        root: NodeId(0),
    };
    let infos = compute_package_ids(&graph);
    assert_eq!(infos.len(), 1);
    assert!(infos[&NodeId(0)].requires.is_empty());
}

#[test]
fn test_parent_requires_includes_dependency_package_id() {
    let zlib = node("zlib");
    let mut app = node("app");
    app.edges = vec![Edge {
        target: NodeId(0),
        visibility: Visibility::Public,
    }];
    let graph = DepGraph {
        nodes: vec![zlib, app],
        root: NodeId(1),
    };
    let infos = compute_package_ids(&graph);
    let zlib_id = infos[&NodeId(0)].package_id();
    assert_eq!(infos[&NodeId(1)].requires.len(), 1);
    assert!(infos[&NodeId(1)].requires[0].ends_with(&zlib_id));
    assert!(infos[&NodeId(1)].requires[0].starts_with("zlib/1.0@conan/stable#"));
}

/// §8 S2: `A -> (private) B -> C`. `A.requires` must contain neither `B`'s
/// nor `C`'s package id.
#[test]
fn test_private_edge_shields_requires() {
    let c = node("c");
    let mut b = node("b");
    b.edges = vec![Edge {
        target: NodeId(0),
        visibility: Visibility::Public,
    }];
    let mut a = node("a");
    a.edges = vec![Edge {
        target: NodeId(1),
        visibility: Visibility::Private,
    }];
    let graph = DepGraph {
        nodes: vec![c, b, a],
        root: NodeId(2),
    };
    let infos = compute_package_ids(&graph);
    assert!(infos[&NodeId(2)].requires.is_empty());
}

/// §8 S3: `A -> B -> C` all public. `A.requires == {pkgid(B), pkgid(C)}`.
#[test]
fn test_public_transitive_closure() {
    let c = node("c");
    let mut b = node("b");
    b.edges = vec![Edge {
        target: NodeId(0),
        visibility: Visibility::Public,
    }];
    let mut a = node("a");
    a.edges = vec![Edge {
        target: NodeId(1),
        visibility: Visibility::Public,
    }];
    let graph = DepGraph {
        nodes: vec![c, b, a],
        root: NodeId(2),
    };
    let infos = compute_package_ids(&graph);
    let c_id = infos[&NodeId(0)].package_id();
    let b_id = infos[&NodeId(1)].package_id();
    let mut requires = infos[&NodeId(2)].requires.clone();
    requires.sort();
    let mut expected = vec![
        format!("b/1.0@conan/stable#{b_id}"),
        format!("c/1.0@conan/stable#{c_id}"),
    ];
    expected.sort();
    assert_eq!(requires, expected);
}
