// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use conan_schema::ConanInfo;

use crate::graph::{DepGraph, NodeId};

/// Computes each node's [`ConanInfo`] in reverse topological order, so a
/// dependency's package id is already known by the time its dependent's own
/// `requires` section is built. Per §3's invariant, a private edge never
/// contributes to the parent's `requires`: only direct public children are
/// walked, and each contributes both its own package id and its already-
/// computed public-transitive closure (`dep_info.requires`), so indirect
/// public dependencies reachable without crossing a private edge are
/// included too (§8 S3).
pub fn compute_package_ids(graph: &DepGraph) -> HashMap<NodeId, ConanInfo> {
    let mut infos: HashMap<NodeId, ConanInfo> = HashMap::new();
    for id in graph.reverse_topological_order() {
        let node = graph.node(id);
        let mut requires: Vec<String> = Vec::new();
        for edge in graph.public_edges(id) {
            let dep_info = infos
                .get(&edge.target)
                .expect("dependencies are finalized before their dependents in reverse topological order");
            let dep_node = graph.node(edge.target);
            requires.push(format!("{}#{}", dep_node.reference, dep_info.package_id()));
            requires.extend(dep_info.requires.iter().cloned());
        }
        let info = ConanInfo::new(node.settings.clone(), node.options.clone(), requires);
        infos.insert(id, info);
    }
    infos
}

#[cfg(test)]
#[path = "./info_compute_test.rs"]
mod info_compute_test;
