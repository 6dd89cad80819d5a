// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use conan_schema::{CppInfo, DepsCppInfo};
use conan_solve::{DepGraph, NodeId};

#[cfg(test)]
#[path = "./deps_cpp_info_compose_test.rs"]
mod deps_cpp_info_compose_test;

/// Composes the `DepsCppInfo` a node's `build()`/`package()` hooks see: its
/// direct and indirect dependencies reached without crossing a private
/// edge, each contributing its already-computed `CppInfo` in first-seen
/// traversal order. `cpp_infos` holds one `CppInfo` per node already
/// installed (reused, downloaded or built) earlier in the same reverse
/// topological traversal.
pub fn compose(graph: &DepGraph, root: NodeId, cpp_infos: &HashMap<NodeId, CppInfo>) -> DepsCppInfo {
    let mut deps = DepsCppInfo::new();
    let mut visited = HashSet::new();
    for edge in graph.public_edges(root) {
        visit(graph, edge.target, cpp_infos, &mut deps, &mut visited);
    }
    deps
}

fn visit(
    graph: &DepGraph,
    id: NodeId,
    cpp_infos: &HashMap<NodeId, CppInfo>,
    deps: &mut DepsCppInfo,
    visited: &mut HashSet<NodeId>,
) {
    if !visited.insert(id) {
        return;
    }
    if let Some(info) = cpp_infos.get(&id) {
        let node = graph.node(id);
        deps.append(&node.name, info.clone());
    }
    for edge in graph.public_edges(id) {
        visit(graph, edge.target, cpp_infos, deps, visited);
    }
}
