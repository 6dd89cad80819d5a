// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_foundation::Reference;
use conan_schema::{RecipeManifest, Visibility};

/// Index of a [`GraphNode`] within a [`DepGraph`]'s arena. Stable for the
/// lifetime of the graph; never reused.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeId(pub(crate) usize);

/// A direct dependency edge from a node to one of its requirements, carrying
/// the visibility declared on that specific `requires` entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub target: NodeId,
    pub visibility: Visibility,
}

/// One resolved node of the dependency graph: a package name pinned to a
/// single reference for the whole graph, its loaded recipe manifest, the
/// settings/options resolved for it, and its direct requirement edges.
#[derive(Clone, Debug)]
pub struct GraphNode {
    pub name: String,
    pub reference: Reference,
    pub manifest: RecipeManifest,
    pub settings: Vec<(String, String)>,
    pub options: Vec<(String, String)>,
    pub edges: Vec<Edge>,
}

/// The resolved dependency DAG: diamond dependencies collapse onto a single
/// [`GraphNode`] per package name, reached through possibly many edges of
/// differing visibility.
#[derive(Clone, Debug)]
pub struct DepGraph {
    pub(crate) nodes: Vec<GraphNode>,
    pub root: NodeId,
}

impl DepGraph {
    pub fn node(&self, id: NodeId) -> &GraphNode {
        &self.nodes[id.0]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Nodes in reverse topological order (dependencies before dependents),
    /// the order a `ConanInfo`/package-id computation or an installer must
    /// process them in.
    pub fn reverse_topological_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![(self.root, false)];
        while let Some((id, expanded)) = stack.pop() {
            if expanded {
                order.push(id);
                continue;
            }
            if visited[id.0] {
                continue;
            }
            visited[id.0] = true;
            stack.push((id, true));
            for edge in &self.nodes[id.0].edges {
                if !visited[edge.target.0] {
                    stack.push((edge.target, false));
                }
            }
        }
        order
    }

    /// A node's direct requirement edges, skipping private ones — the view
    /// a dependent's own consumers see through it.
    pub fn public_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> {
        self.nodes[id.0].edges.iter().filter(|e| e.visibility.is_public())
    }
}
