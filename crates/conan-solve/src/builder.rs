// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use conan_foundation::{Options, OptionsValues, Reference, Settings};
use conan_schema::RecipeManifest;

use crate::graph::{DepGraph, Edge, GraphNode, NodeId};
use crate::option_overrides::PropagatedOption;
use crate::overrides::{OverrideRecord, RawRequirement};
use crate::{Error, Result};

#[cfg(test)]
#[path = "./builder_test.rs"]
mod builder_test;

/// Loads a package's recipe manifest given its reference. Implemented by
/// `conan-storage`/`conan-remote` in terms of the local cache and
/// configured remotes; a test double can serve manifests from memory.
pub trait RecipeProvider {
    fn manifest_for(&self, reference: &Reference) -> Result<RecipeManifest>;
}

/// Builds a [`DepGraph`] from a root recipe manifest: a first pass walks
/// every requirement (detecting cycles by name) while also lifting every
/// `pkg:opt=value` entry out of each manifest's `default_options`, a second
/// pass resolves one winning reference per package name (nearest-to-root
/// wins; ties break on the lexically smaller requiring path) and merges the
/// propagated option overrides into one per-target set, and a third pass
/// builds the DAG using only winning references and resolved options, so a
/// diamond dependency collapses onto a single node reached by however many
/// edges name it. Building that single node re-derives the node's settings
/// and options projection on every edge that reaches it and fails with
/// `ConflictError` the moment two of those edges would resolve it
/// differently, per the "settings and options projections must match"
/// invariant.
pub struct GraphBuilder<'a> {
    provider: &'a dyn RecipeProvider,
    settings: &'a Settings,
    options: &'a OptionsValues,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(provider: &'a dyn RecipeProvider, settings: &'a Settings, options: &'a OptionsValues) -> Self {
        Self {
            provider,
            settings,
            options,
        }
    }

    pub fn build(
        &self,
        root_reference: Reference,
        root_manifest: RecipeManifest,
    ) -> Result<(DepGraph, Vec<OverrideRecord>)> {
        let root_name = root_reference.name().to_string();
        let mut requirements = Vec::new();
        let mut propagated = Vec::new();
        let mut stack: HashSet<String> = HashSet::new();
        let mut path = vec![root_name.clone()];
        stack.insert(root_name.clone());
        collect_propagated_options(&root_manifest, &root_name, &mut propagated);
        self.collect_requirements(&root_manifest, 0, &mut path, &mut stack, &mut requirements, &mut propagated)?;

        let (winners, overrides) = crate::overrides::resolve(&requirements);
        let combined_options = crate::option_overrides::resolve(&propagated)?;

        let mut node_ids: HashMap<String, NodeId> = HashMap::new();
        let mut nodes = Vec::new();
        let root_id = self.build_node(
            &root_name,
            root_reference,
            root_manifest,
            true,
            &winners,
            &combined_options,
            &mut node_ids,
            &mut nodes,
        )?;

        Ok((
            DepGraph {
                nodes,
                root: root_id,
            },
            overrides,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn collect_requirements(
        &self,
        manifest: &RecipeManifest,
        depth: usize,
        path: &mut Vec<String>,
        on_stack: &mut HashSet<String>,
        out: &mut Vec<RawRequirement>,
        propagated: &mut Vec<PropagatedOption>,
    ) -> Result<()> {
        for require in &manifest.requires {
            let reference: Reference = require.reference.parse()?;
            if on_stack.contains(reference.name()) {
                let mut cycle = path.clone();
                cycle.push(reference.name().to_string());
                return Err(Error::CyclicDependencyError { path: cycle });
            }
            out.push(RawRequirement {
                name: reference.name().to_string(),
                reference: require.reference.clone(),
                depth: depth + 1,
                requested_by: path.join("/"),
            });
            let child_manifest = self.provider.manifest_for(&reference)?;
            collect_propagated_options(&child_manifest, &path.join("/"), propagated);
            path.push(reference.name().to_string());
            on_stack.insert(reference.name().to_string());
            self.collect_requirements(&child_manifest, depth + 1, path, on_stack, out, propagated)?;
            on_stack.remove(reference.name());
            path.pop();
        }
        Ok(())
    }

    /// Resolves this occurrence's own options: the manifest's unscoped
    /// `default_options`, overridden by any propagated `name:opt=value`
    /// entry targeting it, overridden last by a matching CLI `-o` flag.
    fn resolve_own_options(
        &self,
        name: &str,
        manifest: &RecipeManifest,
        is_root: bool,
        combined_options: &OptionsValues,
    ) -> Options {
        let mut own_options = Options::new();
        for (key, value) in manifest.default_options.iter() {
            if !key.contains(':') {
                own_options.set(key, value);
            }
        }
        for (opt_name, value) in combined_options.for_target(Some(name)) {
            own_options.set(opt_name, value);
        }
        let target = if is_root { None } else { Some(name) };
        for (opt_name, value) in self.options.for_target(target) {
            own_options.set(opt_name, value);
        }
        own_options
    }

    #[allow(clippy::too_many_arguments)]
    fn build_node(
        &self,
        name: &str,
        reference: Reference,
        manifest: RecipeManifest,
        is_root: bool,
        winners: &HashMap<String, String>,
        combined_options: &OptionsValues,
        node_ids: &mut HashMap<String, NodeId>,
        nodes: &mut Vec<GraphNode>,
    ) -> Result<NodeId> {
        let own_options = self.resolve_own_options(name, &manifest, is_root, combined_options);
        let options_for_info: Vec<(String, String)> =
            own_options.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        let settings_for_info = manifest.settings_for_info(self.settings);

        if let Some(id) = node_ids.get(name) {
            let existing = &nodes[id.0];
            if existing.options != options_for_info {
                return Err(Error::ConflictError {
                    reference: reference.to_string(),
                    detail: describe_divergence("option", &existing.options, &options_for_info),
                });
            }
            if existing.settings != settings_for_info {
                return Err(Error::ConflictError {
                    reference: reference.to_string(),
                    detail: describe_divergence("setting", &existing.settings, &settings_for_info),
                });
            }
            return Ok(*id);
        }

        let id = NodeId(nodes.len());
        node_ids.insert(name.to_string(), id);
        // Reserve the slot so a diamond dependency encountered while
        // recursing into this node's own requirements finds it already
        // registered rather than being rebuilt.
        nodes.push(GraphNode {
            name: name.to_string(),
            reference: reference.clone(),
            manifest: manifest.clone(),
            settings: Vec::new(),
            options: Vec::new(),
            edges: Vec::new(),
        });

        let mut edges = Vec::new();
        for require in &manifest.requires {
            let requested: Reference = require.reference.parse()?;
            let winning = winners
                .get(requested.name())
                .cloned()
                .unwrap_or_else(|| require.reference.clone());
            let child_ref: Reference = winning.parse()?;
            let child_manifest = self.provider.manifest_for(&child_ref)?;
            let child_id = self.build_node(
                requested.name(),
                child_ref,
                child_manifest,
                false,
                winners,
                combined_options,
                node_ids,
                nodes,
            )?;
            edges.push(Edge {
                target: child_id,
                visibility: require.visibility(),
            });
        }

        let node = &mut nodes[id.0];
        node.settings = settings_for_info;
        node.options = options_for_info;
        node.edges = edges;
        Ok(id)
    }
}

/// Lifts every `pkg:opt=value` entry out of `manifest.default_options` into
/// a [`PropagatedOption`] targeting `pkg`; entries without a `:` are the
/// manifest's own options and are left for [`GraphBuilder::resolve_own_options`].
fn collect_propagated_options(manifest: &RecipeManifest, requested_by: &str, out: &mut Vec<PropagatedOption>) {
    for (key, value) in manifest.default_options.iter() {
        if let Some((target, name)) = key.split_once(':') {
            out.push(PropagatedOption {
                target: target.to_string(),
                name: name.to_string(),
                value: value.to_string(),
                requested_by: requested_by.to_string(),
            });
        }
    }
}

fn describe_divergence(label: &str, existing: &[(String, String)], incoming: &[(String, String)]) -> String {
    for (key, value) in incoming {
        match existing.iter().find(|(k, _)| k == key) {
            Some((_, existing_value)) if existing_value != value => {
                return format!("{label} {key} resolved to {existing_value:?} on one path and {value:?} on another");
            }
            None => return format!("{label} {key} is set on one path and absent on another"),
            _ => {}
        }
    }
    for (key, _) in existing {
        if !incoming.iter().any(|(k, _)| k == key) {
            return format!("{label} {key} is set on one path and absent on another");
        }
    }
    format!("{label} projections differ")
}
