// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

/// One occurrence of a package being required somewhere in the raw
/// (pre-collapse) dependency tree, before diamond dependencies are resolved
/// to a single reference.
pub(crate) struct RawRequirement {
    pub(crate) name: String,
    pub(crate) reference: String,
    pub(crate) depth: usize,
    pub(crate) requested_by: String,
}

/// A resolved version conflict: more than one reference was requested for
/// the same package name, and `winning` is the one the tie-break rule
/// picked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OverrideRecord {
    pub name: String,
    pub winning: String,
    pub overridden: Vec<String>,
    pub requested_by: Vec<String>,
}

/// Resolves one winning reference per package name across every requirement
/// seen in the raw tree. The nearest-to-root request wins; a tie at equal
/// depth is broken by the lexicographically smaller requiring path, giving
/// a deterministic outcome independent of traversal order.
pub(crate) fn resolve(requirements: &[RawRequirement]) -> (HashMap<String, String>, Vec<OverrideRecord>) {
    let mut by_name: HashMap<&str, Vec<&RawRequirement>> = HashMap::new();
    for req in requirements {
        by_name.entry(req.name.as_str()).or_default().push(req);
    }

    let mut winners = HashMap::new();
    let mut overrides = Vec::new();

    let mut names: Vec<&&str> = by_name.keys().collect();
    names.sort();
    for name in names {
        let mut reqs = by_name[name].clone();
        reqs.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.requested_by.cmp(&b.requested_by)));
        let winner = reqs[0];
        winners.insert(winner.name.clone(), winner.reference.clone());

        let mut overridden: Vec<String> = reqs[1..]
            .iter()
            .map(|r| r.reference.clone())
            .filter(|r| r != &winner.reference)
            .collect();
        overridden.sort();
        overridden.dedup();

        if !overridden.is_empty() {
            let mut requested_by: Vec<String> = reqs.iter().map(|r| r.requested_by.clone()).collect();
            requested_by.sort();
            requested_by.dedup();
            overrides.push(OverrideRecord {
                name: winner.name.clone(),
                winning: winner.reference.clone(),
                overridden,
                requested_by,
            });
        }
    }

    (winners, overrides)
}

#[cfg(test)]
#[path = "./overrides_test.rs"]
mod overrides_test;
