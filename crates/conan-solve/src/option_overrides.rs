// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use conan_foundation::OptionsValues;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./option_overrides_test.rs"]
mod option_overrides_test;

/// A `pkg:opt=value` entry lifted out of some manifest's `default_options`,
/// recorded with the path that declared it so a conflicting second
/// declaration can name both sides.
pub(crate) struct PropagatedOption {
    pub(crate) target: String,
    pub(crate) name: String,
    pub(crate) value: String,
    pub(crate) requested_by: String,
}

/// Merges every requester's propagated option overrides into one
/// `OptionsValues` keyed by target package name, matching spec's "settings
/// and options projections must match" invariant: the first requester to
/// name a `target:option` wins, and any later requester naming the same
/// pair with a different value fails the build with a `ConflictError`
/// naming the divergent option.
pub(crate) fn resolve(propagated: &[PropagatedOption]) -> Result<OptionsValues> {
    let mut seen: HashMap<(String, String), (String, String)> = HashMap::new();
    let mut combined = OptionsValues::new();

    for entry in propagated {
        let key = (entry.target.clone(), entry.name.clone());
        if let Some((existing_value, existing_requester)) = seen.get(&key) {
            if existing_value != &entry.value {
                return Err(Error::ConflictError {
                    reference: entry.target.clone(),
                    detail: format!(
                        "option {} set to {:?} by {} and to {:?} by {}",
                        entry.name, existing_value, existing_requester, entry.value, entry.requested_by
                    ),
                });
            }
            continue;
        }
        seen.insert(key, (entry.value.clone(), entry.requested_by.clone()));
        combined.set(Some(entry.target.clone()), entry.name.clone(), entry.value.clone());
    }

    Ok(combined)
}
