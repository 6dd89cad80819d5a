// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./options_test.rs"]
mod options_test;

/// The universe of admissible values a recipe declares for each of its own
/// options, e.g. `shared: [True, False]`.
#[derive(Clone, Debug, Default)]
pub struct OptionDeclarations(IndexMap<String, Vec<String>>);

impl OptionDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, universe: Vec<String>) {
        self.0.insert(name.into(), universe);
    }

    pub fn universe(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn validate(&self, name: &str, value: &str) -> Result<()> {
        let universe = self
            .universe(name)
            .ok_or_else(|| Error::UndefinedSettingError(name.to_string()))?;
        if universe.iter().any(|v| v == value) {
            Ok(())
        } else {
            Err(Error::InvalidValueError {
                path: name.to_string(),
                value: value.to_string(),
                allowed: universe.to_vec(),
            })
        }
    }
}

/// A recipe's own, fully-resolved option values: `name -> value`. Serialises
/// as `name=value` lines, sorted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn dumps(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            out.push_str(&format!("{name}={value}\n"));
        }
        out
    }

    pub fn load(text: &str) -> Result<Self> {
        let mut opts = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (name, value) = line.split_once('=').ok_or_else(|| {
                Error::ConfigurationError(format!("malformed options line: {line:?}"))
            })?;
            opts.set(name, value);
        }
        Ok(opts)
    }
}

/// A collection of option overrides, each optionally scoped to a dependency
/// by name. A bare `opt=value` line targets the current recipe; a
/// `pkg:opt=value` line targets the named dependency. Used for `-o` CLI
/// flags, a recipe's `default_options` string, and `config()`-time
/// propagation to named dependencies.
#[derive(Clone, Debug, Default)]
pub struct OptionsValues {
    entries: BTreeMap<(Option<String>, String), String>,
}

impl OptionsValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, target: Option<String>, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert((target, name.into()), value.into());
    }

    /// Overrides that apply to `target` (`None` = the current recipe).
    pub fn for_target<'a>(&'a self, target: Option<&str>) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.entries.iter().filter_map(move |((t, name), value)| {
            if t.as_deref() == target {
                Some((name.as_str(), value.as_str()))
            } else {
                None
            }
        })
    }

    pub fn dumps(&self) -> String {
        let mut out = String::new();
        for ((target, name), value) in &self.entries {
            match target {
                Some(pkg) => out.push_str(&format!("{pkg}:{name}={value}\n")),
                None => out.push_str(&format!("{name}={value}\n")),
            }
        }
        out
    }

    pub fn load(text: &str) -> Result<Self> {
        let mut values = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (lhs, value) = line.split_once('=').ok_or_else(|| {
                Error::ConfigurationError(format!("malformed options line: {line:?}"))
            })?;
            let (target, name) = match lhs.split_once(':') {
                Some((pkg, name)) => (Some(pkg.to_string()), name),
                None => (None, lhs),
            };
            values.set(target, name, value);
        }
        Ok(values)
    }
}
