// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{de::Error as _, Deserialize, Deserializer};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./settings_test.rs"]
mod settings_test;

/// A declared setting: either a leaf enumerating its admissible string
/// values (the `None` sentinel included explicitly when it is one), or a
/// branch whose keys are the admissible values of the *parent* setting and
/// whose values are the sub-definition that applies once that value is
/// chosen.
#[derive(Clone, Debug)]
pub enum SettingsDefinition {
    Values(Vec<String>),
    Choices(IndexMap<String, SettingsTree>),
}

/// An ordered mapping of setting name to its definition; the whole settings
/// document is itself one of these at the root.
pub type SettingsTree = IndexMap<String, SettingsDefinition>;

impl<'de> Deserialize<'de> for SettingsDefinition {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        match value {
            serde_yaml::Value::Sequence(seq) => {
                let values = seq
                    .into_iter()
                    .map(|item| match item {
                        serde_yaml::Value::Null => "None".to_string(),
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        other => serde_yaml::to_string(&other)
                            .unwrap_or_default()
                            .trim()
                            .to_string(),
                    })
                    .collect();
                Ok(SettingsDefinition::Values(values))
            }
            serde_yaml::Value::Mapping(mapping) => {
                let mut choices = IndexMap::new();
                for (key, value) in mapping {
                    let key = match key {
                        serde_yaml::Value::String(s) => s,
                        other => serde_yaml::to_string(&other).unwrap_or_default(),
                    };
                    let tree: SettingsTree =
                        serde_yaml::from_value(value).map_err(D::Error::custom)?;
                    choices.insert(key, tree);
                }
                Ok(SettingsDefinition::Choices(choices))
            }
            _ => Err(D::Error::custom(
                "expected a sequence or mapping for a settings definition",
            )),
        }
    }
}

/// A settings document loaded from `settings.yml`.
pub fn load_definition(text: &str) -> Result<SettingsTree> {
    serde_yaml::from_str(text)
        .map_err(|err| Error::ConfigurationError(format!("invalid settings definition: {err}")))
}

/// A settings tree instantiated with concrete values for a single build
/// context. Assigning an undeclared path fails with `UndefinedSettingError`;
/// assigning a value outside its universe fails with `InvalidValueError`.
#[derive(Clone, Debug)]
pub struct Settings {
    definition: Arc<SettingsTree>,
    values: std::collections::BTreeMap<String, String>,
}

impl Settings {
    pub fn new(definition: Arc<SettingsTree>) -> Self {
        Self {
            definition,
            values: Default::default(),
        }
    }

    pub fn definition(&self) -> &SettingsTree {
        &self.definition
    }

    /// Fresh copy with the same definition and values, used by the graph
    /// builder so that sibling subtrees cannot mutate each other.
    pub fn fork(&self) -> Self {
        self.clone()
    }

    fn universe_for(&self, path: &str) -> Result<Vec<String>> {
        let segments: Vec<&str> = path.split('.').collect();
        let mut tree: &SettingsTree = &self.definition;
        for (i, seg) in segments.iter().enumerate() {
            let def = tree
                .get(*seg)
                .ok_or_else(|| Error::UndefinedSettingError(path.to_string()))?;
            let is_last = i == segments.len() - 1;
            match def {
                SettingsDefinition::Values(values) => {
                    if is_last {
                        return Ok(values.clone());
                    }
                    return Err(Error::UndefinedSettingError(path.to_string()));
                }
                SettingsDefinition::Choices(choices) => {
                    if is_last {
                        return Ok(choices.keys().cloned().collect());
                    }
                    let prefix = segments[..=i].join(".");
                    let chosen = self.values.get(&prefix).ok_or_else(|| {
                        Error::UndefinedSettingError(format!("{path} (set {prefix} first)"))
                    })?;
                    tree = choices
                        .get(chosen)
                        .ok_or_else(|| Error::UndefinedSettingError(path.to_string()))?;
                }
            }
        }
        Err(Error::UndefinedSettingError(path.to_string()))
    }

    pub fn set(&mut self, path: &str, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        let universe = self.universe_for(path)?;
        if !universe.iter().any(|v| v == &value) {
            return Err(Error::InvalidValueError {
                path: path.to_string(),
                value,
                allowed: universe,
            });
        }
        self.values.insert(path.to_string(), value);
        Ok(())
    }

    pub fn get(&self, path: &str) -> Result<Option<&str>> {
        self.universe_for(path)?;
        Ok(self.values.get(path).map(String::as_str))
    }

    /// The subset of dotted paths currently holding a non-`None` value,
    /// restricted to the given top-level declared names (and their
    /// descendants), sorted by path. This is the projection a recipe
    /// observes for the names it declares in `settings`.
    pub fn project(&self, names: &[String]) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = self
            .values
            .iter()
            .filter(|(path, value)| {
                value.as_str() != "None"
                    && names
                        .iter()
                        .any(|name| *path == name || path.starts_with(&format!("{name}.")))
            })
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        out.sort();
        out
    }

    /// Canonical serialised lines (`path=value`, sorted, `None` leaves
    /// excluded) over the full values held, irrespective of projection.
    pub fn canonical_lines(&self) -> Vec<String> {
        self.values
            .iter()
            .filter(|(_, v)| v.as_str() != "None")
            .map(|(k, v)| format!("{k}={v}"))
            .collect()
    }

    pub fn dumps(&self) -> String {
        let mut out = String::new();
        for line in self.canonical_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    pub fn load(definition: Arc<SettingsTree>, text: &str) -> Result<Self> {
        let mut settings = Self::new(definition);
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (path, value) = line.split_once('=').ok_or_else(|| {
                Error::ConfigurationError(format!("malformed settings line: {line:?}"))
            })?;
            settings.set(path, value)?;
        }
        Ok(settings)
    }
}
