// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::PathBuf;

use conan_foundation::SettingsTree;
use conan_remote::{Remote, RemoteList};

use crate::{ini, Error, Result};

/// Default settings shipped with the binary, used whenever a user's cache
/// has not yet been seeded with its own `settings.yml`.
pub const DEFAULT_SETTINGS_YML: &str = include_str!("../default_settings.yml");

pub fn default_settings() -> SettingsTree {
    conan_foundation::load_definition(DEFAULT_SETTINGS_YML)
        .expect("the embedded default settings.yml is well-formed")
}

/// The parsed `conan.conf`: where the local cache lives, which remotes are
/// configured and in what preference order, and the default value for each
/// top-level setting a new profile should start from.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub storage_path: PathBuf,
    pub remotes: RemoteList,
    pub settings_defaults: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Parses `text`. `storage_path`'s `[storage] path` is overridden by the
    /// `CONAN_STORAGE_PATH` environment variable when set, and `~` is
    /// expanded against the current user's home directory either way.
    pub fn parse(text: &str, env_storage_path: Option<&str>) -> Result<Self> {
        let sections = ini::parse(text)?;

        let storage = sections
            .get("storage")
            .ok_or_else(|| Error::MissingSectionError("storage".to_string()))?;
        let raw_path = env_storage_path
            .map(str::to_string)
            .or_else(|| storage.get("path").cloned())
            .ok_or_else(|| Error::MissingSectionError("storage".to_string()))?;
        let storage_path = PathBuf::from(shellexpand::tilde(&raw_path).into_owned());

        let mut remotes = RemoteList::new();
        if let Some(section) = sections.get("remotes") {
            for (name, value) in section {
                let mut parts = value.split_whitespace();
                let url = parts.next().unwrap_or_default().to_string();
                let verify_ssl = parts.next().map(|v| v != "false").unwrap_or(true);
                remotes.add(Remote {
                    name: name.clone(),
                    url,
                    verify_ssl,
                });
            }
        }

        let settings_defaults = sections
            .get("settings_defaults")
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .collect();

        Ok(ClientConfig {
            storage_path,
            remotes,
            settings_defaults,
        })
    }

    pub fn load(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let env = std::env::var("CONAN_STORAGE_PATH").ok();
        Self::parse(&text, env.as_deref())
    }
}

#[cfg(test)]
#[path = "./client_config_test.rs"]
mod client_config_test;
