// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use indexmap::IndexMap;

use crate::{Error, Result};

/// Parses a minimal, section-based `key = value` text format: `[section]`
/// headers, `#`-prefixed comments, blank lines ignored. Section and key
/// order is preserved so a caller that cares (e.g. the `[remotes]` order
/// that determines search preference) sees it.
pub fn parse(text: &str) -> Result<IndexMap<String, IndexMap<String, String>>> {
    let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
    let mut current: Option<String> = None;
    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') && line.ends_with(']') {
            let name = line[1..line.len() - 1].trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }
        let section = current.clone().ok_or_else(|| Error::SyntaxError(line.to_string()))?;
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| Error::SyntaxError(line.to_string()))?;
        sections
            .entry(section)
            .or_default()
            .insert(key.trim().to_string(), value.trim().to_string());
    }
    Ok(sections)
}
