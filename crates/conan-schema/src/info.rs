// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use crate::{Error, Result};

#[cfg(test)]
#[path = "./info_test.rs"]
mod info_test;

/// The canonical, frozen inputs to a node's binary package identity: the
/// settings subset it declares, its own options, and the package ids of its
/// direct and public-transitive dependencies. `package_id` is the SHA-1 of
/// `canonical_text()`, bit-exact per the normative §3 textual form.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConanInfo {
    pub settings: Vec<(String, String)>,
    pub options: Vec<(String, String)>,
    pub requires: Vec<String>,
}

impl ConanInfo {
    pub fn new(
        mut settings: Vec<(String, String)>,
        mut options: Vec<(String, String)>,
        mut requires: Vec<String>,
    ) -> Self {
        settings.sort();
        options.sort();
        requires.sort();
        requires.dedup();
        Self {
            settings,
            options,
            requires,
        }
    }

    /// Line-sorted, `key=value`, `\n`-separated, `[settings]`/`[options]`/
    /// `[requires]` sections in that order. This is the normative bit-exact
    /// hash input.
    pub fn canonical_text(&self) -> String {
        let mut out = String::new();
        out.push_str("[settings]\n");
        for (k, v) in &self.settings {
            out.push_str(k);
            out.push('=');
            out.push_str(v);
            out.push('\n');
        }
        out.push_str("[options]\n");
        for (k, v) in &self.options {
            out.push_str(k);
            out.push('=');
            out.push_str(v);
            out.push('\n');
        }
        out.push_str("[requires]\n");
        for r in &self.requires {
            out.push_str(r);
            out.push('\n');
        }
        out
    }

    pub fn package_id(&self) -> String {
        conan_foundation::sha1_hex(self.canonical_text().as_bytes())
    }

    pub fn dumps(&self) -> String {
        self.canonical_text()
    }

    pub fn load(text: &str) -> Result<Self> {
        let mut settings = Vec::new();
        let mut options = Vec::new();
        let mut requires = Vec::new();
        let mut section: Option<u8> = None;
        for line in text.lines() {
            match line {
                "[settings]" => {
                    section = Some(0);
                    continue;
                }
                "[options]" => {
                    section = Some(1);
                    continue;
                }
                "[requires]" => {
                    section = Some(2);
                    continue;
                }
                "" => continue,
                _ => {}
            }
            match section {
                Some(0) | Some(1) => {
                    let (k, v) = line.split_once('=').ok_or_else(|| {
                        Error::Foundation(conan_foundation::Error::ConfigurationError(format!(
                            "malformed ConanInfo line: {line:?}"
                        )))
                    })?;
                    let entry = (k.to_string(), v.to_string());
                    if section == Some(0) {
                        settings.push(entry);
                    } else {
                        options.push(entry);
                    }
                }
                Some(2) => requires.push(line.to_string()),
                None => {
                    return Err(Error::Foundation(conan_foundation::Error::ConfigurationError(
                        format!("line outside of a section: {line:?}"),
                    )))
                }
                Some(_) => unreachable!(),
            }
        }
        Ok(ConanInfo::new(settings, options, requires))
    }
}
