// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use regex::Regex;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./package_pattern_test.rs"]
mod package_pattern_test;

/// A reference-matching pattern for search and remove: either a shell glob
/// or a regex, chosen explicitly by the caller rather than guessed from the
/// pattern text. Regex matching is case-sensitive by default; `ignore_case`
/// threads an opt-in `--ignore-case` flag through, resolving Open Question
/// #3 (documented in `DESIGN.md`) away from the source's unconditional
/// case-insensitive regex matching.
#[derive(Clone, Debug)]
pub enum PackagePattern {
    Glob(glob::Pattern),
    Regex(Regex),
}

impl PackagePattern {
    pub fn glob(pattern: &str) -> Result<Self> {
        glob::Pattern::new(pattern)
            .map(PackagePattern::Glob)
            .map_err(|e| Error::InvalidPatternError {
                pattern: pattern.to_string(),
                detail: e.to_string(),
            })
    }

    pub fn regex(pattern: &str, ignore_case: bool) -> Result<Self> {
        let source = if ignore_case {
            format!("(?i){pattern}")
        } else {
            pattern.to_string()
        };
        Regex::new(&source)
            .map(PackagePattern::Regex)
            .map_err(|e| Error::InvalidPatternError {
                pattern: pattern.to_string(),
                detail: e.to_string(),
            })
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            PackagePattern::Glob(p) => p.matches(text),
            PackagePattern::Regex(r) => r.is_match(text),
        }
    }
}
