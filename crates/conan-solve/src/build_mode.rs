// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

/// How the installer should decide, for a single node, whether it may build
/// from source rather than reuse or download a binary. Unifies what would
/// otherwise be a boolean "build missing" flag plus an independent list of
/// name patterns into one policy each node is checked against in order:
/// `Never` accepts only existing binaries, `Missing` builds only when no
/// binary is found anywhere, `Force` always rebuilds, and `Patterns`
/// rebuilds only the references a glob in the list matches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Never,
    Missing,
    Force,
    Patterns(Vec<String>),
}

impl BuildMode {
    /// Whether a node whose binary is missing from every store should be
    /// built, given its reference's display string.
    pub fn allows_build(&self, reference_display: &str) -> bool {
        match self {
            BuildMode::Never => false,
            BuildMode::Missing | BuildMode::Force => true,
            BuildMode::Patterns(patterns) => patterns.iter().any(|pattern| {
                glob::Pattern::new(pattern)
                    .map(|p| p.matches(reference_display))
                    .unwrap_or(false)
            }),
        }
    }

    /// Whether an existing binary should be rebuilt anyway.
    pub fn forces_rebuild(&self, reference_display: &str) -> bool {
        match self {
            BuildMode::Force => true,
            BuildMode::Patterns(patterns) => patterns.iter().any(|pattern| {
                glob::Pattern::new(pattern)
                    .map(|p| p.matches(reference_display))
                    .unwrap_or(false)
            }),
            BuildMode::Never | BuildMode::Missing => false,
        }
    }
}
