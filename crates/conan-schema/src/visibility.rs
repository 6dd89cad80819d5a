// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;

/// Whether a dependency edge exposes its subgraph to the parent's own
/// consumers. A private edge never contributes to the parent's
/// `ConanInfo.requires` nor to the parent's composed `DepsCppInfo`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }

    pub fn is_public(self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Visibility::Public
    }
}
