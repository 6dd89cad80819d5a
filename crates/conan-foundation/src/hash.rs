// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use sha1::{Digest, Sha1};

/// Lowercase hex SHA-1 digest of `data`, used both for package ids (over the
/// canonical `ConanInfo` text) and for manifest file hashes.
pub fn sha1_hex(data: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
