// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// An `imports()` entry's pattern does not parse as a glob.
    #[error("invalid imports() pattern {pattern:?}: {detail}")]
    InvalidPatternError { pattern: String, detail: String },

    /// A `generators` entry names something other than `txt` or `cmake`.
    #[error("unknown generator {0:?}")]
    UnknownGeneratorError(String),
}
