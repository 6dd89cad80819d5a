// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Foundation(#[from] conan_foundation::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("conan.conf is missing its required [{0}] section")]
    MissingSectionError(String),
    #[error("malformed conan.conf line: {0:?}")]
    SyntaxError(String),
}
