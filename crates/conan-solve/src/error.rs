// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Foundation(#[from] conan_foundation::Error),
    #[error(transparent)]
    Schema(#[from] conan_schema::Error),
    #[error("cyclic dependency: {}", path.join(" -> "))]
    CyclicDependencyError { path: Vec<String> },
    #[error("conflicting requirement for {reference}: {detail}")]
    ConflictError { reference: String, detail: String },
}
