// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Foundation(#[from] conan_foundation::Error),
    #[error(transparent)]
    Schema(#[from] conan_schema::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("export of {reference} conflicts with an existing manifest at {path}")]
    ExportConflictError { reference: String, path: PathBuf },
}
