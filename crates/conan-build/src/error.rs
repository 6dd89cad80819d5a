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
    Solve(#[from] conan_solve::Error),
    #[error(transparent)]
    Storage(#[from] conan_storage::Error),
    #[error(transparent)]
    Remote(#[from] conan_remote::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A node's `build()` hook failed. Carries the working directory and
    /// the tail of the build's combined stdout/stderr, per §3's build-log
    /// capture requirement.
    #[error("build of {reference} failed in {cwd}:\n{log_tail}")]
    BuildError {
        reference: String,
        cwd: PathBuf,
        log_tail: String,
    },

    /// No binary is available for a node anywhere (cache, remotes) and the
    /// active `BuildMode` does not permit building it from source.
    #[error("no binary available for {reference} and the build mode does not permit building it")]
    MissingBinaryError { reference: String },

    /// An upload was retried the fixed bound of times and still failed.
    #[error("upload of {reference} failed after {attempts} attempts: {detail}")]
    UploadError {
        reference: String,
        attempts: u32,
        detail: String,
    },

    /// A glob or regex given for a search/remove filter does not parse.
    #[error("invalid pattern {pattern:?}: {detail}")]
    InvalidPatternError { pattern: String, detail: String },
}
