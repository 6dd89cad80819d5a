// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Aggregates every sub-crate's error type behind one `Diagnostic` so the
/// binary can print a single-line message and a nonzero exit code, per §7's
/// propagation policy. No backtraces, no per-crate error wrapping noise.
#[derive(Debug, Error, Diagnostic)]
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
    Config(#[from] conan_config::Error),
    #[error(transparent)]
    Build(#[from] conan_build::Error),
    #[error(transparent)]
    Generators(#[from] conan_generators::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("no remote named {0:?}")]
    UnknownRemoteError(String),
}
