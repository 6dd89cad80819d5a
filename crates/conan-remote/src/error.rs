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
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("{reference} not found on remote {remote}")]
    NotFoundError { remote: String, reference: String },
    #[error("authentication failed for remote {remote}: {detail}")]
    AuthenticationError { remote: String, detail: String },
    #[error("remote {remote} error: {detail}")]
    RemoteError { remote: String, detail: String },
    #[error("no remote named {0}")]
    UnknownRemoteError(String),
}
