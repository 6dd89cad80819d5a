// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed reference {0:?}")]
    ReferenceParseError(String),
    #[error("undefined setting: {0}")]
    UndefinedSettingError(String),
    #[error("invalid value {value:?} for setting {path}, expected one of {allowed:?}")]
    InvalidValueError {
        path: String,
        value: String,
        allowed: Vec<String>,
    },
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
}
