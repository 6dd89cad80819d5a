// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Foundation(#[from] conan_foundation::Error),
    #[error("recipe not found at {0}")]
    RecipeNotFound(std::path::PathBuf),
    #[error("malformed recipe at {path}: {source}")]
    RecipeSyntaxError {
        path: std::path::PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("recipe execution failed: {0}")]
    RecipeExecutionError(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
