// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

mod client_config;
mod error;
mod ini;

pub use client_config::{default_settings, ClientConfig, DEFAULT_SETTINGS_YML};
pub use error::{Error, Result};
