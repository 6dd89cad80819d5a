// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

//! Reference/identity parsing, the settings tree, and the options model:
//! the primitives every other crate in the workspace builds on.

mod error;
mod hash;
mod ident;
mod options;
mod settings;

pub use error::{Error, Result};
pub use hash::sha1_hex;
pub use ident::{is_valid_package_id, PackageReference, Reference};
pub use options::{OptionDeclarations, Options, OptionsValues};
pub use settings::{load_definition, Settings, SettingsDefinition, SettingsTree};
