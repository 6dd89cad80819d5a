// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

mod deps_cpp_info;
mod error;
mod info;
mod loader;
mod recipe;
mod visibility;

pub use deps_cpp_info::{CppInfo, DepsCppInfo};
pub use error::{Error, Result};
pub use info::ConanInfo;
pub use loader::{RecipeLoader, TextManifest};
pub use recipe::{
    BuildContext, ConfigContext, DeclarativeRecipe, ImportPattern, NodeContext, PackageContext,
    ProcessRunner, Recipe, RecipeManifest, RequireEntry, RunOutput, Runner, SourceContext,
};
pub use visibility::Visibility;
