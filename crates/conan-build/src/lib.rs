// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

mod build_log;
mod deps_cpp_info_compose;
mod error;
mod exporter;
mod installer;
mod package_pattern;
mod recipe_provider;
mod remover;
mod search;
mod store_scan;
mod uploader;

pub use build_log::BuildLog;
pub use deps_cpp_info_compose::compose as compose_deps_cpp_info;
pub use error::{Error, Result};
pub use exporter::Exporter;
pub use installer::{InstallOutcome, InstallReport, Installer};
pub use package_pattern::PackagePattern;
pub use recipe_provider::LocalRecipeProvider;
pub use remover::Remover;
pub use search::{Search, SearchResult};
pub use uploader::Uploader;
