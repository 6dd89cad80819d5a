// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

mod build_mode;
mod builder;
mod error;
mod graph;
mod info_compute;
mod option_overrides;
mod overrides;

pub use build_mode::BuildMode;
pub use builder::{GraphBuilder, RecipeProvider};
pub use error::{Error, Result};
pub use graph::{DepGraph, Edge, GraphNode, NodeId};
pub use info_compute::compute_package_ids;
pub use overrides::OverrideRecord;
