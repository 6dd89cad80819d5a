// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use conan_solve::{BuildMode, GraphBuilder};

use crate::cli::BuildArgs;
use crate::remote_fetch_provider::RemoteFetchingProvider;
use crate::{root_recipe, Context, Result};

/// Implements `build [path] [--test]` (§6): forces the local recipe through
/// `source()`/`build()`/`package()` while treating every dependency as
/// already installed by a prior `install` (§4.4, "installed dependency
/// set") — a missing dependency binary is an error here, not something this
/// command will build or download on your behalf.
pub async fn run(ctx: &Context, args: &BuildArgs) -> Result<()> {
    let (root_reference, root_manifest) = root_recipe::resolve(ctx, &args.path.display().to_string())?;
    let root_glob = format!("{}/*", root_manifest.name);

    let settings = ctx.default_settings()?;
    let options = conan_foundation::OptionsValues::new();

    let provider = RemoteFetchingProvider::new(&ctx.paths, &ctx.config.remotes, ctx.remote_manager.as_ref());
    let builder = GraphBuilder::new(&provider, &settings, &options);
    let (graph, _overrides) = builder.build(root_reference.clone(), root_manifest)?;

    let installer = conan_build::Installer::new(
        &ctx.paths,
        &ctx.locks,
        &ctx.config.remotes,
        ctx.remote_manager.as_ref(),
        &settings,
        BuildMode::Patterns(vec![root_glob]),
    );
    let report = installer.install(&graph).await?;

    let package_id = &report.package_ids[&graph.root];
    println!("{} {} ({})", "Built".green(), root_reference, &package_id[..12]);

    if args.test {
        let cpp_info = &report.cpp_infos[&graph.root];
        println!(
            "  include_dirs: {:?}\n  lib_dirs: {:?}",
            cpp_info.include_dirs, cpp_info.lib_dirs
        );
    }

    Ok(())
}
