// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use conan_build::InstallOutcome;
use conan_foundation::OptionsValues;
use conan_generators::Generator;
use conan_solve::{BuildMode, GraphBuilder};

use crate::cli::InstallArgs;
use crate::remote_fetch_provider::RemoteFetchingProvider;
use crate::{root_recipe, Context, Result};

/// Implements `install [ref|.] [--build[=mode]] [-s ...] [-o ...] [-r ...]`
/// (§6): resolves the root recipe, builds the dependency graph (§4.3),
/// drives the installer (§4.4), then emits any requested generator files
/// (§4.8) against the root's composed `DepsCppInfo`.
pub async fn run(ctx: &Context, args: &InstallArgs) -> Result<()> {
    let (root_reference, root_manifest) = root_recipe::resolve(ctx, &args.target)?;

    let mut settings = ctx.default_settings()?;
    for entry in &args.settings {
        let (path, value) = entry
            .split_once('=')
            .ok_or_else(|| crate::Error::Usage(format!("malformed -s entry {entry:?}, expected path=value")))?;
        settings.set(path, value)?;
    }

    let options = OptionsValues::load(&args.options.join("\n"))?;

    let provider = RemoteFetchingProvider::new(&ctx.paths, &ctx.config.remotes, ctx.remote_manager.as_ref());
    let builder = GraphBuilder::new(&provider, &settings, &options);
    let (graph, overrides) = builder.build(root_reference.clone(), root_manifest.clone())?;

    for over in &overrides {
        tracing::info!(
            target: "conan_cli::install",
            "{} overrides {} (requested by {})",
            over.winning,
            over.overridden.join(", "),
            over.requested_by.join(", "),
        );
    }

    let build_mode = parse_build_mode(args.build.as_deref());
    let remotes = match &args.remote {
        Some(name) => {
            let mut only = conan_remote::RemoteList::new();
            let remote = ctx
                .config
                .remotes
                .get(name)
                .ok_or_else(|| crate::Error::UnknownRemoteError(name.clone()))?;
            only.add(remote.clone());
            only
        }
        None => ctx.config.remotes.clone(),
    };

    let installer = conan_build::Installer::new(
        &ctx.paths,
        &ctx.locks,
        &remotes,
        ctx.remote_manager.as_ref(),
        &settings,
        build_mode,
    );
    let report = installer.install(&graph).await?;

    for id in graph.node_ids() {
        let node = graph.node(id);
        let outcome = report.outcomes.get(&id).copied().unwrap_or(InstallOutcome::Reused);
        let label = match outcome {
            InstallOutcome::Reused => "Reused".cyan(),
            InstallOutcome::Downloaded => "Downloaded".blue(),
            InstallOutcome::Built => "Built".green(),
        };
        println!("{label} {} ({})", node.reference, &report.package_ids[&id][..12]);
    }

    if !args.generators.is_empty() {
        let deps_cpp_info = conan_build::compose_deps_cpp_info(&graph, graph.root, &report.cpp_infos);
        std::fs::create_dir_all(&args.install_folder)?;
        for name in &args.generators {
            let generator = Generator::parse(name)?;
            let text = generator.render(&deps_cpp_info);
            std::fs::write(args.install_folder.join(generator.file_name()), text)?;
            println!("{} {}", "Generated".green(), generator.file_name());
        }
    }

    Ok(())
}

fn parse_build_mode(flag: Option<&str>) -> BuildMode {
    match flag {
        None => BuildMode::Never,
        Some("missing") => BuildMode::Missing,
        Some("force") => BuildMode::Force,
        Some(pattern) => BuildMode::Patterns(vec![pattern.to_string()]),
    }
}
