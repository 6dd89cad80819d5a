// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use conan_build::Exporter;
use conan_foundation::Reference;
use conan_schema::RecipeLoader;

use crate::cli::ExportArgs;
use crate::{Context, Error, Result};

/// Implements the `export <user>/<channel>` CLI surface (§6): loads the
/// local recipe, computes its reference, and hands the copy/manifest work
/// to [`Exporter`].
pub fn run(ctx: &Context, args: &ExportArgs) -> Result<()> {
    let (user, channel) = args.user_channel.split_once('/').ok_or_else(|| {
        Error::Usage(format!("expected <user>/<channel>, got {:?}", args.user_channel))
    })?;

    let manifest = RecipeLoader::new().load_manifest(&args.path)?;
    let reference = Reference::new(manifest.name.clone(), manifest.version.clone(), user, channel)?;

    let exporter = Exporter::new(&ctx.paths);
    let timestamp = chrono::Utc::now().timestamp();
    exporter.export(&reference, &manifest, &args.path, timestamp, args.force)?;

    println!("{} {}", "Exported".green(), reference);
    Ok(())
}
