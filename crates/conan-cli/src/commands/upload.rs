// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use conan_build::{PackagePattern, Search, Uploader};
use conan_foundation::Reference;

use crate::cli::UploadArgs;
use crate::{Context, Error, Result};

/// Implements `upload <ref> -r <remote> [--all] [--force]` (§6/§4.6): always
/// uploads the recipe, and with `--all` every package already built for it,
/// skipping anything unchanged since the last successful upload unless
/// `--force` is given.
pub async fn run(ctx: &Context, args: &UploadArgs) -> Result<()> {
    let reference: Reference = args.reference.parse()?;
    ctx.config
        .remotes
        .get(&args.remote)
        .ok_or_else(|| Error::UnknownRemoteError(args.remote.clone()))?;

    let package_ids = if args.all {
        let search = Search::new(&ctx.paths);
        let pattern = PackagePattern::glob(&reference.to_string())?;
        search
            .local(&pattern, None)?
            .into_iter()
            .find(|r| r.reference == reference)
            .map(|r| r.packages.into_keys().collect())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    let uploader = Uploader::new(&ctx.paths, ctx.remote_manager.as_ref());
    let results = uploader
        .upload_all(&args.remote, &reference, &package_ids, args.force)
        .await?;

    let uploaded = results.iter().filter(|done| **done).count();
    println!(
        "{} {} to {} ({} of {} transferred, rest unchanged)",
        "Uploaded".green(),
        reference,
        args.remote,
        uploaded,
        results.len()
    );
    Ok(())
}
