// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use colored::Colorize;
use conan_build::{PackagePattern, Remover};
use regex::Regex;

use crate::cli::RemoveArgs;
use crate::{Context, Error, Result};

/// Implements `remove <pattern> [--regex] [--src] [--builds re] [--packages re] [-r remote] [--force]`
/// (§6/§4.6): matches references by glob or regex, asks for confirmation
/// unless `--force`, then deletes locally and, with `-r`, from that remote.
pub async fn run(ctx: &Context, args: &RemoveArgs) -> Result<()> {
    let pattern = if args.regex {
        PackagePattern::regex(&args.pattern, false)?
    } else {
        PackagePattern::glob(&args.pattern)?
    };

    let remover = Remover::new(&ctx.paths);
    let matches = remover.matching(&pattern)?;
    if matches.is_empty() {
        println!("No references match {:?}", args.pattern);
        return Ok(());
    }

    println!("The following references will be removed:");
    for reference in &matches {
        println!("  {reference}");
    }
    if !args.force && !confirm("Are you sure? [y/N] ")? {
        println!("Aborted");
        return Ok(());
    }

    let packages_filter = args
        .packages
        .as_deref()
        .map(compile_filter)
        .transpose()?;
    let builds_filter = args.builds.as_deref().map(compile_filter).transpose()?;
    let package_filter = packages_filter.or(builds_filter);

    let remote = match &args.remote {
        Some(name) => Some(
            ctx.config
                .remotes
                .get(name)
                .ok_or_else(|| Error::UnknownRemoteError(name.clone()))?,
        ),
        None => None,
    };

    for reference in &matches {
        remover.remove_local(reference, package_filter.as_ref(), args.src)?;
        if let Some(remote) = remote {
            remover
                .remove_remote(ctx.remote_manager.as_ref(), &remote.name, reference, None)
                .await?;
        }
        println!("{} {}", "Removed".green(), reference);
    }
    Ok(())
}

fn compile_filter(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::from(conan_build::Error::InvalidPatternError {
            pattern: pattern.to_string(),
            detail: e.to_string(),
        })
    })
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
