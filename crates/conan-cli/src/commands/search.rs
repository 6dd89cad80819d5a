// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;
use conan_build::{PackagePattern, Search};
use regex::Regex;

use crate::cli::SearchArgs;
use crate::{Context, Error, Result};

/// Implements `search [pattern] [-r remote] [--package re] [--regex] [--ignore-case]`
/// (§6/§4.7): the local store by default, or one remote's own search
/// endpoint when `-r` is given.
pub async fn run(ctx: &Context, args: &SearchArgs) -> Result<()> {
    let pattern_text = args.pattern.as_deref().unwrap_or("*");

    if let Some(remote_name) = &args.remote {
        ctx.config
            .remotes
            .get(remote_name)
            .ok_or_else(|| Error::UnknownRemoteError(remote_name.clone()))?;
        let search = Search::new(&ctx.paths);
        let references = search.remote(ctx.remote_manager.as_ref(), remote_name, pattern_text).await?;
        for reference in references {
            println!("{reference}");
        }
        return Ok(());
    }

    let reference_pattern = if args.regex {
        PackagePattern::regex(pattern_text, args.ignore_case)?
    } else {
        PackagePattern::glob(pattern_text)?
    };
    let package_id_pattern = args
        .package
        .as_deref()
        .map(|p| Regex::new(p).map_err(|e| conan_build::Error::InvalidPatternError {
            pattern: p.to_string(),
            detail: e.to_string(),
        }))
        .transpose()?;

    let search = Search::new(&ctx.paths);
    let results = search.local(&reference_pattern, package_id_pattern.as_ref())?;
    if results.is_empty() {
        println!("No matching references found");
        return Ok(());
    }
    for result in results {
        println!("{}", result.reference.to_string().bold());
        for (package_id, info) in &result.packages {
            println!("    {} {}", package_id, info.canonical_text().lines().next().unwrap_or(""));
        }
    }
    Ok(())
}
