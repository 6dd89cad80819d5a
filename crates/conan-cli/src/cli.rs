// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// The client-side core of a C/C++ package manager.
#[derive(Parser)]
#[command(name = "conan", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Export a local recipe into the store under `<user>/<channel>`.
    Export(ExportArgs),
    /// Resolve the dependency graph and install (reuse/download/build) every node.
    Install(InstallArgs),
    /// Run only a recipe's `build()` step from an already-installed dependency set.
    Build(BuildArgs),
    /// Upload a recipe and/or its built packages to a remote.
    Upload(UploadArgs),
    /// Search references and package ids in the local store or a remote.
    Search(SearchArgs),
    /// Remove references/packages from the local store and optionally a remote.
    Remove(RemoveArgs),
    /// Set or display the logged-in user for a remote.
    User(UserArgs),
}

#[derive(Args)]
pub struct ExportArgs {
    /// Path to the recipe directory. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// `<user>/<channel>` to export under.
    pub user_channel: String,
    /// Overwrite an existing export even if its manifest differs.
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct InstallArgs {
    /// A `name/version@user/channel` reference, or a path to a recipe/`conanfile.txt` (`.` for the current directory).
    #[arg(default_value = ".")]
    pub target: String,
    /// Build policy: omit for "never", bare `--build` for "missing", or `--build=force`/`--build=pkg*`.
    #[arg(long, num_args = 0..=1, default_missing_value = "missing")]
    pub build: Option<String>,
    /// `name=value` or `path.to.setting=value`, repeatable.
    #[arg(short = 's', long = "setting")]
    pub settings: Vec<String>,
    /// `[pkg:]name=value`, repeatable.
    #[arg(short = 'o', long = "option")]
    pub options: Vec<String>,
    /// Remote to fetch missing recipes/binaries from.
    #[arg(short, long)]
    pub remote: Option<String>,
    /// Generator names to run after install (`txt`, `cmake`); repeatable.
    #[arg(short, long = "generator")]
    pub generators: Vec<String>,
    /// Directory generator output is written to.
    #[arg(long, default_value = ".")]
    pub install_folder: PathBuf,
}

#[derive(Args)]
pub struct BuildArgs {
    /// Path to the recipe directory. Defaults to the current directory.
    #[arg(default_value = ".")]
    pub path: PathBuf,
    /// Also invoke the recipe's `package()` step after `build()`.
    #[arg(long)]
    pub test: bool,
}

#[derive(Args)]
pub struct UploadArgs {
    /// The reference to upload.
    pub reference: String,
    /// Also upload every package built from this recipe.
    #[arg(long)]
    pub all: bool,
    /// Upload even if nothing has changed since the last upload.
    #[arg(long)]
    pub force: bool,
    /// Remote to upload to.
    #[arg(short, long)]
    pub remote: String,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Reference pattern (glob by default; `--regex` to treat it as a regex).
    pub pattern: Option<String>,
    /// Remote to search instead of the local store.
    #[arg(short, long)]
    pub remote: Option<String>,
    /// Restrict results to package ids matching this regex.
    #[arg(long = "package")]
    pub package: Option<String>,
    /// Treat `pattern` as a regex instead of a glob.
    #[arg(long)]
    pub regex: bool,
    /// Case-insensitive regex matching (only meaningful with `--regex`).
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    /// Reference pattern (glob by default; `--regex` to treat it as a regex).
    pub pattern: String,
    /// Treat `pattern` as a regex instead of a glob.
    #[arg(long)]
    pub regex: bool,
    /// Also remove the materialized source tree.
    #[arg(long)]
    pub src: bool,
    /// Restrict removal to build directories matching this regex on package id.
    #[arg(long)]
    pub builds: Option<String>,
    /// Restrict removal to packages matching this regex on package id.
    #[arg(long)]
    pub packages: Option<String>,
    /// Skip the confirmation prompt.
    #[arg(long)]
    pub force: bool,
    /// Also remove from this remote.
    #[arg(short, long)]
    pub remote: Option<String>,
}

#[derive(Args)]
pub struct UserArgs {
    /// Username to log in as. Without it, prints the current user.
    pub name: Option<String>,
    /// Password (prompted on stdin in a real deployment; accepted here for scripting).
    #[arg(short, long)]
    pub password: Option<String>,
    /// Remote to authenticate against.
    #[arg(short, long)]
    pub remote: String,
}
