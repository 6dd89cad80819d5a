// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod commands;
mod context;
mod error;
mod offline_remote;
mod remote_fetch_provider;
mod root_recipe;

use clap::Parser;

pub use context::Context;
pub use error::{Error, Result};

fn main() -> miette::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to start the Tokio runtime");

    runtime.block_on(run(cli))?;
    Ok(())
}

async fn run(cli: cli::Cli) -> Result<()> {
    let ctx = Context::load()?;
    commands::dispatch(&ctx, &cli.command).await
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
