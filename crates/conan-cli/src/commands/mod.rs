// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

mod build;
mod export;
mod install;
mod remove;
mod search;
mod upload;
mod user;

use crate::cli::Command;
use crate::{Context, Result};

pub async fn dispatch(ctx: &Context, command: &Command) -> Result<()> {
    match command {
        Command::Export(args) => export::run(ctx, args),
        Command::Install(args) => install::run(ctx, args).await,
        Command::Build(args) => build::run(ctx, args).await,
        Command::Upload(args) => upload::run(ctx, args).await,
        Command::Search(args) => search::run(ctx, args).await,
        Command::Remove(args) => remove::run(ctx, args).await,
        Command::User(args) => user::run(ctx, args).await,
    }
}
