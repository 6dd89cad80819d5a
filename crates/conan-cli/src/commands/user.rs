// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;

use crate::cli::UserArgs;
use crate::{Context, Error, Result};

/// Implements `user [name] -r <remote> [-p password]` (§6): without `name`,
/// prints the currently logged-in user for that remote; with both `name`
/// and `-p`, authenticates and stores the returned token in the local
/// [`conan_remote::LoginDb`].
pub async fn run(ctx: &Context, args: &UserArgs) -> Result<()> {
    ctx.config
        .remotes
        .get(&args.remote)
        .ok_or_else(|| Error::UnknownRemoteError(args.remote.clone()))?;

    let Some(name) = &args.name else {
        match ctx.login_db.get(&args.remote)? {
            Some(credentials) => println!("{} logged in as {}", args.remote, credentials.username.bold()),
            None => println!("{}: no user set", args.remote),
        }
        return Ok(());
    };

    let password = args
        .password
        .as_deref()
        .ok_or_else(|| Error::Usage("-p/--password is required to log in".to_string()))?;

    let token = ctx.remote_manager.authenticate(&args.remote, name, password).await?;
    ctx.login_db.set(&args.remote, name, &token)?;
    println!("{} logged in to {} as {}", "Ok".green(), args.remote, name);
    Ok(())
}
