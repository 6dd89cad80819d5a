// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use async_trait::async_trait;
use conan_foundation::Reference;

use crate::Result;

/// Everything the installer, exporter, uploader, remover and search commands
/// need from a configured package server. A transfer moves a whole folder
/// (recipe export or binary package) at a time, mirroring how the local
/// cache lays those out.
#[async_trait]
pub trait RemoteManager: Send + Sync {
    /// Downloads `reference`'s recipe export into `dest`, creating it if
    /// necessary. Errors with [`crate::Error::NotFoundError`] if the remote
    /// has no matching recipe.
    async fn get_recipe(&self, remote: &str, reference: &Reference, dest: &Path) -> Result<()>;

    /// Downloads one binary package into `dest`.
    async fn get_package(
        &self,
        remote: &str,
        reference: &Reference,
        package_id: &str,
        dest: &Path,
    ) -> Result<()>;

    /// Uploads the recipe export rooted at `src` to the remote, replacing
    /// whatever is already stored for `reference` there.
    async fn upload_recipe(&self, remote: &str, reference: &Reference, src: &Path) -> Result<()>;

    /// Uploads one binary package rooted at `src`.
    async fn upload_package(
        &self,
        remote: &str,
        reference: &Reference,
        package_id: &str,
        src: &Path,
    ) -> Result<()>;

    /// References on the remote whose display string matches `pattern`
    /// (interpretation of `pattern` is the caller's: glob or regex).
    async fn search(&self, remote: &str, pattern: &str) -> Result<Vec<Reference>>;

    /// Exchanges a username/password for a bearer token, on success storable
    /// in a [`crate::LoginDb`].
    async fn authenticate(&self, remote: &str, user: &str, password: &str) -> Result<String>;

    /// Deletes `reference`'s recipe (and, implicitly, every package built
    /// from it) from the remote. A no-op, not an error, if nothing is
    /// stored there for it.
    async fn delete_recipe(&self, remote: &str, reference: &Reference) -> Result<()>;

    /// Deletes one binary package from the remote.
    async fn delete_package(&self, remote: &str, reference: &Reference, package_id: &str) -> Result<()>;
}
