// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use async_trait::async_trait;
use conan_foundation::Reference;
use conan_remote::{Error, RemoteManager, Result};

/// Stands in for the real HTTP-backed [`RemoteManager`] the core only ever
/// sees as a capability interface (§1: the remote transport and auth token
/// storage are external collaborators, out of scope for this rewrite).
/// Every operation reports the remote as unreachable rather than silently
/// succeeding, so an install/upload run against it surfaces the same
/// `NotFoundError`/`RemoteError` a real client would when no network
/// transport is wired in.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineRemoteManager;

#[async_trait]
impl RemoteManager for OfflineRemoteManager {
    async fn get_recipe(&self, remote: &str, reference: &Reference, _dest: &Path) -> Result<()> {
        Err(Error::NotFoundError {
            remote: remote.to_string(),
            reference: reference.to_string(),
        })
    }

    async fn get_package(&self, remote: &str, reference: &Reference, package_id: &str, _dest: &Path) -> Result<()> {
        Err(Error::NotFoundError {
            remote: remote.to_string(),
            reference: format!("{reference}:{package_id}"),
        })
    }

    async fn upload_recipe(&self, remote: &str, _reference: &Reference, _src: &Path) -> Result<()> {
        Err(Error::RemoteError {
            remote: remote.to_string(),
            detail: "no HTTP transport configured".to_string(),
        })
    }

    async fn upload_package(&self, remote: &str, _reference: &Reference, _package_id: &str, _src: &Path) -> Result<()> {
        Err(Error::RemoteError {
            remote: remote.to_string(),
            detail: "no HTTP transport configured".to_string(),
        })
    }

    async fn search(&self, _remote: &str, _pattern: &str) -> Result<Vec<Reference>> {
        Ok(Vec::new())
    }

    async fn authenticate(&self, remote: &str, _user: &str, _password: &str) -> Result<String> {
        Err(Error::AuthenticationError {
            remote: remote.to_string(),
            detail: "no HTTP transport configured".to_string(),
        })
    }

    async fn delete_recipe(&self, remote: &str, reference: &Reference) -> Result<()> {
        Err(Error::NotFoundError {
            remote: remote.to_string(),
            reference: reference.to_string(),
        })
    }

    async fn delete_package(&self, remote: &str, reference: &Reference, package_id: &str) -> Result<()> {
        Err(Error::NotFoundError {
            remote: remote.to_string(),
            reference: format!("{reference}:{package_id}"),
        })
    }
}
