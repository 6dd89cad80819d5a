// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::future::Future;
use std::time::Duration;

use conan_foundation::Reference;
use conan_remote::RemoteManager;
use conan_storage::{ConanPaths, Manifest};
use futures::future::try_join_all;

use crate::{Error, Result};

#[cfg(test)]
#[path = "./uploader_test.rs"]
mod uploader_test;

const MAX_ATTEMPTS: u32 = 3;

/// The marker a previous successful upload leaves next to a manifest, so a
/// later upload of unchanged content can be skipped without `force`. The
/// `RemoteManager` interface transfers a whole folder at a time, so "diff
/// against the remote's manifest" (§4.6) is approximated here by diffing
/// against the manifest captured at the last successful upload to that
/// remote, rather than asking the remote itself — it does not expose a
/// manifest-read endpoint.
fn marker_path(dir: &std::path::Path, remote_name: &str) -> std::path::PathBuf {
    dir.join(format!(".uploaded-{remote_name}.manifest"))
}

/// Implements §4.6's upload half: recipe, or recipe plus every built
/// package, diffed against what was last uploaded and transferred only if
/// changed (or always, with `force`); transient failures retry up to a
/// fixed small bound.
pub struct Uploader<'a> {
    paths: &'a ConanPaths,
    remote_manager: &'a dyn RemoteManager,
}

impl<'a> Uploader<'a> {
    pub fn new(paths: &'a ConanPaths, remote_manager: &'a dyn RemoteManager) -> Self {
        Self { paths, remote_manager }
    }

    /// Uploads the recipe export for `reference`. Returns `false` if the
    /// upload was skipped because nothing changed since the last time.
    pub async fn upload_recipe(&self, remote_name: &str, reference: &Reference, force: bool) -> Result<bool> {
        let export_folder = self.paths.export_folder(reference);
        let manifest_path = self.paths.recipe_manifest_path(reference);
        let marker = marker_path(&export_folder, remote_name);
        if !force && unchanged_since(&manifest_path, &marker)? {
            return Ok(false);
        }
        self.retry(&reference.to_string(), || {
            self.remote_manager.upload_recipe(remote_name, reference, &export_folder)
        })
        .await?;
        std::fs::copy(&manifest_path, &marker)?;
        Ok(true)
    }

    /// Uploads one built package.
    pub async fn upload_package(
        &self,
        remote_name: &str,
        reference: &Reference,
        package_id: &str,
        force: bool,
    ) -> Result<bool> {
        let package_folder = self.paths.package_folder(reference, package_id);
        let manifest_path = self.paths.package_manifest_path(reference, package_id);
        let marker = marker_path(&package_folder, remote_name);
        if !force && unchanged_since(&manifest_path, &marker)? {
            return Ok(false);
        }
        self.retry(&format!("{reference}:{package_id}"), || {
            self.remote_manager
                .upload_package(remote_name, reference, package_id, &package_folder)
        })
        .await?;
        std::fs::copy(&manifest_path, &marker)?;
        Ok(true)
    }

    /// Uploads the recipe and every one of `package_ids` concurrently (§5:
    /// independent file transfers need not be serialized).
    pub async fn upload_all(
        &self,
        remote_name: &str,
        reference: &Reference,
        package_ids: &[String],
        force: bool,
    ) -> Result<Vec<bool>> {
        let recipe_upload = self.upload_recipe(remote_name, reference, force);
        let package_uploads = package_ids
            .iter()
            .map(|package_id| self.upload_package(remote_name, reference, package_id, force));
        let (recipe_result, package_results) =
            futures::future::join(recipe_upload, try_join_all(package_uploads)).await;
        let mut out = vec![recipe_result?];
        out.extend(package_results?);
        Ok(out)
    }

    async fn retry<F, Fut>(&self, reference_display: &str, mut attempt: F) -> Result<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = conan_remote::Result<()>>,
    {
        let mut last_err = None;
        for attempt_no in 1..=MAX_ATTEMPTS {
            match attempt().await {
                Ok(()) => return Ok(()),
                Err(err) => {
                    last_err = Some(err);
                    if attempt_no < MAX_ATTEMPTS {
                        tokio::time::sleep(Duration::from_millis(100 * u64::from(attempt_no))).await;
                    }
                }
            }
        }
        Err(Error::UploadError {
            reference: reference_display.to_string(),
            attempts: MAX_ATTEMPTS,
            detail: last_err.expect("loop ran at least once").to_string(),
        })
    }
}

fn unchanged_since(manifest_path: &std::path::Path, marker: &std::path::Path) -> Result<bool> {
    let (Ok(current), Ok(last_uploaded)) = (Manifest::read_from(manifest_path), Manifest::read_from(marker)) else {
        return Ok(false);
    };
    Ok(current.files == last_uploaded.files)
}
