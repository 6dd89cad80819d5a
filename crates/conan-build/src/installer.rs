// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::Arc;

use conan_foundation::{Options, Settings};
use conan_schema::{
    BuildContext, CppInfo, DeclarativeRecipe, NodeContext, PackageContext, Recipe, Runner,
    SourceContext,
};
use conan_solve::{compute_package_ids, BuildMode, DepGraph, NodeId};
use conan_storage::{BuildLockManager, ConanPaths, Manifest, PackageKey};
use conan_remote::{RemoteList, RemoteManager};

use crate::build_log::BuildLog;
use crate::deps_cpp_info_compose;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./installer_test.rs"]
mod installer_test;

/// Marker file dropped in a reference's source directory once `source()` has
/// materialized it, so a later install of a different package id for the
/// same recipe version does not re-run it (spec §4.4.1: "invoked once per
/// recipe version, cached").
const SOURCE_MARKER: &str = ".conan_source_materialized";

/// How a single node's binary was obtained this run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstallOutcome {
    Reused,
    Downloaded,
    Built,
}

#[derive(Debug, Default)]
pub struct InstallReport {
    pub outcomes: HashMap<NodeId, InstallOutcome>,
    pub package_ids: HashMap<NodeId, String>,
    pub cpp_infos: HashMap<NodeId, CppInfo>,
}

/// Drives every node of a resolved [`DepGraph`] through the reuse/download/
/// build decision, in reverse topological order, honoring the
/// at-most-one-concurrent-build-per-package contract via [`BuildLockManager`].
pub struct Installer<'a> {
    paths: &'a ConanPaths,
    locks: &'a BuildLockManager,
    remotes: &'a RemoteList,
    remote_manager: &'a dyn RemoteManager,
    settings: &'a Settings,
    build_mode: BuildMode,
    runner: Arc<dyn Runner>,
}

struct SharedRunner(Arc<dyn Runner>);

impl Runner for SharedRunner {
    fn run(
        &self,
        command: &str,
        cwd: &std::path::Path,
        env: &std::collections::BTreeMap<String, String>,
    ) -> std::io::Result<conan_schema::RunOutput> {
        self.0.run(command, cwd, env)
    }
}

impl<'a> Installer<'a> {
    pub fn new(
        paths: &'a ConanPaths,
        locks: &'a BuildLockManager,
        remotes: &'a RemoteList,
        remote_manager: &'a dyn RemoteManager,
        settings: &'a Settings,
        build_mode: BuildMode,
    ) -> Self {
        Self {
            paths,
            locks,
            remotes,
            remote_manager,
            settings,
            build_mode,
            runner: Arc::new(conan_schema::ProcessRunner),
        }
    }

    pub fn with_runner(mut self, runner: Arc<dyn Runner>) -> Self {
        self.runner = runner;
        self
    }

    fn recipe_for(&self, manifest: &conan_schema::RecipeManifest) -> DeclarativeRecipe {
        DeclarativeRecipe::new(manifest.clone(), Box::new(SharedRunner(self.runner.clone())))
    }

    fn node_context(&self, node: &conan_solve::GraphNode, package_id: &str) -> NodeContext {
        let mut options = Options::new();
        for (name, value) in &node.options {
            options.set(name.clone(), value.clone());
        }
        NodeContext {
            export_folder: self.paths.export_folder(&node.reference),
            source_folder: self.paths.source_folder(&node.reference),
            build_folder: self.paths.build_folder(&node.reference, package_id),
            package_folder: self.paths.package_folder(&node.reference, package_id),
            settings: self.settings.fork(),
            options,
        }
    }

    /// Installs every node of `graph`, returning per-node outcomes and the
    /// package id each node was resolved to.
    pub async fn install(&self, graph: &DepGraph) -> Result<InstallReport> {
        let infos = compute_package_ids(graph);
        let mut cpp_infos: HashMap<NodeId, CppInfo> = HashMap::new();
        let mut report = InstallReport::default();

        for id in graph.reverse_topological_order() {
            let node = graph.node(id);
            let info = infos.get(&id).expect("package id computed for every node");
            let package_id = info.package_id();
            let reference_display = node.reference.to_string();

            let recipe = self.recipe_for(&node.manifest);

            let already_built = self.paths.package_exists(&node.reference, &package_id);
            let forced = self.build_mode.forces_rebuild(&reference_display);

            let outcome = if already_built && !forced {
                InstallOutcome::Reused
            } else if !forced && self.try_download(&node.reference, &package_id).await? {
                InstallOutcome::Downloaded
            } else if self.build_mode.allows_build(&reference_display) || forced {
                self.build(graph, id, &recipe, &node.reference, &package_id, &cpp_infos, info)
                    .await?;
                InstallOutcome::Built
            } else {
                return Err(Error::MissingBinaryError {
                    reference: reference_display,
                });
            };

            let node_ctx = self.node_context(node, &package_id);
            let cpp_info = recipe.package_info(&node_ctx)?;
            cpp_infos.insert(id, cpp_info.clone());
            report.outcomes.insert(id, outcome);
            report.package_ids.insert(id, package_id);
            report.cpp_infos.insert(id, cpp_info);
        }

        Ok(report)
    }

    async fn try_download(&self, reference: &conan_foundation::Reference, package_id: &str) -> Result<bool> {
        let dest = self.paths.package_folder(reference, package_id);
        for remote in self.remotes.iter() {
            match self
                .remote_manager
                .get_package(&remote.name, reference, package_id, &dest)
                .await
            {
                Ok(()) => {
                    if Manifest::read_from(&self.paths.package_manifest_path(reference, package_id)).is_ok() {
                        return Ok(true);
                    }
                    // Downloaded content has no valid manifest: discard and
                    // fall through to the next remote / to building.
                    let _ = std::fs::remove_dir_all(&dest);
                }
                Err(_) => continue,
            }
        }
        Ok(false)
    }

    #[allow(clippy::too_many_arguments)]
    async fn build(
        &self,
        graph: &DepGraph,
        id: NodeId,
        recipe: &DeclarativeRecipe,
        reference: &conan_foundation::Reference,
        package_id: &str,
        cpp_infos: &HashMap<NodeId, CppInfo>,
        info: &conan_schema::ConanInfo,
    ) -> Result<()> {
        let node = graph.node(id);
        let key = PackageKey::new(reference.to_string(), package_id.to_string());
        let lock_path = self.paths.build_lock_path(reference, package_id);
        let guard = self.locks.acquire(key, &lock_path).await?;

        let node_ctx = self.node_context(node, package_id);
        std::fs::create_dir_all(&node_ctx.source_folder)?;
        std::fs::create_dir_all(&node_ctx.build_folder)?;
        std::fs::create_dir_all(&node_ctx.package_folder)?;

        let marker = node_ctx.source_folder.join(SOURCE_MARKER);
        if !marker.is_file() {
            recipe
                .source(&SourceContext { node: &node_ctx })
                .map_err(|source_err| self.build_error(reference, &node_ctx.source_folder, &source_err))?;
            std::fs::write(&marker, "")?;
        }

        let deps_cpp_info = deps_cpp_info_compose::compose(graph, id, cpp_infos);
        recipe
            .build(&BuildContext {
                node: &node_ctx,
                deps_cpp_info: &deps_cpp_info,
            })
            .map_err(|build_err| self.build_error(reference, &node_ctx.build_folder, &build_err))?;

        recipe
            .package(&PackageContext { node: &node_ctx })
            .map_err(|pkg_err| self.build_error(reference, &node_ctx.package_folder, &pkg_err))?;

        let timestamp = chrono::Utc::now().timestamp();
        let manifest = Manifest::compute(&node_ctx.package_folder, timestamp)?;
        manifest.write_to(&self.paths.package_manifest_path(reference, package_id))?;
        std::fs::write(self.paths.package_info_path(reference, package_id), info.dumps())?;

        drop(guard);
        Ok(())
    }

    fn build_error(&self, reference: &conan_foundation::Reference, cwd: &std::path::Path, source: &conan_schema::Error) -> Error {
        let mut log = BuildLog::new();
        log.push(&source.to_string());
        Error::BuildError {
            reference: reference.to_string(),
            cwd: cwd.to_path_buf(),
            log_tail: log.tail_text(),
        }
    }
}
