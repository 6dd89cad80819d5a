// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use conan_foundation::{OptionDeclarations, Options, Settings};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{visibility::Visibility, Error, Result};

#[cfg(test)]
#[path = "./recipe_test.rs"]
mod recipe_test;

/// One entry of a recipe's `requires` list: the reference string (without
/// the recipe's own revision info) plus the edge's visibility. Declaring
/// `private: true` on a requirement is the only way to mark it private; the
/// default is public, matching §2 I2.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RequireEntry {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub private: bool,
}

impl RequireEntry {
    pub fn visibility(&self) -> Visibility {
        if self.private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// One entry of a recipe's `imports` list, matching §2's
/// `imports(src, dst, pattern)` hook.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ImportPattern {
    pub pattern: String,
    #[serde(default)]
    pub src_subdir: Option<String>,
    pub dst_subdir: String,
}

/// The on-disk shape of a `conanfile.yml`, deserialized directly by serde.
/// [`RecipeManifest::load`] converts this into the richer
/// `conan_foundation` types the rest of the crate works with.
#[derive(Clone, Debug, Default, Deserialize)]
struct RawManifest {
    name: String,
    version: String,
    #[serde(default)]
    settings: Vec<String>,
    #[serde(default)]
    options: IndexMap<String, Vec<String>>,
    #[serde(default)]
    default_options: BTreeMap<String, String>,
    #[serde(default)]
    requires: Vec<RequireEntry>,
    #[serde(default)]
    exports: Vec<String>,
    #[serde(default)]
    exports_sources: Vec<String>,
    #[serde(default)]
    imports: Vec<ImportPattern>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    build: Option<String>,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    package_info: Option<String>,
}

/// The declarative body of a `conanfile.yml`: everything a recipe states
/// without running any code. The four build-lifecycle hooks are shell
/// commands run through a [`Runner`] with the corresponding context's
/// environment variables exported.
#[derive(Clone, Debug, Default)]
pub struct RecipeManifest {
    pub name: String,
    pub version: String,
    pub settings: Vec<String>,
    pub options: OptionDeclarations,
    pub default_options: Options,
    pub requires: Vec<RequireEntry>,
    pub exports: Vec<String>,
    pub exports_sources: Vec<String>,
    pub imports: Vec<ImportPattern>,
    pub source: Option<String>,
    pub build: Option<String>,
    pub package: Option<String>,
    pub package_info: Option<String>,
    /// Set only for the synthetic recipe synthesized from a `conanfile.txt`
    /// equivalent. Such a consumer declares no `settings` names of its own,
    /// so its `ConanInfo` persists every currently active setting rather
    /// than a projection over a declared subset.
    pub full_settings: bool,
}

impl RecipeManifest {
    pub fn load(text: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest = serde_yaml::from_str(text).map_err(|source| Error::RecipeSyntaxError {
            path: path.to_path_buf(),
            source,
        })?;
        let mut options = OptionDeclarations::new();
        for (name, universe) in raw.options {
            options.declare(name, universe);
        }
        let mut default_options = Options::new();
        for (name, value) in raw.default_options {
            default_options.set(name, value);
        }
        Ok(RecipeManifest {
            name: raw.name,
            version: raw.version,
            settings: raw.settings,
            options,
            default_options,
            requires: raw.requires,
            exports: raw.exports,
            exports_sources: raw.exports_sources,
            imports: raw.imports,
            source: raw.source,
            build: raw.build,
            package: raw.package,
            package_info: raw.package_info,
            full_settings: false,
        })
    }

    /// The `(path, value)` pairs this recipe's `ConanInfo` should persist:
    /// the declared-subset projection for an ordinary recipe, or every
    /// currently active setting when [`Self::full_settings`] is set.
    pub fn settings_for_info(&self, settings: &Settings) -> Vec<(String, String)> {
        if self.full_settings {
            settings
                .canonical_lines()
                .into_iter()
                .map(|line| {
                    let (k, v) = line.split_once('=').expect("canonical_lines yields key=value");
                    (k.to_string(), v.to_string())
                })
                .collect()
        } else {
            settings.project(&self.settings)
        }
    }
}

/// Shared fields every lifecycle hook context exposes: the export/build
/// folders and the settings/options the graph resolved for this node.
#[derive(Clone, Debug)]
pub struct NodeContext {
    pub export_folder: PathBuf,
    pub source_folder: PathBuf,
    pub build_folder: PathBuf,
    pub package_folder: PathBuf,
    pub settings: Settings,
    pub options: Options,
}

/// Context passed to the `config` hook: settings/options are mutable here so
/// a recipe may further constrain its own option set before the graph locks
/// it in.
pub struct ConfigContext<'a> {
    pub settings: &'a mut Settings,
    pub options: &'a mut Options,
}

/// Context passed to the `source` hook.
pub struct SourceContext<'a> {
    pub node: &'a NodeContext,
}

/// Context passed to the `build` hook.
pub struct BuildContext<'a> {
    pub node: &'a NodeContext,
    pub deps_cpp_info: &'a crate::DepsCppInfo,
}

/// Context passed to the `package` hook: a recipe copies build artifacts
/// into `node.package_folder` here.
pub struct PackageContext<'a> {
    pub node: &'a NodeContext,
}

/// Output of running a recipe's shell-backed hook.
#[derive(Clone, Debug)]
pub struct RunOutput {
    pub status_success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Executes a recipe hook's shell command in a working directory with a
/// given environment. Abstracted so tests can substitute a recording double
/// without shelling out.
pub trait Runner: Send + Sync {
    fn run(&self, command: &str, cwd: &Path, env: &BTreeMap<String, String>) -> std::io::Result<RunOutput>;
}

/// Shells out via `sh -c`, matching how recipe commands are expected to be
/// written (plain POSIX shell snippets, not a sandboxed DSL).
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&self, command: &str, cwd: &Path, env: &BTreeMap<String, String>) -> std::io::Result<RunOutput> {
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .envs(env)
            .output()?;
        Ok(RunOutput {
            status_success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// The capability surface a graph builder and installer drive a package's
/// recipe through. Mirrors the `config`/`source`/`build`/`package`/
/// `package_info`/`imports` hooks of §2's MODULE Recipe.
pub trait Recipe {
    fn manifest(&self) -> &RecipeManifest;

    fn config(&self, ctx: &mut ConfigContext<'_>) -> Result<()>;

    fn source(&self, ctx: &SourceContext<'_>) -> Result<()>;

    fn build(&self, ctx: &BuildContext<'_>) -> Result<()>;

    fn package(&self, ctx: &PackageContext<'_>) -> Result<()>;

    fn package_info(&self, node: &NodeContext) -> Result<crate::CppInfo>;
}

/// A recipe loaded from a `conanfile.yml`. Each lifecycle hook, when
/// present in the manifest, is run as a shell command through a [`Runner`];
/// a hook absent from the manifest is a no-op. `package_info` has no shell
/// form: it is inferred from the conventional `include`/`lib`/`bin`
/// subdirectories of the package folder, matching the common default a
/// recipe falls back on when it declares nothing explicit.
pub struct DeclarativeRecipe {
    manifest: RecipeManifest,
    runner: Box<dyn Runner>,
}

impl DeclarativeRecipe {
    pub fn new(manifest: RecipeManifest, runner: Box<dyn Runner>) -> Self {
        Self { manifest, runner }
    }

    pub fn with_process_runner(manifest: RecipeManifest) -> Self {
        Self::new(manifest, Box::new(ProcessRunner))
    }

    fn run_hook(&self, command: &str, node: &NodeContext) -> Result<()> {
        let mut env = BTreeMap::new();
        env.insert(
            "CONAN_EXPORT_FOLDER".to_string(),
            node.export_folder.display().to_string(),
        );
        env.insert(
            "CONAN_SOURCE_FOLDER".to_string(),
            node.source_folder.display().to_string(),
        );
        env.insert(
            "CONAN_BUILD_FOLDER".to_string(),
            node.build_folder.display().to_string(),
        );
        env.insert(
            "CONAN_PACKAGE_FOLDER".to_string(),
            node.package_folder.display().to_string(),
        );
        for line in node.settings.canonical_lines() {
            let (path, value) = line.split_once('=').expect("canonical_lines yields key=value");
            let key = format!("CONAN_SETTING_{}", path.to_uppercase().replace('.', "_"));
            env.insert(key, value.to_string());
        }
        for (name, value) in node.options.iter() {
            env.insert(format!("CONAN_OPTION_{}", name.to_uppercase()), value.to_string());
        }
        let output = self
            .runner
            .run(command, &node.build_folder, &env)
            .map_err(|e| Error::RecipeExecutionError(e.to_string()))?;
        if !output.status_success {
            return Err(Error::RecipeExecutionError(format!(
                "command {command:?} failed:\nstdout:\n{}\nstderr:\n{}",
                output.stdout, output.stderr
            )));
        }
        Ok(())
    }
}

impl Recipe for DeclarativeRecipe {
    fn manifest(&self) -> &RecipeManifest {
        &self.manifest
    }

    fn config(&self, _ctx: &mut ConfigContext<'_>) -> Result<()> {
        // Declarative recipes declare their option universe up front in the
        // manifest; there is no further narrowing to perform here.
        Ok(())
    }

    fn source(&self, ctx: &SourceContext<'_>) -> Result<()> {
        match &self.manifest.source {
            Some(command) => self.run_hook(command, ctx.node),
            None => Ok(()),
        }
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Result<()> {
        match &self.manifest.build {
            Some(command) => self.run_hook(command, ctx.node),
            None => Ok(()),
        }
    }

    fn package(&self, ctx: &PackageContext<'_>) -> Result<()> {
        match &self.manifest.package {
            Some(command) => self.run_hook(command, ctx.node),
            None => Ok(()),
        }
    }

    fn package_info(&self, node: &NodeContext) -> Result<crate::CppInfo> {
        if let Some(command) = &self.manifest.package_info {
            self.run_hook(command, node)?;
        }
        let mut info = crate::CppInfo::default();
        if node.package_folder.join("include").is_dir() {
            info.include_dirs.push("include".to_string());
        }
        if node.package_folder.join("lib").is_dir() {
            info.lib_dirs.push("lib".to_string());
        }
        if node.package_folder.join("bin").is_dir() {
            info.bin_dirs.push("bin".to_string());
        }
        Ok(info)
    }
}
