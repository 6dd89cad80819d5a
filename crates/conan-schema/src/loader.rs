// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::recipe::{DeclarativeRecipe, RecipeManifest, RequireEntry};
use crate::{Error, Result};

#[cfg(test)]
#[path = "./loader_test.rs"]
mod loader_test;

/// Finds and parses `conanfile.yml` recipes from a directory on disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecipeLoader;

impl RecipeLoader {
    pub const RECIPE_FILENAME: &'static str = "conanfile.yml";

    pub fn new() -> Self {
        Self
    }

    pub fn recipe_path(&self, export_folder: &Path) -> PathBuf {
        export_folder.join(Self::RECIPE_FILENAME)
    }

    pub fn load_manifest(&self, export_folder: &Path) -> Result<RecipeManifest> {
        let path = self.recipe_path(export_folder);
        let text = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::RecipeNotFound(path.clone())
            } else {
                Error::Io(source)
            }
        })?;
        RecipeManifest::load(&text, &path)
    }

    pub fn load_recipe(&self, export_folder: &Path) -> Result<DeclarativeRecipe> {
        let manifest = self.load_manifest(export_folder)?;
        Ok(DeclarativeRecipe::with_process_runner(manifest))
    }
}

/// A synthetic consumer recipe synthesized from a `conanfile.txt`-equivalent
/// requirements list: `[requires]` and `[generators]` sections, newline
/// separated, no build logic of its own. Resolves to a [`RecipeManifest`]
/// with [`RecipeManifest::full_settings`] set, per the persisted-full-
/// settings decision documented in the design notes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextManifest {
    pub requires: Vec<RequireEntry>,
    pub generators: Vec<String>,
}

impl TextManifest {
    pub fn parse(text: &str) -> Result<Self> {
        let mut requires = Vec::new();
        let mut generators = Vec::new();
        let mut section: Option<&str> = None;
        for raw_line in text.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                section = Some(&line[1..line.len() - 1]);
                continue;
            }
            match section {
                Some("requires") => {
                    let (reference, private) = match line.strip_suffix(" private") {
                        Some(rest) => (rest.trim().to_string(), true),
                        None => (line.to_string(), false),
                    };
                    requires.push(RequireEntry { reference, private });
                }
                Some("generators") => generators.push(line.to_string()),
                Some(other) => {
                    return Err(Error::RecipeExecutionError(format!(
                        "unknown conanfile.txt section [{other}]"
                    )))
                }
                None => {
                    return Err(Error::RecipeExecutionError(format!(
                        "line outside of a section: {line:?}"
                    )))
                }
            }
        }
        Ok(TextManifest { requires, generators })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::RecipeNotFound(path.to_path_buf())
            } else {
                Error::Io(source)
            }
        })?;
        Self::parse(&text)
    }

    pub fn into_recipe_manifest(self) -> RecipeManifest {
        RecipeManifest {
            name: "project".to_string(),
            version: "0".to_string(),
            requires: self.requires,
            full_settings: true,
            ..Default::default()
        }
    }

    pub fn into_recipe(self) -> DeclarativeRecipe {
        DeclarativeRecipe::with_process_runner(self.into_recipe_manifest())
    }
}

impl From<TextManifest> for RecipeManifest {
    fn from(value: TextManifest) -> Self {
        value.into_recipe_manifest()
    }
}
