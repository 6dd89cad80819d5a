// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use conan_foundation::Reference;
use conan_schema::{RecipeLoader, RecipeManifest, TextManifest};

use crate::remote_fetch_provider::RemoteFetchingProvider;
use crate::{Context, Error, Result};

/// Resolves an `install`/`build` target (a pinned reference, or `.`/a path
/// to a local recipe or `conanfile.txt`) into a root reference plus its
/// manifest, matching §4.2's two loader paths: the recipe loader for
/// `conanfile.yml`, and the text-mode loader for a dependency-list-only
/// consumer.
pub fn resolve(ctx: &Context, target: &str) -> Result<(Reference, RecipeManifest)> {
    if let Ok(reference) = target.parse::<Reference>() {
        let provider = RemoteFetchingProvider::new(&ctx.paths, &ctx.config.remotes, ctx.remote_manager.as_ref());
        let manifest = conan_solve::RecipeProvider::manifest_for(&provider, &reference)?;
        return Ok((reference, manifest));
    }

    let path = Path::new(target);
    let conanfile_yml = path.join(RecipeLoader::RECIPE_FILENAME);
    if conanfile_yml.is_file() {
        let manifest = RecipeLoader::new().load_manifest(path)?;
        let reference = Reference::new(manifest.name.clone(), manifest.version.clone(), "_", "_")?;
        return Ok((reference, manifest));
    }

    let conanfile_txt = path.join("conanfile.txt");
    if conanfile_txt.is_file() {
        let manifest = TextManifest::load(&conanfile_txt)?.into_recipe_manifest();
        let reference = Reference::new(manifest.name.clone(), manifest.version.clone(), "_", "_")?;
        return Ok((reference, manifest));
    }

    Err(Error::Usage(format!(
        "{target:?} is neither a parseable reference nor a directory containing conanfile.yml/conanfile.txt"
    )))
}

#[cfg(test)]
#[path = "./root_recipe_test.rs"]
mod root_recipe_test;
