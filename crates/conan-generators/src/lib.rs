// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

//! Build-system integration: the `conanbuildinfo.txt`/`.cmake` emitters
//! (§4.8/§6) plus the `imports()` file copier.

mod build_info;
mod cmake;
mod error;
mod importer;

pub use build_info::render_txt;
pub use cmake::render_cmake;
pub use error::{Error, Result};
pub use importer::Importer;

use conan_schema::DepsCppInfo;

/// One requested generator name from a recipe's or text manifest's
/// `generators` list. Unknown names are rejected by [`Generator::parse`]
/// rather than silently ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Generator {
    Txt,
    Cmake,
}

impl Generator {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "txt" => Ok(Generator::Txt),
            "cmake" => Ok(Generator::Cmake),
            other => Err(Error::UnknownGeneratorError(other.to_string())),
        }
    }

    /// The conventional output file name this generator writes.
    pub fn file_name(&self) -> &'static str {
        match self {
            Generator::Txt => "conanbuildinfo.txt",
            Generator::Cmake => "conanbuildinfo.cmake",
        }
    }

    pub fn render(&self, deps_cpp_info: &DepsCppInfo) -> String {
        match self {
            Generator::Txt => render_txt(deps_cpp_info),
            Generator::Cmake => render_cmake(deps_cpp_info),
        }
    }
}
