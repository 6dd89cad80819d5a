// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_schema::{CppInfo, DepsCppInfo};

#[cfg(test)]
#[path = "./cmake_test.rs"]
mod cmake_test;

const VARIABLES: &[(&str, fn(&CppInfo) -> &[String])] = &[
    ("INCLUDE_DIRS", |i| &i.include_dirs),
    ("LIB_DIRS", |i| &i.lib_dirs),
    ("BIN_DIRS", |i| &i.bin_dirs),
    ("LIBS", |i| &i.libs),
    ("DEFINES", |i| &i.defines),
    ("CXX_FLAGS", |i| &i.cxxflags),
    ("C_FLAGS", |i| &i.cflags),
    ("SHARED_LINK_FLAGS", |i| &i.sharedlinkflags),
    ("EXE_LINK_FLAGS", |i| &i.exelinkflags),
];

fn write_set(out: &mut String, name: &str, values: &[String]) {
    out.push_str("set(");
    out.push_str(name);
    out.push(' ');
    out.push_str(&values.join(" "));
    out.push_str(")\n");
}

/// Renders `conanbuildinfo.cmake` per §6: the same data `render_txt` emits,
/// as `set(CONAN_<VARIABLE> ...)` / `set(CONAN_<VARIABLE>_<dep> ...)` calls.
pub fn render_cmake(deps_cpp_info: &DepsCppInfo) -> String {
    let mut out = String::new();
    for (suffix, field) in VARIABLES {
        write_set(&mut out, &format!("CONAN_{suffix}"), field(deps_cpp_info.root()));
    }
    for (dep_name, info) in deps_cpp_info.deps() {
        let dep_upper = dep_name.to_uppercase();
        for (suffix, field) in VARIABLES {
            write_set(&mut out, &format!("CONAN_{suffix}_{dep_upper}"), field(info));
        }
    }
    out
}
