// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use conan_schema::{CppInfo, DepsCppInfo};

#[cfg(test)]
#[path = "./build_info_test.rs"]
mod build_info_test;

const SECTIONS: &[(&str, fn(&CppInfo) -> &[String])] = &[
    ("includedirs", |i| &i.include_dirs),
    ("libdirs", |i| &i.lib_dirs),
    ("bindirs", |i| &i.bin_dirs),
    ("libs", |i| &i.libs),
    ("defines", |i| &i.defines),
    ("cxxflags", |i| &i.cxxflags),
    ("cflags", |i| &i.cflags),
    ("sharedlinkflags", |i| &i.sharedlinkflags),
    ("exelinkflags", |i| &i.exelinkflags),
];

fn write_section(out: &mut String, name: &str, values: &[String]) {
    out.push('[');
    out.push_str(name);
    out.push_str("]\n");
    for value in values {
        out.push_str(value);
        out.push('\n');
    }
}

/// Renders `conanbuildinfo.txt` per §6: the global aggregation's sections
/// first, then one `[<section>_<dep>]` block per dependency in the
/// traversal's first-seen order.
pub fn render_txt(deps_cpp_info: &DepsCppInfo) -> String {
    let mut out = String::new();
    for (section, field) in SECTIONS {
        write_section(&mut out, section, field(deps_cpp_info.root()));
    }
    for (dep_name, info) in deps_cpp_info.deps() {
        for (section, field) in SECTIONS {
            write_section(&mut out, &format!("{section}_{dep_name}"), field(info));
        }
    }
    out
}
