// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_render_txt_emits_global_then_per_dependency_sections() {
    let mut zlib = CppInfo::default();
    zlib.include_dirs.push("include".to_string());
    zlib.libs.push("z".to_string());

    let mut deps = DepsCppInfo::new();
    deps.append("zlib", zlib);

    let text = render_txt(&deps);
    let global_pos = text.find("[includedirs]\ninclude\n").unwrap();
    let dep_pos = text.find("[includedirs_zlib]\ninclude\n").unwrap();
    assert!(global_pos < dep_pos);
    assert!(text.contains("[libs]\nz\n"));
    assert!(text.contains("[libs_zlib]\nz\n"));
}

#[test]
fn test_render_txt_emits_every_section_even_when_empty() {
    let deps = DepsCppInfo::new();
    let text = render_txt(&deps);
    for section in [
        "includedirs", "libdirs", "bindirs", "libs", "defines", "cxxflags", "cflags", "sharedlinkflags",
        "exelinkflags",
    ] {
        assert!(text.contains(&format!("[{section}]\n")), "missing {section}");
    }
}
