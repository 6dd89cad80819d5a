// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_render_cmake_emits_global_then_per_dependency_variables() {
    let mut zlib = CppInfo::default();
    zlib.include_dirs.push("include".to_string());
    zlib.libs.push("z".to_string());

    let mut deps = DepsCppInfo::new();
    deps.append("zlib", zlib);

    let text = render_cmake(&deps);
    let global_pos = text.find("set(CONAN_INCLUDE_DIRS include)\n").unwrap();
    let dep_pos = text.find("set(CONAN_INCLUDE_DIRS_ZLIB include)\n").unwrap();
    assert!(global_pos < dep_pos);
    assert!(text.contains("set(CONAN_LIBS z)\n"));
    assert!(text.contains("set(CONAN_LIBS_ZLIB z)\n"));
}

#[test]
fn test_render_cmake_emits_every_variable_even_when_empty() {
    let deps = DepsCppInfo::new();
    let text = render_cmake(&deps);
    for suffix in [
        "INCLUDE_DIRS", "LIB_DIRS", "BIN_DIRS", "LIBS", "DEFINES", "CXX_FLAGS", "C_FLAGS",
        "SHARED_LINK_FLAGS", "EXE_LINK_FLAGS",
    ] {
        assert!(text.contains(&format!("set(CONAN_{suffix} )\n")), "missing {suffix}");
    }
}
