// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

fn reference() -> Reference {
    Reference::new("zlib", "1.2.11", "conan", "stable").unwrap()
}

#[test]
fn test_export_folder_layout() {
    let paths = ConanPaths::new("/root/.conan/data");
    assert_eq!(
        paths.export_folder(&reference()),
        PathBuf::from("/root/.conan/data/zlib/1.2.11/conan/stable/export")
    );
}

#[test]
fn test_package_folder_is_keyed_by_package_id() {
    let paths = ConanPaths::new("/root/.conan/data");
    let id = "a".repeat(40);
    assert_eq!(
        paths.package_folder(&reference(), &id),
        PathBuf::from(format!("/root/.conan/data/zlib/1.2.11/conan/stable/package/{id}"))
    );
}

#[test]
fn test_package_exists_false_when_absent() {
    let paths = ConanPaths::new("/nonexistent/conan-storage-paths-test");
    assert!(!paths.package_exists(&reference(), &"a".repeat(40)));
}
