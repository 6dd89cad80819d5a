// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;
use conan_remote::{MemoryRemote, RemoteManager};

fn reference() -> Reference {
    Reference::new("zlib", "1.2.11", "conan", "stable").unwrap()
}

#[test]
fn test_matching_filters_by_pattern() {
    let root = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(root.path());
    std::fs::create_dir_all(paths.export_folder(&reference())).unwrap();
    let bzip2 = Reference::new("bzip2", "1.0.8", "conan", "stable").unwrap();
    std::fs::create_dir_all(paths.export_folder(&bzip2)).unwrap();

    let remover = Remover::new(&paths);
    let pattern = PackagePattern::glob("zlib/*").unwrap();
    assert_eq!(remover.matching(&pattern).unwrap(), vec![reference()]);
}

#[test]
fn test_remove_local_without_filter_deletes_export_and_package_but_keeps_source_by_default() {
    let root = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(root.path());
    std::fs::create_dir_all(paths.export_folder(&reference())).unwrap();
    std::fs::create_dir_all(paths.source_folder(&reference())).unwrap();
    std::fs::create_dir_all(paths.package_folder(&reference(), &"a".repeat(40))).unwrap();

    let remover = Remover::new(&paths);
    remover.remove_local(&reference(), None, false).unwrap();

    assert!(!paths.export_folder(&reference()).exists());
    assert!(!paths.package_folder(&reference(), &"a".repeat(40)).exists());
    assert!(paths.source_folder(&reference()).exists());
}

#[test]
fn test_remove_local_with_src_flag_also_deletes_source() {
    let root = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(root.path());
    std::fs::create_dir_all(paths.export_folder(&reference())).unwrap();
    std::fs::create_dir_all(paths.source_folder(&reference())).unwrap();

    let remover = Remover::new(&paths);
    remover.remove_local(&reference(), None, true).unwrap();

    assert!(!paths.source_folder(&reference()).exists());
}

#[test]
fn test_remove_local_with_package_id_filter_leaves_export_intact() {
    let root = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(root.path());
    std::fs::create_dir_all(paths.export_folder(&reference())).unwrap();
    let keep = "a".repeat(40);
    let drop_id = "b".repeat(40);
    std::fs::create_dir_all(paths.package_folder(&reference(), &keep)).unwrap();
    std::fs::create_dir_all(paths.package_folder(&reference(), &drop_id)).unwrap();

    let remover = Remover::new(&paths);
    let pattern = Regex::new(&format!("^{drop_id}$")).unwrap();
    remover.remove_local(&reference(), Some(&pattern), false).unwrap();

    assert!(paths.export_folder(&reference()).exists());
    assert!(paths.package_folder(&reference(), &keep).exists());
    assert!(!paths.package_folder(&reference(), &drop_id).exists());
}

#[tokio::test]
async fn test_remove_remote_without_package_id_deletes_recipe() {
    let remote = MemoryRemote::new();
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("conanfile.yml"), b"name: zlib\n").unwrap();
    remote.upload_recipe("conancenter", &reference(), src.path()).await.unwrap();

    let root = tempfile::tempdir().unwrap();
    let paths = ConanPaths::new(root.path());
    let remover = Remover::new(&paths);
    remover.remove_remote(&remote, "conancenter", &reference(), None).await.unwrap();

    let dest = tempfile::tempdir().unwrap();
    assert!(remote.get_recipe("conancenter", &reference(), dest.path()).await.is_err());
}
