// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

fn reference() -> Reference {
    Reference::new("zlib", "1.2.11", "conan", "stable").unwrap()
}

#[tokio::test]
async fn test_upload_then_get_recipe_round_trips() {
    let remote = MemoryRemote::new();
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("conanfile.yml"), b"name: zlib\n").unwrap();

    remote.upload_recipe("conancenter", &reference(), src.path()).await.unwrap();

    let dest = tempfile::tempdir().unwrap();
    remote.get_recipe("conancenter", &reference(), dest.path()).await.unwrap();
    let content = std::fs::read(dest.path().join("conanfile.yml")).unwrap();
    assert_eq!(content, b"name: zlib\n");
}

#[tokio::test]
async fn test_get_recipe_not_found_errors() {
    let remote = MemoryRemote::new();
    let dest = tempfile::tempdir().unwrap();
    let err = remote.get_recipe("conancenter", &reference(), dest.path()).await.unwrap_err();
    assert!(matches!(err, Error::NotFoundError { .. }));
}

#[tokio::test]
async fn test_upload_then_get_package_round_trips() {
    let remote = MemoryRemote::new();
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("conaninfo.txt"), b"[settings]\n").unwrap();
    let package_id = "a".repeat(40);

    remote
        .upload_package("conancenter", &reference(), &package_id, src.path())
        .await
        .unwrap();

    let dest = tempfile::tempdir().unwrap();
    remote
        .get_package("conancenter", &reference(), &package_id, dest.path())
        .await
        .unwrap();
    assert!(dest.path().join("conaninfo.txt").is_file());
}

#[tokio::test]
async fn test_search_matches_glob_pattern() {
    let remote = MemoryRemote::new();
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("conanfile.yml"), b"name: zlib\n").unwrap();
    remote.upload_recipe("conancenter", &reference(), src.path()).await.unwrap();

    let found = remote.search("conancenter", "zlib/*").await.unwrap();
    assert_eq!(found, vec![reference()]);

    let none = remote.search("conancenter", "bzip2/*").await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_authenticate_is_deterministic() {
    let remote = MemoryRemote::new();
    let a = remote.authenticate("conancenter", "alice", "hunter2").await.unwrap();
    let b = remote.authenticate("conancenter", "alice", "hunter2").await.unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_delete_recipe_removes_its_packages_too() {
    let remote = MemoryRemote::new();
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("conanfile.yml"), b"name: zlib\n").unwrap();
    remote.upload_recipe("conancenter", &reference(), src.path()).await.unwrap();
    let package_id = "a".repeat(40);
    remote
        .upload_package("conancenter", &reference(), &package_id, src.path())
        .await
        .unwrap();

    remote.delete_recipe("conancenter", &reference()).await.unwrap();

    let dest = tempfile::tempdir().unwrap();
    assert!(matches!(
        remote.get_recipe("conancenter", &reference(), dest.path()).await.unwrap_err(),
        Error::NotFoundError { .. }
    ));
    assert!(matches!(
        remote
            .get_package("conancenter", &reference(), &package_id, dest.path())
            .await
            .unwrap_err(),
        Error::NotFoundError { .. }
    ));
}

#[tokio::test]
async fn test_delete_package_leaves_recipe_in_place() {
    let remote = MemoryRemote::new();
    let src = tempfile::tempdir().unwrap();
    std::fs::write(src.path().join("conanfile.yml"), b"name: zlib\n").unwrap();
    remote.upload_recipe("conancenter", &reference(), src.path()).await.unwrap();
    let package_id = "a".repeat(40);
    remote
        .upload_package("conancenter", &reference(), &package_id, src.path())
        .await
        .unwrap();

    remote.delete_package("conancenter", &reference(), &package_id).await.unwrap();

    let dest = tempfile::tempdir().unwrap();
    remote.get_recipe("conancenter", &reference(), dest.path()).await.unwrap();
    assert!(matches!(
        remote
            .get_package("conancenter", &reference(), &package_id, dest.path())
            .await
            .unwrap_err(),
        Error::NotFoundError { .. }
    ));
}
