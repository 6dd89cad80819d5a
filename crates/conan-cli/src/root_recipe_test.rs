use std::sync::Arc;

use conan_config::ClientConfig;
use conan_remote::LoginDb;
use conan_storage::{BuildLockManager, ConanPaths};

use super::*;
use crate::offline_remote::OfflineRemoteManager;

fn test_context(storage_root: &std::path::Path) -> Context {
    Context {
        home: storage_root.to_path_buf(),
        paths: ConanPaths::new(storage_root.join("data")),
        config: ClientConfig::parse(
            "[storage]\npath = .\n\n[remotes]\n\n[settings_defaults]\n",
            Some(storage_root.to_str().unwrap()),
        )
        .unwrap(),
        settings_definition: Arc::new(conan_foundation::load_definition("os:\n  - Linux\n  - Windows\n").unwrap()),
        locks: BuildLockManager::new(),
        login_db: LoginDb::new(storage_root.join("login.json")),
        remote_manager: Box::new(OfflineRemoteManager),
    }
}

#[test]
fn test_resolve_reads_conanfile_txt_as_a_synthetic_recipe() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("conanfile.txt"),
        "[requires]\nzlib/1.2.11@user/stable\n\n[generators]\ntxt\n",
    )
    .unwrap();

    let ctx = test_context(tmp.path());
    let (reference, manifest) = resolve(&ctx, &tmp.path().display().to_string()).unwrap();

    assert_eq!(reference.name(), "project");
    assert!(manifest.full_settings);
    assert_eq!(manifest.requires.len(), 1);
    assert_eq!(manifest.requires[0].reference, "zlib/1.2.11@user/stable");
}

#[test]
fn test_resolve_rejects_a_directory_with_no_recipe() {
    let tmp = tempfile::tempdir().unwrap();
    let ctx = test_context(tmp.path());

    let err = resolve(&ctx, &tmp.path().display().to_string()).unwrap_err();
    assert!(matches!(err, Error::Usage(_)));
}
