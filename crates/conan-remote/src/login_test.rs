// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_get_is_none_when_db_does_not_exist() {
    let dir = tempfile::tempdir().unwrap();
    let db = LoginDb::new(dir.path().join("login.json"));
    assert!(db.get("conancenter").unwrap().is_none());
}

#[test]
fn test_set_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let db = LoginDb::new(dir.path().join("login.json"));
    db.set("conancenter", "alice", "tok-123").unwrap();
    let creds = db.get("conancenter").unwrap().unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.token, "tok-123");
}

#[test]
fn test_set_does_not_disturb_other_remotes() {
    let dir = tempfile::tempdir().unwrap();
    let db = LoginDb::new(dir.path().join("login.json"));
    db.set("conancenter", "alice", "tok-123").unwrap();
    db.set("local", "bob", "tok-456").unwrap();
    assert_eq!(db.get("conancenter").unwrap().unwrap().username, "alice");
    assert_eq!(db.get("local").unwrap().unwrap().username, "bob");
}

#[test]
fn test_remove_clears_entry() {
    let dir = tempfile::tempdir().unwrap();
    let db = LoginDb::new(dir.path().join("login.json"));
    db.set("conancenter", "alice", "tok-123").unwrap();
    db.remove("conancenter").unwrap();
    assert!(db.get("conancenter").unwrap().is_none());
}

#[test]
fn test_no_leftover_tmp_file_after_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("login.json");
    let db = LoginDb::new(&path);
    db.set("conancenter", "alice", "tok-123").unwrap();
    let tmp = dir.path().join(".login.json.tmp");
    assert!(!tmp.exists());
    assert!(path.exists());
}
