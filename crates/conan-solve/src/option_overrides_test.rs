// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

fn prop(target: &str, name: &str, value: &str, requested_by: &str) -> PropagatedOption {
    PropagatedOption {
        target: target.to_string(),
        name: name.to_string(),
        value: value.to_string(),
        requested_by: requested_by.to_string(),
    }
}

#[test]
fn test_single_override_is_kept() {
    let propagated = vec![prop("child", "shared", "True", "app")];
    let combined = resolve(&propagated).unwrap();
    assert_eq!(combined.for_target(Some("child")).collect::<Vec<_>>(), vec![("shared", "True")]);
}

#[test]
fn test_matching_overrides_from_two_requesters_are_not_a_conflict() {
    let propagated = vec![
        prop("child", "shared", "True", "app/a"),
        prop("child", "shared", "True", "app/b"),
    ];
    let combined = resolve(&propagated).unwrap();
    assert_eq!(combined.for_target(Some("child")).collect::<Vec<_>>(), vec![("shared", "True")]);
}

#[test]
fn test_diverging_overrides_raise_conflict_error() {
    let propagated = vec![
        prop("child", "shared", "True", "app/a"),
        prop("child", "shared", "False", "app/b"),
    ];
    let err = resolve(&propagated).unwrap_err();
    match err {
        Error::ConflictError { reference, detail } => {
            assert_eq!(reference, "child");
            assert!(detail.contains("shared"));
        }
        other => panic!("expected ConflictError, got {other:?}"),
    }
}
