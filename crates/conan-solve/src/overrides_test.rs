// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

fn req(name: &str, reference: &str, depth: usize, requested_by: &str) -> RawRequirement {
    RawRequirement {
        name: name.to_string(),
        reference: reference.to_string(),
        depth,
        requested_by: requested_by.to_string(),
    }
}

#[test]
fn test_single_requirement_has_no_override() {
    let reqs = vec![req("zlib", "zlib/1.2.11@#abc", 1, "root")];
    let (winners, overrides) = resolve(&reqs);
    assert_eq!(winners.get("zlib").unwrap(), "zlib/1.2.11@#abc");
    assert!(overrides.is_empty());
}

#[test]
fn test_nearest_to_root_wins() {
    let reqs = vec![
        req("zlib", "zlib/1.2.8@#abc", 2, "root/a"),
        req("zlib", "zlib/1.2.11@#def", 1, "root"),
    ];
    let (winners, overrides) = resolve(&reqs);
    assert_eq!(winners.get("zlib").unwrap(), "zlib/1.2.11@#def");
    assert_eq!(overrides.len(), 1);
    assert_eq!(overrides[0].winning, "zlib/1.2.11@#def");
    assert_eq!(overrides[0].overridden, vec!["zlib/1.2.8@#abc".to_string()]);
}

#[test]
fn test_tie_breaks_on_lexical_path() {
    let reqs = vec![
        req("zlib", "zlib/1.2.8@#abc", 1, "root/b"),
        req("zlib", "zlib/1.2.11@#def", 1, "root/a"),
    ];
    let (winners, _overrides) = resolve(&reqs);
    assert_eq!(winners.get("zlib").unwrap(), "zlib/1.2.11@#def");
}

#[test]
fn test_matching_requests_produce_no_override_record() {
    let reqs = vec![
        req("zlib", "zlib/1.2.11@#def", 1, "root/a"),
        req("zlib", "zlib/1.2.11@#def", 1, "root/b"),
    ];
    let (_winners, overrides) = resolve(&reqs);
    assert!(overrides.is_empty());
}
