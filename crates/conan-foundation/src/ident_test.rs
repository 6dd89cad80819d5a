// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
#[case("Hello/0.1@user/channel", true)]
#[case("zlib/1.2.11@conan/stable", true)]
#[case("Hello/0.1@user", false)]
#[case("Hello@user/channel", false)]
#[case("/0.1@user/channel", false)]
#[case("", false)]
fn test_parse_reference(#[case] text: &str, #[case] expect_ok: bool) {
    let parsed: Result<Reference> = text.parse();
    assert_eq!(parsed.is_ok(), expect_ok, "{text:?} -> {parsed:?}");
}

#[test]
fn test_reference_round_trips_through_display() {
    let r = Reference::new("Hello", "0.1", "user", "channel").unwrap();
    assert_eq!(r.to_string(), "Hello/0.1@user/channel");
    let parsed: Reference = r.to_string().parse().unwrap();
    assert_eq!(parsed, r);
}

#[test]
fn test_package_reference_requires_valid_sha1() {
    let r = Reference::new("Hello", "0.1", "user", "channel").unwrap();
    assert!(r.with_package_id("a".repeat(40)).is_ok());
    assert!(r.with_package_id("not-hex").is_err());
    assert!(r.with_package_id("A".repeat(40)).is_err());
}
