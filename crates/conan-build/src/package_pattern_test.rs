// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn test_glob_matches_reference_display_string() {
    let pattern = PackagePattern::glob("zlib/*").unwrap();
    assert!(pattern.matches("zlib/1.2.11@conan/stable"));
    assert!(!pattern.matches("bzip2/1.0.8@conan/stable"));
}

#[test]
fn test_regex_is_case_sensitive_by_default() {
    let pattern = PackagePattern::regex("^ZLib", false).unwrap();
    assert!(!pattern.matches("zlib/1.2.11@conan/stable"));
}

#[test]
fn test_regex_ignore_case_is_opt_in() {
    let pattern = PackagePattern::regex("^ZLib", true).unwrap();
    assert!(pattern.matches("zlib/1.2.11@conan/stable"));
}

#[test]
fn test_invalid_regex_errors() {
    assert!(PackagePattern::regex("(unclosed", false).is_err());
}
