// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use super::*;

const YML: &str = r#"
os: [Windows, Linux, Macos, Android]
arch: [x86, x86_64, arm]
compiler:
  gcc:
    version: ["4.6", "4.7", "4.8", "4.9"]
  Visual Studio:
    runtime: [None, MD, MT, MTd, MDd]
    version: ["8", "9", "10"]
build_type: [None, Debug, Release]
"#;

fn definition() -> Arc<SettingsTree> {
    Arc::new(load_definition(YML).unwrap())
}

#[test]
fn test_set_and_get_leaf() {
    let mut settings = Settings::new(definition());
    settings.set("os", "Linux").unwrap();
    assert_eq!(settings.get("os").unwrap(), Some("Linux"));
}

#[test]
fn test_set_rejects_value_outside_universe() {
    let mut settings = Settings::new(definition());
    let err = settings.set("os", "Plan9").unwrap_err();
    assert!(matches!(err, Error::InvalidValueError { .. }));
}

#[test]
fn test_set_rejects_undeclared_name() {
    let mut settings = Settings::new(definition());
    let err = settings.set("nonexistent", "x").unwrap_err();
    assert!(matches!(err, Error::UndefinedSettingError(_)));
}

#[test]
fn test_nested_choice_requires_parent_set_first() {
    let mut settings = Settings::new(definition());
    let err = settings.set("compiler.version", "4.9").unwrap_err();
    assert!(matches!(err, Error::UndefinedSettingError(_)));

    settings.set("compiler", "gcc").unwrap();
    settings.set("compiler.version", "4.9").unwrap();
    assert_eq!(settings.get("compiler.version").unwrap(), Some("4.9"));

    // The Visual Studio branch's "runtime" name does not exist under gcc.
    let err = settings.set("compiler.runtime", "MD").unwrap_err();
    assert!(matches!(err, Error::UndefinedSettingError(_)));
}

#[test]
fn test_none_leaves_excluded_from_canonical_form() {
    let mut settings = Settings::new(definition());
    settings.set("build_type", "None").unwrap();
    settings.set("os", "Linux").unwrap();
    assert_eq!(settings.canonical_lines(), vec!["os=Linux".to_string()]);
}

#[test]
fn test_project_pulls_in_whole_subtree_for_declared_name() {
    let mut settings = Settings::new(definition());
    settings.set("os", "Linux").unwrap();
    settings.set("compiler", "gcc").unwrap();
    settings.set("compiler.version", "4.9").unwrap();

    let names = vec!["os".to_string(), "compiler".to_string()];
    let projected = settings.project(&names);
    assert_eq!(
        projected,
        vec![
            ("compiler".to_string(), "gcc".to_string()),
            ("compiler.version".to_string(), "4.9".to_string()),
            ("os".to_string(), "Linux".to_string()),
        ]
    );
}

#[test]
fn test_load_round_trips_dumps() {
    let mut settings = Settings::new(definition());
    settings.set("os", "Linux").unwrap();
    settings.set("compiler", "gcc").unwrap();
    settings.set("compiler.version", "4.9").unwrap();
    let text = settings.dumps();

    let loaded = Settings::load(definition(), &text).unwrap();
    assert_eq!(loaded.canonical_lines(), settings.canonical_lines());
}
