// Copyright (c) The conan-rs project
// SPDX-License-Identifier: Apache-2.0

use super::*;

const CONF: &str = r#"
[storage]
path = /home/user/.conan/data

[remotes]
conancenter = https://center.conan.io
local = http://localhost:9300 false

[settings_defaults]
os = Linux
compiler = gcc
"#;

#[test]
fn test_parses_storage_path() {
    let config = ClientConfig::parse(CONF, None).unwrap();
    assert_eq!(config.storage_path, PathBuf::from("/home/user/.conan/data"));
}

#[test]
fn test_env_override_wins_over_conf_path() {
    let config = ClientConfig::parse(CONF, Some("/override/path")).unwrap();
    assert_eq!(config.storage_path, PathBuf::from("/override/path"));
}

#[test]
fn test_parses_remotes_in_order_with_verify_ssl() {
    let config = ClientConfig::parse(CONF, None).unwrap();
    assert_eq!(
        config.remotes.names().collect::<Vec<_>>(),
        vec!["conancenter", "local"]
    );
    assert!(config.remotes.get("conancenter").unwrap().verify_ssl);
    assert!(!config.remotes.get("local").unwrap().verify_ssl);
}

#[test]
fn test_parses_settings_defaults() {
    let config = ClientConfig::parse(CONF, None).unwrap();
    assert_eq!(config.settings_defaults.get("os").unwrap(), "Linux");
    assert_eq!(config.settings_defaults.get("compiler").unwrap(), "gcc");
}

#[test]
fn test_missing_storage_section_errors() {
    let err = ClientConfig::parse("[remotes]\nconancenter = https://center.conan.io\n", None).unwrap_err();
    assert!(matches!(err, Error::MissingSectionError(_)));
}

#[test]
fn test_default_settings_load_successfully() {
    let tree = default_settings();
    assert!(tree.contains_key("os"));
    assert!(tree.contains_key("compiler"));
}
