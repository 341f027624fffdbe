//! Configuration system tests
//!
//! Tests for config paths, stack config persistence, and keymap loading.

use std::fs;

use panelstack::config::{BackdropPolicy, MAX_BASE_INDEX};
use panelstack::config_paths;
use panelstack::keymap::{
    default_bindings, load_keymap_file, merge_bindings, parse_keymap_yaml, Command, Condition,
    KeyCode, KeymapError, Keystroke, Modifiers,
};
use panelstack::StackConfig;
use tempfile::tempdir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_files_live_in_config_dir() {
    let Some(dir) = config_paths::config_dir() else {
        return;
    };
    assert!(dir.ends_with("panelstack"));

    let config = config_paths::config_file().unwrap();
    let keymap = config_paths::keymap_file().unwrap();
    let logs = config_paths::logs_dir().unwrap();
    assert!(config.starts_with(&dir) && config.ends_with("config.yaml"));
    assert!(keymap.starts_with(&dir) && keymap.ends_with("keymap.yaml"));
    assert!(logs.starts_with(&dir));
}

// ========================================================================
// Stack Config Tests
// ========================================================================

#[test]
fn test_stack_config_defaults() {
    let config = StackConfig::default();
    assert_eq!(config.base_index, 1024);
    assert_eq!(config.backdrop, BackdropPolicy::PerPanel);
    assert!(!config.wants_backdrop(false));
    assert!(config.wants_backdrop(true));
}

#[test]
fn test_stack_config_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.yaml");
    let config = StackConfig {
        base_index: 10,
        backdrop: BackdropPolicy::Always,
    };

    config.save_to(&path).expect("save config");
    let loaded = StackConfig::load_from(&path).expect("load config");

    assert_eq!(loaded, config);
    assert!(loaded.wants_backdrop(false));
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "backdrop: always\n").expect("write config");

    let config = StackConfig::load_from(&path).expect("load config");

    assert_eq!(config.base_index, 1024);
    assert_eq!(config.backdrop, BackdropPolicy::Always);
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");
    fs::write(&path, "backdrop: sometimes\n").expect("write config");

    let err = StackConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));

    assert!(StackConfig::load_from(&dir.path().join("missing.yaml")).is_err());
}

#[test]
fn test_base_index_upper_bound() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.yaml");

    fs::write(&path, format!("base_index: {}\n", MAX_BASE_INDEX)).expect("write config");
    let config = StackConfig::load_from(&path).expect("load config");
    assert_eq!(config.base_index, MAX_BASE_INDEX);

    fs::write(&path, "base_index: 4294967295\n").expect("write config");
    let err = StackConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("exceeds the maximum"));
}

// ========================================================================
// Keymap Tests
// ========================================================================

#[test]
fn test_load_keymap_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("keymap.yaml");
    fs::write(
        &path,
        "bindings:\n  - key: ctrl+w\n    command: HideFrontmost\n    when: [closable]\n",
    )
    .expect("write keymap");

    let bindings = load_keymap_file(&path).expect("load keymap");

    assert_eq!(bindings.len(), 1);
    assert_eq!(
        bindings[0].keystroke,
        Keystroke::new(KeyCode::Char('w'), Modifiers::CTRL)
    );
    assert_eq!(bindings[0].command, Command::HideFrontmost);
    assert_eq!(bindings[0].when, Some(vec![Condition::FrontmostClosable]));
}

#[test]
fn test_missing_keymap_file_is_io_error() {
    let dir = tempdir().expect("Failed to create temp dir");

    let result = load_keymap_file(&dir.path().join("keymap.yaml"));
    assert!(matches!(result, Err(KeymapError::IoError(_))));
}

#[test]
fn test_keymap_errors_name_the_bad_entry() {
    let bad_command = "bindings:\n  - key: escape\n    command: Explode\n";
    assert_eq!(
        parse_keymap_yaml(bad_command),
        Err(KeymapError::InvalidCommand("Explode".to_string()))
    );

    let bad_condition = "bindings:\n  - key: escape\n    command: CloseAll\n    when: [sometimes]\n";
    assert_eq!(
        parse_keymap_yaml(bad_condition),
        Err(KeymapError::InvalidCondition("sometimes".to_string()))
    );

    let bad_key = "bindings:\n  - key: ctrl+hyper\n    command: CloseAll\n";
    assert!(matches!(
        parse_keymap_yaml(bad_key),
        Err(KeymapError::InvalidKey(_))
    ));

    assert!(matches!(
        parse_keymap_yaml("bindings: 3"),
        Err(KeymapError::ParseError(_))
    ));
}

#[test]
fn test_user_keymap_adds_binding() {
    let user = parse_keymap_yaml("bindings:\n  - key: ctrl+w\n    command: HideFrontmost\n")
        .expect("parse user keymap");

    let merged = merge_bindings(default_bindings(), user);

    assert_eq!(merged.len(), default_bindings().len() + 1);
    assert_eq!(merged.last().map(|b| b.command), Some(Command::HideFrontmost));
}
