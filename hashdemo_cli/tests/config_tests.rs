//! ConfigManager behavior against an isolated config file

use hashdemo_cli::config::ConfigManager;
use std::fs;
use tempfile::TempDir;

fn create_test_config_manager(temp_dir: &TempDir) -> ConfigManager {
    ConfigManager::with_path(temp_dir.path().join("nested/config.toml"))
}

#[test]
fn test_load_without_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config_manager(&temp_dir).load().unwrap();

    assert_eq!(config.search.max_length, 6);
    assert_eq!(config.search.alphabet, "abcdefghijklmnopqrstuvwxyz0123456789");
    assert_eq!(config.search.progress_interval, 50_000);
    assert!(config.output.progress_enabled);
}

#[test]
fn test_set_creates_file_and_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    manager.set("search.max_length", "4").unwrap();

    assert!(manager.get_config_path().exists());
    assert_eq!(manager.get("search.max_length").unwrap(), "4");
    assert_eq!(manager.load().unwrap().search.max_length, 4);
}

#[test]
fn test_set_preserves_other_values() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    manager.set("search.alphabet", "abc123").unwrap();
    manager.set("output.color_enabled", "false").unwrap();
    manager.set("search.max_length", "3").unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.search.alphabet, "abc123");
    assert_eq!(config.search.max_length, 3);
    assert!(!config.output.color_enabled);
}

#[test]
fn test_partial_file_merges_with_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);
    let path = manager.get_config_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[output]\ndefault_format = \"json\"\n").unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.output.default_format, "json");
    assert!(config.output.color_enabled);
    assert_eq!(config.search.max_length, 6);
}

#[test]
fn test_invalid_values_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = create_test_config_manager(&temp_dir);

    assert!(manager.set("search.max_length", "0").is_err());
    assert!(manager.set("search.max_length", "9").is_err());
    assert!(manager.set("search.max_length", "many").is_err());
    assert!(manager.set("search.alphabet", "").is_err());
    assert!(manager.set("search.alphabet", "abca").is_err());
    assert!(manager.set("output.default_format", "csv").is_err());
    assert!(manager.set("output.progress_enabled", "yes").is_err());
    assert!(manager.set("search.unknown", "1").is_err());

    assert!(!manager.get_config_path().exists());
}

#[test]
fn test_list_includes_every_key() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    let keys: Vec<String> = manager.list().unwrap().into_iter().map(|(k, _)| k).collect();

    for key in hashdemo_cli::config::KNOWN_KEYS {
        assert!(keys.iter().any(|k| k == key), "missing {key}");
    }
}

#[test]
fn test_get_unknown_key_fails() {
    let temp_dir = TempDir::new().unwrap();
    let manager = create_test_config_manager(&temp_dir);

    assert!(manager.get("search.nothing").is_err());
}
