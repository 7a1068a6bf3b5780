use people_counter::config::{Config, ConfigError, StorageConfig};
use std::path::PathBuf;
use tempfile::TempDir;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.storage.data_dir.is_none());
    assert_eq!(config.storage.namespace, "people_counter_prefs");
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("people-counter/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[storage]\ndata_dir = \"/var/lib/counter\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.storage.data_dir,
        Some(PathBuf::from("/var/lib/counter"))
    );
    assert_eq!(config.storage.namespace, "people_counter_prefs");
}

#[test]
fn test_configured_data_dir_wins() {
    let storage = StorageConfig {
        data_dir: Some(PathBuf::from("/srv/counts")),
        ..StorageConfig::default()
    };
    assert_eq!(storage.resolved_data_dir(), PathBuf::from("/srv/counts"));
}

#[test]
fn test_parse_error_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[storage\nnamespace = ").unwrap();

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_empty_namespace() {
    let config = Config {
        storage: StorageConfig {
            data_dir: None,
            namespace: "  ".to_string(),
        },
    };

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("must not be empty"));
        }
        _ => panic!("Expected ValidationError"),
    }
}

#[test]
fn test_validation_rejects_path_in_namespace() {
    for namespace in ["../escape", "nested/name", "back\\slash"] {
        let config = Config {
            storage: StorageConfig {
                data_dir: None,
                namespace: namespace.to_string(),
            },
        };
        assert!(
            matches!(config.validate(), Err(ConfigError::ValidationError { .. })),
            "namespace {namespace:?} should be rejected"
        );
    }
}

/// Files written for older builds may still carry a `[ui]` table; it no
/// longer configures anything and must not block startup.
#[test]
fn test_legacy_ui_table_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}
