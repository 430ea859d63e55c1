//! Tests for configuration system

use std::path::PathBuf;

use foodcoach::Config;

/// Write `contents` to a unique TOML file under the system temp dir
fn write_config(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("foodcoach-{}.toml", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).expect("Failed to write config file");
    path
}

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.matching.similarity_threshold, 70);
    assert_eq!(config.session.cookie_name, "foodcoach_session");
    assert!(config.recipe_search.enabled);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let path = write_config(
        r#"
[server]
host = "0.0.0.0"
port = 8080

[recipe_search]
enabled = false
timeout_secs = 3

[matching]
similarity_threshold = 85
"#,
    );

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert!(!config.recipe_search.enabled);
    assert_eq!(config.recipe_search.timeout_secs, 3);
    assert_eq!(config.matching.similarity_threshold, 85);

    // Sections absent from the file keep their defaults
    assert_eq!(config.recipe_search.max_results, 4);
    assert_eq!(config.session.ttl_secs, 3600);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let config = Config::load(Some("does/not/exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
}

#[test]
fn test_impact_settings_from_file() {
    let path = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 5000

[impact]
portion_kg = 0.5
tier_thresholds_kg = [1.0, 2.0, 3.0, 4.0]
"#,
    );

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert!(config.validate().is_ok());

    let settings = config.impact.settings();
    assert_eq!(settings.portion_kg, 0.5);
    assert_eq!(settings.tier_thresholds_kg, [1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_invalid_values_fail_validation() {
    let path = write_config(
        r#"
[server]
host = "127.0.0.1"
port = 5000

[session]
max_history = 1
"#,
    );

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config");
    std::fs::remove_file(&path).ok();

    assert!(config.validate().is_err());
}
