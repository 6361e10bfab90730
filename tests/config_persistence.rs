//! Integration tests for UI config persistence

use medley::config::UiConfig;
use tempfile::TempDir;

#[test]
fn test_saved_config_is_what_the_next_start_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("medley").join("medley.toml");

    let mut config = UiConfig::default();
    config.tick_rate_ms = 250;
    config.animate_drawer = false;
    config.save_to(path.clone()).unwrap();

    let loaded = UiConfig::load_from(path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_corrupt_config_file_is_a_loud_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("medley.toml");
    std::fs::write(&path, "tick_rate_ms = \"soon\"").unwrap();

    let err = UiConfig::load_from(path).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_out_of_range_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("medley.toml");
    std::fs::write(&path, "drawer_width = 200").unwrap();

    assert!(UiConfig::load_from(path).is_err());
}
