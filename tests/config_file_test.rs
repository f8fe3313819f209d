//! Tests for loading configuration files.

use mousetoe::{AppConfig, BoardGeometry};
use std::io::Write;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "square_width = 16\nsquare_height = 8\nline_size = 2\nseed = 11\nlog_file = \"game.log\""
    )
    .expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.geometry(), BoardGeometry::new(16, 8, 2));
    assert_eq!(*config.seed(), Some(11));
    assert_eq!(config.log_file().to_str(), Some("game.log"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "theme = \"dark\"").expect("write config");

    let config = AppConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config, AppConfig::default());
}
