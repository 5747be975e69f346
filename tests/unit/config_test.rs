//! Tests for configuration management

use std::fs;

use luhnkit::config::Config;
use luhnkit::core::services::{DEFAULT_MAX_COMBINATIONS, MaskDigits};
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.generate.default_month, "01");
    assert_eq!(config.generate.default_year, "2028");
    assert_eq!(config.generate.max_combinations, DEFAULT_MAX_COMBINATIONS);
    assert_eq!(config.format.mask_char, 'x');
    assert_eq!(config.format.mask_digits, MaskDigits::None);
}

#[test]
fn test_config_path_is_under_config_dir() {
    let path = Config::config_path();
    assert!(path.ends_with(".config/luhnkit/config.toml"));
}

#[test]
fn test_load_partial_file_keeps_other_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[format]\nmask_digits = 4\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.format.mask_digits, MaskDigits::Four);
    assert_eq!(config.format.mask_char, 'x');
    assert_eq!(config.generate, Config::default().generate);
}

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[generate]
default_month = "06"
default_year = "2033"
max_combinations = 5000

[format]
mask_char = "*"
mask_digits = 6
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    let generate = config.generate_options();
    assert_eq!(generate.defaults.month, "06");
    assert_eq!(generate.defaults.year, "2033");
    assert_eq!(generate.max_combinations, 5000);

    let format = config.format_options();
    assert_eq!(format.mask, MaskDigits::Six);
    assert_eq!(format.mask_char, '*');
}

#[test]
fn test_load_rejects_bad_mask_width() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[format]\nmask_digits = 3\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config"));
}

#[test]
fn test_load_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = Config::load_from(&temp.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn test_toml_round_trip() {
    let mut config = Config::default();
    config.generate.default_year = "2030".to_string();
    config.format.mask_digits = MaskDigits::Five;

    let text = config.to_toml().unwrap();
    assert!(text.contains("mask_digits = 5"));
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
