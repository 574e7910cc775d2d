//! Unit tests for config module

use recap::analyzer::SegmenterKind;
use recap::config::{Config, RunMode};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn shown_config_loads_back_unchanged() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = Config::default();
    config.analysis.year = 2024;
    config.analysis.segmenter = SegmenterKind::Regex;
    config.analysis.mode = RunMode::Sync;
    config.analysis.timeout_secs = 30;
    config.output.pretty = false;
    fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn file_values_parse() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[analysis]
year = 2023
segmenter = "regex"

[output]
quiet = true
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.analysis.year, 2023);
    assert_eq!(config.analysis.segmenter, SegmenterKind::Regex);
    assert_eq!(config.analysis.mode, RunMode::Worker);
    assert!(config.output.quiet);
    assert!(config.output.pretty);
}

#[test]
fn invalid_values_fail_to_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[analysis]\ntimeout_secs = 7200\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn unknown_segmenter_fails_to_parse() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[analysis]\nsegmenter = \"icu\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
