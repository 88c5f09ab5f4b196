//! Loading configuration from YAML files

use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use roomplan::Rgb;
use roomplan::config::Config;

#[test]
fn file_values_and_palette_overrides_are_applied() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        r##"
api:
  base_url: http://planner.local/api
  timeout_secs: 10
palette:
  Rug:
    icon: "R"
    color: "#B5651D"
  Default:
    icon: "?"
    color: "#000000"
"##,
    )
    .unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, "http://planner.local/api");
    assert_eq!(config.timeout(), Duration::from_secs(10));

    let palette = config.palette().unwrap();
    assert_eq!(palette.resolve(Some("Rug")).fill, Rgb::new(0xB5, 0x65, 0x1D));
    assert_eq!(palette.resolve(Some("Unknown")).icon, "?");
    assert_eq!(palette.resolve(Some("Sofa")).fill.to_string(), "#8B7355");
}

#[test]
fn partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "api:\n  base_url: http://other/api\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.api.base_url, "http://other/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert!(config.palette.is_empty());
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = Config::load_from_file(dir.path().join("absent.yaml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "api:\n  timeout_secs: 0\n").unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("api.timeout_secs must be at least 1"), "got {err}");
}
