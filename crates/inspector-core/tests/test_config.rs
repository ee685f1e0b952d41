use image::imageops::FilterType;

use inspector_core::config::{CorsMode, FetchConfig, InspectorConfig, ResampleFilter};
use inspector_core::consts::{DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_SOURCE_BYTES};
use inspector_core::error::InspectorError;

#[test]
fn test_defaults() {
    let config = InspectorConfig::default();
    assert_eq!(config.fetch.timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
    assert_eq!(config.fetch.max_bytes, DEFAULT_MAX_SOURCE_BYTES);
    assert_eq!(config.fetch.cors, CorsMode::Anonymous);
    assert!(config.fetch.user_agent.starts_with("inspector/"));
    assert_eq!(config.render.filter, ResampleFilter::Triangle);
}

#[test]
fn test_toml_round_trip() {
    let mut config = InspectorConfig::default();
    config.fetch.cors = CorsMode::NoCors;
    config.render.filter = ResampleFilter::Lanczos3;

    let text = config.to_toml().unwrap();
    assert_eq!(InspectorConfig::from_toml(&text).unwrap(), config);
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config = InspectorConfig::from_toml("[fetch]\ntimeout_secs = 3\n").unwrap();
    assert_eq!(config.fetch.timeout_secs, 3);
    assert_eq!(config.fetch.max_bytes, FetchConfig::default().max_bytes);
    assert_eq!(config.render.filter, ResampleFilter::default());

    let empty = InspectorConfig::from_toml("").unwrap();
    assert_eq!(empty, InspectorConfig::default());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = InspectorConfig::from_toml("[render]\nfilter = \"Bicubic\"\n").unwrap_err();
    assert!(matches!(err, InspectorError::Config(_)));
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inspector.toml");
    std::fs::write(&path, "[render]\nfilter = \"Nearest\"\n").unwrap();

    let config = InspectorConfig::load(&path).unwrap();
    assert_eq!(config.render.filter, ResampleFilter::Nearest);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = InspectorConfig::load(std::path::Path::new("/no/such/inspector.toml")).unwrap_err();
    assert!(matches!(err, InspectorError::Io(_)));
}

#[test]
fn test_filter_mapping() {
    assert_eq!(ResampleFilter::Nearest.filter_type(), FilterType::Nearest);
    assert_eq!(ResampleFilter::CatmullRom.filter_type(), FilterType::CatmullRom);
}

#[test]
fn test_display_names() {
    assert_eq!(format!("{}", ResampleFilter::CatmullRom), "Catmull-Rom");
    assert_eq!(format!("{}", CorsMode::NoCors), "No CORS");
    assert_eq!(format!("{}", CorsMode::default()), "Anonymous");
}
