//! Tests for loading and overriding render configuration.

use neon_stylize::{defaults_for, NeonColor, Style};
use neondither::error::ConfigError;
use neondither::models::{ExportFormat, RenderConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        r#"
settings:
  style: Smooth Diffuse
  smoothness: 8
  invert: true
  neonColor:
    h: 180
export:
  format: jpg
  optimize: false
"#,
    )
    .unwrap();

    let config = RenderConfig::load(&path).unwrap();
    assert_eq!(config.settings.style, Style::SmoothDiffuse);
    assert_eq!(config.settings.smoothness, 8.0);
    assert!(config.settings.invert);
    assert_eq!(config.settings.neon_color, NeonColor::new(180.0, 100.0, 100.0, 1.0));
    assert_eq!(config.settings.midtones, 65.0);
    assert_eq!(config.format(), ExportFormat::Jpeg);
    assert!(!config.export.optimize);
}

#[test]
fn test_missing_file() {
    let err = RenderConfig::load(std::path::Path::new("/nonexistent/config.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn test_malformed_yaml() {
    let err = RenderConfig::from_yaml("settings: [1, 2").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_defaults_round_trip_through_yaml() {
    for style in Style::ALL {
        let config = RenderConfig {
            settings: defaults_for(style),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = RenderConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.settings, defaults_for(style), "{style}");
    }
}
