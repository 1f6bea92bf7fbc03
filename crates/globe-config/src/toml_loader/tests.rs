//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{GlobeConfig, TimeSource, WindowMode};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_globe_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        globe_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[globe]
texture = "/srv/earth.png"
base_color = "#ccddee"

[animation]
time_source = "wall_clock"

[window]
mode = "backdrop"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.globe.texture, "/srv/earth.png");
    assert_eq!(config.globe.base_color, "#ccddee");
    assert_eq!(config.animation.time_source, TimeSource::WallClock);
    assert_eq!(config.window.mode, WindowMode::Backdrop);
    assert_eq!(config.globe.width_segments, 64);
    assert_eq!(config.particles.count, 100);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    assert!(matches!(
        load_from_path(&path).unwrap_err(),
        globe_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn unknown_enum_value_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[window]\nmode = \"fullscreen\"\n").unwrap();
    assert!(load_from_path(&path).is_err());
}

#[test]
fn point_lights_replace_defaults_as_a_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[[lighting.points]]
color = "#ff0000"
position = [1.0, 0.0, 0.0]

[[lighting.points]]
color = "#00ff00"
intensity = { base = 0.5, wave = "cos" }
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.lighting.points.len(), 2);
    assert_eq!(config.lighting.points[0].color, "#ff0000");
    assert!((config.lighting.points[1].intensity.base - 0.5).abs() < 1e-9);
    assert!((config.lighting.points[1].intensity.frequency - 1.0).abs() < 1e-9);
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    let defaults = GlobeConfig::default();
    assert_eq!(config.particles.count, defaults.particles.count);
    assert_eq!(config.lighting.points.len(), 2);
}

#[test]
fn default_template_mentions_every_section() {
    let content = super::template::default_config_toml();
    for section in [
        "[camera]",
        "[globe]",
        "[wireframe]",
        "[particles]",
        "[lighting.ambient]",
        "[lighting.directional]",
        "[pointer]",
        "[animation]",
        "[window]",
        "[performance]",
        "[logging]",
    ] {
        assert!(content.contains(section), "template missing {section}");
    }
}

#[test]
fn default_config_path_ends_with_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("globe-backdrop/config.toml"));
    }
}
