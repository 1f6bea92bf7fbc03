//! Core TOML config loading: read from path or platform default.

use crate::schema::GlobeConfig;
use crate::validation;
use globe_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. If validation fails, a warning is
/// logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<GlobeConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: GlobeConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/globe-backdrop/config.toml`
/// On macOS: `~/Library/Application Support/globe-backdrop/config.toml`
///
/// If the file does not exist, writes the documented default and returns defaults.
pub fn load_default() -> Result<GlobeConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        if let Err(e) = create_default_config(&path) {
            warn!("{e}");
        }
        return Ok(GlobeConfig::default());
    }

    load_from_path(&path)
}
