//! Globe backdrop configuration.
//!
//! TOML-based configuration with full validation. Every section has
//! defaults matching the portfolio scene, so partial configs work out of
//! the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use globe_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GlobeConfig, CONFIG_SCHEMA_VERSION};

use globe_common::ConfigError;
use std::path::Path;
use tracing::warn;

/// Load config from the platform default path.
///
/// Creates a documented default file if none exists. A file that fails to
/// parse is replaced by defaults (the file itself is left untouched).
pub fn load_config() -> Result<GlobeConfig, ConfigError> {
    match toml_loader::load_default() {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) => {
            warn!("{msg}; falling back to default config");
            Ok(GlobeConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from an explicit path.
///
/// A missing file is an error; a malformed one falls back to defaults.
pub fn load_config_from(path: &Path) -> Result<GlobeConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    match toml_loader::load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::ParseError(msg)) => {
            warn!("{msg}; falling back to default config");
            Ok(GlobeConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GlobeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
