//! Cursor-reactive globe transform configuration.

use serde::{Deserialize, Serialize};

/// How cursor deviation from the viewport center moves and zooms the globe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    pub enabled: bool,
    /// Normalized deviation → scene units.
    pub offset_scale: f64,
    /// Per-axis clamp on the globe offset, scene units.
    pub max_offset: f64,
    /// Extra scale at the viewport corner (0.2 → 1.0..1.2).
    pub zoom_range: f64,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            offset_scale: 0.2,
            max_offset: 0.3,
            zoom_range: 0.2,
        }
    }
}
