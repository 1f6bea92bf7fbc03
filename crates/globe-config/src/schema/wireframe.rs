//! Wireframe shell configuration.

use serde::{Deserialize, Serialize};

use super::lighting::{PulseConfig, Wave};

/// Translucent line shell drawn just outside the globe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeConfig {
    pub enabled: bool,
    pub radius: f64,
    pub width_segments: u32,
    pub height_segments: u32,
    pub color: String,
    /// Opacity oscillation; `base` is also the starting opacity.
    pub opacity: PulseConfig,
    /// Pitch added every frame, radians.
    pub rotation_speed_x: f64,
    /// Yaw added every frame, radians.
    pub rotation_speed_y: f64,
}

impl Default for WireframeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 1.01,
            width_segments: 24,
            height_segments: 24,
            color: "#00aaff".into(),
            opacity: PulseConfig {
                base: 0.15,
                amplitude: 0.05,
                frequency: 1.5,
                wave: Wave::Sin,
            },
            rotation_speed_x: 0.001,
            rotation_speed_y: 0.003,
        }
    }
}
