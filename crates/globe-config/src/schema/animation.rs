//! Animation clock configuration.

use serde::{Deserialize, Serialize};

/// Where frame time comes from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum TimeSource {
    /// Seconds since the scene was bootstrapped. Reproducible across runs.
    #[default]
    Elapsed,
    /// Seconds since the Unix epoch.
    WallClock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub time_source: TimeSource,
    /// Pulse time per second for lights and wireframe opacity, radians.
    pub pulse_rate: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            time_source: TimeSource::Elapsed,
            pulse_rate: 2.0,
        }
    }
}
