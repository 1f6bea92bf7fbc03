//! Scene lighting configuration types.

use serde::{Deserialize, Serialize};

/// Periodic function driving a pulse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Wave {
    #[default]
    Sin,
    Cos,
}

/// `base + amplitude * wave(frequency * t)` where `t` is pulse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub base: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub wave: Wave,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            base: 1.0,
            amplitude: 0.0,
            frequency: 1.0,
            wave: Wave::Sin,
        }
    }
}

/// Uniform fill light.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientLightConfig {
    pub color: String,
    pub intensity: f64,
}

impl Default for AmbientLightConfig {
    fn default() -> Self {
        Self {
            color: "#404040".into(),
            intensity: 0.4,
        }
    }
}

/// Directional light aimed at the origin from `position`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionalLightConfig {
    pub color: String,
    pub intensity: f64,
    pub position: [f32; 3],
}

impl Default for DirectionalLightConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".into(),
            intensity: 1.0,
            position: [5.0, 3.0, 5.0],
        }
    }
}

/// Colored point light with a pulsing intensity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLightConfig {
    pub color: String,
    pub position: [f32; 3],
    /// Falloff cutoff distance; 0 means unlimited.
    pub distance: f64,
    pub intensity: PulseConfig,
}

impl Default for PointLightConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".into(),
            position: [0.0, 0.0, 2.0],
            distance: 0.0,
            intensity: PulseConfig::default(),
        }
    }
}

/// All scene lights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: AmbientLightConfig,
    pub directional: DirectionalLightConfig,
    /// Exactly two point lights are rendered.
    pub points: Vec<PointLightConfig>,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: AmbientLightConfig::default(),
            directional: DirectionalLightConfig::default(),
            points: vec![
                PointLightConfig {
                    color: "#00aaff".into(),
                    position: [2.0, 2.0, 2.0],
                    distance: 15.0,
                    intensity: PulseConfig {
                        base: 0.3,
                        amplitude: 0.1,
                        frequency: 1.0,
                        wave: Wave::Sin,
                    },
                },
                PointLightConfig {
                    color: "#00ffff".into(),
                    position: [-2.0, -2.0, 2.0],
                    distance: 12.0,
                    intensity: PulseConfig {
                        base: 0.2,
                        amplitude: 0.08,
                        frequency: 1.3,
                        wave: Wave::Cos,
                    },
                },
            ],
        }
    }
}
