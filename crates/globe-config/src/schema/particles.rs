//! Energy particle field configuration.

use serde::{Deserialize, Serialize};

/// Point cloud orbiting the globe.
///
/// Colors are linear RGB triples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub enabled: bool,
    /// Fixed for the lifetime of the scene (valid range: 1-10000).
    pub count: u32,
    /// Inner radius of the spawn shell.
    pub spawn_radius: f64,
    /// Spawn shell thickness; radii are drawn from `[spawn_radius, spawn_radius + spawn_spread)`.
    pub spawn_spread: f64,
    pub point_size: f64,
    pub opacity: f64,
    pub bright_color: [f32; 3],
    pub dim_color: [f32; 3],
    /// Probability that a particle uses `bright_color`.
    pub bright_probability: f64,
    /// Azimuth added every frame, radians.
    pub orbit_speed: f64,
    /// Orbit radius around which particles breathe.
    pub breathing_radius: f64,
    pub breathing_amplitude: f64,
    /// Breathing angular rate, radians per second.
    pub breathing_rate: f64,
    /// Phase offset between consecutive particles, radians.
    pub phase_step: f64,
    /// Layout seed. `None` draws a fresh layout every run.
    pub seed: Option<u64>,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            spawn_radius: 1.1,
            spawn_spread: 0.2,
            point_size: 0.015,
            opacity: 0.4,
            bright_color: [0.0, 0.8, 1.0],
            dim_color: [0.0, 0.5, 0.8],
            bright_probability: 0.2,
            orbit_speed: 0.005,
            breathing_radius: 1.1,
            breathing_amplitude: 0.05,
            breathing_rate: 0.8,
            phase_step: 0.1,
            seed: None,
        }
    }
}
