//! Orbiting particle field.
//!
//! Positions and colors live in flat `f32` buffers, three floats per
//! particle, so the renderer can upload them without reshaping. Neither
//! buffer is ever resized after [`ParticleField::generate`].

use std::f64::consts::TAU;

use globe_config::schema::ParticlesConfig;
use rand::Rng;

/// Most particles a field will hold, whatever the config asks for.
pub const MAX_PARTICLES: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct ParticleField {
    pub visible: bool,
    pub point_size: f32,
    pub opacity: f32,
    positions: Vec<f32>,
    colors: Vec<f32>,
    orbit_speed: f64,
    breathing_radius: f64,
    breathing_amplitude: f64,
    breathing_rate: f64,
    phase_step: f64,
    dirty: bool,
}

impl ParticleField {
    /// Scatter `config.count` particles (at most [`MAX_PARTICLES`])
    /// uniformly over a spherical shell.
    pub fn generate<R: Rng + ?Sized>(config: &ParticlesConfig, rng: &mut R) -> Self {
        let count = config.count.min(MAX_PARTICLES) as usize;
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);

        for _ in 0..count {
            let radius = config.spawn_radius + rng.gen::<f64>() * config.spawn_spread;
            let theta = rng.gen::<f64>() * TAU;
            let phi = (2.0 * rng.gen::<f64>() - 1.0).acos();
            positions.extend_from_slice(&spherical_to_cartesian(radius, theta, phi));

            // `gen_bool` panics outside [0, 1]; config may hold anything.
            let bright = rng.gen::<f64>() < config.bright_probability;
            let color = if bright {
                config.bright_color
            } else {
                config.dim_color
            };
            colors.extend_from_slice(&color);
        }

        Self {
            visible: config.enabled,
            point_size: config.point_size as f32,
            opacity: config.opacity as f32,
            positions,
            colors,
            orbit_speed: config.orbit_speed,
            breathing_radius: config.breathing_radius,
            breathing_amplitude: config.breathing_amplitude,
            breathing_rate: config.breathing_rate,
            phase_step: config.phase_step,
            dirty: true,
        }
    }

    pub fn count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> [f32; 3] {
        let i = index * 3;
        [self.positions[i], self.positions[i + 1], self.positions[i + 2]]
    }

    /// Advance every particle one frame along its orbit.
    ///
    /// Keeps each particle's polar angle, bumps its azimuth by the orbit
    /// speed, and resets its radius to the breathing radius at `t_secs`.
    pub fn orbit(&mut self, t_secs: f64) {
        let breath_time = self.breathing_rate * t_secs;

        for (i, p) in self.positions.chunks_exact_mut(3).enumerate() {
            let (x, y, z) = (p[0] as f64, p[1] as f64, p[2] as f64);
            let r = (x * x + y * y + z * z).sqrt();
            let phi = if r > 0.0 {
                (z / r).clamp(-1.0, 1.0).acos()
            } else {
                0.0
            };
            let theta = y.atan2(x) + self.orbit_speed;
            let radius = self.breathing_radius
                + (breath_time + self.phase_step * i as f64).sin() * self.breathing_amplitude;

            p.copy_from_slice(&spherical_to_cartesian(radius, theta, phi));
        }

        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag, returning whether it was set.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

/// Physics convention: `theta` is the azimuth around Z, `phi` the polar angle from +Z.
fn spherical_to_cartesian(radius: f64, theta: f64, phi: f64) -> [f32; 3] {
    [
        (phi.sin() * theta.cos() * radius) as f32,
        (phi.sin() * theta.sin() * radius) as f32,
        (phi.cos() * radius) as f32,
    ]
}
