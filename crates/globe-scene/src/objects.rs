//! Globe and wireframe shell transforms.

use std::f64::consts::TAU;

use globe_config::schema::{GlobeMeshConfig, WireframeConfig};

use crate::lighting::Pulse;
use crate::matrix::{self, Mat4};
use crate::pointer::PointerTransform;

/// The textured sphere. Only yaw rotates; position and scale follow the cursor.
#[derive(Debug, Clone)]
pub struct Globe {
    pub rotation_y: f64,
    pub rotation_speed: f64,
    pub position: [f64; 2],
    pub scale: f64,
}

impl Globe {
    pub fn new(config: &GlobeMeshConfig) -> Self {
        Self {
            rotation_y: 0.0,
            rotation_speed: config.rotation_speed,
            position: [0.0, 0.0],
            scale: 1.0,
        }
    }

    pub fn apply_pointer(&mut self, transform: PointerTransform) {
        self.position = transform.offset;
        self.scale = transform.zoom;
    }

    /// Step the yaw, wrapped to `[0, 2π)` so `f32` precision holds over long uptimes.
    pub fn advance(&mut self) {
        self.rotation_y = (self.rotation_y + self.rotation_speed).rem_euclid(TAU);
    }

    /// `translate × rotate_y × scale`.
    pub fn model_matrix(&self) -> Mat4 {
        let t = matrix::translate(self.position[0] as f32, self.position[1] as f32, 0.0);
        let r = matrix::rotate_y(self.rotation_y as f32);
        let s = matrix::scale(self.scale as f32);
        matrix::mul(&t, &matrix::mul(&r, &s))
    }
}

/// Line shell around the globe. Stays at the origin regardless of the cursor.
#[derive(Debug, Clone)]
pub struct Wireframe {
    pub visible: bool,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    pub color: [f32; 3],
    pub opacity: f64,
    pub opacity_pulse: Pulse,
}

impl Wireframe {
    pub fn new(config: &WireframeConfig, color: [f32; 3]) -> Self {
        let opacity_pulse = Pulse::from(&config.opacity);
        Self {
            visible: config.enabled,
            rotation_x: 0.0,
            rotation_y: 0.0,
            speed_x: config.rotation_speed_x,
            speed_y: config.rotation_speed_y,
            color,
            opacity: opacity_pulse.base,
            opacity_pulse,
        }
    }

    pub fn advance(&mut self) {
        self.rotation_y = (self.rotation_y + self.speed_y).rem_euclid(TAU);
        self.rotation_x = (self.rotation_x + self.speed_x).rem_euclid(TAU);
    }

    pub fn pulse(&mut self, pulse_time: f64) {
        self.opacity = self.opacity_pulse.value(pulse_time);
    }

    /// Euler XYZ: `rotate_x × rotate_y`.
    pub fn model_matrix(&self) -> Mat4 {
        matrix::mul(
            &matrix::rotate_x(self.rotation_x as f32),
            &matrix::rotate_y(self.rotation_y as f32),
        )
    }
}
