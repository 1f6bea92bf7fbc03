//! Scene lights and their pulsation.

use globe_config::schema::{
    AmbientLightConfig, DirectionalLightConfig, PointLightConfig, PulseConfig, Wave,
};

/// Number of point lights the renderer has slots for.
pub const MAX_POINT_LIGHTS: usize = 2;

/// `base + amplitude * wave(frequency * t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub base: f64,
    pub amplitude: f64,
    pub frequency: f64,
    pub wave: Wave,
}

impl Pulse {
    pub fn value(&self, t: f64) -> f64 {
        let phase = self.frequency * t;
        let w = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        self.base + self.amplitude * w
    }
}

impl From<&PulseConfig> for Pulse {
    fn from(config: &PulseConfig) -> Self {
        Self {
            base: config.base,
            amplitude: config.amplitude,
            frequency: config.frequency,
            wave: config.wave,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(config: &AmbientLightConfig, color: [f32; 3]) -> Self {
        Self {
            color,
            intensity: config.intensity as f32,
        }
    }

    /// Color premultiplied by intensity.
    pub fn radiance(&self) -> [f32; 3] {
        self.color.map(|c| c * self.intensity)
    }
}

/// Light arriving from `position` toward the origin.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: [f32; 3],
}

impl DirectionalLight {
    pub fn new(config: &DirectionalLightConfig, color: [f32; 3]) -> Self {
        Self {
            color,
            intensity: config.intensity as f32,
            position: config.position,
        }
    }

    /// Unit vector from the surface toward the light.
    pub fn direction(&self) -> [f32; 3] {
        let [x, y, z] = self.position;
        let len = (x * x + y * y + z * z).sqrt();
        if len <= f32::EPSILON {
            return [0.0, 0.0, 1.0];
        }
        [x / len, y / len, z / len]
    }

    pub fn radiance(&self) -> [f32; 3] {
        self.color.map(|c| c * self.intensity)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight {
    pub color: [f32; 3],
    pub position: [f32; 3],
    /// Cutoff distance; 0 means unlimited.
    pub distance: f32,
    pub intensity: f64,
    pub pulse: Pulse,
}

impl PointLight {
    pub fn new(config: &PointLightConfig, color: [f32; 3]) -> Self {
        let pulse = Pulse::from(&config.intensity);
        Self {
            color,
            position: config.position,
            distance: config.distance as f32,
            intensity: pulse.base,
            pulse,
        }
    }

    pub fn pulse(&mut self, pulse_time: f64) {
        self.intensity = self.pulse.value(pulse_time);
    }

    pub fn radiance(&self) -> [f32; 3] {
        let i = self.intensity as f32;
        self.color.map(|c| c * i)
    }
}

/// All lights in the scene.
#[derive(Debug, Clone)]
pub struct Lighting {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub points: Vec<PointLight>,
}

impl Lighting {
    pub fn pulse(&mut self, pulse_time: f64) {
        for point in &mut self.points {
            point.pulse(pulse_time);
        }
    }
}
