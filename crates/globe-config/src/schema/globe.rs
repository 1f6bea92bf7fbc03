//! Globe mesh and surface material configuration.

use serde::{Deserialize, Serialize};

/// Default equirectangular earth texture.
pub const DEFAULT_GLOBE_TEXTURE: &str =
    "https://threejs.org/examples/textures/planets/earth_atmos_2048.jpg";

/// Textured sphere settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeMeshConfig {
    pub radius: f64,
    pub width_segments: u32,
    pub height_segments: u32,
    /// `http(s)://` URL or local file path. Empty disables texturing.
    pub texture: String,
    /// Material color multiplied with the texture.
    pub base_color: String,
    pub specular: String,
    pub shininess: f64,
    pub emissive: String,
    pub emissive_intensity: f64,
    /// Yaw added every frame, radians.
    pub rotation_speed: f64,
}

impl Default for GlobeMeshConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 64,
            height_segments: 64,
            texture: DEFAULT_GLOBE_TEXTURE.into(),
            base_color: "#ffffff".into(),
            specular: "#222222".into(),
            shininess: 1000.0,
            emissive: "#001122".into(),
            emissive_intensity: 0.1,
            rotation_speed: 0.002,
        }
    }
}
