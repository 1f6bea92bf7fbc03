//! Camera configuration types.

use serde::{Deserialize, Serialize};

/// Perspective camera looking at the origin from +Z.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-150).
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    /// Distance from the origin along +Z.
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 3.0,
        }
    }
}
