//! Configuration schema types for the globe backdrop.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the values the portfolio page ships with.

mod animation;
mod camera;
mod globe;
mod lighting;
mod particles;
mod pointer;
mod system;
mod window;
mod wireframe;

pub use animation::*;
pub use camera::*;
pub use globe::*;
pub use lighting::*;
pub use particles::*;
pub use pointer::*;
pub use system::*;
pub use window::*;
pub use wireframe::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlobeConfig {
    pub camera: CameraConfig,
    pub globe: GlobeMeshConfig,
    pub wireframe: WireframeConfig,
    pub particles: ParticlesConfig,
    pub lighting: LightingConfig,
    pub pointer: PointerConfig,
    pub animation: AnimationConfig,
    pub window: WindowConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}
