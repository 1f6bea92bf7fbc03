//! Scene model for the animated globe backdrop.
//!
//! Everything here is plain math on owned data: the camera, the globe and
//! its wireframe shell, the particle field, the lights and the cursor
//! mapping. The renderer reads a [`SceneState`] and never mutates it.

pub mod camera;
pub mod clock;
pub mod lighting;
pub mod matrix;
pub mod objects;
pub mod particles;
pub mod pointer;
pub mod state;

pub use camera::PerspectiveCamera;
pub use clock::FrameClock;
pub use lighting::{AmbientLight, DirectionalLight, Lighting, PointLight, Pulse, MAX_POINT_LIGHTS};
pub use matrix::Mat4;
pub use objects::{Globe, Wireframe};
pub use particles::{ParticleField, MAX_PARTICLES};
pub use pointer::{PointerParams, PointerTransform};
pub use state::{GlobeMaterial, SceneState};
