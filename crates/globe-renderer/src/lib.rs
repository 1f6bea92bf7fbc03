//! wgpu renderer for the globe backdrop.
//!
//! [`Backdrop`] owns every GPU resource: the surface, a depth target, and
//! one pipeline each for the textured globe, the wireframe shell and the
//! particle field. It draws whatever [`globe_scene::SceneState`] it is
//! handed and never mutates it.

pub mod backdrop;
pub mod depth;
pub mod gpu;
pub mod helpers;
pub mod mesh;
pub mod perf;
pub mod pipelines;
pub mod texture;
pub mod uniforms;

pub use backdrop::{Backdrop, FrameStatus};
pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use perf::{FrameReport, FrameTimer};
pub use texture::{decode_image, DecodedImage};
