//! Sphere geometry for the globe and its wireframe shell.

mod sphere;
mod types;

pub use sphere::{edge_indices, generate_sphere, MAX_SEGMENTS};
pub use types::{SphereMesh, SphereVertex};
