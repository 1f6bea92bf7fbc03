//! Perspective camera looking down -Z at the origin.

use globe_common::Viewport;
use globe_config::schema::CameraConfig;

use crate::matrix::{self, Mat4};

/// Camera whose projection is recomputed lazily after the aspect changes.
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Distance from the origin along +Z.
    pub distance: f32,
    aspect: f32,
    projection: Mat4,
    projection_stale: bool,
}

impl PerspectiveCamera {
    pub fn new(config: &CameraConfig, viewport: Viewport) -> Self {
        let mut camera = Self {
            fov_degrees: config.fov_degrees as f32,
            near: config.near as f32,
            far: config.far as f32,
            distance: config.distance as f32,
            aspect: viewport.aspect(),
            projection: matrix::IDENTITY,
            projection_stale: true,
        };
        camera.update_projection();
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Set a new aspect ratio. Marks the projection stale only on change.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 && aspect != self.aspect {
            self.aspect = aspect;
            self.projection_stale = true;
        }
    }

    pub fn is_projection_stale(&self) -> bool {
        self.projection_stale
    }

    /// Recompute the projection if stale. Returns whether it was recomputed.
    pub fn update_projection(&mut self) -> bool {
        if !self.projection_stale {
            return false;
        }
        self.projection = matrix::perspective(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
        self.projection_stale = false;
        true
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    pub fn view(&self) -> Mat4 {
        matrix::translate(0.0, 0.0, -self.distance)
    }

    pub fn view_projection(&self) -> Mat4 {
        matrix::mul(&self.projection, &self.view())
    }

    /// World-space eye position.
    pub fn position(&self) -> [f32; 3] {
        [0.0, 0.0, self.distance]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(w: u32, h: u32) -> PerspectiveCamera {
        PerspectiveCamera::new(&CameraConfig::default(), Viewport::new(w, h))
    }

    #[test]
    fn new_camera_has_fresh_projection() {
        let cam = camera(1000, 800);
        assert!(!cam.is_projection_stale());
        assert!((cam.aspect() - 1.25).abs() < 1e-6);
        assert_eq!(cam.position(), [0.0, 0.0, 3.0]);
    }

    #[test]
    fn aspect_change_marks_stale_until_updated() {
        let mut cam = camera(1000, 800);
        let before = cam.projection();
        cam.set_aspect(2.0);
        assert!(cam.is_projection_stale());
        assert!(cam.update_projection());
        assert!(!cam.is_projection_stale());
        assert_ne!(before[0], cam.projection()[0]);
    }

    #[test]
    fn same_aspect_is_not_stale() {
        let mut cam = camera(1000, 800);
        cam.set_aspect(1.25);
        assert!(!cam.is_projection_stale());
        assert!(!cam.update_projection());
    }

    #[test]
    fn invalid_aspect_is_ignored() {
        let mut cam = camera(1000, 800);
        cam.set_aspect(0.0);
        cam.set_aspect(f32::NAN);
        cam.set_aspect(f32::INFINITY);
        assert!((cam.aspect() - 1.25).abs() < 1e-6);
        assert!(!cam.is_projection_stale());
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let cam = camera(1000, 800);
        let clip = crate::matrix::transform_point(&cam.view_projection(), [0.0, 0.0, 0.0]);
        assert!((clip[0] / clip[3]).abs() < 1e-6);
        assert!((clip[1] / clip[3]).abs() < 1e-6);
        let depth = clip[2] / clip[3];
        assert!(depth > 0.0 && depth < 1.0);
    }
}
