//! The scene context: everything the frame loop mutates.

use globe_common::{ConfigError, CursorPosition, Viewport};
use globe_config::colors::parse_linear;
use globe_config::GlobeConfig;
use rand::Rng;
use tracing::{debug, warn};

use crate::camera::PerspectiveCamera;
use crate::lighting::{AmbientLight, DirectionalLight, Lighting, PointLight, MAX_POINT_LIGHTS};
use crate::objects::{Globe, Wireframe};
use crate::particles::ParticleField;
use crate::pointer::{PointerParams, PointerTransform};

/// Globe surface material, in linear color.
#[derive(Debug, Clone, Copy)]
pub struct GlobeMaterial {
    pub base_color: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
    /// Emissive color premultiplied by its intensity.
    pub emissive: [f32; 3],
}

/// Owned scene state, created once per window.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub camera: PerspectiveCamera,
    pub globe: Globe,
    pub material: GlobeMaterial,
    pub wireframe: Wireframe,
    pub particles: ParticleField,
    pub lighting: Lighting,
    pointer: PointerParams,
    pulse_rate: f64,
    viewport: Viewport,
    frame_count: u64,
}

impl SceneState {
    /// Build the scene from config.
    ///
    /// Fails only if a configured color cannot be parsed.
    pub fn bootstrap<R: Rng + ?Sized>(
        config: &GlobeConfig,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let globe_cfg = &config.globe;
        let emissive = parse_linear(&globe_cfg.emissive)?;
        let emissive_scale = globe_cfg.emissive_intensity as f32;
        let material = GlobeMaterial {
            base_color: parse_linear(&globe_cfg.base_color)?,
            specular: parse_linear(&globe_cfg.specular)?,
            shininess: globe_cfg.shininess as f32,
            emissive: emissive.map(|c| c * emissive_scale),
        };

        let lighting_cfg = &config.lighting;
        if lighting_cfg.points.len() > MAX_POINT_LIGHTS {
            warn!(
                configured = lighting_cfg.points.len(),
                "only the first {MAX_POINT_LIGHTS} point lights are rendered"
            );
        }
        let points = lighting_cfg
            .points
            .iter()
            .take(MAX_POINT_LIGHTS)
            .map(|p| parse_linear(&p.color).map(|color| PointLight::new(p, color)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        let lighting = Lighting {
            ambient: AmbientLight::new(
                &lighting_cfg.ambient,
                parse_linear(&lighting_cfg.ambient.color)?,
            ),
            directional: DirectionalLight::new(
                &lighting_cfg.directional,
                parse_linear(&lighting_cfg.directional.color)?,
            ),
            points,
        };

        let particles = ParticleField::generate(&config.particles, rng);
        debug!(count = particles.count(), "particle field generated");

        Ok(Self {
            camera: PerspectiveCamera::new(&config.camera, viewport),
            globe: Globe::new(globe_cfg),
            material,
            wireframe: Wireframe::new(&config.wireframe, parse_linear(&config.wireframe.color)?),
            particles,
            lighting,
            pointer: PointerParams::from(&config.pointer),
            pulse_rate: config.animation.pulse_rate,
            viewport,
            frame_count: 0,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance the scene by one frame.
    ///
    /// Steps run in a fixed order: cursor transform (skipped without a
    /// usable cursor), passive rotation, particle orbit, light pulsation,
    /// then a projection refresh if a resize made it stale.
    pub fn update_frame(&mut self, cursor: Option<CursorPosition>, t_secs: f64) {
        if self.pointer.enabled {
            if let Some(transform) =
                cursor.and_then(|c| PointerTransform::compute(c, self.viewport, &self.pointer))
            {
                self.globe.apply_pointer(transform);
            }
        }

        self.globe.advance();
        self.wireframe.advance();

        self.particles.orbit(t_secs);

        let pulse_time = self.pulse_rate * t_secs;
        self.lighting.pulse(pulse_time);
        self.wireframe.pulse(pulse_time);

        self.camera.update_projection();
        self.frame_count += 1;
    }

    /// Track a new viewport size. Zero-sized and unchanged sizes are ignored.
    ///
    /// Returns whether anything changed.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        if viewport.is_empty() || viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.camera.set_aspect(viewport.aspect());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(w: u32, h: u32) -> SceneState {
        let mut rng = StdRng::seed_from_u64(99);
        SceneState::bootstrap(&GlobeConfig::default(), Viewport::new(w, h), &mut rng).unwrap()
    }

    #[test]
    fn bootstrap_builds_default_scene() {
        let s = scene(1000, 800);
        assert_eq!(s.particles.count(), 100);
        assert_eq!(s.lighting.points.len(), 2);
        assert_eq!(s.frame_count(), 0);
        assert!((s.material.shininess - 1000.0).abs() < 1e-3);
        assert!(s.material.emissive[2] > 0.0 && s.material.emissive[2] < 0.1);
        assert_eq!(s.globe.scale, 1.0);
    }

    #[test]
    fn bootstrap_rejects_bad_color() {
        let mut config = GlobeConfig::default();
        config.lighting.ambient.color = "grey".into();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(SceneState::bootstrap(&config, Viewport::new(10, 10), &mut rng).is_err());
    }

    #[test]
    fn extra_point_lights_are_dropped() {
        let mut config = GlobeConfig::default();
        let extra = config.lighting.points[0].clone();
        config.lighting.points.push(extra);
        let mut rng = StdRng::seed_from_u64(1);
        let s = SceneState::bootstrap(&config, Viewport::new(10, 10), &mut rng).unwrap();
        assert_eq!(s.lighting.points.len(), MAX_POINT_LIGHTS);
    }

    #[test]
    fn corner_cursor_scenario() {
        let mut s = scene(1000, 800);
        s.update_frame(Some(CursorPosition::new(1000.0, 800.0)), 0.0);
        assert!((s.globe.scale - 1.2).abs() < 1e-9);
        assert!((s.globe.position[0] - 0.2).abs() < 1e-9);
        assert!((s.globe.position[1] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn center_cursor_scenario() {
        let mut s = scene(1000, 800);
        s.update_frame(Some(CursorPosition::new(500.0, 400.0)), 0.0);
        assert!((s.globe.scale - 1.0).abs() < 1e-9);
        assert_eq!(s.globe.position, [0.0, 0.0]);
    }

    #[test]
    fn missing_cursor_skips_transform_only() {
        let mut s = scene(1000, 800);
        s.update_frame(Some(CursorPosition::new(1000.0, 800.0)), 0.0);
        s.update_frame(None, 1.0);
        // Last transform is kept.
        assert!((s.globe.scale - 1.2).abs() < 1e-9);
        assert!((s.globe.rotation_y - 0.004).abs() < 1e-9);
        assert!((s.lighting.points[0].intensity - (0.3 + 0.1 * 2f64.sin())).abs() < 1e-9);
        assert_eq!(s.frame_count(), 2);
    }

    #[test]
    fn non_finite_cursor_is_ignored() {
        let mut s = scene(1000, 800);
        s.update_frame(Some(CursorPosition::new(f64::NAN, 3.0)), 0.0);
        assert_eq!(s.globe.scale, 1.0);
        assert!((s.wireframe.rotation_y - 0.003).abs() < 1e-9);
    }

    #[test]
    fn disabled_pointer_never_moves_globe() {
        let mut config = GlobeConfig::default();
        config.pointer.enabled = false;
        let mut rng = StdRng::seed_from_u64(1);
        let mut s = SceneState::bootstrap(&config, Viewport::new(100, 100), &mut rng).unwrap();
        s.update_frame(Some(CursorPosition::new(0.0, 0.0)), 0.0);
        assert_eq!(s.globe.scale, 1.0);
    }

    #[test]
    fn bands_hold_over_long_runs() {
        let mut s = scene(1920, 1080);
        for frame in 0..3_000u32 {
            let t = frame as f64 * 0.021;
            let cursor = CursorPosition::new((frame % 1921) as f64, (frame * 7 % 1081) as f64);
            s.update_frame(Some(cursor), t);
            assert!((0.2 - 1e-9..=0.4 + 1e-9).contains(&s.lighting.points[0].intensity));
            assert!((0.12 - 1e-9..=0.28 + 1e-9).contains(&s.lighting.points[1].intensity));
            assert!((0.10 - 1e-9..=0.20 + 1e-9).contains(&s.wireframe.opacity));
            assert!(s.globe.position[0].abs() <= 0.3 && s.globe.position[1].abs() <= 0.3);
        }
        assert_eq!(s.particles.count(), 100);
    }

    #[test]
    fn rotations_only_move_forward() {
        use std::f64::consts::TAU;

        let forward = |from: f64, to: f64| (to - from).rem_euclid(TAU);
        let mut s = scene(800, 600);
        let mut last = (s.globe.rotation_y, s.wireframe.rotation_x, s.wireframe.rotation_y);
        for i in 0..4000 {
            s.update_frame(None, i as f64);
            let now = (s.globe.rotation_y, s.wireframe.rotation_x, s.wireframe.rotation_y);
            assert!((forward(last.0, now.0) - 0.002).abs() < 1e-9);
            assert!((forward(last.1, now.1) - 0.001).abs() < 1e-9);
            assert!((forward(last.2, now.2) - 0.003).abs() < 1e-9);
            last = now;
        }
    }

    #[test]
    fn resize_twice_equals_resize_once() {
        let mut once = scene(1000, 800);
        let mut twice = scene(1000, 800);
        assert!(once.resize(Viewport::new(1600, 900)));
        assert!(twice.resize(Viewport::new(1600, 900)));
        assert!(!twice.resize(Viewport::new(1600, 900)));
        once.update_frame(None, 0.0);
        twice.update_frame(None, 0.0);
        assert_eq!(once.viewport(), twice.viewport());
        assert_eq!(once.camera.projection(), twice.camera.projection());
    }

    #[test]
    fn resize_marks_projection_stale_until_next_frame() {
        let mut s = scene(1000, 800);
        s.resize(Viewport::new(500, 800));
        assert!(s.camera.is_projection_stale());
        s.update_frame(None, 0.0);
        assert!(!s.camera.is_projection_stale());
        assert!((s.camera.aspect() - 0.625).abs() < 1e-6);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut s = scene(1000, 800);
        assert!(!s.resize(Viewport::new(0, 0)));
        assert_eq!(s.viewport(), Viewport::new(1000, 800));
        assert!(!s.camera.is_projection_stale());
    }

    #[test]
    fn resize_feeds_pointer_mapping() {
        let mut s = scene(1000, 800);
        s.resize(Viewport::new(2000, 1600));
        s.update_frame(Some(CursorPosition::new(1000.0, 800.0)), 0.0);
        assert!((s.globe.scale - 1.0).abs() < 1e-9);
    }
}
