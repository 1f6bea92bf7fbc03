//! Cursor → globe offset and zoom.

use globe_common::{CursorPosition, Viewport};
use globe_config::schema::PointerConfig;

/// Tunables for the cursor mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerParams {
    pub enabled: bool,
    pub offset_scale: f64,
    pub max_offset: f64,
    pub zoom_range: f64,
}

impl From<&PointerConfig> for PointerParams {
    fn from(config: &PointerConfig) -> Self {
        Self {
            enabled: config.enabled,
            offset_scale: config.offset_scale,
            max_offset: config.max_offset,
            zoom_range: config.zoom_range,
        }
    }
}

impl PointerParams {
    pub fn is_finite(&self) -> bool {
        self.offset_scale.is_finite() && self.max_offset.is_finite() && self.zoom_range.is_finite()
    }
}

impl Default for PointerParams {
    fn default() -> Self {
        Self::from(&PointerConfig::default())
    }
}

/// Globe placement derived from one cursor sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerTransform {
    /// Scene-space offset, each axis clamped to `±max_offset`.
    pub offset: [f64; 2],
    /// Uniform scale in `[1, 1 + zoom_range]` for cursors inside the viewport.
    pub zoom: f64,
}

impl PointerTransform {
    /// Map a cursor position to a globe transform.
    ///
    /// Returns `None` for a degenerate viewport, a non-finite cursor or
    /// non-finite tunables.
    /// Deviation is normalized to `[-1, 1]` per axis; zoom grows with the
    /// distance from center and reaches `1 + zoom_range` at a corner.
    pub fn compute(
        cursor: CursorPosition,
        viewport: Viewport,
        params: &PointerParams,
    ) -> Option<Self> {
        if viewport.is_empty() || !cursor.is_finite() || !params.is_finite() {
            return None;
        }

        let half_w = viewport.width as f64 / 2.0;
        let half_h = viewport.height as f64 / 2.0;
        let dx = (cursor.x - half_w) / half_w;
        let dy = (cursor.y - half_h) / half_h;

        let distance = (dx * dx + dy * dy).sqrt();
        let zoom = 1.0 + (distance / std::f64::consts::SQRT_2) * params.zoom_range;

        let limit = params.max_offset.abs();
        let offset = [
            (dx * params.offset_scale).clamp(-limit, limit),
            (dy * params.offset_scale).clamp(-limit, limit),
        ];

        Some(Self { offset, zoom })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn compute(x: f64, y: f64, w: u32, h: u32) -> Option<PointerTransform> {
        PointerTransform::compute(
            CursorPosition::new(x, y),
            Viewport::new(w, h),
            &PointerParams::default(),
        )
    }

    #[test]
    fn corner_gives_max_zoom() {
        let t = compute(1000.0, 800.0, 1000, 800).unwrap();
        assert!((t.zoom - 1.2).abs() < EPS);
        assert!((t.offset[0] - 0.2).abs() < EPS);
        assert!((t.offset[1] - 0.2).abs() < EPS);
    }

    #[test]
    fn center_is_identity() {
        let t = compute(500.0, 400.0, 1000, 800).unwrap();
        assert!((t.zoom - 1.0).abs() < EPS);
        assert!(t.offset[0].abs() < EPS && t.offset[1].abs() < EPS);
    }

    #[test]
    fn top_left_is_negative_offset() {
        let t = compute(0.0, 0.0, 1000, 800).unwrap();
        assert!((t.offset[0] + 0.2).abs() < EPS);
        assert!((t.offset[1] + 0.2).abs() < EPS);
        assert!((t.zoom - 1.2).abs() < EPS);
    }

    #[test]
    fn offset_stays_within_clamp_inside_viewport() {
        let (w, h) = (1280u32, 720u32);
        for xi in 0..=32 {
            for yi in 0..=32 {
                let x = w as f64 * xi as f64 / 32.0;
                let y = h as f64 * yi as f64 / 32.0;
                let t = compute(x, y, w, h).unwrap();
                assert!(t.offset[0].abs() <= 0.3 + EPS);
                assert!(t.offset[1].abs() <= 0.3 + EPS);
                assert!(t.zoom >= 1.0 - EPS && t.zoom <= 1.2 + EPS);
            }
        }
    }

    #[test]
    fn far_outside_cursor_is_clamped() {
        let t = compute(10_000.0, -10_000.0, 1000, 800).unwrap();
        assert!((t.offset[0] - 0.3).abs() < EPS);
        assert!((t.offset[1] + 0.3).abs() < EPS);
    }

    #[test]
    fn zoom_is_monotone_in_distance() {
        let mut last = 0.0;
        for step in 0..=50 {
            let x = 500.0 + 10.0 * step as f64;
            let t = compute(x, 400.0, 1000, 800).unwrap();
            assert!(t.zoom >= last);
            last = t.zoom;
        }
    }

    #[test]
    fn degenerate_viewport_is_skipped() {
        assert!(compute(10.0, 10.0, 0, 800).is_none());
        assert!(compute(10.0, 10.0, 1000, 0).is_none());
    }

    #[test]
    fn non_finite_tunables_from_toml_are_skipped() {
        for key in ["max_offset", "offset_scale", "zoom_range"] {
            let config: PointerConfig =
                toml::from_str(&format!("{key} = nan")).unwrap();
            let params = PointerParams::from(&config);
            assert!(!params.is_finite());
            let t = PointerTransform::compute(
                CursorPosition::new(10.0, 10.0),
                Viewport::new(100, 100),
                &params,
            );
            assert!(t.is_none(), "{key}");
        }

        let config: PointerConfig = toml::from_str("max_offset = inf").unwrap();
        let t = PointerTransform::compute(
            CursorPosition::new(10.0, 10.0),
            Viewport::new(100, 100),
            &PointerParams::from(&config),
        );
        assert!(t.is_none());
    }

    #[test]
    fn non_finite_cursor_is_skipped() {
        assert!(compute(f64::NAN, 10.0, 1000, 800).is_none());
        assert!(compute(10.0, f64::INFINITY, 1000, 800).is_none());
    }
}
