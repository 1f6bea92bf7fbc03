//! Pointer, animation, window and performance validation.

use crate::schema::GlobeConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_pointer(errors: &mut Vec<String>, config: &GlobeConfig) {
    let pointer = &config.pointer;
    validate_range_f64(errors, "pointer.offset_scale", pointer.offset_scale, 0.0, 2.0);
    validate_range_f64(errors, "pointer.max_offset", pointer.max_offset, 0.0, 2.0);
    validate_range_f64(errors, "pointer.zoom_range", pointer.zoom_range, 0.0, 2.0);
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &GlobeConfig) {
    validate_range_f64(
        errors,
        "animation.pulse_rate",
        config.animation.pulse_rate,
        0.0,
        100.0,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GlobeConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 7680);
    validate_range(errors, "window.height", config.window.height, 200, 4320);
}

pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &GlobeConfig) {
    validate_range_f64(
        errors,
        "performance.fps_log_interval",
        config.performance.fps_log_interval,
        0.0,
        3600.0,
    );
}
