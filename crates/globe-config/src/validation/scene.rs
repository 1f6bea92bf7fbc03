//! Camera and scene object validation.

use crate::schema::GlobeConfig;

use super::helpers::{validate_hex, validate_range, validate_range_f64, validate_rgb};

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &GlobeConfig) {
    let camera = &config.camera;
    validate_range_f64(errors, "camera.fov_degrees", camera.fov_degrees, 10.0, 150.0);
    validate_range_f64(errors, "camera.near", camera.near, 0.001, 10.0);
    validate_range_f64(errors, "camera.distance", camera.distance, 1.5, 100.0);
    if camera.far <= camera.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            camera.far, camera.near
        ));
    }
}

pub(crate) fn validate_globe(errors: &mut Vec<String>, config: &GlobeConfig) {
    let globe = &config.globe;
    validate_range_f64(errors, "globe.radius", globe.radius, 0.1, 10.0);
    validate_range(errors, "globe.width_segments", globe.width_segments, 3, 512);
    validate_range(errors, "globe.height_segments", globe.height_segments, 2, 512);
    validate_hex(errors, "globe.base_color", &globe.base_color);
    validate_hex(errors, "globe.specular", &globe.specular);
    validate_hex(errors, "globe.emissive", &globe.emissive);
    validate_range_f64(errors, "globe.shininess", globe.shininess, 0.0, 10000.0);
    validate_range_f64(
        errors,
        "globe.emissive_intensity",
        globe.emissive_intensity,
        0.0,
        10.0,
    );
    validate_range_f64(errors, "globe.rotation_speed", globe.rotation_speed, 0.0, 1.0);
}

pub(crate) fn validate_wireframe(errors: &mut Vec<String>, config: &GlobeConfig) {
    let wire = &config.wireframe;
    validate_range_f64(errors, "wireframe.radius", wire.radius, 0.1, 10.0);
    validate_range(errors, "wireframe.width_segments", wire.width_segments, 3, 256);
    validate_range(errors, "wireframe.height_segments", wire.height_segments, 2, 256);
    validate_hex(errors, "wireframe.color", &wire.color);
    validate_range_f64(
        errors,
        "wireframe.rotation_speed_x",
        wire.rotation_speed_x,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "wireframe.rotation_speed_y",
        wire.rotation_speed_y,
        0.0,
        1.0,
    );

    // Opacity must stay inside [0, 1] for every t.
    let lo = wire.opacity.base - wire.opacity.amplitude.abs();
    let hi = wire.opacity.base + wire.opacity.amplitude.abs();
    if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) {
        errors.push(format!(
            "wireframe.opacity swings over [{lo}, {hi}], outside [0, 1]"
        ));
    }
}

pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &GlobeConfig) {
    let p = &config.particles;
    validate_range(errors, "particles.count", p.count, 1, 10_000);
    validate_range_f64(errors, "particles.spawn_radius", p.spawn_radius, 0.1, 10.0);
    validate_range_f64(errors, "particles.spawn_spread", p.spawn_spread, 0.0, 5.0);
    validate_range_f64(errors, "particles.point_size", p.point_size, 0.0001, 1.0);
    validate_range_f64(errors, "particles.opacity", p.opacity, 0.0, 1.0);
    validate_range_f64(
        errors,
        "particles.bright_probability",
        p.bright_probability,
        0.0,
        1.0,
    );
    validate_range_f64(errors, "particles.orbit_speed", p.orbit_speed, -1.0, 1.0);
    validate_range_f64(
        errors,
        "particles.breathing_radius",
        p.breathing_radius,
        0.1,
        10.0,
    );
    validate_range_f64(
        errors,
        "particles.breathing_amplitude",
        p.breathing_amplitude,
        0.0,
        1.0,
    );
    validate_rgb(errors, "particles.bright_color", p.bright_color);
    validate_rgb(errors, "particles.dim_color", p.dim_color);
}
