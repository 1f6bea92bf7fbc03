//! Light validation.

use crate::schema::{GlobeConfig, PulseConfig};

use super::helpers::{validate_hex, validate_range_f64};

pub(crate) fn validate_lighting(errors: &mut Vec<String>, config: &GlobeConfig) {
    let lighting = &config.lighting;

    validate_hex(errors, "lighting.ambient.color", &lighting.ambient.color);
    validate_range_f64(
        errors,
        "lighting.ambient.intensity",
        lighting.ambient.intensity,
        0.0,
        10.0,
    );

    validate_hex(
        errors,
        "lighting.directional.color",
        &lighting.directional.color,
    );
    validate_range_f64(
        errors,
        "lighting.directional.intensity",
        lighting.directional.intensity,
        0.0,
        10.0,
    );
    if lighting.directional.position.iter().all(|c| *c == 0.0) {
        errors.push("lighting.directional.position must not be the origin".into());
    }

    if lighting.points.len() != 2 {
        errors.push(format!(
            "lighting.points has {} entries, expected 2",
            lighting.points.len()
        ));
    }

    for (i, point) in lighting.points.iter().enumerate() {
        validate_hex(errors, &format!("lighting.points[{i}].color"), &point.color);
        validate_range_f64(
            errors,
            &format!("lighting.points[{i}].distance"),
            point.distance,
            0.0,
            1000.0,
        );
        validate_pulse_non_negative(errors, &format!("lighting.points[{i}].intensity"), &point.intensity);
    }
}

/// A light pulse must never drive intensity below zero.
fn validate_pulse_non_negative(errors: &mut Vec<String>, name: &str, pulse: &PulseConfig) {
    let low = pulse.base - pulse.amplitude.abs();
    if !low.is_finite() || low < 0.0 {
        errors.push(format!("{name} dips to {low}, below 0"));
    }
    validate_range_f64(errors, &format!("{name}.frequency"), pulse.frequency, 0.0, 100.0);
}
