//! Shared range-validation helpers used by all domain validators.

use crate::colors::validate_color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` or not finite (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !value.is_finite() || value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a hex color.
pub(crate) fn validate_hex(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(format!("{name} = {value:?} is not a #RGB or #RRGGBB color"));
    }
}

/// Push an error if any channel of a linear RGB triple is outside `[0, 1]`.
pub(crate) fn validate_rgb(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    if value
        .iter()
        .any(|c| !c.is_finite() || !(0.0..=1.0).contains(c))
    {
        errors.push(format!("{name} = {value:?} has channels outside [0, 1]"));
    }
}
