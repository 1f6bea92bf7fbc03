//! Color parsing and validation utilities.
//!
//! Config colors are `#RGB` or `#RRGGBB` hex strings in sRGB. Shading
//! happens in linear space, so most callers want [`parse_linear`].

mod parse;


use globe_common::types::Color;
use globe_common::ConfigError;

use parse::HEX_RE;

/// Parse a hex color string into a [`Color`].
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    if !HEX_RE.is_match(s) {
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }
    Color::from_hex(s).ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")))
}

/// Parse a hex color string straight into linear RGB.
pub fn parse_linear(s: &str) -> Result<[f32; 3], ConfigError> {
    parse_color(s).map(|c| c.to_linear_rgb())
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}
