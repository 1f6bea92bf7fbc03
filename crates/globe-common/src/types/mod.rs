mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_serialization() {
        let v = Viewport::new(1920, 1080);
        let json = serde_json::to_string(&v).unwrap();
        let deserialized: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(v, deserialized);
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_3_expands() {
        let c = Color::from_hex("#0af").unwrap();
        assert_eq!(c, Color::from_rgba(0x00, 0xaa, 0xff, 255));
    }

    #[test]
    fn color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#gggggg").is_none());
    }

    #[test]
    fn color_to_hex_round_trip() {
        let c = Color::from_rgba(0x00, 0x11, 0x22, 255);
        assert_eq!(c.to_hex(), "#001122");
        assert_eq!(Color::from_hex(&c.to_hex()), Some(c));
    }

    #[test]
    fn linear_rgb_of_white_and_black() {
        let white = Color::from_rgba(255, 255, 255, 255).to_linear_rgb();
        let black = Color::from_rgba(0, 0, 0, 255).to_linear_rgb();
        for c in white {
            assert!((c - 1.0).abs() < 1e-6);
        }
        for c in black {
            assert!(c.abs() < 1e-6);
        }
    }

    #[test]
    fn linear_rgb_darkens_midtones() {
        // sRGB 0x40 ≈ 0.251 encoded → ≈ 0.0513 linear
        let c = Color::from_rgba(0x40, 0x40, 0x40, 255).to_linear_rgb();
        assert!((c[0] - 0.0513).abs() < 1e-3);
    }
}
