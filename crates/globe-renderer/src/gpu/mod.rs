mod context;
mod types;

pub use context::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_texture_display() {
        let err = RendererError::TextureError("unsupported format".to_string());
        assert_eq!(err.to_string(), "texture error: unsupported format");
    }

    #[test]
    fn renderer_error_converts_into_globe_error() {
        let err: globe_common::GlobeError = RendererError::AdapterNotFound.into();
        assert!(matches!(err, globe_common::GlobeError::Renderer(_)));
    }

    #[test]
    fn physical_size_to_viewport() {
        let size = PhysicalSize {
            width: 800,
            height: 600,
        };
        assert_eq!(size.viewport(), globe_common::Viewport::new(800, 600));
    }

    #[test]
    fn prefers_premultiplied_alpha() {
        use wgpu::CompositeAlphaMode as M;
        assert_eq!(
            choose_alpha_mode(&[M::Opaque, M::PostMultiplied, M::PreMultiplied]),
            M::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&[M::Opaque, M::PostMultiplied]),
            M::PostMultiplied
        );
        assert_eq!(choose_alpha_mode(&[M::Opaque]), M::Auto);
        assert_eq!(choose_alpha_mode(&[]), M::Auto);
    }

    #[test]
    fn vsync_always_uses_fifo() {
        use wgpu::PresentMode as P;
        assert_eq!(choose_present_mode(true, &[P::Mailbox, P::Fifo]), P::Fifo);
    }

    #[test]
    fn no_vsync_prefers_mailbox_then_immediate() {
        use wgpu::PresentMode as P;
        assert_eq!(
            choose_present_mode(false, &[P::Fifo, P::Immediate, P::Mailbox]),
            P::Mailbox
        );
        assert_eq!(choose_present_mode(false, &[P::Fifo, P::Immediate]), P::Immediate);
        assert_eq!(choose_present_mode(false, &[P::Fifo]), P::Fifo);
    }

    #[test]
    fn surface_format_prefers_srgb() {
        use wgpu::TextureFormat as F;
        assert_eq!(
            choose_surface_format(&[F::Bgra8Unorm, F::Bgra8UnormSrgb]),
            F::Bgra8UnormSrgb
        );
        assert_eq!(choose_surface_format(&[F::Rgba8Unorm]), F::Rgba8Unorm);
        assert_eq!(choose_surface_format(&[]), F::Bgra8UnormSrgb);
    }
}
