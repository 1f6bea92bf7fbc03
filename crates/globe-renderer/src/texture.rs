//! Globe surface texture: decoding, upload and the untextured fallback.

use tracing::{debug, info};

use crate::gpu::RendererError;

/// Largest texture edge accepted before downscaling (wgpu's default limit).
pub const MAX_TEXTURE_DIMENSION: u32 = 8192;

/// RGBA8 pixels ready for upload, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    /// One opaque white texel. Sampling it leaves the material color unchanged.
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255, 255, 255, 255],
        }
    }
}

/// Decode PNG or JPEG bytes, downscaling so neither edge exceeds `max_dimension`.
pub fn decode_image(bytes: &[u8], max_dimension: u32) -> Result<DecodedImage, RendererError> {
    let mut img = image::load_from_memory(bytes)?;
    let max_dimension = max_dimension.max(1);

    if img.width() > max_dimension || img.height() > max_dimension {
        debug!(
            width = img.width(),
            height = img.height(),
            max_dimension,
            "downscaling globe texture"
        );
        img = img.resize(
            max_dimension,
            max_dimension,
            image::imageops::FilterType::Triangle,
        );
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(RendererError::TextureError("image has no pixels".into()));
    }

    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

/// An sRGB texture on the GPU with its default view.
pub struct GlobeTexture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub width: u32,
    pub height: u32,
}

impl GlobeTexture {
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
        image: &DecodedImage,
    ) -> Result<Self, RendererError> {
        let expected = image.width as usize * image.height as usize * 4;
        if image.rgba.len() != expected {
            return Err(RendererError::TextureError(format!(
                "{label}: expected {expected} bytes for {}x{}, got {}",
                image.width,
                image.height,
                image.rgba.len()
            )));
        }

        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        info!("{label} uploaded ({}x{})", image.width, image.height);

        Ok(Self {
            texture,
            view,
            width: image.width,
            height: image.height,
        })
    }

    pub fn destroy(&self) {
        self.texture.destroy();
    }
}

/// Sampler wrapping horizontally across the date line and clamping at the poles.
pub fn create_globe_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("globe sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn white_fallback_is_one_opaque_texel() {
        let white = DecodedImage::white();
        assert_eq!((white.width, white.height), (1, 1));
        assert_eq!(white.rgba, vec![255; 4]);
    }

    #[test]
    fn decodes_png() {
        let decoded = decode_image(&png_bytes(4, 2), MAX_TEXTURE_DIMENSION).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.rgba.len(), 4 * 2 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn downscales_oversized_images_preserving_aspect() {
        let decoded = decode_image(&png_bytes(64, 32), 16).unwrap();
        assert_eq!((decoded.width, decoded.height), (16, 8));
    }

    #[test]
    fn garbage_is_texture_error() {
        let err = decode_image(b"definitely not an image", MAX_TEXTURE_DIMENSION).unwrap_err();
        assert!(matches!(err, RendererError::TextureError(_)));
    }
}
