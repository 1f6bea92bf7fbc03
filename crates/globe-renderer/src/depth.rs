//! Depth attachment sized to the surface.

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub struct DepthTarget {
    texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    size: (u32, u32),
}

impl DepthTarget {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (texture, view) = Self::create(device, width, height);
        Self {
            texture,
            view,
            size: (width.max(1), height.max(1)),
        }
    }

    /// Recreate at a new size. Returns false if the size is unchanged or zero.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || self.size == (width, height) {
            return false;
        }
        self.texture.destroy();
        let (texture, view) = Self::create(device, width, height);
        self.texture = texture;
        self.view = view;
        self.size = (width, height);
        true
    }

    pub fn destroy(&self) {
        self.texture.destroy();
    }

    fn create(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("globe depth"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        (texture, view)
    }
}

/// Depth state for opaque geometry.
pub fn opaque_depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Depth state for blended geometry: tested against the globe, never written.
pub fn translucent_depth_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        depth_write_enabled: false,
        depth_compare: wgpu::CompareFunction::LessEqual,
        ..opaque_depth_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translucent_state_reads_but_does_not_write() {
        let state = translucent_depth_state();
        assert!(!state.depth_write_enabled);
        assert_eq!(state.format, DEPTH_FORMAT);
        assert!(opaque_depth_state().depth_write_enabled);
    }
}
