//! Render pipelines, drawn in order: globe, wireframe, particles.

mod globe;
mod particles;
mod wireframe;

pub use globe::GlobePipeline;
pub use particles::ParticlePipeline;
pub use wireframe::WireframePipeline;

/// Source-over for premultiplied colors.
pub const WIREFRAME_BLEND: wgpu::BlendState = wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING;

/// Pure additive: overlapping particles brighten.
pub const ADDITIVE_BLEND: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

/// A uniform-buffer layout entry sized for `T`.
fn uniform_entry<T>(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64),
        },
        count: None,
    }
}

/// A `UNIFORM | COPY_DST` buffer for `T` plus its bind group at binding 0.
fn uniform_binding<T>(
    device: &wgpu::Device,
    label: &str,
) -> (wgpu::Buffer, wgpu::BindGroupLayout, wgpu::BindGroup) {
    let buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<T>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[uniform_entry::<T>(0)],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout: &layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    });
    (buffer, layout, bind_group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_blend_adds_both_channels() {
        assert_eq!(ADDITIVE_BLEND.color.dst_factor, wgpu::BlendFactor::One);
        assert_eq!(ADDITIVE_BLEND.alpha.src_factor, wgpu::BlendFactor::One);
        assert_eq!(ADDITIVE_BLEND.color.operation, wgpu::BlendOperation::Add);
    }

    #[test]
    fn wireframe_blend_is_premultiplied_over() {
        assert_eq!(WIREFRAME_BLEND.color.src_factor, wgpu::BlendFactor::One);
        assert_eq!(
            WIREFRAME_BLEND.color.dst_factor,
            wgpu::BlendFactor::OneMinusSrcAlpha
        );
    }

    #[test]
    fn uniform_entry_has_exact_min_size() {
        let entry = uniform_entry::<crate::uniforms::WireframeUniforms>(0);
        match entry.ty {
            wgpu::BindingType::Buffer {
                min_binding_size, ..
            } => assert_eq!(min_binding_size.map(|n| n.get()), Some(80)),
            _ => panic!("expected a buffer binding"),
        }
    }
}
