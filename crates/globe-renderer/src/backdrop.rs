//! The GPU half of the globe backdrop.

use std::sync::Arc;

use globe_config::GlobeConfig;
use globe_scene::SceneState;
use tracing::{debug, info, warn};
use winit::window::Window;

use crate::depth::DepthTarget;
use crate::gpu::{GpuContext, PhysicalSize, RendererError};
use crate::helpers::{log_first_frame, CLEAR_COLOR};
use crate::mesh::generate_sphere;
use crate::pipelines::{GlobePipeline, ParticlePipeline, WireframePipeline};
use crate::texture::{DecodedImage, GlobeTexture, MAX_TEXTURE_DIMENSION};
use crate::uniforms::{globe_uniforms, particle_uniforms, wireframe_uniforms};

/// Outcome of one [`Backdrop::render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Presented,
    /// Nothing was drawn this frame (surface recovering, or disposed).
    Skipped,
}

/// Surface, depth target and the three scene pipelines.
pub struct Backdrop {
    gpu: GpuContext,
    depth: DepthTarget,
    globe: GlobePipeline,
    wireframe: WireframePipeline,
    particles: ParticlePipeline,
    disposed: bool,
}

impl Backdrop {
    /// Allocate every GPU resource for `scene`.
    ///
    /// The globe starts with a 1×1 white texture; call
    /// [`set_globe_texture`](Self::set_globe_texture) once an image arrives.
    pub async fn new(
        window: Arc<Window>,
        config: &GlobeConfig,
        scene: &SceneState,
    ) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.performance.vsync).await?;
        let format = gpu.format();

        let globe_mesh = generate_sphere(
            config.globe.radius as f32,
            config.globe.width_segments,
            config.globe.height_segments,
        );
        let wire_mesh = generate_sphere(
            config.wireframe.radius as f32,
            config.wireframe.width_segments,
            config.wireframe.height_segments,
        );

        let fallback =
            GlobeTexture::upload(&gpu.device, &gpu.queue, "globe fallback", &DecodedImage::white())?;

        let depth = DepthTarget::new(&gpu.device, gpu.size.width, gpu.size.height);
        let globe = GlobePipeline::new(&gpu.device, format, &globe_mesh, fallback);
        let wireframe = WireframePipeline::new(&gpu.device, format, &wire_mesh);
        let particles = ParticlePipeline::new(
            &gpu.device,
            format,
            scene.particles.positions(),
            scene.particles.colors(),
        );

        info!(
            globe_vertices = globe_mesh.vertices.len(),
            wire_vertices = wire_mesh.vertices.len(),
            particles = scene.particles.count(),
            "backdrop resources allocated"
        );

        Ok(Self {
            gpu,
            depth,
            globe,
            wireframe,
            particles,
            disposed: false,
        })
    }

    /// Largest texture edge this device accepts.
    pub fn max_texture_dimension(&self) -> u32 {
        self.gpu.max_texture_dimension().min(MAX_TEXTURE_DIMENSION)
    }

    /// Reconfigure surface and depth target. Zero and unchanged sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.disposed || width == 0 || height == 0 {
            return;
        }
        if self.gpu.size == (PhysicalSize { width, height }) {
            return;
        }
        self.gpu.resize(width, height);
        self.depth.resize(&self.gpu.device, width, height);
        debug!(width, height, "backdrop resized");
    }

    /// Replace the globe surface image.
    pub fn set_globe_texture(&mut self, image: &DecodedImage) -> Result<(), RendererError> {
        if self.disposed {
            return Ok(());
        }
        let texture = GlobeTexture::upload(&self.gpu.device, &self.gpu.queue, "globe texture", image)?;
        self.globe.set_texture(&self.gpu.device, texture);
        Ok(())
    }

    /// Upload the scene's current state and draw one frame.
    ///
    /// `Lost` / `Outdated` surfaces are reconfigured and the frame skipped;
    /// a timeout also skips. Out-of-memory is returned as an error.
    pub fn render(&mut self, scene: &mut SceneState) -> Result<FrameStatus, RendererError> {
        if self.disposed {
            return Ok(FrameStatus::Skipped);
        }

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(FrameStatus::Skipped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                debug!("surface acquire timed out, skipping frame");
                return Ok(FrameStatus::Skipped);
            }
            Err(e) => return Err(e.into()),
        };

        let queue = &self.gpu.queue;
        if scene.particles.take_dirty() {
            self.particles
                .upload_positions(queue, scene.particles.positions());
        }
        self.globe.update_uniforms(queue, &globe_uniforms(scene));
        self.wireframe
            .update_uniforms(queue, &wireframe_uniforms(scene));
        self.particles
            .update_uniforms(queue, &particle_uniforms(scene));

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("globe frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("globe pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.globe.draw(&mut pass);
            if scene.wireframe.visible {
                self.wireframe.draw(&mut pass);
            }
            if scene.particles.visible {
                self.particles.draw(&mut pass);
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());
        Ok(FrameStatus::Presented)
    }

    /// Destroy every buffer and texture. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.globe.destroy();
        self.wireframe.destroy();
        self.particles.destroy();
        self.depth.destroy();
        info!("backdrop GPU resources released");
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.dispose();
    }
}
