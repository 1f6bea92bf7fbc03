//! Per-frame uniform blocks and the pure functions that fill them.
//!
//! All structs are `#[repr(C)]` with 16-byte aligned members so they match
//! the WGSL declarations in `shaders/` byte for byte.

use globe_scene::matrix::{self, Mat4};
use globe_scene::{SceneState, MAX_POINT_LIGHTS};

/// Globe draw uniforms (bind group 0 of the globe pipeline).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobeUniforms {
    pub mvp: Mat4,
    pub model: Mat4,
    /// xyz = eye position.
    pub camera_pos: [f32; 4],
    /// rgb = material color, a = 1.
    pub base_color: [f32; 4],
    /// rgb = emissive × intensity.
    pub emissive: [f32; 4],
    /// rgb = specular color, w = shininess.
    pub specular: [f32; 4],
    /// rgb = ambient color × intensity.
    pub ambient: [f32; 4],
    /// xyz = unit vector toward the directional light.
    pub dir_light_dir: [f32; 4],
    /// rgb = directional color × intensity.
    pub dir_light_color: [f32; 4],
    /// xyz = position, w = cutoff distance (0 = unlimited).
    pub point_pos: [[f32; 4]; MAX_POINT_LIGHTS],
    /// rgb = color × current intensity.
    pub point_color: [[f32; 4]; MAX_POINT_LIGHTS],
}

/// Wireframe draw uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WireframeUniforms {
    pub mvp: Mat4,
    /// rgb = line color, a = current opacity.
    pub color: [f32; 4],
}

/// Particle draw uniforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    /// x = billboard half-extent in view units, y = opacity.
    pub params: [f32; 4],
}

fn rgb1(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

pub fn globe_uniforms(scene: &SceneState) -> GlobeUniforms {
    let model = scene.globe.model_matrix();
    let mvp = matrix::mul(&scene.camera.view_projection(), &model);
    let material = &scene.material;
    let lighting = &scene.lighting;

    let mut point_pos = [[0.0; 4]; MAX_POINT_LIGHTS];
    let mut point_color = [[0.0; 4]; MAX_POINT_LIGHTS];
    for (i, light) in lighting.points.iter().take(MAX_POINT_LIGHTS).enumerate() {
        point_pos[i] = rgb1(light.position, light.distance);
        point_color[i] = rgb1(light.radiance(), 0.0);
    }

    GlobeUniforms {
        mvp,
        model,
        camera_pos: rgb1(scene.camera.position(), 1.0),
        base_color: rgb1(material.base_color, 1.0),
        emissive: rgb1(material.emissive, 0.0),
        specular: rgb1(material.specular, material.shininess),
        ambient: rgb1(lighting.ambient.radiance(), 0.0),
        dir_light_dir: rgb1(lighting.directional.direction(), 0.0),
        dir_light_color: rgb1(lighting.directional.radiance(), 0.0),
        point_pos,
        point_color,
    }
}

pub fn wireframe_uniforms(scene: &SceneState) -> WireframeUniforms {
    let model = scene.wireframe.model_matrix();
    WireframeUniforms {
        mvp: matrix::mul(&scene.camera.view_projection(), &model),
        color: rgb1(scene.wireframe.color, scene.wireframe.opacity as f32),
    }
}

/// Points keep a constant world size: a billboard whose on-screen extent
/// shrinks with depth like a perspective-attenuated point sprite.
pub fn particle_uniforms(scene: &SceneState) -> ParticleUniforms {
    let projection = scene.camera.projection();
    // projection[5] = cot(fov / 2); dividing by it converts a screen-space
    // point size into the equivalent view-space extent.
    let focal = projection[5].max(f32::EPSILON);
    let half_extent = scene.particles.point_size / focal * 0.5;
    ParticleUniforms {
        view: scene.camera.view(),
        projection,
        params: [half_extent, scene.particles.opacity, 0.0, 0.0],
    }
}
