//! UV sphere generation.

use std::collections::HashSet;
use std::f32::consts::{PI, TAU};

use super::types::{SphereMesh, SphereVertex};

/// Upper bound on either tessellation axis.
pub const MAX_SEGMENTS: u32 = 512;

/// Generate an indexed UV sphere centered at the origin.
///
/// The north pole is +Y. Longitude `u` runs from -X through +Z, so an
/// equirectangular texture wraps with its seam at -X. Each pole row
/// contributes a single triangle per segment instead of a degenerate quad.
/// Segment counts are clamped to `3..=MAX_SEGMENTS` and `2..=MAX_SEGMENTS`.
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let w = width_segments.clamp(3, MAX_SEGMENTS);
    let h = height_segments.clamp(2, MAX_SEGMENTS);

    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_lon, cos_lon) = (u * TAU).sin_cos();
            let (sin_lat, cos_lat) = (v * PI).sin_cos();
            let normal = [-cos_lon * sin_lat, cos_lat, sin_lon * sin_lat];
            vertices.push(SphereVertex {
                position: normal.map(|c| c * radius),
                normal,
                uv: [u, v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::with_capacity((w * h * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    SphereMesh { vertices, indices }
}

/// Unique triangle edges of a triangle list, as a line list.
pub fn edge_indices(triangles: &[u32]) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(triangles.len());
    let mut lines = Vec::with_capacity(triangles.len() * 2);

    for tri in triangles.chunks_exact(3) {
        for (p, q) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            if seen.insert((p.min(q), p.max(q))) {
                lines.push(p);
                lines.push(q);
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_grid_size() {
        let mesh = generate_sphere(1.0, 64, 64);
        assert_eq!(mesh.vertices.len(), 65 * 65);
    }

    #[test]
    fn pole_rows_drop_one_triangle_per_segment() {
        let mesh = generate_sphere(1.0, 24, 24);
        // 24 × 24 quads, minus one triangle per segment on each pole row.
        let triangles = 24 * 24 * 2 - 2 * 24;
        assert_eq!(mesh.indices.len(), triangles * 3);
    }

    #[test]
    fn all_vertices_lie_on_radius() {
        let mesh = generate_sphere(1.01, 24, 24);
        for v in &mesh.vertices {
            let [x, y, z] = v.position;
            assert!(((x * x + y * y + z * z).sqrt() - 1.01).abs() < 1e-5);
        }
    }

    #[test]
    fn first_row_is_north_pole() {
        let mesh = generate_sphere(1.0, 8, 4);
        assert!((mesh.vertices[0].position[1] - 1.0).abs() < 1e-6);
        let last = mesh.vertices.last().unwrap();
        assert!((last.position[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn equator_uv_seam_faces_negative_x() {
        let mesh = generate_sphere(1.0, 8, 4);
        let equator_start = &mesh.vertices[2 * 9];
        assert_eq!(equator_start.uv, [0.0, 0.5]);
        assert!((equator_start.position[0] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn indices_are_in_bounds() {
        let mesh = generate_sphere(1.0, 16, 12);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn segment_counts_are_clamped() {
        let mesh = generate_sphere(1.0, 0, 0);
        assert_eq!(mesh.vertices.len(), 4 * 3);
    }

    #[test]
    fn edge_indices_dedups_shared_edges() {
        // Two triangles sharing edge 1-2.
        let lines = edge_indices(&[0, 1, 2, 2, 1, 3]);
        assert_eq!(lines.len(), 5 * 2);
    }

    #[test]
    fn wireframe_edge_count_for_sphere() {
        let mesh = generate_sphere(1.0, 24, 24);
        let lines = edge_indices(&mesh.indices);
        assert_eq!(lines.len() % 2, 0);
        let tri_count = mesh.indices.len() / 3;
        assert!(lines.len() / 2 < tri_count * 3);
        assert!(lines.len() / 2 > tri_count);
    }

    #[test]
    fn huge_segment_counts_are_capped() {
        let mesh = generate_sphere(1.0, 70_000, 70_000);
        let side = (MAX_SEGMENTS + 1) as usize;
        assert_eq!(mesh.vertices.len(), side * side);
        let max = *mesh.indices.iter().max().unwrap() as usize;
        assert!(max < mesh.vertices.len());
    }
}
