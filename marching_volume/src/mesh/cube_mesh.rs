//! Cube mesh primitive.
//!
//! 24 vertices (4 per face), 36 indices (2 triangles per face). Vertex
//! slots follow `CORNER_SLOTS`, so the same mesh serves both as a plain
//! unit cube and, once its vertices are overwritten, as the frustum volume.
//!
//! # Faces
//!
//! ```text
//! indices  0..6   far    (+Z)   slots 0, 1, 2, 3
//! indices  6..12  top    (+Y)   slots 4, 5, 8, 9
//! indices 12..18  near   (-Z)   slots 6, 7, 10, 11
//! indices 18..24  bottom (-Y)   slots 12, 13, 14, 15
//! indices 24..30  left   (-X)   slots 16, 17, 18, 19
//! indices 30..36  right  (+X)   slots 20, 21, 22, 23
//! ```
//!
//! # Winding
//!
//! Front faces are clockwise as seen from outside the volume, in the
//! left-handed view basis (+X right, +Y up, +Z forward) used by
//! `CameraFrame`. Numerically, `(b - a).cross(c - a)` points out of the
//! volume. Hosts must cull counter-clockwise triangles, or disable culling
//! so the volume still draws when the camera sits inside it.

use crate::camera::{Corner, FrustumCorners};
use super::vertex_buffer::VertexBuffer;

/// Number of triangle indices in the cube mesh
pub const INDEX_COUNT: usize = 36;

/// Triangle list of the cube mesh
pub const CUBE_INDICES: [u16; INDEX_COUNT] = [
    0, 2, 3, 0, 3, 1, // far
    8, 4, 5, 8, 5, 9, // top
    10, 6, 7, 10, 7, 11, // near
    12, 13, 14, 12, 14, 15, // bottom
    16, 17, 18, 16, 18, 19, // left
    20, 21, 22, 20, 22, 23, // right
];

/// Cube mesh whose vertex positions can be rewritten every frame.
///
/// Owns its vertex buffer. Indices are static and shared by every cube.
#[derive(Debug, Clone)]
pub struct CubeMesh {
    name: String,
    vertices: VertexBuffer,
}

impl CubeMesh {
    /// Create a unit cube (edge length 1, centered at the origin)
    pub fn new(name: impl Into<String>) -> Self {
        let mut vertices = VertexBuffer::zeroed();
        vertices.write_corners(&FrustumCorners::from_array(
            Corner::ALL.map(|corner| corner.signs() * 0.5),
        ));

        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Mesh name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current vertex positions
    pub fn vertices(&self) -> &VertexBuffer {
        &self.vertices
    }

    /// Mutable access for in-place updates
    pub fn vertices_mut(&mut self) -> &mut VertexBuffer {
        &mut self.vertices
    }

    /// Replace all vertex positions
    pub fn set_vertices(&mut self, vertices: VertexBuffer) {
        self.vertices = vertices;
    }

    /// Triangle indices
    pub fn indices(&self) -> &'static [u16] {
        &CUBE_INDICES
    }

    /// Number of vertices (always 24)
    pub fn vertex_count(&self) -> usize {
        self.vertices.positions().len()
    }

    /// Number of indices (always 36)
    pub fn index_count(&self) -> usize {
        CUBE_INDICES.len()
    }
}

#[cfg(test)]
#[path = "cube_mesh_tests.rs"]
mod tests;
