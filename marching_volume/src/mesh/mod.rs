//! Mesh module: the cube mesh whose vertices track the frustum.
//!
//! The cube is non-indexed per corner: each geometric corner appears in
//! three vertex slots (one per adjacent face). The corner → slot table is
//! fixed for the lifetime of the mesh; only positions change per frame.

mod cube_mesh;
mod vertex_buffer;

pub use cube_mesh::{CubeMesh, CUBE_INDICES, INDEX_COUNT};
pub use vertex_buffer::{VertexBuffer, apply_corners, CORNER_SLOTS, VERTEX_COUNT};
