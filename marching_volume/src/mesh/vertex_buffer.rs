/// VertexBuffer: the 24 positions of the frustum cube.
///
/// Slot layout (three slots per corner, one per adjacent face):
///
/// | Corner            | Slots      |
/// |-------------------|------------|
/// | near-top-left     | 5, 11, 18  |
/// | near-top-right    | 4, 10, 21  |
/// | near-bottom-right | 6, 12, 20  |
/// | near-bottom-left  | 7, 15, 19  |
/// | far-top-left      | 3, 9, 17   |
/// | far-top-right     | 2, 8, 22   |
/// | far-bottom-right  | 0, 13, 23  |
/// | far-bottom-left   | 1, 14, 16  |
///
/// This matches the vertex order of the standard engine cube primitive, so
/// a buffer written here can replace that primitive's positions directly.

use glam::Vec3;
use crate::camera::{Corner, FrustumCorners};

/// Number of vertices in the cube mesh
pub const VERTEX_COUNT: usize = 24;

/// Vertex slots of each corner, indexed by `Corner::index()`
pub const CORNER_SLOTS: [[usize; 3]; 8] = [
    [5, 11, 18], // near-top-left
    [4, 10, 21], // near-top-right
    [6, 12, 20], // near-bottom-right
    [7, 15, 19], // near-bottom-left
    [3, 9, 17],  // far-top-left
    [2, 8, 22],  // far-top-right
    [0, 13, 23], // far-bottom-right
    [1, 14, 16], // far-bottom-left
];

impl Corner {
    /// Vertex slots holding this corner
    pub fn slots(self) -> [usize; 3] {
        CORNER_SLOTS[self.index()]
    }

    /// Corner owning a vertex slot, or `None` if `slot >= VERTEX_COUNT`
    pub fn from_slot(slot: usize) -> Option<Corner> {
        Corner::ALL.into_iter().find(|c| c.slots().contains(&slot))
    }
}

/// Positions of the 24 cube vertices.
///
/// Fixed size: the topology never changes, only the coordinates do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexBuffer {
    positions: [Vec3; VERTEX_COUNT],
}

impl VertexBuffer {
    /// Wrap existing positions (e.g. read back from a host mesh)
    pub fn from_positions(positions: [Vec3; VERTEX_COUNT]) -> Self {
        Self { positions }
    }

    /// All vertices at the origin
    pub fn zeroed() -> Self {
        Self { positions: [Vec3::ZERO; VERTEX_COUNT] }
    }

    /// Positions in slot order
    pub fn positions(&self) -> &[Vec3; VERTEX_COUNT] {
        &self.positions
    }

    /// Position of one slot
    pub fn get(&self, slot: usize) -> Option<Vec3> {
        self.positions.get(slot).copied()
    }

    /// Position of a corner (read from its first slot)
    pub fn corner(&self, corner: Corner) -> Vec3 {
        self.positions[corner.slots()[0]]
    }

    /// Positions as tightly packed `f32` triples, ready for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions[..])
    }

    /// Write every corner into its three slots, in place.
    ///
    /// Used when the host reuses one buffer every tick.
    pub fn write_corners(&mut self, corners: &FrustumCorners) {
        for corner in Corner::ALL {
            let position = corners.corner(corner);
            for slot in corner.slots() {
                self.positions[slot] = position;
            }
        }
    }

    /// Whether the three slots of every corner hold the same position
    pub fn is_consistent(&self) -> bool {
        CORNER_SLOTS.iter().all(|&[a, b, c]| {
            self.positions[a] == self.positions[b] && self.positions[a] == self.positions[c]
        })
    }
}

impl Default for VertexBuffer {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Write the frustum corners into a vertex buffer.
///
/// Takes the buffer by value and returns it updated; the input is not
/// shared with anything else. Every slot is covered by the slot table, so
/// the result depends only on `corners`.
pub fn apply_corners(corners: &FrustumCorners, mut buffer: VertexBuffer) -> VertexBuffer {
    buffer.write_corners(corners);
    buffer
}

#[cfg(test)]
#[path = "vertex_buffer_tests.rs"]
mod tests;
