use glam::Vec3;
use crate::camera::{CameraFrame, compute_corners};
use super::*;

fn reference_corners() -> FrustumCorners {
    let frame = CameraFrame::new(Vec3::ZERO, Vec3::Z, Vec3::Y, Vec3::X, 90.0, 1.0, 1.0, 10.0);
    compute_corners(&frame).unwrap()
}

/// Corners with exact, easily distinguishable coordinates
fn numbered_corners() -> FrustumCorners {
    FrustumCorners::from_array(std::array::from_fn(|i| Vec3::new(i as f32, 10.0 * i as f32, -(i as f32))))
}

// ============================================================================
// Slot table
// ============================================================================

#[test]
fn test_slot_table_matches_cube_layout() {
    assert_eq!(Corner::NearTopLeft.slots(), [5, 11, 18]);
    assert_eq!(Corner::NearTopRight.slots(), [4, 10, 21]);
    assert_eq!(Corner::NearBottomRight.slots(), [6, 12, 20]);
    assert_eq!(Corner::NearBottomLeft.slots(), [7, 15, 19]);
    assert_eq!(Corner::FarTopLeft.slots(), [3, 9, 17]);
    assert_eq!(Corner::FarTopRight.slots(), [2, 8, 22]);
    assert_eq!(Corner::FarBottomRight.slots(), [0, 13, 23]);
    assert_eq!(Corner::FarBottomLeft.slots(), [1, 14, 16]);
}

#[test]
fn test_slot_table_covers_every_slot_once() {
    let mut seen = [0u32; VERTEX_COUNT];
    for slots in CORNER_SLOTS {
        for slot in slots {
            seen[slot] += 1;
        }
    }
    assert!(seen.iter().all(|&count| count == 1), "slot usage: {:?}", seen);
}

#[test]
fn test_from_slot() {
    assert_eq!(Corner::from_slot(0), Some(Corner::FarBottomRight));
    assert_eq!(Corner::from_slot(18), Some(Corner::NearTopLeft));
    assert_eq!(Corner::from_slot(16), Some(Corner::FarBottomLeft));
    assert_eq!(Corner::from_slot(VERTEX_COUNT), None);

    for corner in Corner::ALL {
        for slot in corner.slots() {
            assert_eq!(Corner::from_slot(slot), Some(corner));
        }
    }
}

// ============================================================================
// apply_corners / write_corners
// ============================================================================

#[test]
fn test_apply_writes_every_slot() {
    let corners = numbered_corners();
    let buffer = apply_corners(&corners, VertexBuffer::zeroed());

    for slot in 0..VERTEX_COUNT {
        let corner = Corner::from_slot(slot).unwrap();
        assert_eq!(buffer.get(slot), Some(corners.corner(corner)));
    }
}

#[test]
fn test_apply_known_slots() {
    let corners = reference_corners();
    let buffer = apply_corners(&corners, VertexBuffer::zeroed());

    assert_eq!(buffer.get(5), Some(corners.near_top_left));
    assert_eq!(buffer.get(11), Some(corners.near_top_left));
    assert_eq!(buffer.get(18), Some(corners.near_top_left));
    assert_eq!(buffer.get(0), Some(corners.far_bottom_right));
    assert_eq!(buffer.get(23), Some(corners.far_bottom_right));
}

#[test]
fn test_apply_result_is_consistent() {
    let buffer = apply_corners(&reference_corners(), VertexBuffer::zeroed());
    assert!(buffer.is_consistent());

    for corner in Corner::ALL {
        let [a, b, c] = corner.slots();
        assert_eq!(buffer.get(a), buffer.get(b));
        assert_eq!(buffer.get(a), buffer.get(c));
    }
}

#[test]
fn test_apply_ignores_previous_contents() {
    let corners = reference_corners();
    let stale = VertexBuffer::from_positions(std::array::from_fn(|i| Vec3::splat(i as f32 * 3.0)));

    assert!(!stale.is_consistent());
    assert_eq!(apply_corners(&corners, stale), apply_corners(&corners, VertexBuffer::zeroed()));
}

#[test]
fn test_apply_is_idempotent() {
    let corners = numbered_corners();
    let once = apply_corners(&corners, VertexBuffer::zeroed());
    let twice = apply_corners(&corners, once);
    assert_eq!(once, twice);
}

#[test]
fn test_write_corners_in_place_matches_apply() {
    let corners = numbered_corners();
    let mut buffer = VertexBuffer::default();
    buffer.write_corners(&corners);
    assert_eq!(buffer, apply_corners(&corners, VertexBuffer::zeroed()));
}

// ============================================================================
// Accessors
// ============================================================================

#[test]
fn test_corner_readback() {
    let corners = numbered_corners();
    let buffer = apply_corners(&corners, VertexBuffer::zeroed());
    for corner in Corner::ALL {
        assert_eq!(buffer.corner(corner), corners.corner(corner));
    }
}

#[test]
fn test_get_out_of_range() {
    assert_eq!(VertexBuffer::zeroed().get(VERTEX_COUNT), None);
}

#[test]
fn test_as_bytes_layout() {
    let buffer = apply_corners(&numbered_corners(), VertexBuffer::zeroed());
    let bytes = buffer.as_bytes();

    assert_eq!(bytes.len(), VERTEX_COUNT * 3 * std::mem::size_of::<f32>());

    // Slot 1 belongs to far-bottom-left (corner 7): (7, 70, -7)
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(&floats[3..6], &[7.0, 70.0, -7.0]);
}
