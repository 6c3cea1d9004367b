//! FrustumVolume: keeps a cube mesh wrapped around a camera's frustum.
//!
//! The host owns one `FrustumVolume` per ray-marched camera and calls
//! `update()` once per render tick with the current `CameraFrame`. The
//! returned vertex buffer is then uploaded into the host's mesh and drawn
//! with the ray-marching material.
//!
//! # Example
//!
//! ```no_run
//! use marching_volume::glam::{Quat, Vec3};
//! use marching_volume::marching::{FrustumVolume, FrustumVolumeConfig};
//! use marching_volume::marching::camera::{CameraFrame, aspect_from_pixels};
//!
//! let mut volume = FrustumVolume::new(FrustumVolumeConfig {
//!     near_clip_offset: 0.01,
//!     ..Default::default()
//! });
//!
//! let frame = CameraFrame::from_rotation(
//!     Vec3::new(0.0, 1.0, -5.0),
//!     Quat::IDENTITY,
//!     60.0,
//!     aspect_from_pixels(1920.0, 1080.0),
//!     0.3,
//!     1000.0,
//! );
//!
//! let vertices = volume.update(&frame)?;
//! // upload vertices.as_bytes() to the GPU...
//! # Ok::<(), marching_volume::marching::Error>(())
//! ```

use crate::camera::{CameraFrame, FrustumCorners, compute_corners};
use crate::error::Result;
use crate::mesh::{CubeMesh, VertexBuffer};

const SOURCE: &str = "marching::FrustumVolume";

/// Frustum volume configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumVolumeConfig {
    /// Name given to the cube mesh
    pub name: String,
    /// Added to the camera's near clip distance every update
    pub near_clip_offset: f32,
    /// Added to the camera's far clip distance every update
    pub far_clip_offset: f32,
}

impl Default for FrustumVolumeConfig {
    fn default() -> Self {
        Self {
            name: "Marching volume".to_string(),
            near_clip_offset: 0.0,
            far_clip_offset: 0.0,
        }
    }
}

/// Cube mesh kept in sync with a camera frustum.
///
/// Until the first successful `update()`, the mesh is a unit cube.
pub struct FrustumVolume {
    config: FrustumVolumeConfig,
    mesh: CubeMesh,
    last_corners: Option<FrustumCorners>,
    update_count: u64,
}

impl FrustumVolume {
    /// Create a volume with a unit cube mesh named after the config
    pub fn new(config: FrustumVolumeConfig) -> Self {
        let mesh = CubeMesh::new(config.name.clone());

        crate::volume_debug!(
            SOURCE,
            "Created '{}' (near offset {}, far offset {})",
            config.name,
            config.near_clip_offset,
            config.far_clip_offset
        );

        Self {
            config,
            mesh,
            last_corners: None,
            update_count: 0,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &FrustumVolumeConfig {
        &self.config
    }

    /// Change the clip offsets used by subsequent updates
    pub fn set_offsets(&mut self, near_clip_offset: f32, far_clip_offset: f32) {
        self.config.near_clip_offset = near_clip_offset;
        self.config.far_clip_offset = far_clip_offset;
    }

    /// The cube mesh
    pub fn mesh(&self) -> &CubeMesh {
        &self.mesh
    }

    /// Current vertex positions
    pub fn vertices(&self) -> &VertexBuffer {
        self.mesh.vertices()
    }

    /// Corners written by the last successful update
    pub fn last_corners(&self) -> Option<&FrustumCorners> {
        self.last_corners.as_ref()
    }

    /// Number of successful updates
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Wrap the mesh around the frustum of `frame`.
    ///
    /// The configured offsets replace any offsets already set on `frame`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrame` if the frame is degenerate. The mesh
    /// is left untouched, so the last valid frustum stays in place.
    pub fn update(&mut self, frame: &CameraFrame) -> Result<&VertexBuffer> {
        let frame = frame.with_offsets(self.config.near_clip_offset, self.config.far_clip_offset);

        let corners = compute_corners(&frame).map_err(|error| {
            crate::volume_warn!(SOURCE, "Skipping update of '{}': {}", self.config.name, error);
            error
        })?;

        self.mesh.vertices_mut().write_corners(&corners);
        self.last_corners = Some(corners);
        self.update_count += 1;

        crate::volume_trace!(
            SOURCE,
            "'{}' spans near {} to far {}",
            self.config.name,
            frame.effective_near(),
            frame.effective_far()
        );

        Ok(self.mesh.vertices())
    }
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;
