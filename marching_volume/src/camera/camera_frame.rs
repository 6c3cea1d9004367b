/// CameraFrame: immutable camera snapshot for one render tick.
///
/// Holds everything needed to place the frustum in world space: position,
/// an orthonormal basis, vertical field of view, aspect ratio, and clip
/// distances with optional offsets.
///
/// Basis convention: +Z forward, +Y up, +X right (left-handed, as in
/// most game engines). `from_rotation()` derives the basis from a
/// quaternion using that convention.

use glam::{Quat, Vec3};
use crate::error::{Error, Result};

/// Per-frame camera state.
///
/// All fields are public; the host fills them from its own camera.
/// Validation happens in `validate()` (called by `compute_corners()`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera position in world space
    pub position: Vec3,
    /// Unit view direction
    pub forward: Vec3,
    /// Unit up vector
    pub up: Vec3,
    /// Unit right vector
    pub right: Vec3,
    /// Vertical field of view, in degrees. Valid range: (0, 180)
    pub fov_y_degrees: f32,
    /// Viewport width / height
    pub aspect_ratio: f32,
    /// Near clip distance
    pub near_clip: f32,
    /// Far clip distance
    pub far_clip: f32,
    /// Added to `near_clip` (e.g. to pull the volume off the near plane)
    pub near_offset: f32,
    /// Added to `far_clip`
    pub far_offset: f32,
}

impl CameraFrame {
    /// Create a frame from an explicit basis. Offsets default to zero.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        position: Vec3,
        forward: Vec3,
        up: Vec3,
        right: Vec3,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        Self {
            position,
            forward,
            up,
            right,
            fov_y_degrees,
            aspect_ratio,
            near_clip,
            far_clip,
            near_offset: 0.0,
            far_offset: 0.0,
        }
    }

    /// Create a frame from a world rotation.
    ///
    /// forward = rotation * +Z, up = rotation * +Y, right = rotation * +X.
    /// The basis is orthonormal as long as `rotation` is normalized.
    pub fn from_rotation(
        position: Vec3,
        rotation: Quat,
        fov_y_degrees: f32,
        aspect_ratio: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        Self::new(
            position,
            rotation * Vec3::Z,
            rotation * Vec3::Y,
            rotation * Vec3::X,
            fov_y_degrees,
            aspect_ratio,
            near_clip,
            far_clip,
        )
    }

    /// Return a copy with the given near/far offsets.
    pub fn with_offsets(mut self, near_offset: f32, far_offset: f32) -> Self {
        self.near_offset = near_offset;
        self.far_offset = far_offset;
        self
    }

    /// Near clip distance after applying the offset
    pub fn effective_near(&self) -> f32 {
        self.near_clip + self.near_offset
    }

    /// Far clip distance after applying the offset
    pub fn effective_far(&self) -> f32 {
        self.far_clip + self.far_offset
    }

    /// Check that the frame describes a non-degenerate frustum.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFrame` if:
    /// - any value, or an effective clip distance, is NaN or infinite
    /// - the field of view is not strictly between 0 and 180 degrees
    /// - the aspect ratio is not positive
    /// - the effective near distance is not positive
    /// - the effective near distance is not smaller than the effective far distance
    pub fn validate(&self) -> Result<()> {
        let vectors = [
            ("position", self.position),
            ("forward", self.forward),
            ("up", self.up),
            ("right", self.right),
        ];
        for (name, v) in vectors {
            if !v.is_finite() {
                return Err(Error::InvalidFrame(format!("{} is not finite: {}", name, v)));
            }
        }

        let scalars = [
            ("field of view", self.fov_y_degrees),
            ("aspect ratio", self.aspect_ratio),
            ("near clip", self.near_clip),
            ("far clip", self.far_clip),
            ("near offset", self.near_offset),
            ("far offset", self.far_offset),
        ];
        for (name, s) in scalars {
            if !s.is_finite() {
                return Err(Error::InvalidFrame(format!("{} is not finite: {}", name, s)));
            }
        }

        if self.fov_y_degrees <= 0.0 || self.fov_y_degrees >= 180.0 {
            return Err(Error::InvalidFrame(format!(
                "field of view must be in (0, 180) degrees, got {}",
                self.fov_y_degrees
            )));
        }

        if self.aspect_ratio <= 0.0 {
            return Err(Error::InvalidFrame(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }

        let near = self.effective_near();
        let far = self.effective_far();

        // clip + offset can overflow even when both are finite
        for (name, d) in [("effective near distance", near), ("effective far distance", far)] {
            if !d.is_finite() {
                return Err(Error::InvalidFrame(format!("{} is not finite: {}", name, d)));
            }
        }

        if near <= 0.0 {
            return Err(Error::InvalidFrame(format!(
                "effective near distance must be positive, got {}",
                near
            )));
        }

        if near >= far {
            return Err(Error::InvalidFrame(format!(
                "effective near distance {} must be smaller than effective far distance {}",
                near, far
            )));
        }

        Ok(())
    }
}

/// Aspect ratio of a pixel rectangle (width / height).
///
/// A zero height yields a non-finite ratio, which `CameraFrame::validate()`
/// rejects.
pub fn aspect_from_pixels(width: f32, height: f32) -> f32 {
    width / height
}

#[cfg(test)]
#[path = "camera_frame_tests.rs"]
mod tests;
