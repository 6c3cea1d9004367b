/// Frustum corners: the eight world-space points bounding a camera's view.
///
/// For a plane at distance `d` along the view direction:
/// - center = position + forward * d
/// - half height = d * tan(fov / 2)
/// - half width = half height * aspect
/// - corners = center ± up * half height ± right * half width
///
/// The near plane uses the effective near distance, the far plane the
/// effective far distance (clip + offset).

use glam::Vec3;
use crate::error::{Error, Result};
use super::bounds::AABB;
use super::camera_frame::CameraFrame;

/// Named frustum corner.
///
/// Declaration order is the canonical corner order used everywhere
/// (`Corner::ALL`, `FrustumCorners::to_array()`, the vertex slot table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NearTopLeft,
    NearTopRight,
    NearBottomRight,
    NearBottomLeft,
    FarTopLeft,
    FarTopRight,
    FarBottomRight,
    FarBottomLeft,
}

impl Corner {
    /// All corners, in canonical order
    pub const ALL: [Corner; 8] = [
        Corner::NearTopLeft,
        Corner::NearTopRight,
        Corner::NearBottomRight,
        Corner::NearBottomLeft,
        Corner::FarTopLeft,
        Corner::FarTopRight,
        Corner::FarBottomRight,
        Corner::FarBottomLeft,
    ];

    /// Position of this corner in `Corner::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Corner on the far plane?
    pub fn is_far(self) -> bool {
        matches!(
            self,
            Corner::FarTopLeft | Corner::FarTopRight | Corner::FarBottomRight | Corner::FarBottomLeft
        )
    }

    /// Corner on the top edge?
    pub fn is_top(self) -> bool {
        matches!(
            self,
            Corner::NearTopLeft | Corner::NearTopRight | Corner::FarTopLeft | Corner::FarTopRight
        )
    }

    /// Corner on the right edge?
    pub fn is_right(self) -> bool {
        matches!(
            self,
            Corner::NearTopRight | Corner::NearBottomRight | Corner::FarTopRight | Corner::FarBottomRight
        )
    }

    /// Signs (right, up, forward) of this corner, each ±1.0
    pub fn signs(self) -> Vec3 {
        let sign = |positive: bool| if positive { 1.0 } else { -1.0 };
        Vec3::new(sign(self.is_right()), sign(self.is_top()), sign(self.is_far()))
    }
}

/// The eight corners of a view frustum, in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    pub near_top_left: Vec3,
    pub near_top_right: Vec3,
    pub near_bottom_right: Vec3,
    pub near_bottom_left: Vec3,
    pub far_top_left: Vec3,
    pub far_top_right: Vec3,
    pub far_bottom_right: Vec3,
    pub far_bottom_left: Vec3,
}

impl FrustumCorners {
    /// Build from points in canonical corner order
    pub fn from_array(points: [Vec3; 8]) -> Self {
        let [ntl, ntr, nbr, nbl, ftl, ftr, fbr, fbl] = points;
        Self {
            near_top_left: ntl,
            near_top_right: ntr,
            near_bottom_right: nbr,
            near_bottom_left: nbl,
            far_top_left: ftl,
            far_top_right: ftr,
            far_bottom_right: fbr,
            far_bottom_left: fbl,
        }
    }

    /// Points in canonical corner order
    pub fn to_array(&self) -> [Vec3; 8] {
        [
            self.near_top_left,
            self.near_top_right,
            self.near_bottom_right,
            self.near_bottom_left,
            self.far_top_left,
            self.far_top_right,
            self.far_bottom_right,
            self.far_bottom_left,
        ]
    }

    /// Get a corner by name
    pub fn corner(&self, corner: Corner) -> Vec3 {
        match corner {
            Corner::NearTopLeft => self.near_top_left,
            Corner::NearTopRight => self.near_top_right,
            Corner::NearBottomRight => self.near_bottom_right,
            Corner::NearBottomLeft => self.near_bottom_left,
            Corner::FarTopLeft => self.far_top_left,
            Corner::FarTopRight => self.far_top_right,
            Corner::FarBottomRight => self.far_bottom_right,
            Corner::FarBottomLeft => self.far_bottom_left,
        }
    }

    /// Center of the near plane rectangle
    pub fn near_center(&self) -> Vec3 {
        (self.near_top_left + self.near_bottom_right) * 0.5
    }

    /// Center of the far plane rectangle
    pub fn far_center(&self) -> Vec3 {
        (self.far_top_left + self.far_bottom_right) * 0.5
    }

    /// Axis-aligned bounds of the frustum volume
    pub fn bounds(&self) -> AABB {
        AABB::from_points(&self.to_array())
    }
}

/// Compute the eight frustum corners of a camera frame.
///
/// Pure and deterministic: the same frame always yields bit-identical
/// corners.
///
/// # Errors
///
/// Returns `Error::InvalidFrame` if the frame is degenerate
/// (see `CameraFrame::validate()`), or if a corner overflows `f32`
/// (very wide field of view combined with a huge far distance).
pub fn compute_corners(frame: &CameraFrame) -> Result<FrustumCorners> {
    frame.validate()?;

    let tan_half_fov = (frame.fov_y_degrees.to_radians() * 0.5).tan();

    let plane = |distance: f32| -> [Vec3; 4] {
        let center = frame.position + frame.forward * distance;
        let up = frame.up * (tan_half_fov * distance);
        let right = frame.right * (tan_half_fov * distance * frame.aspect_ratio);
        // top-left, top-right, bottom-right, bottom-left
        [center + up - right, center + up + right, center - up + right, center - up - right]
    };

    let [ntl, ntr, nbr, nbl] = plane(frame.effective_near());
    let [ftl, ftr, fbr, fbl] = plane(frame.effective_far());

    let points = [ntl, ntr, nbr, nbl, ftl, ftr, fbr, fbl];
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(Error::InvalidFrame(format!(
            "{:?} corner is not finite: {}",
            Corner::ALL[index],
            points[index]
        )));
    }

    Ok(FrustumCorners::from_array(points))
}

#[cfg(test)]
#[path = "frustum_corners_tests.rs"]
mod tests;
