use glam::Vec3;

/// Axis-aligned bounding box.
///
/// Hosts use the bounds of the frustum volume to size culling volumes or
/// to clamp ray-marching step counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Smallest box containing every point.
    ///
    /// An empty slice yields an inverted box (min = +inf, max = -inf) that
    /// contains nothing.
    pub fn from_points(points: &[Vec3]) -> Self {
        points.iter().fold(
            AABB { min: Vec3::INFINITY, max: Vec3::NEG_INFINITY },
            |acc, &p| AABB { min: acc.min.min(p), max: acc.max.max(p) },
        )
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Test if a point lies inside or on the boundary
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

#[cfg(test)]
#[path = "bounds_tests.rs"]
mod tests;
