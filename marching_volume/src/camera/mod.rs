//! Camera module: frame snapshot, frustum corners, and bounds.
//!
//! Provides passive, per-frame values. The crate does NOT store or manage
//! cameras. The host builds a `CameraFrame` each tick from its own camera
//! and hands it in.

mod bounds;
mod camera_frame;
mod frustum_corners;

pub use bounds::AABB;
pub use camera_frame::{CameraFrame, aspect_from_pixels};
pub use frustum_corners::{Corner, FrustumCorners, compute_corners};
