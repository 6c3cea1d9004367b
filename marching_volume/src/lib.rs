/*!
# Marching Volume

Frustum-bounded proxy geometry for volumetric ray-marching.

Every frame, the eight corners of a camera's view frustum are written into
the vertex buffer of a 24-vertex cube mesh. A ray-marching shader drawn
with that mesh (e.g. a Mandelbulb fractal) then covers exactly the visible
volume, from the near plane to the far plane.

## Architecture

- **CameraFrame**: Immutable per-frame camera snapshot supplied by the host
- **FrustumCorners**: The eight named corners derived from a CameraFrame
- **VertexBuffer**: 24 cube vertices, three slots per frustum corner
- **CubeMesh**: The cube primitive (vertices + triangle indices)
- **FrustumVolume**: Per-tick driver owning a CubeMesh and its clip offsets

The crate owns no camera, scene or GPU object. The host passes camera state
in and uploads the resulting vertex buffer itself.
*/

// Internal modules
mod error;
mod volume;
pub mod log;
pub mod camera;
pub mod mesh;

// Main marching namespace module
pub mod marching {
    // Error types
    pub use crate::error::{Error, Result};

    // Per-tick volume driver
    pub use crate::volume::{FrustumVolume, FrustumVolumeConfig};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Log, Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module (frame snapshot, corners, bounds)
    pub mod camera {
        pub use crate::camera::*;
    }

    // Mesh sub-module (vertex buffer, slot table, cube primitive)
    pub mod mesh {
        pub use crate::mesh::*;
    }
}

// Re-export math library at crate root
pub use glam;
