//! Pinhole camera.

use glint_math::Vec3;
use serde::{Deserialize, Serialize};

/// A pinhole camera described by its position and a basis of unit vectors.
///
/// The basis is derived once by [`Camera::look_at`]; during a render pass
/// the camera is read-only. Animation replaces the whole camera (or the
/// whole scene) between passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Build a camera at `eye` looking toward `target`.
    ///
    /// The basis is built against the fixed world down vector (0, -1, 0).
    /// A camera looking exactly along that axis has no well-defined roll;
    /// the cross products degenerate and `normalize_or_zero` yields a
    /// deterministic (zero) basis rather than NaN.
    pub fn look_at(eye: Vec3, target: Vec3) -> Self {
        let down = Vec3::new(0.0, -1.0, 0.0);
        let forward = (target - eye).normalize_or_zero();
        let right = forward.cross(down).normalize_or_zero();
        let up = forward.cross(right).normalize_or_zero();

        Self {
            position: eye,
            forward,
            right,
            up,
        }
    }
}
