//! Orientation/position sample that the rig blends between.

use glam::{Quat, Vec3};
use pivot_math::{FORWARD, clamp01, lerp, lerp_angle, yaw_pitch_rotation};
use serde::{Deserialize, Serialize};

/// Yaw and pitch in degrees plus a world position.
///
/// Yaw is unbounded; interpolation takes the short way round. Pitch is kept
/// inside the rig's vertical range by the controller, not by this type, and
/// is blended linearly so it never leaves an interval holding both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    /// Heading around the vertical axis, degrees.
    pub yaw: f32,
    /// Tilt around the lateral axis, degrees. Positive looks down.
    pub pitch: f32,
    /// World-space position.
    pub pos: Vec3,
}

impl CameraState {
    /// Create a state from its parts.
    #[must_use]
    pub fn new(yaw: f32, pitch: f32, pos: Vec3) -> Self {
        Self { yaw, pitch, pos }
    }

    /// Move toward `target`: position by `pos_alpha`, yaw along the shortest
    /// arc and pitch linearly, both by `rot_alpha`. Both factors are clamped
    /// into `[0, 1]`.
    ///
    /// For pitch spans up to 180° the linear blend is the shortest arc.
    pub fn lerp_towards(&mut self, target: &CameraState, pos_alpha: f32, rot_alpha: f32) {
        self.yaw = lerp_angle(self.yaw, target.yaw, rot_alpha);
        self.pitch = lerp(self.pitch, target.pitch, rot_alpha);
        self.pos += (target.pos - self.pos) * clamp01(pos_alpha);
    }

    /// Yaw composed with pitch.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        yaw_pitch_rotation(self.yaw, self.pitch)
    }

    /// Direction this state looks along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * FORWARD
    }
}
