//! Angle arithmetic and Euler conversions for the Pivot camera rig.
//!
//! All angles at this layer are in degrees. The rig convention is
//! +Y up, +Z forward, +X right; see [`euler`] for the rotation order.

mod angle;
pub mod euler;

pub use angle::{clamp01, delta_angle, lerp, lerp_angle, repeat, wrap_signed};
pub use euler::{
    FORWARD, RIGHT, UP, euler_degrees, from_euler_degrees, pitch_rotation, yaw_pitch_rotation,
    yaw_rotation,
};
