//! Euler angle conversions in the rig convention.
//!
//! Axes: +Y up, +Z forward, +X right. An Euler triple `(x, y, z)` holds
//! pitch, yaw and roll in degrees and composes as `Ry(y) * Rx(x) * Rz(z)`:
//! roll first, then pitch, then yaw. Positive yaw turns the forward axis
//! from +Z toward +X; positive pitch tilts it downward.

use glam::{Mat3, Quat, Vec3};

use crate::angle::repeat;

/// Forward axis of an unrotated node.
pub const FORWARD: Vec3 = Vec3::Z;
/// Up axis of an unrotated node.
pub const UP: Vec3 = Vec3::Y;
/// Right axis of an unrotated node.
pub const RIGHT: Vec3 = Vec3::X;

/// Rotation about the vertical axis by `degrees`.
#[inline]
pub fn yaw_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

/// Rotation about the lateral axis by `degrees`.
#[inline]
pub fn pitch_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_x(degrees.to_radians())
}

/// Yaw composed with pitch: the orientation of a first-person head.
#[inline]
pub fn yaw_pitch_rotation(yaw: f32, pitch: f32) -> Quat {
    yaw_rotation(yaw) * pitch_rotation(pitch)
}

/// Build a rotation from `(pitch, yaw, roll)` degrees.
pub fn from_euler_degrees(euler: Vec3) -> Quat {
    Quat::from_rotation_y(euler.y.to_radians())
        * Quat::from_rotation_x(euler.x.to_radians())
        * Quat::from_rotation_z(euler.z.to_radians())
}

/// Decompose a rotation into `(pitch, yaw, roll)` degrees, each in `[0, 360)`.
///
/// Inverse of [`from_euler_degrees`] up to angle equivalence. At ±90° pitch
/// yaw and roll share an axis; roll is reported as zero there.
pub fn euler_degrees(rotation: Quat) -> Vec3 {
    let m = Mat3::from_quat(rotation.normalize());
    // Column-major: m.z_axis.y is row 1, column 2.
    let sin_pitch = (-m.z_axis.y).clamp(-1.0, 1.0);
    let pitch = sin_pitch.asin();

    let (yaw, roll) = if sin_pitch.abs() < 0.999_999 {
        (
            m.z_axis.x.atan2(m.z_axis.z),
            m.x_axis.y.atan2(m.y_axis.y),
        )
    } else {
        ((-m.x_axis.z).atan2(m.x_axis.x), 0.0)
    };

    Vec3::new(
        wrap_degrees(pitch.to_degrees()),
        wrap_degrees(yaw.to_degrees()),
        wrap_degrees(roll.to_degrees()),
    )
}

fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = repeat(angle, 360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::delta_angle;

    const EPS: f32 = 1e-3;

    fn assert_vec_near(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a:?} != {b:?}");
    }

    #[test]
    fn test_positive_yaw_turns_forward_toward_right() {
        assert_vec_near(yaw_rotation(90.0) * FORWARD, RIGHT);
        assert_vec_near(yaw_rotation(-90.0) * FORWARD, -RIGHT);
    }

    #[test]
    fn test_positive_pitch_tilts_forward_down() {
        let fwd = pitch_rotation(30.0) * FORWARD;
        assert!(fwd.y < 0.0);
        assert!((fwd.y + 0.5).abs() < EPS);
    }

    #[test]
    fn test_yaw_pitch_applies_pitch_in_local_frame() {
        let fwd = yaw_pitch_rotation(90.0, 45.0) * FORWARD;
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert_vec_near(fwd, Vec3::new(s, -s, 0.0));
    }

    #[test]
    fn test_euler_roundtrip_recovers_angles() {
        let cases = [
            Vec3::new(10.0, 20.0, 30.0),
            Vec3::new(-45.0, 170.0, 0.0),
            Vec3::new(80.0, -100.0, 5.0),
            Vec3::new(0.0, 359.0, 0.0),
        ];
        for e in cases {
            let back = euler_degrees(from_euler_degrees(e));
            assert!(delta_angle(back.x, e.x).abs() < EPS, "{e:?} -> {back:?}");
            assert!(delta_angle(back.y, e.y).abs() < EPS, "{e:?} -> {back:?}");
            assert!(delta_angle(back.z, e.z).abs() < EPS, "{e:?} -> {back:?}");
        }
    }

    #[test]
    fn test_euler_angles_are_non_negative() {
        let e = euler_degrees(from_euler_degrees(Vec3::new(-10.0, -90.0, 0.0)));
        assert!((e.x - 350.0).abs() < EPS);
        assert!((e.y - 270.0).abs() < EPS);
    }

    #[test]
    fn test_euler_at_gimbal_lock_reports_zero_roll() {
        let e = euler_degrees(from_euler_degrees(Vec3::new(90.0, 30.0, 0.0)));
        assert!((e.x - 90.0).abs() < 0.1);
        assert!(delta_angle(e.y, 30.0).abs() < 0.1);
        assert_eq!(e.z, 0.0);
    }

    #[test]
    fn test_identity_is_zero() {
        assert_vec_near(euler_degrees(Quat::IDENTITY), Vec3::ZERO);
    }
}
