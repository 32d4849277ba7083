//! Scalar interpolation and wrap-aware angle helpers (degrees).

/// Clamp `t` into `[0, 1]`.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Linear interpolation with `t` clamped into `[0, 1]`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * clamp01(t)
}

/// Loop `t` into `[0, length]`.
///
/// Unlike `%`, negative inputs wrap to the top of the range:
/// `repeat(-30.0, 360.0) == 330.0`.
#[inline]
pub fn repeat(t: f32, length: f32) -> f32 {
    (t - (t / length).floor() * length).clamp(0.0, length)
}

/// Shortest signed difference `target - current` in degrees, in `(-180, 180]`.
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = repeat(target - current, 360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Interpolate between two angles along the shortest arc.
///
/// `t` is clamped into `[0, 1]`. The result is not normalized: going from
/// 350° halfway toward 10° returns 360°, which is the same heading as 0°.
#[inline]
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    a + delta_angle(a, b) * clamp01(t)
}

/// Map any angle into the signed range `[-180, 180)`.
#[inline]
pub fn wrap_signed(angle: f32) -> f32 {
    repeat(angle + 180.0, 360.0) - 180.0
}
