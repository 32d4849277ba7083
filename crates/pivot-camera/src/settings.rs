//! Tunables for the camera rig.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Look, smoothing, and handheld-motion settings.
///
/// Values are read at the start of every tick and never modified by the
/// rig itself, except that sensitivity is kept non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigSettings {
    /// Degrees of rotation per unit of look input, `(x, y)`.
    pub sensitivity: Vec2,
    /// When false, positive vertical look input tilts the view up.
    pub invert_y: bool,
    /// Multiply look input by the tick duration.
    pub scale_by_delta_time: bool,
    /// Inclusive pitch range in degrees, `(min, max)`.
    pub vertical_clamp: Vec2,
    /// Capture the cursor when the rig initializes.
    pub lock_cursor_on_start: bool,
    /// Per-tick blend factor for yaw and pitch, `[0, 1]`.
    pub rotation_lerp: f32,
    /// Per-tick blend factor for position, `[0, 1]`.
    pub position_lerp: f32,
    /// Vertical head bob.
    pub enable_bob: bool,
    /// Bob phase advance in radians per second.
    pub bob_frequency: f32,
    /// Bob height in world units.
    pub bob_amplitude: f32,
    /// Camera offset from the yaw pivot, in the yaw pivot's local space.
    pub local_offset: Vec3,
    /// Peak-to-peak handheld noise per axis, in world units.
    pub noise_amplitude: Vec3,
    /// Noise evolution rate. Zero or negative disables noise.
    pub noise_speed: f32,
    /// Seed for the noise field.
    pub noise_seed: u32,
}

impl Default for RigSettings {
    fn default() -> Self {
        Self {
            sensitivity: Vec2::new(1.5, 1.5),
            invert_y: false,
            scale_by_delta_time: false,
            vertical_clamp: Vec2::new(-80.0, 80.0),
            lock_cursor_on_start: true,
            rotation_lerp: 0.18,
            position_lerp: 0.20,
            enable_bob: true,
            bob_frequency: 1.7,
            bob_amplitude: 0.02,
            local_offset: Vec3::ZERO,
            noise_amplitude: Vec3::splat(0.002),
            noise_speed: 6.0,
            noise_seed: 0,
        }
    }
}

impl RigSettings {
    /// Settings with bob and noise turned off. Handy for exact assertions.
    #[must_use]
    pub fn steady() -> Self {
        Self {
            enable_bob: false,
            noise_speed: 0.0,
            ..Self::default()
        }
    }

    /// Effective `(x, y)` sensitivity with the Y sign convention applied.
    ///
    /// Y is negated unless `invert_y` is set, so that positive vertical input
    /// lowers pitch and, with positive pitch looking down, raises the view.
    #[must_use]
    pub fn effective_sensitivity(&self) -> Vec2 {
        let sign_y = if self.invert_y { 1.0 } else { -1.0 };
        Vec2::new(self.sensitivity.x, self.sensitivity.y * sign_y)
    }

    /// Pitch bounds as an ordered `(min, max)` pair, tolerating a swapped
    /// configuration.
    #[must_use]
    pub fn pitch_range(&self) -> (f32, f32) {
        let (a, b) = (self.vertical_clamp.x, self.vertical_clamp.y);
        (a.min(b), a.max(b))
    }

    /// Clamp `pitch` into [`pitch_range`](Self::pitch_range).
    #[must_use]
    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        let (min, max) = self.pitch_range();
        pitch.clamp(min, max)
    }

    /// Replace sensitivity, flooring both components at zero.
    pub fn set_sensitivity(&mut self, x: f32, y: f32) {
        self.sensitivity = Vec2::new(x.max(0.0), y.max(0.0));
    }

    /// Copy of `self` with sensitivity floored at zero.
    #[must_use]
    pub(crate) fn sanitized(mut self) -> Self {
        self.set_sensitivity(self.sensitivity.x, self.sensitivity.y);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_rig_tuning() {
        let s = RigSettings::default();
        assert_eq!(s.sensitivity, Vec2::new(1.5, 1.5));
        assert_eq!(s.vertical_clamp, Vec2::new(-80.0, 80.0));
        assert!((s.rotation_lerp - 0.18).abs() < 1e-6);
        assert!((s.position_lerp - 0.20).abs() < 1e-6);
        assert!(s.enable_bob);
        assert!(s.lock_cursor_on_start);
    }

    #[test]
    fn test_non_inverted_y_sensitivity_is_negative() {
        let s = RigSettings::default();
        assert_eq!(s.effective_sensitivity(), Vec2::new(1.5, -1.5));

        let inverted = RigSettings {
            invert_y: true,
            ..RigSettings::default()
        };
        assert_eq!(inverted.effective_sensitivity(), Vec2::new(1.5, 1.5));
    }

    #[test]
    fn test_swapped_clamp_is_reordered() {
        let s = RigSettings {
            vertical_clamp: Vec2::new(60.0, -30.0),
            ..RigSettings::default()
        };
        assert_eq!(s.pitch_range(), (-30.0, 60.0));
        assert_eq!(s.clamp_pitch(100.0), 60.0);
        assert_eq!(s.clamp_pitch(-100.0), -30.0);
    }

    #[test]
    fn test_clamp_is_inclusive() {
        let s = RigSettings::default();
        assert_eq!(s.clamp_pitch(80.0), 80.0);
        assert_eq!(s.clamp_pitch(-80.0), -80.0);
    }

    #[test]
    fn test_set_sensitivity_floors_at_zero() {
        let mut s = RigSettings::default();
        s.set_sensitivity(-2.0, 3.0);
        assert_eq!(s.sensitivity, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_ron_missing_fields_use_defaults() {
        let s: RigSettings = ron::from_str("(invert_y: true, noise_speed: 0.0)").unwrap();
        assert!(s.invert_y);
        assert_eq!(s.noise_speed, 0.0);
        assert_eq!(s.sensitivity, RigSettings::default().sensitivity);
    }
}
