//! Handheld camera motion: a sine head bob plus low-amplitude coherent noise.

use glam::Vec3;
use noise::{NoiseFn, Perlin};
use pivot_ecs::TimeRes;

use crate::RigSettings;

/// Fixed sample coordinates for the three noise channels. Each channel moves
/// through the field along a different line so the axes stay uncorrelated.
const CHANNEL_X_Y: f64 = 0.37;
const CHANNEL_Y_X: f64 = 0.81;
const CHANNEL_Z_SCALE: [f64; 2] = [0.33, 0.77];

/// Procedural offset generator owned by a camera rig.
///
/// The bob phase only moves forward, by `delta * bob_frequency` per tick. It
/// accumulates in `f64` so the sine stays smooth over long sessions.
/// Noise is a pure function of elapsed time, speed and seed, so replaying
/// identical tick timings reproduces identical motion.
pub struct HandheldMotion {
    phase: f64,
    seed: u32,
    field: Perlin,
}

impl std::fmt::Debug for HandheldMotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandheldMotion")
            .field("phase", &self.phase)
            .field("seed", &self.seed)
            .finish()
    }
}

impl Default for HandheldMotion {
    fn default() -> Self {
        Self::new(0)
    }
}

impl HandheldMotion {
    /// A generator with zero phase over the noise field for `seed`.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            phase: 0.0,
            seed,
            field: Perlin::new(seed),
        }
    }

    /// Accumulated bob phase in radians.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase as f32
    }

    /// Seed of the noise field in use.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Switch to a different noise field. The bob phase is kept.
    pub fn reseed(&mut self, seed: u32) {
        if seed != self.seed {
            self.seed = seed;
            self.field = Perlin::new(seed);
        }
    }

    /// Advance the bob phase by one tick of `delta` seconds and return the
    /// vertical bob offset. Returns zero, without advancing, when bob is off.
    pub fn bob(&mut self, settings: &RigSettings, delta: f32) -> Vec3 {
        if !settings.enable_bob {
            return Vec3::ZERO;
        }
        self.phase += f64::from(delta) * f64::from(settings.bob_frequency);
        Vec3::new(0.0, self.phase.sin() as f32 * settings.bob_amplitude, 0.0)
    }

    /// Noise offset at absolute time `elapsed`. Each channel is recentred to
    /// `[-0.5, 0.5]` before scaling by `noise_amplitude`.
    #[must_use]
    pub fn noise(&self, settings: &RigSettings, elapsed: f32) -> Vec3 {
        if settings.noise_speed <= 0.0 {
            return Vec3::ZERO;
        }
        let t = f64::from(elapsed) * f64::from(settings.noise_speed);
        let raw = Vec3::new(
            self.channel([t, CHANNEL_X_Y]),
            self.channel([CHANNEL_Y_X, t]),
            self.channel([t * CHANNEL_Z_SCALE[0], t * CHANNEL_Z_SCALE[1]]),
        );
        raw * settings.noise_amplitude
    }

    /// Sum of [`bob`](Self::bob) and [`noise`](Self::noise) for one tick.
    pub fn sample(&mut self, settings: &RigSettings, time: &TimeRes) -> Vec3 {
        self.bob(settings, time.delta) + self.noise(settings, time.elapsed)
    }

    fn channel(&self, point: [f64; 2]) -> f32 {
        // Perlin output is nominally [-1, 1].
        (self.field.get(point) * 0.5).clamp(-0.5, 0.5) as f32
    }
}
