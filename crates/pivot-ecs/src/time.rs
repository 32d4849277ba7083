//! Tick clock resource for the ECS world.

use bevy_ecs::prelude::*;

/// Global time resource inserted into the ECS world at creation.
///
/// One value describes one tick: how long the tick lasted, how much time has
/// elapsed since start (including this tick), and how many ticks have run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeRes {
    /// Seconds covered by the current tick.
    pub delta: f32,
    /// Seconds since the clock started, including the current tick.
    pub elapsed: f32,
    /// Number of ticks advanced so far.
    pub tick: u64,
}

impl TimeRes {
    /// A snapshot for a single tick, mostly useful in tests.
    #[must_use]
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self {
            delta,
            elapsed,
            tick: 0,
        }
    }

    /// Start the next tick lasting `delta` seconds. Negative durations are
    /// treated as zero so that `elapsed` never runs backwards.
    pub fn advance(&mut self, delta: f32) {
        let delta = delta.max(0.0);
        self.delta = delta;
        self.elapsed += delta;
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_elapsed() {
        let mut time = TimeRes::default();
        time.advance(0.1);
        time.advance(0.05);
        assert_eq!(time.tick, 2);
        assert!((time.delta - 0.05).abs() < 1e-6);
        assert!((time.elapsed - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut time = TimeRes::new(0.0, 3.0);
        time.advance(-1.0);
        assert_eq!(time.delta, 0.0);
        assert_eq!(time.elapsed, 3.0);
        assert_eq!(time.tick, 1);
    }
}
