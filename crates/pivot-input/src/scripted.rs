//! Deterministic replay of recorded input frames.

use std::collections::VecDeque;

use glam::Vec2;

use crate::provider::{InputProvider, InputSnapshot};

/// Replays a queue of [`InputSnapshot`]s, one per tick.
///
/// Reading [`look_delta`](InputProvider::look_delta) advances to the next
/// frame; the other queries report the frame most recently advanced to.
/// Once the queue is exhausted every query reports no input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
    current: InputSnapshot,
}

impl ScriptedInput {
    /// Create a provider that will replay `frames` in order.
    #[must_use]
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: InputSnapshot::default(),
        }
    }

    /// A script of pure look motion, one delta per tick.
    #[must_use]
    pub fn from_look_deltas(deltas: impl IntoIterator<Item = Vec2>) -> Self {
        Self::new(deltas.into_iter().map(|d| InputSnapshot::look(d.x, d.y)))
    }

    /// Append a frame to the end of the script.
    pub fn push(&mut self, frame: InputSnapshot) {
        self.frames.push_back(frame);
    }

    /// Frames not yet replayed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Parse a RON list of frames, e.g. `[(look: (1.0, 0.0)), (jump: true)]`.
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        let frames: Vec<InputSnapshot> = ron::from_str(source)?;
        Ok(Self::new(frames))
    }
}

impl InputProvider for ScriptedInput {
    fn look_delta(&mut self) -> Vec2 {
        self.current = self.frames.pop_front().unwrap_or_default();
        self.current.look
    }

    fn move_axis(&self) -> Vec2 {
        self.current.move_axis
    }

    fn jump_down(&self) -> bool {
        self.current.jump
    }

    fn sprint_held(&self) -> bool {
        self.current.sprint
    }

    fn crouch_held(&self) -> bool {
        self.current.crouch
    }

    fn interact_down(&self) -> bool {
        self.current.interact
    }

    fn capture_down(&self) -> bool {
        self.current.capture
    }
}
