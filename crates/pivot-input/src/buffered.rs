//! Event-fed provider: the host pushes raw motion and key states, the rig
//! reads them back as an [`InputProvider`].

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::provider::InputProvider;

/// Name of the horizontal movement axis.
pub const MOVE_X: &str = "MoveX";
/// Name of the forward movement axis.
pub const MOVE_Y: &str = "MoveY";

/// Discrete actions tracked by [`BufferedInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    /// Jump.
    Jump,
    /// Sprint.
    Sprint,
    /// Crouch.
    Crouch,
    /// Interact.
    Interact,
    /// Toggle cursor capture.
    Capture,
}

impl Button {
    fn index(self) -> usize {
        match self {
            Button::Jump => 0,
            Button::Sprint => 1,
            Button::Crouch => 2,
            Button::Interact => 3,
            Button::Capture => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonFrame {
    pressed: bool,
    just_pressed: bool,
}

/// A named axis driven by a pair of keys.
///
/// Keys are opaque strings chosen by the host (`"KeyW"`, `"ArrowUp"`, ...).
/// An empty key name means that direction is unbound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalAxis {
    /// Axis name. Movement reads `MoveX` and `MoveY`.
    pub name: String,
    /// Key that drives the axis to +1.
    pub positive: String,
    /// Key that drives the axis to -1.
    pub negative: String,
}

impl Default for DigitalAxis {
    fn default() -> Self {
        Self {
            name: MOVE_X.to_string(),
            positive: String::new(),
            negative: String::new(),
        }
    }
}

impl DigitalAxis {
    /// Axis `name` driven by `positive` / `negative`.
    pub fn new(
        name: impl Into<String>,
        positive: impl Into<String>,
        negative: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            positive: positive.into(),
            negative: negative.into(),
        }
    }

    /// The usual WASD pair for `MoveX` / `MoveY`.
    #[must_use]
    pub fn wasd() -> Vec<Self> {
        vec![
            Self::new(MOVE_X, "KeyD", "KeyA"),
            Self::new(MOVE_Y, "KeyW", "KeyS"),
        ]
    }
}

/// Accumulates host input events between ticks.
///
/// # Usage
///
/// 1. Forward events via [`on_raw_motion`](Self::on_raw_motion),
///    [`on_key`](Self::on_key) and [`on_button`](Self::on_button).
/// 2. Let the rig read it as an [`InputProvider`].
/// 3. Call [`clear_transients`](Self::clear_transients) at end of tick.
#[derive(Debug, Clone)]
pub struct BufferedInput {
    /// When false, look motion is discarded and reads as zero.
    pub enable_look: bool,
    /// When false, movement axes read as zero.
    pub enable_move: bool,
    /// Axis definitions consulted by `move_axis`.
    pub digital_axes: Vec<DigitalAxis>,
    look: Vec2,
    keys: HashSet<String>,
    buttons: [ButtonFrame; 5],
}

impl Default for BufferedInput {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferedInput {
    /// Look enabled, movement disabled, no axes defined.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enable_look: true,
            enable_move: false,
            digital_axes: Vec::new(),
            look: Vec2::ZERO,
            keys: HashSet::new(),
            buttons: [ButtonFrame::default(); 5],
        }
    }

    /// Builder-style movement setup.
    #[must_use]
    pub fn with_move_axes(mut self, axes: Vec<DigitalAxis>) -> Self {
        self.enable_move = true;
        self.digital_axes = axes;
        self
    }

    /// Add raw pointer motion.
    pub fn on_raw_motion(&mut self, dx: f32, dy: f32) {
        if self.enable_look {
            self.look += Vec2::new(dx, dy);
        }
    }

    /// Record a key press or release.
    pub fn on_key(&mut self, key: &str, pressed: bool) {
        if pressed {
            self.keys.insert(key.to_string());
        } else {
            self.keys.remove(key);
        }
    }

    /// Record an action button press or release.
    pub fn on_button(&mut self, button: Button, pressed: bool) {
        let frame = &mut self.buttons[button.index()];
        if pressed && !frame.pressed {
            frame.just_pressed = true;
        }
        frame.pressed = pressed;
    }

    /// Whether `key` is currently held.
    #[must_use]
    pub fn is_key_pressed(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Reset per-tick edges. Held state survives.
    pub fn clear_transients(&mut self) {
        for frame in &mut self.buttons {
            frame.just_pressed = false;
        }
    }

    fn read_digital(&self, axis_name: &str) -> f32 {
        let Some(axis) = self.digital_axes.iter().find(|a| a.name == axis_name) else {
            return 0.0;
        };
        let pos = !axis.positive.is_empty() && self.is_key_pressed(&axis.positive);
        let neg = !axis.negative.is_empty() && self.is_key_pressed(&axis.negative);
        f32::from(u8::from(pos)) - f32::from(u8::from(neg))
    }

    fn held(&self, button: Button) -> bool {
        self.buttons[button.index()].pressed
    }

    fn down(&self, button: Button) -> bool {
        self.buttons[button.index()].just_pressed
    }
}

impl InputProvider for BufferedInput {
    fn look_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.look)
    }

    fn move_axis(&self) -> Vec2 {
        if !self.enable_move {
            return Vec2::ZERO;
        }
        Vec2::new(self.read_digital(MOVE_X), self.read_digital(MOVE_Y))
    }

    fn jump_down(&self) -> bool {
        self.down(Button::Jump)
    }

    fn sprint_held(&self) -> bool {
        self.held(Button::Sprint)
    }

    fn crouch_held(&self) -> bool {
        self.held(Button::Crouch)
    }

    fn interact_down(&self) -> bool {
        self.down(Button::Interact)
    }

    fn capture_down(&self) -> bool {
        self.down(Button::Capture)
    }
}
