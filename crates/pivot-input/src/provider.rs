//! The input capability trait and its per-tick snapshot.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Source of abstracted player input.
///
/// `look_delta` is relative pointer motion since the previous read and takes
/// `&mut self` because reading it consumes that motion. All other queries are
/// pure reads of the provider's current state.
pub trait InputProvider {
    /// Relative look motion accumulated since the last call.
    fn look_delta(&mut self) -> Vec2;
    /// Movement axes, each -1, 0 or +1.
    fn move_axis(&self) -> Vec2;
    /// Jump was pressed this tick.
    fn jump_down(&self) -> bool;
    /// Sprint is being held.
    fn sprint_held(&self) -> bool;
    /// Crouch is being held.
    fn crouch_held(&self) -> bool;
    /// Interact was pressed this tick.
    fn interact_down(&self) -> bool;
    /// Cursor-capture toggle was pressed this tick.
    fn capture_down(&self) -> bool;

    /// Read every query at once. Consumes the look delta.
    fn snapshot(&mut self) -> InputSnapshot {
        InputSnapshot {
            look: self.look_delta(),
            move_axis: self.move_axis(),
            jump: self.jump_down(),
            sprint: self.sprint_held(),
            crouch: self.crouch_held(),
            interact: self.interact_down(),
            capture: self.capture_down(),
        }
    }
}

/// One tick's worth of input, as plain data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSnapshot {
    /// Relative look motion.
    pub look: Vec2,
    /// Movement axes.
    pub move_axis: Vec2,
    /// Jump pressed.
    pub jump: bool,
    /// Sprint held.
    pub sprint: bool,
    /// Crouch held.
    pub crouch: bool,
    /// Interact pressed.
    pub interact: bool,
    /// Capture toggle pressed.
    pub capture: bool,
}

impl InputSnapshot {
    /// A snapshot carrying only look motion.
    #[must_use]
    pub fn look(x: f32, y: f32) -> Self {
        Self {
            look: Vec2::new(x, y),
            ..Self::default()
        }
    }
}

/// Provider that never reports any input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullInput;

impl InputProvider for NullInput {
    fn look_delta(&mut self) -> Vec2 {
        Vec2::ZERO
    }

    fn move_axis(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn jump_down(&self) -> bool {
        false
    }

    fn sprint_held(&self) -> bool {
        false
    }

    fn crouch_held(&self) -> bool {
        false
    }

    fn interact_down(&self) -> bool {
        false
    }

    fn capture_down(&self) -> bool {
        false
    }
}

/// A provider shared between the rig and the code feeding it events.
impl<P: InputProvider + ?Sized> InputProvider for Rc<RefCell<P>> {
    fn look_delta(&mut self) -> Vec2 {
        self.borrow_mut().look_delta()
    }

    fn move_axis(&self) -> Vec2 {
        self.borrow().move_axis()
    }

    fn jump_down(&self) -> bool {
        self.borrow().jump_down()
    }

    fn sprint_held(&self) -> bool {
        self.borrow().sprint_held()
    }

    fn crouch_held(&self) -> bool {
        self.borrow().crouch_held()
    }

    fn interact_down(&self) -> bool {
        self.borrow().interact_down()
    }

    fn capture_down(&self) -> bool {
        self.borrow().capture_down()
    }
}
