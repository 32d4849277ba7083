//! Cursor capture as an environment effect.

use serde::{Deserialize, Serialize};

/// Whether the pointer is captured (FPS-style) or free (menu-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorMode {
    /// Locked to the window and hidden; only relative motion is reported.
    Captured,
    /// Visible, normal cursor.
    #[default]
    Free,
}

impl CursorMode {
    /// `Captured` when `locked`, otherwise `Free`.
    #[must_use]
    pub fn from_locked(locked: bool) -> Self {
        if locked { Self::Captured } else { Self::Free }
    }

    /// Whether the pointer is locked in this mode.
    #[must_use]
    pub fn is_locked(self) -> bool {
        self == Self::Captured
    }

    /// Whether the pointer is drawn in this mode.
    #[must_use]
    pub fn is_visible(self) -> bool {
        !self.is_locked()
    }
}

/// Host-side sink for cursor capture requests.
pub trait CursorControl {
    /// Apply `mode` to the host cursor.
    fn set_cursor_mode(&mut self, mode: CursorMode);
}

/// [`CursorControl`] that only remembers what it was asked to do.
/// Used headless and in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingCursor {
    /// Every mode requested, oldest first.
    pub history: Vec<CursorMode>,
}

impl RecordingCursor {
    /// The mode most recently requested, or `Free` if none.
    #[must_use]
    pub fn mode(&self) -> CursorMode {
        self.history.last().copied().unwrap_or_default()
    }
}

impl CursorControl for RecordingCursor {
    fn set_cursor_mode(&mut self, mode: CursorMode) {
        tracing::debug!(?mode, "Cursor mode requested");
        self.history.push(mode);
    }
}
