//! Input capability shared by the camera rig and movement logic.
//!
//! The rig never polls devices. It reads an [`InputProvider`], which a host
//! either injects directly or resolves from an [`InputRegistry`]. Cursor
//! capture is likewise an effect requested through [`CursorControl`].

pub mod buffered;
pub mod cursor;
pub mod provider;
pub mod registry;
pub mod scripted;

pub use buffered::{BufferedInput, Button, DigitalAxis, MOVE_X, MOVE_Y};
pub use cursor::{CursorControl, CursorMode, RecordingCursor};
pub use provider::{InputProvider, InputSnapshot, NullInput};
pub use registry::InputRegistry;
pub use scripted::ScriptedInput;
