//! First-person camera rig: look input, smoothing, handheld motion, and
//! world transform resolution for yaw/pitch pivot rigs.

pub mod controller;
mod error;
pub mod procedural;
pub mod rig;
pub mod settings;
pub mod state;

pub use controller::CameraRigController;
pub use error::RigError;
pub use procedural::HandheldMotion;
pub use rig::{RigNodes, RigRefs, RigRole, RigTopology, spawn_rig};
pub use settings::RigSettings;
pub use state::CameraState;
