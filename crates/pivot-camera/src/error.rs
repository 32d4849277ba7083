//! Camera rig error types.

use crate::rig::RigRole;

/// Errors raised while bringing a camera rig up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RigError {
    /// One or more required nodes are unset or carry no transform. The
    /// controller stays disabled for the rest of the session.
    #[error("missing rig references: {}", join_roles(.missing))]
    MissingReferences {
        /// Every role that could not be resolved.
        missing: Vec<RigRole>,
    },

    /// `initialize` was called on a controller that already ran it.
    #[error("camera rig already initialized")]
    AlreadyInitialized,
}

fn join_roles(roles: &[RigRole]) -> String {
    roles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
