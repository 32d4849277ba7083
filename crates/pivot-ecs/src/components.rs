//! Core components for rig nodes.

use bevy_ecs::prelude::*;
use glam::{Affine3A, Quat, Vec3};

/// Local transform of a node, relative to its [`Parent`] if it has one,
/// otherwise relative to the world origin.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Offset from the parent's origin, in the parent's space.
    pub translation: Vec3,
    /// Orientation relative to the parent.
    pub rotation: Quat,
    /// Per-axis scale. Affects child positions and transformed vectors,
    /// never orientation.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// A transform at `translation` with identity rotation and unit scale.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Builder-style rotation override.
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style scale override.
    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Local-to-parent matrix.
    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Links a node to the node whose space its [`Transform`] is expressed in.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parent(pub Entity);

/// Human-readable debug name for a node. Used in log messages only.
#[derive(Component, Clone, Debug, PartialEq, Eq, Default)]
pub struct Name(pub String);

impl Name {
    /// Creates a new [`Name`] from anything that converts to `String`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Bundle for spawning a named root node.
#[derive(Bundle, Default)]
pub struct NodeBundle {
    /// Local transform.
    pub transform: Transform,
    /// Debug name.
    pub name: Name,
}

impl NodeBundle {
    /// A named node with the given transform.
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            transform,
            name: Name::new(name),
        }
    }
}
