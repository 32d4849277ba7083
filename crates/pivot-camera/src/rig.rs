//! Rig node references, validation, and topology detection.

use std::fmt;

use bevy_ecs::prelude::*;
use glam::Vec3;
use pivot_ecs::{Name, NodeBundle, Parent, Transform, is_child_of};

use crate::RigError;

/// The three nodes a camera rig drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RigRole {
    /// Node rotating about the vertical axis.
    YawPivot,
    /// Node rotating about the lateral axis.
    PitchPivot,
    /// Node carrying the rendered camera.
    Camera,
}

impl fmt::Display for RigRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RigRole::YawPivot => "yaw pivot",
            RigRole::PitchPivot => "pitch pivot",
            RigRole::Camera => "camera",
        })
    }
}

/// How the pitch pivot relates to the yaw pivot. Fixed at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigTopology {
    /// Pitch pivot is a direct child of the yaw pivot; the camera copies the
    /// pitch pivot's world transform.
    Nested,
    /// Pivots are independent; the camera gets the smoothed position and the
    /// product of the yaw and pitch rotations.
    Composed,
}

impl RigTopology {
    /// Nested if `nodes.pitch_pivot` is parented directly to `nodes.yaw_pivot`.
    pub fn detect(world: &World, nodes: &RigNodes) -> Self {
        if is_child_of(world, nodes.pitch_pivot, nodes.yaw_pivot) {
            Self::Nested
        } else {
            Self::Composed
        }
    }
}

/// Possibly-unset references to the rig's nodes, as supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RigRefs {
    /// Yaw pivot.
    pub yaw_pivot: Option<Entity>,
    /// Pitch pivot.
    pub pitch_pivot: Option<Entity>,
    /// Camera node.
    pub camera: Option<Entity>,
}

impl RigRefs {
    /// All three references set.
    #[must_use]
    pub fn new(yaw_pivot: Entity, pitch_pivot: Entity, camera: Entity) -> Self {
        Self {
            yaw_pivot: Some(yaw_pivot),
            pitch_pivot: Some(pitch_pivot),
            camera: Some(camera),
        }
    }

    /// Resolve every reference to an entity that has a [`Transform`].
    pub fn resolve(&self, world: &World) -> Result<RigNodes, RigError> {
        let check = |entity: Option<Entity>| {
            entity.filter(|e| world.get::<Transform>(*e).is_some())
        };
        let yaw = check(self.yaw_pivot);
        let pitch = check(self.pitch_pivot);
        let camera = check(self.camera);

        match (yaw, pitch, camera) {
            (Some(yaw_pivot), Some(pitch_pivot), Some(camera)) => Ok(RigNodes {
                yaw_pivot,
                pitch_pivot,
                camera,
            }),
            _ => {
                let missing = [
                    (yaw, RigRole::YawPivot),
                    (pitch, RigRole::PitchPivot),
                    (camera, RigRole::Camera),
                ]
                .into_iter()
                .filter_map(|(e, role)| e.is_none().then_some(role))
                .collect();
                Err(RigError::MissingReferences { missing })
            }
        }
    }
}

impl From<RigNodes> for RigRefs {
    fn from(nodes: RigNodes) -> Self {
        Self::new(nodes.yaw_pivot, nodes.pitch_pivot, nodes.camera)
    }
}

/// Validated rig nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigNodes {
    /// Yaw pivot.
    pub yaw_pivot: Entity,
    /// Pitch pivot.
    pub pitch_pivot: Entity,
    /// Camera node.
    pub camera: Entity,
}

/// Spawn a standard rig standing at `position` with eyes `eye_height` above it.
///
/// With [`RigTopology::Nested`] the pitch pivot is a child of the yaw pivot
/// and the camera a child of the pitch pivot. With
/// [`RigTopology::Composed`] all three are roots.
pub fn spawn_rig(
    world: &mut World,
    position: Vec3,
    eye_height: f32,
    topology: RigTopology,
) -> RigNodes {
    let eye = Vec3::new(0.0, eye_height, 0.0);
    let yaw_pivot = world
        .spawn(NodeBundle::new("yaw_pivot", Transform::from_translation(position)))
        .id();

    let (pitch_pivot, camera) = match topology {
        RigTopology::Nested => {
            let pitch = world
                .spawn((
                    NodeBundle::new("pitch_pivot", Transform::from_translation(eye)),
                    Parent(yaw_pivot),
                ))
                .id();
            let camera = world
                .spawn((NodeBundle::new("camera", Transform::IDENTITY), Parent(pitch)))
                .id();
            (pitch, camera)
        }
        RigTopology::Composed => {
            let pitch = world
                .spawn(NodeBundle::new(
                    "pitch_pivot",
                    Transform::from_translation(position + eye),
                ))
                .id();
            let camera = world
                .spawn(NodeBundle::new(
                    "camera",
                    Transform::from_translation(position + eye),
                ))
                .id();
            (pitch, camera)
        }
    };

    RigNodes {
        yaw_pivot,
        pitch_pivot,
        camera,
    }
}

/// Debug label for a node: its [`Name`] if present, else the entity id.
pub(crate) fn label(world: &World, entity: Entity) -> String {
    world
        .get::<Name>(entity)
        .map(|n| n.0.clone())
        .unwrap_or_else(|| format!("{entity:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivot_ecs::world_position;

    #[test]
    fn test_resolve_reports_every_missing_role() {
        let mut world = World::new();
        let bare = world.spawn_empty().id();
        let refs = RigRefs {
            yaw_pivot: None,
            pitch_pivot: Some(bare),
            camera: None,
        };
        assert_eq!(
            refs.resolve(&world),
            Err(RigError::MissingReferences {
                missing: vec![RigRole::YawPivot, RigRole::PitchPivot, RigRole::Camera],
            })
        );
    }

    #[test]
    fn test_resolve_accepts_complete_rig() {
        let mut world = World::new();
        let nodes = spawn_rig(&mut world, Vec3::ZERO, 1.7, RigTopology::Nested);
        assert_eq!(RigRefs::from(nodes).resolve(&world), Ok(nodes));
    }

    #[test]
    fn test_detect_topology() {
        let mut world = World::new();
        let nested = spawn_rig(&mut world, Vec3::ZERO, 1.7, RigTopology::Nested);
        let composed = spawn_rig(&mut world, Vec3::ZERO, 1.7, RigTopology::Composed);
        assert_eq!(RigTopology::detect(&world, &nested), RigTopology::Nested);
        assert_eq!(RigTopology::detect(&world, &composed), RigTopology::Composed);
    }

    #[test]
    fn test_spawned_rig_places_eyes_above_feet() {
        let mut world = World::new();
        let origin = Vec3::new(3.0, 0.0, -2.0);
        for topology in [RigTopology::Nested, RigTopology::Composed] {
            let nodes = spawn_rig(&mut world, origin, 1.6, topology);
            let eye = world_position(&world, nodes.camera).unwrap();
            assert!((eye - Vec3::new(3.0, 1.6, -2.0)).length() < 1e-5, "{topology:?}");
        }
    }

    #[test]
    fn test_label_prefers_name() {
        let mut world = World::new();
        let nodes = spawn_rig(&mut world, Vec3::ZERO, 1.0, RigTopology::Nested);
        assert_eq!(label(&world, nodes.yaw_pivot), "yaw_pivot");
        let anon = world.spawn_empty().id();
        assert!(!label(&world, anon).is_empty());
    }
}
