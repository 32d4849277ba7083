//! World-space queries and writes over the [`Parent`] chain.
//!
//! Rotation composes without scale: a node's world rotation is the product
//! of its ancestors' local rotations and its own. Positions and vectors go
//! through the full affine chain, so ancestor scale applies to them.
//!
//! A [`Parent`] pointing at an entity without a [`Transform`] ends the chain
//! there, as if the node were a root.

use bevy_ecs::prelude::*;
use glam::{Affine3A, Quat, Vec3};
use pivot_math::FORWARD;

use crate::{Parent, Transform};

/// Longest parent chain that is followed before giving up. Guards against
/// accidental cycles.
pub const MAX_HIERARCHY_DEPTH: usize = 64;

/// The parent of `entity`, if it has one.
pub fn parent_of(world: &World, entity: Entity) -> Option<Entity> {
    world.get::<Parent>(entity).map(|p| p.0)
}

/// Whether `child` is a direct child of `parent`.
pub fn is_child_of(world: &World, child: Entity, parent: Entity) -> bool {
    parent_of(world, child) == Some(parent)
}

/// Collect the transforms from `entity` up to its root, nearest first.
fn chain(world: &World, entity: Entity) -> Option<Vec<Transform>> {
    let mut transforms = vec![*world.get::<Transform>(entity)?];
    let mut current = entity;
    loop {
        let Some(parent) = parent_of(world, current) else {
            break;
        };
        let Some(parent_tf) = world.get::<Transform>(parent) else {
            break;
        };
        if transforms.len() >= MAX_HIERARCHY_DEPTH {
            tracing::warn!(
                ?entity,
                "Transform hierarchy deeper than {MAX_HIERARCHY_DEPTH}, truncating"
            );
            break;
        }
        transforms.push(*parent_tf);
        current = parent;
    }
    Some(transforms)
}

/// Local-to-world matrix of `entity`, or `None` if it has no [`Transform`].
pub fn world_matrix(world: &World, entity: Entity) -> Option<Affine3A> {
    let transforms = chain(world, entity)?;
    Some(
        transforms
            .iter()
            .rev()
            .fold(Affine3A::IDENTITY, |acc, t| acc * t.local_matrix()),
    )
}

/// World-space orientation of `entity`.
pub fn world_rotation(world: &World, entity: Entity) -> Option<Quat> {
    let transforms = chain(world, entity)?;
    Some(
        transforms
            .iter()
            .rev()
            .fold(Quat::IDENTITY, |acc, t| acc * t.rotation)
            .normalize(),
    )
}

/// World-space position of `entity`.
pub fn world_position(world: &World, entity: Entity) -> Option<Vec3> {
    world_matrix(world, entity).map(|m| Vec3::from(m.translation))
}

/// Transform a direction from `entity`'s local space into world space.
/// Affected by rotation and scale, not by position.
pub fn transform_vector(world: &World, entity: Entity, vector: Vec3) -> Option<Vec3> {
    world_matrix(world, entity).map(|m| m.transform_vector3(vector))
}

/// World-space forward axis of `entity`.
pub fn forward(world: &World, entity: Entity) -> Option<Vec3> {
    world_rotation(world, entity).map(|r| r * FORWARD)
}

fn parent_matrix(world: &World, entity: Entity) -> Affine3A {
    parent_of(world, entity)
        .and_then(|p| world_matrix(world, p))
        .unwrap_or(Affine3A::IDENTITY)
}

fn parent_rotation(world: &World, entity: Entity) -> Quat {
    parent_of(world, entity)
        .and_then(|p| world_rotation(world, p))
        .unwrap_or(Quat::IDENTITY)
}

/// Move `entity` so that its world position becomes `position`.
/// Does nothing if the entity has no [`Transform`].
pub fn set_world_position(world: &mut World, entity: Entity, position: Vec3) {
    let local = parent_matrix(world, entity).inverse().transform_point3(position);
    if let Some(mut transform) = world.get_mut::<Transform>(entity) {
        transform.translation = local;
    }
}

/// Rotate `entity` so that its world orientation becomes `rotation`.
/// Does nothing if the entity has no [`Transform`].
pub fn set_world_rotation(world: &mut World, entity: Entity, rotation: Quat) {
    let local = (parent_rotation(world, entity).inverse() * rotation).normalize();
    if let Some(mut transform) = world.get_mut::<Transform>(entity) {
        transform.rotation = local;
    }
}

/// Set the parent-relative orientation of `entity`.
/// Does nothing if the entity has no [`Transform`].
pub fn set_local_rotation(world: &mut World, entity: Entity, rotation: Quat) {
    if let Some(mut transform) = world.get_mut::<Transform>(entity) {
        transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn near(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    #[test]
    fn test_root_world_position_is_translation() {
        let mut world = World::new();
        let e = world.spawn(Transform::from_translation(Vec3::new(1.0, 2.0, 3.0))).id();
        assert_eq!(world_position(&world, e), Some(Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_child_position_follows_parent_rotation() {
        let mut world = World::new();
        let root = world
            .spawn(
                Transform::from_translation(Vec3::new(10.0, 0.0, 0.0))
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            )
            .id();
        let child = world
            .spawn((Transform::from_translation(Vec3::Z), Parent(root)))
            .id();
        let p = world_position(&world, child).unwrap();
        assert!(near(p, Vec3::new(11.0, 0.0, 0.0)), "{p:?}");
    }

    #[test]
    fn test_world_rotation_composes_parent_first() {
        let mut world = World::new();
        let yaw = Quat::from_rotation_y(FRAC_PI_2);
        let pitch = Quat::from_rotation_x(0.3);
        let root = world.spawn(Transform::IDENTITY.with_rotation(yaw)).id();
        let child = world
            .spawn((Transform::IDENTITY.with_rotation(pitch), Parent(root)))
            .id();
        let r = world_rotation(&world, child).unwrap();
        assert!(r.angle_between(yaw * pitch) < EPS);
    }

    #[test]
    fn test_forward_of_unrotated_node_is_plus_z() {
        let mut world = World::new();
        let e = world.spawn(Transform::IDENTITY).id();
        assert!(near(forward(&world, e).unwrap(), Vec3::Z));
    }

    #[test]
    fn test_transform_vector_ignores_translation_but_applies_scale() {
        let mut world = World::new();
        let e = world
            .spawn(
                Transform::from_translation(Vec3::splat(100.0))
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2))
                    .with_scale(Vec3::splat(2.0)),
            )
            .id();
        let v = transform_vector(&world, e, Vec3::Z).unwrap();
        assert!(near(v, Vec3::new(2.0, 0.0, 0.0)), "{v:?}");
    }

    #[test]
    fn test_set_world_position_under_rotated_parent() {
        let mut world = World::new();
        let root = world
            .spawn(
                Transform::from_translation(Vec3::new(5.0, 0.0, 0.0))
                    .with_rotation(Quat::from_rotation_y(FRAC_PI_2)),
            )
            .id();
        let child = world.spawn((Transform::IDENTITY, Parent(root))).id();
        set_world_position(&mut world, child, Vec3::new(0.0, 1.0, 0.0));
        let p = world_position(&world, child).unwrap();
        assert!(near(p, Vec3::new(0.0, 1.0, 0.0)), "{p:?}");
    }

    #[test]
    fn test_set_world_rotation_under_rotated_parent() {
        let mut world = World::new();
        let root = world
            .spawn(Transform::IDENTITY.with_rotation(Quat::from_rotation_y(1.0)))
            .id();
        let child = world.spawn((Transform::IDENTITY, Parent(root))).id();
        let target = Quat::from_rotation_x(0.5);
        set_world_rotation(&mut world, child, target);
        let r = world_rotation(&world, child).unwrap();
        assert!(r.angle_between(target) < 1e-4);
    }

    #[test]
    fn test_missing_transform_yields_none() {
        let mut world = World::new();
        let e = world.spawn_empty().id();
        assert_eq!(world_position(&world, e), None);
        assert_eq!(world_rotation(&world, e), None);
        set_local_rotation(&mut world, e, Quat::from_rotation_x(1.0));
        assert!(world.get::<Transform>(e).is_none());
    }

    #[test]
    fn test_parent_without_transform_acts_as_root() {
        let mut world = World::new();
        let ghost = world.spawn_empty().id();
        let child = world
            .spawn((Transform::from_translation(Vec3::X), Parent(ghost)))
            .id();
        assert_eq!(world_position(&world, child), Some(Vec3::X));
    }

    #[test]
    fn test_cycle_is_truncated() {
        let mut world = World::new();
        let a = world.spawn(Transform::from_translation(Vec3::X)).id();
        let b = world
            .spawn((Transform::from_translation(Vec3::X), Parent(a)))
            .id();
        world.entity_mut(a).insert(Parent(b));
        assert!(world_position(&world, a).is_some());
    }

    #[test]
    fn test_is_child_of() {
        let mut world = World::new();
        let root = world.spawn(Transform::IDENTITY).id();
        let child = world.spawn((Transform::IDENTITY, Parent(root))).id();
        assert!(is_child_of(&world, child, root));
        assert!(!is_child_of(&world, root, child));
    }
}
