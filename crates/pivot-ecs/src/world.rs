//! World factory function and core resource registration.

use bevy_ecs::prelude::*;

use crate::TimeRes;

/// Registers all core resources into the given world with default values.
pub fn register_core_resources(world: &mut World) {
    world.insert_resource(TimeRes::default());
}

/// Creates a world with [`TimeRes`] pre-inserted.
pub fn create_world() -> World {
    let mut world = World::new();
    register_core_resources(&mut world);
    world
}
