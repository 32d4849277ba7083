//! ECS world setup, transform hierarchy, and the tick clock that host the camera rig.
//!
//! Rig nodes are plain entities carrying a [`Transform`] and, optionally, a
//! [`Parent`]. World-space values are derived on demand by walking the parent
//! chain; there is no propagation pass.

mod components;
mod hierarchy;
mod time;
mod world;

pub use components::{Name, NodeBundle, Parent, Transform};
pub use hierarchy::{
    MAX_HIERARCHY_DEPTH, forward, is_child_of, parent_of, set_local_rotation, set_world_position,
    set_world_rotation, transform_vector, world_matrix, world_position, world_rotation,
};
pub use time::TimeRes;
pub use world::{create_world, register_core_resources};
