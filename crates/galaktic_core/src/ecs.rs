//! Entity Component System core types.
//!
//! Storage is type-indexed, then entity-indexed: an open-ended set of
//! component shapes (tags, fixed-layout records, variable-length records)
//! behind one uniform access surface. Collaborators that cannot name a
//! concrete type at compile time (the scene reader, the editor bridge) go
//! through the type-erased entry points, which ride on descriptors captured
//! from earlier strongly-typed registrations.

mod component;
pub mod components;
mod entity;
mod helper;
mod registry;
mod store;
mod world;

pub use component::{Component, ComponentCodec, ComponentTypeInfo, ComponentValue};
pub use entity::{Entity, EntityId, INVALID_ENTITY};
pub use helper::{
    modify_component, spawn_camera, spawn_light, spawn_physics_object, spawn_player,
    spawn_static_object,
};
pub use registry::ComponentRegistry;
pub use store::ComponentStore;
pub use world::World;
