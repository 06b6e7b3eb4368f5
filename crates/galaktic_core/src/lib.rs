//! Galaktic Engine Core
//!
//! The in-process data model of the simulation runtime:
//! - Entity Component System (registry, store, world)
//! - Built-in component set and archetype helpers
//! - Scene aggregate consumed by the filesystem crate

pub mod ecs;
pub mod scene;

pub use glam;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
