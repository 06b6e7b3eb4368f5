// registry.rs - Component type registry
//
// Single source of truth for sizing, writing and reading every component
// type the world has seen. Append-only: descriptors are inserted the first
// time a type is registered and never removed.

use crate::ecs::{Component, ComponentTypeInfo};
use std::any::TypeId;
use std::collections::HashMap;

/// Table of [`ComponentTypeInfo`] descriptors keyed by type identity.
///
/// Iteration uses registration order, which is the order the scene
/// serializer frames component payloads in. A writer and a reader with the
/// identical registration history therefore agree on the byte layout.
#[derive(Default)]
pub struct ComponentRegistry {
    infos: HashMap<TypeId, ComponentTypeInfo>,
    order: Vec<TypeId>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component type; later calls for the same type are no-ops.
    pub fn register<C: Component>(&mut self) {
        let type_id = TypeId::of::<C>();
        if self.infos.contains_key(&type_id) {
            return;
        }
        self.infos.insert(type_id, C::type_info());
        self.order.push(type_id);
    }

    /// Untyped counterpart of [`ComponentRegistry::register`], used when the
    /// caller only has a runtime type handle (file reader, editor bridge).
    ///
    /// The descriptor's behaviors can only come from a typed registration, so
    /// this succeeds only for types some strongly-typed call registered
    /// earlier in the process.
    ///
    /// # Panics
    /// Panics when `type_id` was never registered through the typed path.
    pub fn register_by_type(&mut self, type_id: TypeId) {
        assert!(
            self.infos.contains_key(&type_id),
            "attempted to register a component type with no prior typed registration"
        );
    }

    /// Descriptor lookup. Precondition: [`ComponentRegistry::is_registered`].
    ///
    /// # Panics
    /// Panics when the type is not registered.
    pub fn get(&self, type_id: TypeId) -> &ComponentTypeInfo {
        self.infos
            .get(&type_id)
            .expect("component type is not registered")
    }

    pub fn is_registered(&self, type_id: TypeId) -> bool {
        self.infos.contains_key(&type_id)
    }

    /// Visit every descriptor in registration order.
    ///
    /// The scene reader rides on this to replay the writer's component
    /// population entity by entity.
    pub fn for_each_registered(&self, mut f: impl FnMut(&ComponentTypeInfo)) {
        for type_id in &self.order {
            f(&self.infos[type_id]);
        }
    }

    /// Registered type identities in registration order.
    pub fn order(&self) -> &[TypeId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::define_component;
    use bytemuck::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
    struct Position {
        x: f32,
        y: f32,
    }
    define_component!(Position, "Position", fixed);

    #[repr(C)]
    #[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
    struct Health {
        value: f32,
    }
    define_component!(Health, "Health", fixed);

    #[test]
    fn register_is_idempotent() {
        let mut registry = ComponentRegistry::new();
        registry.register::<Position>();
        registry.register::<Position>();
        assert_eq!(registry.len(), 1);
        assert!(registry.is_registered(TypeId::of::<Position>()));
    }

    #[test]
    fn iteration_follows_registration_order() {
        let mut registry = ComponentRegistry::new();
        registry.register::<Health>();
        registry.register::<Position>();

        let mut names = Vec::new();
        registry.for_each_registered(|info| names.push(info.name));
        assert_eq!(names, vec!["Health", "Position"]);
    }

    #[test]
    fn register_by_type_accepts_known_types() {
        let mut registry = ComponentRegistry::new();
        registry.register::<Position>();
        registry.register_by_type(TypeId::of::<Position>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    #[should_panic(expected = "no prior typed registration")]
    fn register_by_type_rejects_unknown_types() {
        let mut registry = ComponentRegistry::new();
        registry.register_by_type(TypeId::of::<Position>());
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn get_panics_for_unknown_type() {
        let registry = ComponentRegistry::new();
        registry.get(TypeId::of::<Health>());
    }
}
