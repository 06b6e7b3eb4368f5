// store.rs - Type-indexed component storage
//
// Table-of-tables: component type -> entity id -> opaque value. The store
// is agnostic about entity lifecycle; enforcement lives in the World.

use crate::ecs::{Component, ComponentRegistry, ComponentTypeInfo, ComponentValue, EntityId};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Holds the actual component values for every entity.
///
/// One pool per component type gives amortized O(1) add/get/has/remove for
/// an open-ended number of distinct types without forcing a single
/// contiguous record layout.
#[derive(Default)]
pub struct ComponentStore {
    pools: HashMap<TypeId, HashMap<EntityId, ComponentValue>>,
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct or overwrite the value for `id` in the type's pool.
    pub fn add<C: Component>(&mut self, id: EntityId, value: C) {
        self.pools
            .entry(TypeId::of::<C>())
            .or_default()
            .insert(id, Box::new(value));
    }

    /// Type-erased insert used by the scene reader and the editor bridge.
    pub fn add_boxed(&mut self, type_id: TypeId, id: EntityId, value: ComponentValue) {
        self.pools.entry(type_id).or_default().insert(id, value);
    }

    pub fn get<C: Component>(&self, id: EntityId) -> Option<&C> {
        self.pools
            .get(&TypeId::of::<C>())?
            .get(&id)?
            .downcast_ref::<C>()
    }

    pub fn get_mut<C: Component>(&mut self, id: EntityId) -> Option<&mut C> {
        self.pools
            .get_mut(&TypeId::of::<C>())?
            .get_mut(&id)?
            .downcast_mut::<C>()
    }

    pub fn has<C: Component>(&self, id: EntityId) -> bool {
        self.has_type(TypeId::of::<C>(), id)
    }

    /// False when the pool for the type does not exist or does not
    /// contain `id`.
    pub fn has_type(&self, type_id: TypeId, id: EntityId) -> bool {
        self.pools
            .get(&type_id)
            .is_some_and(|pool| pool.contains_key(&id))
    }

    /// Erase if present, else no-op.
    pub fn remove<C: Component>(&mut self, id: EntityId) {
        self.remove_type(TypeId::of::<C>(), id);
    }

    pub fn remove_type(&mut self, type_id: TypeId, id: EntityId) {
        if let Some(pool) = self.pools.get_mut(&type_id) {
            pool.remove(&id);
        }
    }

    /// Scrub `id` out of every pool. Pools carry no back-index from the
    /// entity's point of view, so each one is visited individually.
    pub fn remove_entity(&mut self, id: EntityId) {
        for pool in self.pools.values_mut() {
            pool.remove(&id);
        }
    }

    /// Invoke `visitor(descriptor, value)` for every pool containing `id`.
    ///
    /// This is the iteration primitive the scene writer rides on. Pools are
    /// visited in the registry's registration order so the byte stream a
    /// writer produces matches what a reader with the same registration
    /// history expects. Pools whose type is not in `registry` are skipped.
    pub fn for_each_component(
        &self,
        registry: &ComponentRegistry,
        id: EntityId,
        mut visitor: impl FnMut(&ComponentTypeInfo, &dyn Any),
    ) {
        for type_id in registry.order() {
            if let Some(value) = self.pools.get(type_id).and_then(|pool| pool.get(&id)) {
                visitor(registry.get(*type_id), value.as_ref());
            }
        }
    }

    /// Sum of per-value sizes across every pool containing `id`; used to
    /// precompute an entity block's byte length before writing its header.
    pub fn all_components_size(&self, registry: &ComponentRegistry, id: EntityId) -> usize {
        let mut total = 0;
        self.for_each_component(registry, id, |info, value| {
            total += info.size_of_value(value);
        });
        total
    }
}
