// world.rs - Entity directory
//
// The layer every other subsystem calls: owns identity assignment, the
// name -> identity index, and keeps the type registry synchronized as new
// component types appear.

use crate::ecs::components::NameComponent;
use crate::ecs::{
    Component, ComponentRegistry, ComponentStore, ComponentValue, Entity, EntityId,
};
use std::any::TypeId;
use std::collections::HashMap;
use std::io;

/// Entity directory over a [`ComponentStore`] and [`ComponentRegistry`].
///
/// The registry is owned here as an explicit context object rather than
/// process-global state, so a fresh world starts with a fresh registry.
#[derive(Default)]
pub struct World {
    registry: ComponentRegistry,
    store: ComponentStore,
    entities: HashMap<EntityId, Entity>,
    names: HashMap<String, EntityId>,
    // Dedicated ever-increasing counter; ids are never reused within a run,
    // even across delete-then-create sequences.
    next_id: EntityId,
}

impl World {
    pub fn new() -> Self {
        Self {
            registry: ComponentRegistry::new(),
            store: ComponentStore::new(),
            entities: HashMap::new(),
            names: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create an entity with a directory-unique name, a Name component and
    /// exactly one archetype tag.
    pub fn create_entity<T: Component + Default>(&mut self, name: &str) -> Entity {
        debug_assert!(
            T::IS_TAG,
            "entities are created with an archetype tag, not a data component"
        );

        let id = self.next_id;
        self.next_id += 1;

        let unique = self.unique_name(name);
        self.entities.insert(id, Entity::new(id));

        self.registry.register::<NameComponent>();
        self.store.add(id, NameComponent::new(unique.clone()));
        self.names.insert(unique, id);

        self.registry.register::<T>();
        self.store.add(id, T::default());

        Entity::new(id)
    }

    /// Register an empty placeholder record for `id`, to be filled by the
    /// scene reader.
    pub fn add_empty_entity(&mut self, id: EntityId) {
        self.entities.insert(id, Entity::new(id));
        self.next_id = self.next_id.max(id + 1);
    }

    /// Add a data component; routes to the store and idempotently registers
    /// the type.
    pub fn add_component<C: Component>(&mut self, id: EntityId, value: C) {
        debug_assert!(
            !C::IS_TAG,
            "tag components must be added through add_tag"
        );
        if !self.entities.contains_key(&id) {
            tracing::warn!("cannot add component '{}' to unknown entity {id}", C::NAME);
            return;
        }
        self.registry.register::<C>();
        self.store.add(id, value);
    }

    /// Add a tag; presence alone is the signal.
    pub fn add_tag<T: Component + Default>(&mut self, id: EntityId) {
        debug_assert!(
            T::IS_TAG,
            "data components must be added through add_component"
        );
        if !self.entities.contains_key(&id) {
            tracing::warn!("cannot add tag '{}' to unknown entity {id}", T::NAME);
            return;
        }
        self.registry.register::<T>();
        self.store.add(id, T::default());
    }

    /// Type-erased component insert used by the scene reader and the
    /// editor bridge. The type must already be known to the registry from
    /// an earlier typed registration.
    pub fn add_raw_component(&mut self, id: EntityId, type_id: TypeId, value: ComponentValue) {
        self.registry.register_by_type(type_id);
        if !self.entities.contains_key(&id) {
            tracing::warn!("cannot add raw component to unknown entity {id}");
            return;
        }
        // A raw Name carries the directory index entry with it.
        if let Some(name) = value.downcast_ref::<NameComponent>() {
            self.names.insert(name.name().to_owned(), id);
        }
        self.store.add_boxed(type_id, id, value);
    }

    /// Type-erased tag insert; the tag value is materialized through the
    /// registered descriptor.
    pub fn add_tag_by_type(&mut self, id: EntityId, type_id: TypeId) {
        self.registry.register_by_type(type_id);
        if !self.entities.contains_key(&id) {
            tracing::warn!("cannot add raw tag to unknown entity {id}");
            return;
        }
        let info = *self.registry.get(type_id);
        debug_assert!(info.is_tag, "add_tag_by_type called with a data component type");
        let value = (info.deserialize)(&mut io::empty())
            .expect("tag deserialization reads no bytes and cannot fail");
        self.store.add_boxed(type_id, id, value);
    }

    /// Scrub the entity out of every pool, drop its name-index entry and
    /// erase its record. Returns false for an unknown id.
    pub fn delete_entity(&mut self, id: EntityId) -> bool {
        if self.entities.remove(&id).is_none() {
            tracing::warn!("delete_entity: entity {id} not found");
            return false;
        }
        if let Some(name) = self.store.get::<NameComponent>(id) {
            self.names.remove(&name.name().to_owned());
        }
        self.store.remove_entity(id);
        true
    }

    /// Rename an entity, disambiguating the new name against the index.
    pub fn rename_entity(&mut self, id: EntityId, new_name: &str) {
        if !self.entities.contains_key(&id) {
            tracing::warn!("rename_entity: entity {id} not found");
            return;
        }
        let Some(old) = self.store.get::<NameComponent>(id).map(|n| n.name().to_owned())
        else {
            tracing::warn!("rename_entity: entity {id} has no Name component");
            return;
        };
        self.names.remove(&old);

        let unique = self.unique_name(new_name);
        if let Some(name) = self.store.get_mut::<NameComponent>(id) {
            name.set_name(unique.clone());
        }
        self.names.insert(unique, id);
    }

    /// Soft lookup by name; logs a warning on a miss.
    pub fn entity_by_name(&self, name: &str) -> Option<Entity> {
        let found = self
            .names
            .get(name)
            .and_then(|id| self.entities.get(id))
            .copied();
        if found.is_none() {
            tracing::warn!("no entity named '{name}'");
        }
        found
    }

    /// Soft lookup by id; logs a warning on a miss.
    pub fn entity_by_id(&self, id: EntityId) -> Option<Entity> {
        let found = self.entities.get(&id).copied();
        if found.is_none() {
            tracing::warn!("no entity with id {id}");
        }
        found
    }

    // Typed component access, the path simulation systems use.

    pub fn component<C: Component>(&self, id: EntityId) -> Option<&C> {
        self.store.get::<C>(id)
    }

    pub fn component_mut<C: Component>(&mut self, id: EntityId) -> Option<&mut C> {
        self.store.get_mut::<C>(id)
    }

    pub fn has_component<C: Component>(&self, id: EntityId) -> bool {
        self.store.has::<C>(id)
    }

    /// Per-component delete; no-op when absent.
    pub fn remove_component<C: Component>(&mut self, id: EntityId) {
        self.store.remove::<C>(id);
    }

    /// Pre-register a component type without touching any entity. Readers
    /// use this to replay a writer's registration history.
    pub fn register<C: Component>(&mut self) {
        self.registry.register::<C>();
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.entities.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn unique_name(&self, requested: &str) -> String {
        if !self.names.contains_key(requested) {
            return requested.to_owned();
        }
        let mut suffix = 1u32;
        loop {
            let candidate = format!("{requested}{suffix}");
            if !self.names.contains_key(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
