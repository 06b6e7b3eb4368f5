//! Entity handles
//!
//! Entities are opaque numeric identities with no intrinsic data; all state
//! hangs off the store under the entity's id.

/// Numeric entity identity. 0 is reserved as "invalid".
pub type EntityId = u32;

/// The reserved invalid identity.
pub const INVALID_ENTITY: EntityId = 0;

/// Lightweight, copyable entity handle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    id: EntityId,
}

impl Entity {
    pub(crate) const fn new(id: EntityId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn is_valid(&self) -> bool {
        self.id != INVALID_ENTITY
    }
}
