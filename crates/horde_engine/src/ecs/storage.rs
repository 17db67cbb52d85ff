//! Type-erased component storage
//!
//! Each component type lives in its own `SecondaryMap` keyed by entity, so
//! lookups are a single indexed access and stale handles never match.

use super::{Component, Entity};
use slotmap::SecondaryMap;
use std::any::Any;

/// Object-safe view of a storage, used for whole-entity removal
pub(crate) trait AnyStorage: Send + Sync {
    fn remove_entity(&mut self, entity: Entity);
    fn clear(&mut self);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Dense storage for one component type
pub struct ComponentStorage<T: Component> {
    data: SecondaryMap<Entity, T>,
}

impl<T: Component> ComponentStorage<T> {
    /// Create an empty storage
    pub fn new() -> Self {
        Self {
            data: SecondaryMap::new(),
        }
    }

    /// Insert or replace the component for `entity`
    pub fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        self.data.insert(entity, component)
    }

    /// Remove the component for `entity`
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        self.data.remove(entity)
    }

    /// Borrow the component for `entity`
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.data.get(entity)
    }

    /// Mutably borrow the component for `entity`
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        self.data.get_mut(entity)
    }

    /// Whether `entity` has this component
    pub fn contains(&self, entity: Entity) -> bool {
        self.data.contains_key(entity)
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Component> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> AnyStorage for ComponentStorage<T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.data.remove(entity);
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
