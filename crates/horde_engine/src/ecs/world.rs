//! ECS World implementation
//!
//! The world owns the entity arena, one storage per component type and a
//! map of singleton resources. Removal is deferred: `remove_entity` only
//! marks the entity, and `flush_removals` performs the single sweep at the
//! end of a tick.

use super::entity::EntityRecord;
use super::query::ComponentQuery;
use super::storage::{AnyStorage, ComponentStorage};
use super::{Component, Entity, Tag};
use slotmap::SlotMap;
use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};

/// ECS World containing all entities, components and resources
#[derive(Default)]
pub struct World {
    entities: SlotMap<Entity, EntityRecord>,
    // Creation order; queries iterate this so results are stable.
    order: Vec<Entity>,
    next_serial: u64,
    storages: HashMap<TypeId, Box<dyn AnyStorage>>,
    resources: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    pending_removal: HashSet<Entity>,
}

impl World {
    /// Create a new world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new untagged entity
    pub fn create_entity(&mut self) -> Entity {
        self.create_tagged(&[])
    }

    /// Create an entity with a fixed tag set
    pub fn create_tagged(&mut self, tags: &[Tag]) -> Entity {
        let serial = self.next_serial;
        self.next_serial += 1;
        let entity = self.entities.insert(EntityRecord::new(serial, tags));
        self.order.push(entity);
        entity
    }

    /// Whether the handle refers to an entity that has not been swept
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Monotonic creation number of an entity
    pub fn serial(&self, entity: Entity) -> Option<u64> {
        self.entities.get(entity).map(|r| r.serial)
    }

    /// Number of entities currently stored, including those pending removal
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Enable or disable an entity; inactive entities are skipped by queries
    pub fn set_active(&mut self, entity: Entity, active: bool) {
        if let Some(record) = self.entities.get_mut(entity) {
            record.active = active;
        }
    }

    /// Whether the entity exists and is active
    pub fn is_active(&self, entity: Entity) -> bool {
        self.entities.get(entity).is_some_and(|r| r.active)
    }

    /// Add a component to an entity, replacing any previous value
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) {
        if !self.contains(entity) {
            log::warn!("add_component on missing entity {:?}", entity);
            return;
        }
        self.storage_mut_or_insert::<T>().insert(entity, component);
    }

    /// Remove a component from an entity
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.storage_mut::<T>().and_then(|s| s.remove(entity))
    }

    /// Get a component from an entity
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>().and_then(|s| s.get(entity))
    }

    /// Get a mutable component from an entity
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storage_mut::<T>().and_then(|s| s.get_mut(entity))
    }

    /// Whether an entity carries a component
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.storage::<T>().is_some_and(|s| s.contains(entity))
    }

    /// Mark an entity for removal at the end of the tick.
    ///
    /// The entity stays visible to queries until `flush_removals` runs.
    pub fn remove_entity(&mut self, entity: Entity) {
        if self.contains(entity) {
            self.pending_removal.insert(entity);
        }
    }

    /// Whether the entity has been marked for removal this tick
    pub fn is_pending_removal(&self, entity: Entity) -> bool {
        self.pending_removal.contains(&entity)
    }

    /// Number of entities waiting for the sweep
    pub fn pending_removal_count(&self) -> usize {
        self.pending_removal.len()
    }

    /// Delete every entity marked for removal. Returns how many were swept.
    pub fn flush_removals(&mut self) -> usize {
        if self.pending_removal.is_empty() {
            return 0;
        }
        // Sweep in creation order so slot reuse is reproducible.
        let pending: Vec<Entity> = self
            .order
            .iter()
            .copied()
            .filter(|e| self.pending_removal.contains(e))
            .collect();
        self.pending_removal.clear();
        let mut removed = 0;
        for entity in pending {
            for storage in self.storages.values_mut() {
                storage.remove_entity(entity);
            }
            if self.entities.remove(entity).is_some() {
                removed += 1;
            }
        }
        let entities = &self.entities;
        self.order.retain(|e| entities.contains_key(*e));
        removed
    }

    /// Remove every entity and component, keeping resources
    pub fn clear(&mut self) {
        for storage in self.storages.values_mut() {
            storage.clear();
        }
        self.entities.clear();
        self.order.clear();
        self.pending_removal.clear();
    }

    /// Active entities, in creation order
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied().filter(|e| self.is_active(*e))
    }

    /// Snapshot of active entities carrying every component in `Q`
    pub fn entities_with<Q: ComponentQuery>(&self) -> Vec<Entity> {
        self.entities().filter(|e| Q::matches(self, *e)).collect()
    }

    /// Iterate active entities that have component `T`, with the component
    pub fn iter_with<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        let storage = self.storage::<T>();
        self.entities()
            .filter_map(move |e| storage.and_then(|s| s.get(e)).map(|c| (e, c)))
    }

    /// Snapshot of active entities carrying `tag`
    pub fn entities_with_tag(&self, tag: Tag) -> Vec<Entity> {
        self.entities().filter(|e| self.has_tag(*e, tag)).collect()
    }

    /// Count active entities carrying `tag`
    pub fn count_with_tag(&self, tag: Tag) -> usize {
        self.entities().filter(|e| self.has_tag(*e, tag)).count()
    }

    /// First active entity carrying `tag`
    pub fn first_with_tag(&self, tag: Tag) -> Option<Entity> {
        self.entities().find(|e| self.has_tag(*e, tag))
    }

    /// Whether an entity carries `tag`
    pub fn has_tag(&self, entity: Entity, tag: Tag) -> bool {
        self.entities.get(entity).is_some_and(|r| r.has_tag(tag))
    }

    /// Tags of an entity
    pub fn tags(&self, entity: Entity) -> &[Tag] {
        self.entities.get(entity).map_or(&[], |r| r.tags.as_slice())
    }

    /// Insert or replace a singleton resource
    pub fn insert_resource<R: Any + Send + Sync>(&mut self, resource: R) {
        self.resources.insert(TypeId::of::<R>(), Box::new(resource));
    }

    /// Borrow a resource
    pub fn resource<R: Any + Send + Sync>(&self) -> Option<&R> {
        self.resources
            .get(&TypeId::of::<R>())
            .and_then(|r| r.downcast_ref::<R>())
    }

    /// Mutably borrow a resource
    pub fn resource_mut<R: Any + Send + Sync>(&mut self) -> Option<&mut R> {
        self.resources
            .get_mut(&TypeId::of::<R>())
            .and_then(|r| r.downcast_mut::<R>())
    }

    /// Mutably borrow a resource, inserting its default first if missing
    pub fn resource_or_default<R: Any + Send + Sync + Default>(&mut self) -> &mut R {
        let slot = self
            .resources
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(R::default()));
        if !slot.is::<R>() {
            *slot = Box::new(R::default());
        }
        // Type checked just above.
        slot.downcast_mut::<R>().unwrap_or_else(|| unreachable!())
    }

    /// Remove a resource and return it
    pub fn remove_resource<R: Any + Send + Sync>(&mut self) -> Option<R> {
        self.resources
            .remove(&TypeId::of::<R>())
            .and_then(|r| r.downcast::<R>().ok())
            .map(|b| *b)
    }

    fn storage<T: Component>(&self) -> Option<&ComponentStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|s| s.as_any().downcast_ref::<ComponentStorage<T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut ComponentStorage<T>> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|s| s.as_any_mut().downcast_mut::<ComponentStorage<T>>())
    }

    fn storage_mut_or_insert<T: Component>(&mut self) -> &mut ComponentStorage<T> {
        let slot = self
            .storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentStorage::<T>::new()));
        match slot.as_any_mut().downcast_mut::<ComponentStorage<T>>() {
            Some(storage) => storage,
            None => unreachable!("storage keyed by TypeId holds a different type"),
        }
    }
}
