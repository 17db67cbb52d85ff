//! Projectile component: every transient attack entity carries one

use crate::components::weapon::WeaponType;
use horde_engine::ecs::{Component, Entity};
use std::collections::HashSet;

/// Pierce value used for attacks that should never run out of hits
pub const UNLIMITED_PIERCE: i32 = 999;

/// Damage-carrying attack volume
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Damage per hit
    pub damage: f32,
    /// Travel speed, used by steering summons
    pub speed: f32,
    /// Hits left before the projectile is consumed
    pub pierce: i32,
    /// Seconds left before expiry
    pub lifetime: f32,
    /// Entity that fired it
    pub owner: Option<Entity>,
    /// Weapon that produced it
    pub weapon: WeaponType,
    hit: HashSet<Entity>,
}

impl Component for Projectile {}

impl Projectile {
    /// Create a projectile
    pub fn new(weapon: WeaponType, damage: f32, pierce: i32, lifetime: f32) -> Self {
        Self {
            damage,
            speed: 0.0,
            pierce,
            lifetime,
            owner: None,
            weapon,
            hit: HashSet::new(),
        }
    }

    /// Builder: set travel speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Builder: set owner
    pub fn with_owner(mut self, owner: Entity) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Builder: treat these entities as already hit
    pub fn with_prior_hits(mut self, hits: impl IntoIterator<Item = Entity>) -> Self {
        self.hit.extend(hits);
        self
    }

    /// Whether this projectile may damage `target`
    pub fn can_hit(&self, target: Entity) -> bool {
        self.pierce > 0 && !self.hit.contains(&target)
    }

    /// Record a hit on `target`. Returns true when the projectile is spent.
    ///
    /// Pierce only drops the first time a given target is recorded.
    pub fn register_hit(&mut self, target: Entity) -> bool {
        if self.hit.insert(target) {
            self.pierce -= 1;
        }
        self.is_spent()
    }

    /// Whether pierce has run out
    pub fn is_spent(&self) -> bool {
        self.pierce <= 0
    }

    /// Whether `target` has been recorded
    pub fn has_hit(&self, target: Entity) -> bool {
        self.hit.contains(&target)
    }

    /// Number of distinct targets hit
    pub fn hit_count(&self) -> usize {
        self.hit.len()
    }

    /// Count down lifetime. Returns true once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.lifetime -= dt;
        self.lifetime <= 0.0
    }
}

/// Marks a projectile that keeps re-aiming at the nearest enemy
#[derive(Debug, Clone, Copy, Default)]
pub struct Summon;

impl Component for Summon {}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_engine::ecs::World;

    #[test]
    fn test_hit_set_is_unique_and_pierce_drops_once_per_target() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut p = Projectile::new(WeaponType::WindBlade, 6.0, 3, 1.0);

        assert!(p.can_hit(a));
        assert!(!p.register_hit(a));
        assert!(!p.can_hit(a));
        // Re-registering the same target neither double counts nor spends pierce.
        assert!(!p.register_hit(a));
        assert_eq!(p.pierce, 2);
        assert_eq!(p.hit_count(), 1);

        assert!(!p.register_hit(b));
        assert_eq!(p.pierce, 1);
        assert_eq!(p.hit_count(), 2);
    }

    #[test]
    fn test_spent_projectile_cannot_hit() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        let mut p = Projectile::new(WeaponType::MagicMissile, 8.0, 1, 2.0);
        assert!(p.register_hit(a));
        assert!(!p.can_hit(b));
    }

    #[test]
    fn test_lifetime_expiry() {
        let mut p = Projectile::new(WeaponType::Earthquake, 15.0, UNLIMITED_PIERCE, 1.0);
        assert!(!p.tick(0.6));
        assert!(p.tick(0.4));
    }

    #[test]
    fn test_prior_hits_are_excluded() {
        let mut world = World::new();
        let a = world.create_entity();
        let p = Projectile::new(WeaponType::ChainLightning, 12.0, 1, 0.1).with_prior_hits([a]);
        assert!(!p.can_hit(a));
        assert_eq!(p.pierce, 1);
    }
}
