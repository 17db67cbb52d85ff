//! Collision detection and combat resolution
//!
//! Each tick every overlapping `{Transform, Collider}` pair is resolved
//! against three rules, in order: player attack vs enemy, player vs enemy
//! contact, player vs pickup. Pairs are visited in creation order.
//!
//! An enemy or pickup already marked for removal this tick is skipped, as
//! is a projectile that has been marked, so nothing dies or gets collected
//! twice.

use super::{emit, priority};
use crate::components::*;
use crate::config::{CombatConfig, PickupConfig};
use crate::events::SimEvent;
use crate::spawn::spawn_experience_orb;
use crate::tags;
use horde_engine::ecs::{Entity, System, World};
use horde_engine::physics::{overlapping_pairs, CircleBody};

/// Resolves damage, deaths, contact attacks and pickup collection
#[derive(Debug, Default)]
pub struct CollisionSystem {
    combat: CombatConfig,
    pickups: PickupConfig,
}

impl CollisionSystem {
    pub fn new(combat: CombatConfig, pickups: PickupConfig) -> Self {
        Self { combat, pickups }
    }

    fn bodies(world: &World) -> Vec<CircleBody> {
        world
            .entities_with::<(Transform, Collider)>()
            .into_iter()
            .filter_map(|entity| {
                let transform = world.get_component::<Transform>(entity)?;
                let collider = world.get_component::<Collider>(entity)?;
                Some(CircleBody {
                    entity,
                    center: transform.position,
                    radius: collider.radius,
                    layer: collider.layer,
                    mask: collider.mask,
                })
            })
            .collect()
    }

    fn resolve_pair(&self, world: &mut World, a: Entity, b: Entity) {
        let projectile_hit = role_pair(world, a, b, tags::PROJECTILE, tags::ENEMY);
        let contact = role_pair(world, a, b, tags::PLAYER, tags::ENEMY);
        let collect = role_pair(world, a, b, tags::PLAYER, tags::PICKUP);

        if let Some((projectile, enemy)) = projectile_hit {
            self.projectile_hit(world, projectile, enemy);
        }
        if let Some((player, enemy)) = contact {
            self.enemy_contact(world, player, enemy);
        }
        if let Some((player, pickup)) = collect {
            self.collect_pickup(world, player, pickup);
        }
    }

    /// Rule 1: player attack strikes an enemy
    pub fn projectile_hit(&self, world: &mut World, projectile: Entity, enemy: Entity) {
        if world.is_pending_removal(enemy) || world.is_pending_removal(projectile) {
            return;
        }
        let Some(proj) = world.get_component_mut::<Projectile>(projectile) else {
            log::error!("projectile {:?} lost its Projectile component", projectile);
            return;
        };
        if !proj.can_hit(enemy) {
            return;
        }
        let damage = proj.damage;
        let owner = proj.owner;
        if proj.register_hit(enemy) {
            world.remove_entity(projectile);
        }

        let Some(health) = world.get_component_mut::<Health>(enemy) else {
            log::error!("enemy {:?} has no Health", enemy);
            return;
        };
        let landed = health.damage(damage);
        let dead = health.is_dead();
        let position = world.get_component::<Transform>(enemy).map_or_else(Default::default, |t| t.position);
        if landed {
            emit(world, SimEvent::DamageDealt { target: enemy, amount: damage, position });
        }

        if world.has_tag(projectile, tags::ICE) && !world.has_component::<Freeze>(enemy) && !dead {
            world.add_component(enemy, Freeze::new(self.combat.freeze_duration));
            if let Some(velocity) = world.get_component_mut::<Velocity>(enemy) {
                velocity.linear = Default::default();
            }
            emit(world, SimEvent::Frozen { target: enemy });
        }

        if dead {
            self.kill_enemy(world, enemy, owner);
        }
    }

    fn kill_enemy(&self, world: &mut World, enemy: Entity, killer: Option<Entity>) {
        let Some(info) = world.get_component::<Enemy>(enemy).map(|e| (e.enemy_type, e.xp_value)) else {
            return;
        };
        let position = world.get_component::<Transform>(enemy).map_or_else(Default::default, |t| t.position);
        spawn_experience_orb(world, position, info.1, &self.pickups);

        let player = killer
            .filter(|k| world.has_component::<Player>(*k))
            .or_else(|| world.first_with_tag(tags::PLAYER));
        if let Some(player) = player.and_then(|p| world.get_component_mut::<Player>(p)) {
            player.kills += 1;
        }
        world.remove_entity(enemy);
        if info.0 == EnemyType::Ogre {
            log::info!("Ogre slain at ({:.0}, {:.0})", position.x, position.y);
        }
        emit(world, SimEvent::EnemyKilled { enemy, enemy_type: info.0, position });
    }

    /// Rule 2: enemy touches the player
    pub fn enemy_contact(&self, world: &mut World, player: Entity, enemy: Entity) {
        if world.is_pending_removal(enemy) {
            return;
        }
        let Some(raw) = world
            .get_component_mut::<Enemy>(enemy)
            .filter(|e| e.can_attack())
            .map(Enemy::attack)
        else {
            return;
        };

        let Some(stats) = world.get_component_mut::<Player>(player) else {
            return;
        };
        let reduced = (raw - stats.armor).max(0.0);
        let passed = stats.shield.absorb(reduced);
        let absorbed = reduced - passed;
        if absorbed > 0.0 {
            emit(world, SimEvent::ShieldAbsorbed { amount: absorbed });
        }
        if passed <= 0.0 {
            return;
        }

        let invincibility = self.combat.contact_invincibility;
        let Some(health) = world.get_component_mut::<Health>(player) else {
            return;
        };
        if health.damage(passed) {
            health.set_invincible(invincibility);
            let remaining = health.current;
            emit(world, SimEvent::PlayerDamaged { amount: passed, remaining });
        }
    }

    /// Rule 3: player walks over a pickup
    pub fn collect_pickup(&self, world: &mut World, player: Entity, pickup: Entity) {
        if world.is_pending_removal(pickup) {
            return;
        }
        let Some(item) = world.get_component::<Pickup>(pickup).copied() else {
            return;
        };
        match item.kind {
            PickupType::Experience => {
                let Some(stats) = world.get_component_mut::<Player>(player) else {
                    return;
                };
                let levels = stats.add_experience(item.value);
                let level = stats.level;
                emit(world, SimEvent::ExperienceGained { amount: item.value });
                if levels > 0 {
                    log::info!("Level up! Now level {}", level);
                    emit(world, SimEvent::LevelUp { level });
                }
            }
            PickupType::Health => {
                let fraction = self.combat.health_pickup_fraction;
                let Some(health) = world.get_component_mut::<Health>(player) else {
                    return;
                };
                let restored = health.heal(health.max * fraction);
                emit(world, SimEvent::Healed { amount: restored });
            }
        }
        world.remove_entity(pickup);
    }
}

/// Order `(a, b)` so the first carries `first` and the second `second`
fn role_pair(
    world: &World,
    a: Entity,
    b: Entity,
    first: horde_engine::ecs::Tag,
    second: horde_engine::ecs::Tag,
) -> Option<(Entity, Entity)> {
    if world.has_tag(a, first) && world.has_tag(b, second) {
        Some((a, b))
    } else if world.has_tag(b, first) && world.has_tag(a, second) {
        Some((b, a))
    } else {
        None
    }
}

impl System for CollisionSystem {
    fn name(&self) -> &'static str {
        "collision"
    }

    fn priority(&self) -> i32 {
        priority::COLLISION
    }

    fn update(&mut self, world: &mut World, _dt: f32) {
        let bodies = Self::bodies(world);
        for pair in overlapping_pairs(&bodies) {
            self.resolve_pair(world, pair.a, pair.b);
        }
    }
}
