//! Weapon system
//!
//! Counts every slot's cooldown down, fires ready slots through their
//! attack behavior and drives the queue of delayed actions.

pub mod behaviors;
pub mod pending;

pub use behaviors::{Cast, DIRECTED_SPREAD};
pub use pending::{ChainStep, PendingAction, PendingQueue};

use super::{emit, priority};
use crate::components::{Player, Transform, Weapon, WeaponSlot, WeaponType};
use crate::data::definition;
use crate::events::SimEvent;
use horde_engine::ecs::{System, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Development filter restricting which weapons may fire.
///
/// `None` fires everything; `Some(list)` fires only the listed types.
/// Filtered slots keep cooling down.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillFilter(pub Option<Vec<WeaponType>>);

impl SkillFilter {
    pub fn allows(&self, weapon_type: WeaponType) -> bool {
        self.0.as_ref().map_or(true, |list| list.contains(&weapon_type))
    }
}

/// Fires weapons and resolves delayed attack steps
pub struct WeaponSystem {
    queue: PendingQueue,
    rng: StdRng,
}

impl WeaponSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            queue: PendingQueue::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Delayed actions waiting to run
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl System for WeaponSystem {
    fn name(&self) -> &'static str {
        "weapon"
    }

    fn priority(&self) -> i32 {
        priority::WEAPON
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        self.queue.advance(dt);
        let filter = world.resource::<SkillFilter>().cloned().unwrap_or_default();

        for caster in world.entities_with::<(Weapon, Transform)>() {
            if let Some(player) = world.get_component_mut::<Player>(caster) {
                player.shield.tick(dt);
            }
            let Some(origin) = world.get_component::<Transform>(caster).map(|t| t.position) else {
                continue;
            };
            let ready: Vec<WeaponSlot> = match world.get_component_mut::<Weapon>(caster) {
                Some(weapon) => weapon
                    .slots
                    .iter_mut()
                    .filter_map(|slot| {
                        if slot.cool_down(dt) && filter.allows(slot.weapon_type) {
                            let fired = slot.clone();
                            slot.reset_cooldown();
                            Some(fired)
                        } else {
                            None
                        }
                    })
                    .collect(),
                None => continue,
            };

            for slot in ready {
                let cast = Cast {
                    caster,
                    origin,
                    weapon: slot.weapon_type,
                    stats: slot.stats,
                };
                behaviors::fire(world, &mut self.rng, &mut self.queue, &cast, &definition(slot.weapon_type).behavior);
                log::trace!("{} fired (level {})", slot.weapon_type, slot.level);
                emit(world, SimEvent::WeaponFired { weapon: slot.weapon_type, origin });
            }
        }

        for action in self.queue.take_ready() {
            behaviors::execute(world, &mut self.queue, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::WeaponStats;
    use crate::config::PlayerConfig;
    use crate::spawn::spawn_player;
    use crate::tags;
    use approx::assert_relative_eq;
    use horde_engine::foundation::math::Vec2;

    fn player_with(world: &mut World, weapons: &[WeaponType]) -> horde_engine::ecs::Entity {
        let config = PlayerConfig { starting_weapons: Vec::new(), ..PlayerConfig::default() };
        let player = spawn_player(world, &config, Vec2::zeros());
        let weapon = world.get_component_mut::<Weapon>(player).unwrap();
        for weapon_type in weapons {
            weapon.add_slot(WeaponSlot::new(*weapon_type, definition(*weapon_type).base));
        }
        player
    }

    #[test]
    fn test_slots_fire_on_first_tick_then_cool_independently() {
        let mut world = World::new();
        let player = player_with(&mut world, &[WeaponType::MagicMissile, WeaponType::RockSpike]);
        let mut system = WeaponSystem::new(1);

        system.update(&mut world, 0.1);
        assert_eq!(world.count_with_tag(tags::PROJECTILE), 2);
        let weapon = world.get_component::<Weapon>(player).unwrap();
        assert_relative_eq!(weapon.slots[0].current_cooldown, 0.8);
        assert_relative_eq!(weapon.slots[1].current_cooldown, 1.5);

        // Within the next 0.9 s only the missile comes round again.
        for _ in 0..9 {
            system.update(&mut world, 0.1);
        }
        assert_eq!(world.count_with_tag(tags::PROJECTILE), 3);
    }

    #[test]
    fn test_filter_blocks_firing_but_not_cooldown() {
        let mut world = World::new();
        let player = player_with(&mut world, &[WeaponType::MagicMissile, WeaponType::RockSpike]);
        world.insert_resource(SkillFilter(Some(vec![WeaponType::RockSpike])));
        let mut system = WeaponSystem::new(1);

        system.update(&mut world, 0.1);
        assert_eq!(world.count_with_tag(tags::PROJECTILE), 1);
        let missile = world.get_component::<Weapon>(player).unwrap().slots[0].clone();
        assert!(missile.current_cooldown <= 0.0);

        world.insert_resource(SkillFilter(Some(Vec::new())));
        system.update(&mut world, 0.1);
        assert_eq!(world.count_with_tag(tags::PROJECTILE), 1);
    }

    #[test]
    fn test_shield_counts_down_and_refreshes() {
        let mut world = World::new();
        let player = player_with(&mut world, &[]);
        world.get_component_mut::<Player>(player).unwrap().shield.activate(5.0, 0.15);
        let mut system = WeaponSystem::new(1);
        system.update(&mut world, 0.1);
        assert!(world.get_component::<Player>(player).unwrap().shield.active);
        system.update(&mut world, 0.1);
        assert!(!world.get_component::<Player>(player).unwrap().shield.active);

        let weapon = world.get_component_mut::<Weapon>(player).unwrap();
        weapon.add_slot(WeaponSlot::new(
            WeaponType::WaterShield,
            WeaponStats { damage: 4.0, duration: 1.0, ..WeaponStats::default() },
        ));
        system.update(&mut world, 0.1);
        let shield = world.get_component::<Player>(player).unwrap().shield;
        assert!(shield.active);
        assert_relative_eq!(shield.amount, 4.0);
    }

    #[test]
    fn test_delayed_meteor_lands_later() {
        let mut world = World::new();
        player_with(&mut world, &[WeaponType::Meteor]);
        let mut system = WeaponSystem::new(1);
        system.update(&mut world, 0.1);
        assert_eq!(world.count_with_tag(tags::PROJECTILE), 0);
        assert_eq!(system.pending(), 1);
        for _ in 0..10 {
            system.update(&mut world, 0.1);
        }
        assert_eq!(world.count_with_tag(tags::PROJECTILE), 1);
        assert_eq!(system.pending(), 0);
    }
}
