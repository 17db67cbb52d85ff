//! Simulation facade
//!
//! Owns one world and its scheduler. The render/UI layer drives it with
//! `tick`, writes movement intent and reads state back through the
//! accessors here.

use crate::components::{Health, Player, Transform, Weapon, WeaponType};
use crate::config::SimulationConfig;
use crate::data::passives::PassiveId;
use crate::data::upgrades::{self, UpgradeOption};
use crate::error::{SimError, UpgradeError};
use crate::events::SimEvent;
use crate::spawn::spawn_player;
use crate::systems::*;
use crate::tags;
use horde_engine::config::Config;
use horde_engine::ecs::{Entity, SystemScheduler, Tag, World};
use horde_engine::events::EventQueue;
use horde_engine::foundation::math::Vec2;
use horde_engine::foundation::time::SimClock;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Snapshot of the player for HUD display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerStats {
    pub health: f32,
    pub max_health: f32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub kills: u32,
    /// Seconds since the run started
    pub elapsed: f32,
}

/// A complete run: world, systems and configuration
pub struct Simulation {
    world: World,
    scheduler: SystemScheduler,
    config: SimulationConfig,
    rng: StdRng,
    player: Entity,
}

impl Simulation {
    /// Build a run with the player at the origin and every system registered
    pub fn new(config: SimulationConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(SimClock::new());
        world.insert_resource(MoveIntent::default());
        world.insert_resource(SkillFilter::default());
        world.insert_resource(EventQueue::<SimEvent>::new());
        let player = spawn_player(&mut world, &config.player, Vec2::zeros());

        let seed = config.seed;
        let mut scheduler = SystemScheduler::new();
        scheduler.add_system(InputSystem);
        scheduler.add_system(MovementSystem);
        scheduler.add_system(WeaponSystem::new(seed));
        scheduler.add_system(ProjectileSystem);
        scheduler.add_system(EnemyAiSystem::new(&config.combat));
        scheduler.add_system(CollisionSystem::new(config.combat.clone(), config.pickups.clone()));
        scheduler.add_system(EnemySpawnSystem::new(&config.spawn, seed.wrapping_add(1)));
        scheduler.add_system(HealthPickupSpawnSystem::new(
            config.health_pickups.clone(),
            config.pickups.clone(),
            seed.wrapping_add(2),
        ));
        scheduler.add_system(PickupSystem);
        scheduler.add_system(HealthSystem::default());
        info!("Simulation ready with {} systems (seed {})", scheduler.len(), seed);

        Self {
            world,
            scheduler,
            rng: StdRng::seed_from_u64(seed.wrapping_add(3)),
            config,
            player,
        }
    }

    /// Load a TOML or RON config and build a run from it
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let config = SimulationConfig::load_from_file(path)?;
        Ok(Self::new(config))
    }

    /// Advance one fixed step. Does nothing once the run is over.
    pub fn tick(&mut self, dt: f32) {
        if self.is_game_over() {
            return;
        }
        self.scheduler.execute_frame(&mut self.world, dt);
    }

    /// Set the desired movement direction for upcoming ticks
    pub fn set_move_intent(&mut self, intent: Vec2) {
        self.world.insert_resource(MoveIntent(intent));
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn player_stats(&self) -> Option<PlayerStats> {
        let player = self.world.get_component::<Player>(self.player)?;
        let health = self.world.get_component::<Health>(self.player)?;
        Some(PlayerStats {
            health: health.current,
            max_health: health.max,
            level: player.level,
            xp: player.xp,
            xp_to_next: player.xp_to_next,
            kills: player.kills,
            elapsed: self.elapsed(),
        })
    }

    pub fn elapsed(&self) -> f32 {
        self.world.resource::<SimClock>().map_or(0.0, SimClock::elapsed)
    }

    pub fn enemy_count(&self) -> usize {
        self.world.count_with_tag(tags::ENEMY)
    }

    pub fn transform(&self, entity: Entity) -> Option<&Transform> {
        self.world.get_component(entity)
    }

    pub fn health(&self, entity: Entity) -> Option<&Health> {
        self.world.get_component(entity)
    }

    pub fn entities_with_tag(&self, tag: Tag) -> Vec<Entity> {
        self.world.entities_with_tag(tag)
    }

    /// Equipped weapons and their levels, in acquisition order
    pub fn owned_weapon_levels(&self) -> Vec<(WeaponType, u32)> {
        self.world
            .get_component::<Weapon>(self.player)
            .map(Weapon::levels)
            .unwrap_or_default()
    }

    pub fn passive_levels(&self) -> Vec<(PassiveId, u32)> {
        self.world
            .get_component::<Player>(self.player)
            .map(|p| p.passives.iter().map(|(id, level)| (*id, *level)).collect())
            .unwrap_or_default()
    }

    /// Up to `count` eligible level-up choices
    pub fn upgrade_options(&mut self, count: usize) -> Vec<UpgradeOption> {
        upgrades::generate_options(
            &self.owned_weapon_levels(),
            &self.passive_levels(),
            &self.config.upgrades.offerable_weapons,
            count,
            &mut self.rng,
        )
    }

    /// Choices for one level-up, sized by the config
    pub fn level_up_options(&mut self) -> Vec<UpgradeOption> {
        self.upgrade_options(self.config.upgrades.options_per_level)
    }

    pub fn apply_upgrade(&mut self, option: &UpgradeOption) -> Result<(), UpgradeError> {
        upgrades::apply_upgrade(&mut self.world, option)
    }

    /// Events produced since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        self.world
            .resource_mut::<EventQueue<SimEvent>>()
            .map(EventQueue::drain)
            .unwrap_or_default()
    }

    /// Whether the player has died
    pub fn is_game_over(&self) -> bool {
        self.world
            .get_component::<Health>(self.player)
            .map_or(true, Health::is_dead)
    }

    /// Restrict firing to `weapons`; `None` lifts the restriction
    pub fn set_skill_filter(&mut self, weapons: Option<Vec<WeaponType>>) {
        self.world.insert_resource(SkillFilter(weapons));
    }

    /// Equip a weapon at level 1. Returns false if it is already owned.
    pub fn add_weapon(&mut self, weapon_type: WeaponType) -> bool {
        let owned = self
            .world
            .get_component::<Weapon>(self.player)
            .is_some_and(|w| w.has(weapon_type));
        !owned && self.apply_upgrade(&UpgradeOption::weapon(weapon_type, 1)).is_ok()
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
