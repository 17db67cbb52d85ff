//! Simulation configuration
//!
//! Every section has a default matching a standard run, so a config file
//! only needs to list what it overrides.

use crate::components::{WeaponStats, WeaponType};
use crate::data::waves::{default_waves, WaveDefinition};
use horde_engine::config::Config;
use serde::{Deserialize, Serialize};

/// Complete simulation configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// RNG seed; each system derives its own stream from it
    pub seed: u64,
    pub player: PlayerConfig,
    pub combat: CombatConfig,
    pub spawn: SpawnConfig,
    pub pickups: PickupConfig,
    pub health_pickups: HealthPickupConfig,
    pub upgrades: UpgradeConfig,
}

impl Config for SimulationConfig {}

/// A weapon the player starts with, optionally overriding catalog stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartingWeapon {
    pub weapon_type: WeaponType,
    #[serde(default)]
    pub stats: Option<WeaponStats>,
}

/// Player setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: f32,
    pub regen_rate: f32,
    pub move_speed: f32,
    pub pickup_radius: f32,
    pub luck: f32,
    pub armor: f32,
    pub radius: f32,
    pub starting_weapons: Vec<StartingWeapon>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let loadout = |weapon_type, stats| StartingWeapon {
            weapon_type,
            stats: Some(stats),
        };
        Self {
            max_health: 100.0,
            regen_rate: 0.0,
            move_speed: 150.0,
            pickup_radius: 50.0,
            luck: 1.0,
            armor: 0.0,
            radius: 18.0,
            starting_weapons: vec![
                loadout(
                    WeaponType::IceBolt,
                    WeaponStats {
                        damage: 11.0,
                        cooldown: 1.5,
                        projectile_speed: 300.0,
                        projectile_count: 1,
                        area: 1.2,
                        duration: 2.0,
                        pierce: 1,
                    },
                ),
                loadout(
                    WeaponType::Fireball,
                    WeaponStats {
                        damage: 15.0,
                        cooldown: 1.2,
                        projectile_speed: 400.0,
                        projectile_count: 1,
                        area: 1.0,
                        duration: 2.0,
                        pierce: 4,
                    },
                ),
                loadout(
                    WeaponType::Meteor,
                    WeaponStats {
                        damage: 80.0,
                        cooldown: 5.0,
                        projectile_speed: 200.0,
                        projectile_count: 1,
                        area: 3.0,
                        duration: 1.0,
                        pierce: crate::components::UNLIMITED_PIERCE,
                    },
                ),
            ],
        }
    }
}

/// Combat tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Invincibility granted to the player after contact damage
    pub contact_invincibility: f32,
    /// Fraction of max health a health pickup restores
    pub health_pickup_fraction: f32,
    pub freeze_duration: f32,
    /// Slow installed when a freeze wears off
    pub slow_factor: f32,
    pub slow_duration: f32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            contact_invincibility: 0.5,
            health_pickup_fraction: 0.3,
            freeze_duration: 3.0,
            slow_factor: 0.2,
            slow_duration: 5.0,
        }
    }
}

/// What a wave does when it fires while the enemy cap is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CapPolicy {
    /// Reset the wave timer and drop the batch
    #[default]
    DropBatch,
    /// Keep the timer armed so the wave fires again next tick
    Retry,
}

/// Enemy wave spawning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub waves: Vec<WaveDefinition>,
    /// Live enemy cap
    pub max_enemies: usize,
    /// Spawn distance band around the player
    pub min_distance: f32,
    pub max_distance: f32,
    pub cap_policy: CapPolicy,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            waves: default_waves(),
            max_enemies: 200,
            min_distance: 400.0,
            max_distance: 500.0,
            cap_policy: CapPolicy::DropBatch,
        }
    }
}

/// Pickup sizes and attraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub experience_radius: f32,
    pub health_radius: f32,
    pub attract_speed: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            experience_radius: 10.0,
            health_radius: 20.0,
            attract_speed: 400.0,
        }
    }
}

/// Periodic health pickup drops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthPickupConfig {
    pub interval: f32,
    /// Chance per interval before luck scaling
    pub chance: f32,
    /// Half extents of the drop window around the player
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for HealthPickupConfig {
    fn default() -> Self {
        Self {
            interval: 15.0,
            chance: 0.3,
            half_width: 512.0,
            half_height: 384.0,
        }
    }
}

/// Upgrade offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpgradeConfig {
    /// Weapons that may show up as upgrade options
    pub offerable_weapons: Vec<WeaponType>,
    /// Options offered per level-up
    pub options_per_level: usize,
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self {
            offerable_weapons: vec![WeaponType::Fireball, WeaponType::IceBolt, WeaponType::Meteor],
            options_per_level: 3,
        }
    }
}
