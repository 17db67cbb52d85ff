//! Simulation events for the render and audio layers
//!
//! Collected in an `EventQueue<SimEvent>` resource and drained by the
//! caller after each tick.

use crate::components::{EnemyType, WeaponType};
use horde_engine::ecs::Entity;
use horde_engine::foundation::math::Vec2;

/// Something observable happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    WeaponFired { weapon: WeaponType, origin: Vec2 },
    DamageDealt { target: Entity, amount: f32, position: Vec2 },
    EnemyKilled { enemy: Entity, enemy_type: EnemyType, position: Vec2 },
    PlayerDamaged { amount: f32, remaining: f32 },
    ShieldAbsorbed { amount: f32 },
    ShieldActivated { amount: f32, duration: f32 },
    Healed { amount: f32 },
    ExperienceGained { amount: u32 },
    LevelUp { level: u32 },
    Frozen { target: Entity },
    WaveSpawned { enemy_type: EnemyType, count: u32 },
    GameOver,
}
