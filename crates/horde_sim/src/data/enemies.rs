//! Base stats per enemy archetype

use crate::components::enemy::EnemyType;

/// Unscaled enemy stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub health: f32,
    pub damage: f32,
    pub speed: f32,
    pub xp: u32,
    pub radius: f32,
}

const fn enemy(health: f32, damage: f32, speed: f32, xp: u32, radius: f32) -> EnemyStats {
    EnemyStats {
        health,
        damage,
        speed,
        xp,
        radius,
    }
}

/// Base stats of an archetype
pub const fn base_stats(enemy_type: EnemyType) -> EnemyStats {
    match enemy_type {
        EnemyType::Slime => enemy(15.0, 5.0, 40.0, 1, 12.0),
        EnemyType::Goblin => enemy(20.0, 8.0, 70.0, 2, 14.0),
        EnemyType::Kobold => enemy(18.0, 6.0, 90.0, 2, 13.0),
        EnemyType::Lizardman => enemy(45.0, 12.0, 55.0, 4, 18.0),
        EnemyType::Orc => enemy(80.0, 18.0, 35.0, 6, 22.0),
        EnemyType::Ogre => enemy(400.0, 35.0, 25.0, 50, 32.0),
    }
}

impl EnemyStats {
    /// Apply wave multipliers; health and damage are floored
    pub fn scaled(self, health_multiplier: f32, damage_multiplier: f32) -> Self {
        Self {
            health: (self.health * health_multiplier).floor(),
            damage: (self.damage * damage_multiplier).floor(),
            ..self
        }
    }
}
