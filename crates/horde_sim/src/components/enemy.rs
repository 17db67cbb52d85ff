//! Enemy component

use horde_engine::ecs::Component;
use serde::{Deserialize, Serialize};

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyType {
    Slime,
    Goblin,
    Kobold,
    Lizardman,
    Orc,
    Ogre,
}

/// Hostile that chases the player and deals contact damage
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub enemy_type: EnemyType,
    /// Contact damage per attack
    pub damage: f32,
    /// Experience dropped on death
    pub xp_value: u32,
    /// Base chase speed
    pub move_speed: f32,
    /// Seconds between contact attacks
    pub attack_cooldown: f32,
    /// Seconds until the next attack is allowed
    pub attack_timer: f32,
}

impl Component for Enemy {}

impl Enemy {
    /// Default seconds between contact attacks
    pub const DEFAULT_ATTACK_COOLDOWN: f32 = 1.0;

    pub fn new(enemy_type: EnemyType, damage: f32, xp_value: u32, move_speed: f32) -> Self {
        Self {
            enemy_type,
            damage,
            xp_value,
            move_speed,
            attack_cooldown: Self::DEFAULT_ATTACK_COOLDOWN,
            attack_timer: 0.0,
        }
    }

    /// Whether the attack cooldown has elapsed
    pub fn can_attack(&self) -> bool {
        self.attack_timer <= 0.0
    }

    /// Start the attack cooldown and return the contact damage
    pub fn attack(&mut self) -> f32 {
        self.attack_timer = self.attack_cooldown;
        self.damage
    }

    pub fn update_cooldown(&mut self, dt: f32) {
        if self.attack_timer > 0.0 {
            self.attack_timer -= dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_starts_cooldown() {
        let mut enemy = Enemy::new(EnemyType::Slime, 5.0, 1, 40.0);
        assert!(enemy.can_attack());
        assert_eq!(enemy.attack(), 5.0);
        assert!(!enemy.can_attack());
        enemy.update_cooldown(0.5);
        assert!(!enemy.can_attack());
        enemy.update_cooldown(0.5);
        assert!(enemy.can_attack());
    }
}
