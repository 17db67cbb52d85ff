//! Enemy wave definitions and the default catalog

use crate::components::enemy::EnemyType;
use serde::{Deserialize, Serialize};

/// One time-windowed spawn stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDefinition {
    /// Run time (seconds) at which the wave starts firing
    pub start: f32,
    /// Run time at which the wave stops; `None` runs forever
    #[serde(default)]
    pub end: Option<f32>,
    pub enemy_type: EnemyType,
    /// Enemies per batch
    pub count: u32,
    /// Seconds between batches
    pub interval: f32,
    #[serde(default = "one")]
    pub health_multiplier: f32,
    #[serde(default = "one")]
    pub damage_multiplier: f32,
}

fn one() -> f32 {
    1.0
}

impl WaveDefinition {
    pub fn new(start: f32, end: Option<f32>, enemy_type: EnemyType, count: u32, interval: f32) -> Self {
        Self {
            start,
            end,
            enemy_type,
            count,
            interval,
            health_multiplier: 1.0,
            damage_multiplier: 1.0,
        }
    }

    /// Builder: set stat multipliers
    pub fn with_multipliers(mut self, health: f32, damage: f32) -> Self {
        self.health_multiplier = health;
        self.damage_multiplier = damage;
        self
    }

    /// Whether the wave fires at run time `t`: `start <= t < end`
    pub fn is_active(&self, t: f32) -> bool {
        t >= self.start && self.end.map_or(true, |end| t < end)
    }
}

/// Waves of a standard run
pub fn default_waves() -> Vec<WaveDefinition> {
    vec![
        WaveDefinition::new(0.0, Some(120.0), EnemyType::Slime, 5, 2.0),
        WaveDefinition::new(120.0, None, EnemyType::Slime, 6, 2.5).with_multipliers(1.5, 1.2),
        WaveDefinition::new(60.0, None, EnemyType::Goblin, 4, 2.0),
        WaveDefinition::new(120.0, None, EnemyType::Kobold, 5, 1.8),
        WaveDefinition::new(180.0, None, EnemyType::Lizardman, 3, 2.5),
        WaveDefinition::new(240.0, None, EnemyType::Orc, 2, 3.0),
        WaveDefinition::new(300.0, None, EnemyType::Ogre, 1, 45.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_half_open() {
        let wave = WaveDefinition::new(0.0, Some(120.0), EnemyType::Slime, 5, 2.0);
        assert!(wave.is_active(0.0));
        assert!(wave.is_active(119.9));
        assert!(!wave.is_active(120.0));
        let open = WaveDefinition::new(120.0, None, EnemyType::Slime, 6, 2.5);
        assert!(!open.is_active(119.9));
        assert!(open.is_active(10_000.0));
    }
}
