//! Enemy AI: attack cooldowns, status effects and steering

use super::{player_position, priority};
use crate::components::{Enemy, Freeze, Slow, Transform, Velocity};
use crate::config::CombatConfig;
use horde_engine::ecs::{Entity, System, World};
use horde_engine::foundation::math::{direction_to, Vec2};

/// Steers enemies toward the player, honouring freeze and slow
#[derive(Debug, Default)]
pub struct EnemyAiSystem {
    slow_factor: f32,
    slow_duration: f32,
}

impl EnemyAiSystem {
    pub fn new(config: &CombatConfig) -> Self {
        Self {
            slow_factor: config.slow_factor,
            slow_duration: config.slow_duration,
        }
    }

    /// Advance status effects. Returns the speed multiplier, or `None` while frozen.
    fn update_status(&self, world: &mut World, entity: Entity, dt: f32) -> Option<f32> {
        let mut slow_installed = false;
        if let Some(freeze) = world.get_component_mut::<Freeze>(entity) {
            if !freeze.tick(dt) {
                return None;
            }
            world.remove_component::<Freeze>(entity);
            if !world.has_component::<Slow>(entity) {
                world.add_component(entity, Slow::new(self.slow_factor, self.slow_duration));
                slow_installed = true;
            }
        }

        // A slow installed this tick starts counting down next tick.
        if !slow_installed {
            if let Some(slow) = world.get_component_mut::<Slow>(entity) {
                if slow.tick(dt) {
                    world.remove_component::<Slow>(entity);
                }
            }
        }
        Some(world.get_component::<Slow>(entity).map_or(1.0, Slow::multiplier))
    }
}

impl System for EnemyAiSystem {
    fn name(&self) -> &'static str {
        "enemy_ai"
    }

    fn priority(&self) -> i32 {
        priority::ENEMY_AI
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        let target = player_position(world).map(|(_, p)| p);

        for entity in world.entities_with::<(Enemy, Transform, Velocity)>() {
            let Some(move_speed) = world.get_component_mut::<Enemy>(entity).map(|enemy| {
                enemy.update_cooldown(dt);
                enemy.move_speed
            }) else {
                continue;
            };

            let velocity = match (self.update_status(world, entity, dt), target) {
                (Some(multiplier), Some(target)) => {
                    let position = world.get_component::<Transform>(entity).map_or(target, |t| t.position);
                    direction_to(position, target) * move_speed * multiplier
                }
                _ => Vec2::zeros(),
            };
            if let Some(v) = world.get_component_mut::<Velocity>(entity) {
                v.linear = velocity;
            }
        }
    }
}
