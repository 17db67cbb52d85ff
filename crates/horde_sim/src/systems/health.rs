//! Health system: invincibility countdown, regeneration and game over

use super::{emit, priority};
use crate::components::Health;
use crate::events::SimEvent;
use crate::tags;
use horde_engine::ecs::{System, World};

/// Ticks every `Health` and reports the player's death once
#[derive(Debug, Default)]
pub struct HealthSystem {
    game_over_reported: bool,
}

impl System for HealthSystem {
    fn name(&self) -> &'static str {
        "health"
    }

    fn priority(&self) -> i32 {
        priority::HEALTH
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        for entity in world.entities_with::<(Health,)>() {
            if let Some(health) = world.get_component_mut::<Health>(entity) {
                health.tick(dt);
            }
        }

        if self.game_over_reported {
            return;
        }
        let player_dead = world
            .first_with_tag(tags::PLAYER)
            .and_then(|p| world.get_component::<Health>(p))
            .is_some_and(Health::is_dead);
        if player_dead {
            self.game_over_reported = true;
            log::info!("Player has died");
            emit(world, SimEvent::GameOver);
        }
    }
}
