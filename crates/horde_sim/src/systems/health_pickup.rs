//! Periodic health pickup drops

use super::player_position;
use crate::components::Player;
use crate::config::{HealthPickupConfig, PickupConfig};
use crate::spawn::spawn_health_pickup;
use horde_engine::ecs::{System, World};
use horde_engine::foundation::math::Vec2;
use horde_engine::foundation::time::Countdown;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Rolls for a health pickup near the player every interval.
///
/// The chance scales with the player's luck.
pub struct HealthPickupSpawnSystem {
    config: HealthPickupConfig,
    pickups: PickupConfig,
    timer: Countdown,
    rng: StdRng,
}

impl HealthPickupSpawnSystem {
    pub fn new(config: HealthPickupConfig, pickups: PickupConfig, seed: u64) -> Self {
        Self {
            timer: Countdown::new(config.interval),
            config,
            pickups,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl System for HealthPickupSpawnSystem {
    fn name(&self) -> &'static str {
        "health_pickup_spawn"
    }

    fn priority(&self) -> i32 {
        super::priority::HEALTH_PICKUP_SPAWN
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        if !self.timer.tick(dt) {
            return;
        }
        self.timer = Countdown::new(self.config.interval);

        let Some((player, center)) = player_position(world) else {
            return;
        };
        let luck = world.get_component::<Player>(player).map_or(1.0, |p| p.luck);
        let chance = (self.config.chance * luck).clamp(0.0, 1.0);
        if self.rng.gen::<f32>() >= chance {
            return;
        }
        let offset = Vec2::new(
            self.rng.gen_range(-1.0..=1.0) * self.config.half_width,
            self.rng.gen_range(-1.0..=1.0) * self.config.half_height,
        );
        let position = center + offset;
        spawn_health_pickup(world, position, &self.pickups);
        log::debug!("Health pickup dropped at ({:.0}, {:.0})", position.x, position.y);
    }
}
