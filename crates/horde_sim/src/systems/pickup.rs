//! Pickup attraction toward the player

use super::{player_position, priority};
use crate::components::{Pickup, Player, Transform};
use horde_engine::ecs::{System, World};
use horde_engine::foundation::math::direction_to;

/// Pulls pickups inside the player's pickup radius toward the player.
///
/// Attraction is permanent once it starts.
#[derive(Debug, Default)]
pub struct PickupSystem;

impl System for PickupSystem {
    fn name(&self) -> &'static str {
        "pickup"
    }

    fn priority(&self) -> i32 {
        priority::PICKUP
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        let Some((player, target)) = player_position(world) else {
            return;
        };
        let radius = world.get_component::<Player>(player).map_or(0.0, |p| p.pickup_radius);

        for entity in world.entities_with::<(Pickup, Transform)>() {
            let Some(position) = world.get_component::<Transform>(entity).map(|t| t.position) else {
                continue;
            };
            let distance = (target - position).norm();
            let Some(pickup) = world.get_component_mut::<Pickup>(entity) else {
                continue;
            };
            if !pickup.attracted && distance < radius {
                pickup.attracted = true;
            }
            if !pickup.attracted {
                continue;
            }
            let step = (pickup.attract_speed * dt).min(distance);
            if let Some(transform) = world.get_component_mut::<Transform>(entity) {
                transform.position += direction_to(position, target) * step;
            }
        }
    }
}
