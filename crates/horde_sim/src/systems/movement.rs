//! Movement system: integrates velocity into position

use super::priority;
use crate::components::{Transform, Velocity};
use horde_engine::ecs::{System, World};

/// Moves every entity with a transform and velocity
#[derive(Debug, Default)]
pub struct MovementSystem;

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn priority(&self) -> i32 {
        priority::MOVEMENT
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        for entity in world.entities_with::<(Transform, Velocity)>() {
            let Some(step) = world.get_component::<Velocity>(entity).map(|v| v.capped() * dt) else {
                continue;
            };
            if let Some(transform) = world.get_component_mut::<Transform>(entity) {
                transform.position += step;
            }
        }
    }
}
