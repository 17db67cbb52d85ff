//! Input system: movement intent to player velocity

use super::priority;
use crate::components::{Player, Velocity};
use crate::tags;
use horde_engine::ecs::{System, World};
use horde_engine::foundation::math::Vec2;

/// Desired movement direction written by the external input layer.
///
/// Components are in `[-1, 1]`; vectors longer than 1 are normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent(pub Vec2);

/// Converts the `MoveIntent` resource into player velocity
#[derive(Debug, Default)]
pub struct InputSystem;

impl System for InputSystem {
    fn name(&self) -> &'static str {
        "input"
    }

    fn priority(&self) -> i32 {
        priority::INPUT
    }

    fn update(&mut self, world: &mut World, _dt: f32) {
        let mut intent = world.resource::<MoveIntent>().copied().unwrap_or_default().0;
        if intent.norm_squared() > 1.0 {
            intent = intent.normalize();
        }
        for entity in world.entities_with_tag(tags::PLAYER) {
            let Some(speed) = world.get_component::<Player>(entity).map(|p| p.move_speed) else {
                continue;
            };
            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                velocity.linear = intent * speed;
            }
        }
    }
}
