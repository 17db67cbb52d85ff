//! Projectile lifecycle: summon steering and expiry

use super::{nearest_enemy, priority};
use crate::components::{Projectile, Summon, Transform, Velocity};
use horde_engine::ecs::{System, World};
use horde_engine::foundation::math::direction_to;

/// Counts projectile lifetimes down and removes spent or expired attacks
#[derive(Debug, Default)]
pub struct ProjectileSystem;

impl System for ProjectileSystem {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn priority(&self) -> i32 {
        priority::PROJECTILE
    }

    fn update(&mut self, world: &mut World, dt: f32) {
        for entity in world.entities_with::<(Projectile, Summon, Transform)>() {
            let (Some(position), Some(speed)) = (
                world.get_component::<Transform>(entity).map(|t| t.position),
                world.get_component::<Projectile>(entity).map(|p| p.speed),
            ) else {
                continue;
            };
            if let Some((_, target)) = nearest_enemy(world, position, &[], None) {
                if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                    velocity.linear = direction_to(position, target) * speed;
                }
            }
        }

        for entity in world.entities_with::<(Projectile,)>() {
            let Some(projectile) = world.get_component_mut::<Projectile>(entity) else {
                continue;
            };
            let expired = projectile.tick(dt);
            if expired || projectile.is_spent() {
                world.remove_entity(entity);
            }
        }
    }
}
