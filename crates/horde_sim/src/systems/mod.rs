//! Per-tick simulation systems
//!
//! Execution order is fixed by priority:
//! input, movement, weapon, projectile, enemy AI, collision, enemy spawn,
//! health pickup spawn, pickup attraction, health.

pub mod collision;
pub mod enemy_ai;
pub mod health;
pub mod health_pickup;
pub mod input;
pub mod movement;
pub mod pickup;
pub mod projectile;
pub mod spawn;
pub mod weapon;

pub use collision::CollisionSystem;
pub use enemy_ai::EnemyAiSystem;
pub use health::HealthSystem;
pub use health_pickup::HealthPickupSpawnSystem;
pub use input::{InputSystem, MoveIntent};
pub use movement::MovementSystem;
pub use pickup::PickupSystem;
pub use projectile::ProjectileSystem;
pub use spawn::{EnemySpawnSystem, WaveScheduler};
pub use weapon::{SkillFilter, WeaponSystem};

use crate::components::{Enemy, Transform};
use crate::events::SimEvent;
use crate::tags;
use horde_engine::ecs::{Entity, World};
use horde_engine::events::EventQueue;
use horde_engine::foundation::math::Vec2;

/// System priorities, lowest first
pub mod priority {
    pub const INPUT: i32 = 0;
    pub const MOVEMENT: i32 = 10;
    pub const WEAPON: i32 = 20;
    pub const PROJECTILE: i32 = 25;
    pub const ENEMY_AI: i32 = 28;
    pub const COLLISION: i32 = 30;
    pub const ENEMY_SPAWN: i32 = 32;
    pub const HEALTH_PICKUP_SPAWN: i32 = 33;
    pub const PICKUP: i32 = 35;
    pub const HEALTH: i32 = 40;
}

/// The player entity and its position
pub fn player_position(world: &World) -> Option<(Entity, Vec2)> {
    let player = world.first_with_tag(tags::PLAYER)?;
    let transform = world.get_component::<Transform>(player)?;
    Some((player, transform.position))
}

/// Nearest live enemy to `from`, skipping `exclude`, within `max_range` if given.
///
/// Enemies already marked for removal are never targeted.
pub fn nearest_enemy(
    world: &World,
    from: Vec2,
    exclude: &[Entity],
    max_range: Option<f32>,
) -> Option<(Entity, Vec2)> {
    let limit = max_range.map(|r| r * r);
    world
        .iter_with::<Enemy>()
        .filter(|(e, _)| !world.is_pending_removal(*e) && !exclude.contains(e))
        .filter_map(|(e, _)| {
            let position = world.get_component::<Transform>(e)?.position;
            Some((e, position, (position - from).norm_squared()))
        })
        .filter(|(_, _, d2)| limit.map_or(true, |l| *d2 <= l))
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(e, position, _)| (e, position))
}

/// Queue an event for the render layer
pub fn emit(world: &mut World, event: SimEvent) {
    world.resource_or_default::<EventQueue<SimEvent>>().push(event);
}
