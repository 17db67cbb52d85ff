//! Entity tags used by systems and the render layer

use horde_engine::ecs::Tag;

pub const PLAYER: Tag = Tag("player");
pub const ENEMY: Tag = Tag("enemy");
pub const PROJECTILE: Tag = Tag("projectile");
pub const PICKUP: Tag = Tag("pickup");
/// Projectiles that freeze what they hit
pub const ICE: Tag = Tag("ice");
