//! Pickup component

use horde_engine::ecs::Component;

/// Kind of collectible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickupType {
    /// Grants experience equal to `value`
    Experience,
    /// Restores a fraction of max health
    Health,
}

/// Collectible dropped in the world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub kind: PickupType,
    pub value: u32,
    /// Once set the pickup flies to the player until collected
    pub attracted: bool,
    pub attract_speed: f32,
}

impl Component for Pickup {}

impl Pickup {
    pub fn experience(value: u32, attract_speed: f32) -> Self {
        Self {
            kind: PickupType::Experience,
            value,
            attracted: false,
            attract_speed,
        }
    }

    pub fn health(attract_speed: f32) -> Self {
        Self {
            kind: PickupType::Health,
            value: 0,
            attracted: false,
            attract_speed,
        }
    }
}
