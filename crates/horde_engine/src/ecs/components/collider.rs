//! Circle collider component

use crate::ecs::Component;
use crate::physics::CollisionLayers;

/// Default radius when none is given
pub const DEFAULT_RADIUS: f32 = 16.0;

/// Circle collider with layer filtering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collider {
    /// Radius in world units
    pub radius: f32,
    /// Collision layer bitmask (what layer is this entity on?)
    pub layer: CollisionLayers,
    /// Collision mask (what layers does this entity care about?)
    pub mask: CollisionLayers,
    /// Trigger volumes report overlaps without any physical response
    pub is_trigger: bool,
}

impl Component for Collider {}

impl Default for Collider {
    fn default() -> Self {
        Self::circle(DEFAULT_RADIUS)
    }
}

impl Collider {
    /// Collider with no layers set
    pub fn circle(radius: f32) -> Self {
        Self {
            radius,
            layer: CollisionLayers::empty(),
            mask: CollisionLayers::empty(),
            is_trigger: false,
        }
    }

    /// Builder: set layer and mask
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }

    /// Mark this as a trigger volume
    pub fn as_trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }
}
