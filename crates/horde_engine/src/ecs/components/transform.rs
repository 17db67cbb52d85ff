//! Transform component: 2D position, rotation and scale

use crate::ecs::Component;
use crate::foundation::math::Vec2;

/// Position and orientation in the simulation plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Position in world units
    pub position: Vec2,
    /// Rotation in radians
    pub rotation: f32,
    /// Uniform scale
    pub scale: f32,
}

impl Component for Transform {}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Transform at a position
    pub fn at(x: f32, y: f32) -> Self {
        Self::from_position(Vec2::new(x, y))
    }

    /// Transform at a position vector
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Builder: set rotation
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}
