//! Velocity component for entities that move in the plane

use crate::ecs::Component;
use crate::foundation::math::{clamp_length, Vec2};

/// Linear velocity with an optional speed cap
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Velocity in units per second
    pub linear: Vec2,
    /// Maximum speed (0 = no limit)
    pub max_speed: f32,
}

impl Component for Velocity {}

impl Velocity {
    /// Stationary, uncapped
    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity from components
    pub fn new(vx: f32, vy: f32) -> Self {
        Self::from_vec(Vec2::new(vx, vy))
    }

    /// Velocity from a vector
    pub fn from_vec(linear: Vec2) -> Self {
        Self {
            linear,
            max_speed: 0.0,
        }
    }

    /// Builder: cap the speed
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Velocity after applying the cap
    pub fn capped(&self) -> Vec2 {
        clamp_length(self.linear, self.max_speed)
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.linear.norm()
    }
}
