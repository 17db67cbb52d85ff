//! Status effects applied to enemies

use horde_engine::ecs::Component;

/// Enemy cannot move while this is present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Freeze {
    pub remaining: f32,
}

impl Component for Freeze {}

impl Freeze {
    pub fn new(duration: f32) -> Self {
        Self { remaining: duration }
    }

    /// Count down. Returns true once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// Movement speed reduced by `factor` (0.2 = 20% slower)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slow {
    pub factor: f32,
    pub remaining: f32,
}

impl Component for Slow {}

impl Slow {
    pub fn new(factor: f32, duration: f32) -> Self {
        Self {
            factor,
            remaining: duration,
        }
    }

    /// Speed multiplier while active
    pub fn multiplier(&self) -> f32 {
        (1.0 - self.factor).max(0.0)
    }

    /// Count down. Returns true once expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
