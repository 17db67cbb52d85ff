//! Health component

use horde_engine::ecs::Component;

/// Hit points with regeneration and a temporary invincibility window.
///
/// `current` always stays within `[0, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    /// Current hit points
    pub current: f32,
    /// Maximum hit points
    pub max: f32,
    /// Hit points restored per second
    pub regen_rate: f32,
    /// Seconds of invincibility left
    pub invincibility: f32,
}

impl Component for Health {}

impl Health {
    /// Full health with no regeneration
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            max,
            regen_rate: 0.0,
            invincibility: 0.0,
        }
    }

    /// Builder: set regeneration per second
    pub fn with_regen(mut self, regen_rate: f32) -> Self {
        self.regen_rate = regen_rate;
        self
    }

    /// Whether hit points have run out
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Whether incoming damage is currently ignored
    pub fn is_invincible(&self) -> bool {
        self.invincibility > 0.0
    }

    /// Apply damage. Returns false (and changes nothing) while invincible.
    pub fn damage(&mut self, amount: f32) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.current = (self.current - amount).max(0.0);
        true
    }

    /// Restore hit points up to `max`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let before = self.current;
        self.current = (self.current + amount.max(0.0)).min(self.max);
        self.current - before
    }

    /// Start an invincibility window
    pub fn set_invincible(&mut self, duration: f32) {
        self.invincibility = duration;
    }

    /// Raise both max and current hit points
    pub fn increase_max(&mut self, amount: f32) {
        self.max += amount;
        self.current = (self.current + amount).min(self.max);
    }

    /// Fraction of max health left
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    /// Count down invincibility and apply regeneration
    pub fn tick(&mut self, dt: f32) {
        if self.invincibility > 0.0 {
            self.invincibility = (self.invincibility - dt).max(0.0);
        }
        if self.regen_rate > 0.0 && !self.is_dead() {
            self.heal(self.regen_rate * dt);
        }
    }
}
