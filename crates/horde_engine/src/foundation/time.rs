//! Simulation time management
//!
//! The simulation advances by caller-provided deltas, never wall-clock time.

/// Fixed-step simulation clock, stored in the world as a resource
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimClock {
    elapsed: f32,
    delta: f32,
    tick: u64,
}

impl SimClock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt;
        self.elapsed += dt;
        self.tick += 1;
    }

    /// Delta of the most recent tick in seconds
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Total simulated time in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of ticks advanced
    pub fn tick(&self) -> u64 {
        self.tick
    }
}

/// Countdown timer driven by simulation deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// Start a countdown of `seconds`
    pub fn new(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// Decrement by `dt`. Returns true once the countdown has reached zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }

    /// Seconds left, possibly negative after overshoot
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Whether the countdown has elapsed
    pub fn finished(&self) -> bool {
        self.remaining <= 0.0
    }
}
