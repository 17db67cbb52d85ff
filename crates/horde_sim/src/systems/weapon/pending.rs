//! Delayed weapon actions
//!
//! Staggered impacts and chain jumps are plain data entries with a
//! remaining delay. The queue is advanced exactly once per tick.

use crate::components::WeaponType;
use crate::spawn::AttackSpec;
use horde_engine::ecs::Entity;
use horde_engine::foundation::math::Vec2;

/// One jump of a chain attack
#[derive(Debug, Clone, PartialEq)]
pub struct ChainStep {
    pub weapon: WeaponType,
    pub owner: Option<Entity>,
    pub damage: f32,
    /// Enemy this jump strikes
    pub target: Entity,
    /// Where the target was when the jump was queued
    pub last_point: Vec2,
    /// Every enemy struck by this chain so far, including `target`
    pub hit: Vec<Entity>,
    /// Jumps left including this one
    pub jumps_left: u32,
    pub range: f32,
    pub step_delay: f32,
    pub radius: f32,
    pub lifetime: f32,
}

/// Something a weapon does later
#[derive(Debug, Clone)]
pub enum PendingAction {
    /// Spawn a hit volume
    Impact(AttackSpec),
    /// Resolve the next chain jump
    Chain(ChainStep),
}

#[derive(Debug, Clone)]
struct Entry {
    delay: f32,
    action: PendingAction,
}

/// Delay-ordered list of pending actions, in insertion order
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    entries: Vec<Entry>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to run after `delay` seconds
    pub fn push(&mut self, delay: f32, action: PendingAction) {
        self.entries.push(Entry { delay, action });
    }

    /// Count every delay down by `dt`
    pub fn advance(&mut self, dt: f32) {
        for entry in &mut self.entries {
            entry.delay -= dt;
        }
    }

    /// Remove and return the actions whose delay has run out, oldest first
    pub fn take_ready(&mut self) -> Vec<PendingAction> {
        let (ready, waiting): (Vec<Entry>, Vec<Entry>) =
            std::mem::take(&mut self.entries).into_iter().partition(|e| e.delay <= 0.0);
        self.entries = waiting;
        ready.into_iter().map(|e| e.action).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
