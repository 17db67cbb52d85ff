//! Player component: progression, shield and passive state

use crate::data::passives::PassiveId;
use horde_engine::ecs::Component;
use std::collections::BTreeMap;

/// Damage-absorbing barrier granted by shield weapons
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shield {
    pub amount: f32,
    pub max: f32,
    /// Seconds until the shield collapses
    pub duration: f32,
    pub active: bool,
}

impl Shield {
    /// Replace any previous shield with a fresh one
    pub fn activate(&mut self, amount: f32, duration: f32) {
        self.amount = amount;
        self.max = amount;
        self.duration = duration;
        self.active = amount > 0.0 && duration > 0.0;
    }

    /// Absorb as much of `damage` as possible and return what passes through.
    pub fn absorb(&mut self, damage: f32) -> f32 {
        if !self.active || damage <= 0.0 {
            return damage.max(0.0);
        }
        if self.amount >= damage {
            self.amount -= damage;
            if self.amount <= 0.0 {
                self.collapse();
            }
            0.0
        } else {
            let rest = damage - self.amount;
            self.collapse();
            rest
        }
    }

    /// Count the duration down, collapsing the shield when it runs out
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.duration -= dt;
        if self.duration <= 0.0 {
            self.collapse();
        }
    }

    fn collapse(&mut self) {
        self.amount = 0.0;
        self.duration = 0.0;
        self.active = false;
    }
}

/// Accumulated passive multipliers on weapon stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatModifiers {
    pub damage: f32,
    pub cooldown: f32,
    pub area: f32,
}

impl Default for StatModifiers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            cooldown: 1.0,
            area: 1.0,
        }
    }
}

/// The character controlled by the external input layer
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub kills: u32,
    pub pickup_radius: f32,
    pub luck: f32,
    /// Flat reduction applied to contact damage
    pub armor: f32,
    pub move_speed: f32,
    pub shield: Shield,
    /// Owned passive levels
    pub passives: BTreeMap<PassiveId, u32>,
    /// Multipliers new weapons inherit
    pub modifiers: StatModifiers,
}

impl Component for Player {}

impl Default for Player {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            xp_to_next: 10,
            kills: 0,
            pickup_radius: 50.0,
            luck: 1.0,
            armor: 0.0,
            move_speed: 150.0,
            shield: Shield::default(),
            passives: BTreeMap::new(),
            modifiers: StatModifiers::default(),
        }
    }
}

impl Player {
    /// Add experience, levelling up as many times as the total allows.
    ///
    /// Overflow carries into the next level; each level raises the
    /// threshold by half, rounded down. Returns the number of level-ups.
    pub fn add_experience(&mut self, amount: u32) -> u32 {
        if amount == 0 {
            return 0;
        }
        self.xp += amount;
        let mut gained = 0;
        while self.xp_to_next > 0 && self.xp >= self.xp_to_next {
            self.xp -= self.xp_to_next;
            self.level += 1;
            self.xp_to_next = self.xp_to_next * 3 / 2;
            gained += 1;
        }
        gained
    }

    /// Owned level of a passive, zero if not owned
    pub fn passive_level(&self, passive: PassiveId) -> u32 {
        self.passives.get(&passive).copied().unwrap_or(0)
    }
}
