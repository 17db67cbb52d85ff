//! Passive upgrades
//!
//! A passive applies its effect once per level picked. Weapon-stat effects
//! scale every equipped slot and are folded into the player's modifiers so
//! weapons acquired later start with the same bonus.

use crate::components::{Health, Player, Weapon, WeaponStats};
use serde::{Deserialize, Serialize};

/// Level cap for every passive
pub const PASSIVE_MAX_LEVEL: u32 = 5;

/// Passive upgrade identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PassiveId {
    ManaFlow,
    ArcanePower,
    SpellAmplify,
    EnchantedBoots,
    Vitality,
    MagicBarrier,
    Fortune,
    ManaMagnet,
}

/// What one level of a passive does
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PassiveEffect {
    Cooldown(f32),
    Damage(f32),
    Area(f32),
    MoveSpeed(f32),
    MaxHealth(f32),
    Armor(f32),
    Luck(f32),
    PickupRadius(f32),
}

impl PassiveId {
    /// All passives in offer order
    pub const ALL: [Self; 8] = [
        Self::ManaFlow,
        Self::ArcanePower,
        Self::SpellAmplify,
        Self::EnchantedBoots,
        Self::Vitality,
        Self::MagicBarrier,
        Self::Fortune,
        Self::ManaMagnet,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::ManaFlow => "mana_flow",
            Self::ArcanePower => "arcane_power",
            Self::SpellAmplify => "spell_amplify",
            Self::EnchantedBoots => "enchanted_boots",
            Self::Vitality => "vitality",
            Self::MagicBarrier => "magic_barrier",
            Self::Fortune => "fortune",
            Self::ManaMagnet => "mana_magnet",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Effect of a single level. Multipliers are relative factors.
    pub const fn effect(self) -> PassiveEffect {
        match self {
            Self::ManaFlow => PassiveEffect::Cooldown(0.92),
            Self::ArcanePower => PassiveEffect::Damage(1.12),
            Self::SpellAmplify => PassiveEffect::Area(1.15),
            Self::EnchantedBoots => PassiveEffect::MoveSpeed(1.1),
            Self::Vitality => PassiveEffect::MaxHealth(25.0),
            Self::MagicBarrier => PassiveEffect::Armor(1.0),
            Self::Fortune => PassiveEffect::Luck(1.1),
            Self::ManaMagnet => PassiveEffect::PickupRadius(1.3),
        }
    }
}

/// Apply one level of `effect` to the player's components
pub fn apply_effect(
    effect: PassiveEffect,
    player: &mut Player,
    weapon: Option<&mut Weapon>,
    health: Option<&mut Health>,
) {
    match effect {
        PassiveEffect::Cooldown(f) => {
            player.modifiers.cooldown *= f;
            scale_slots(weapon, |stats| stats.cooldown *= f);
        }
        PassiveEffect::Damage(f) => {
            player.modifiers.damage *= f;
            scale_slots(weapon, |stats| stats.damage *= f);
        }
        PassiveEffect::Area(f) => {
            player.modifiers.area *= f;
            scale_slots(weapon, |stats| stats.area *= f);
        }
        PassiveEffect::MoveSpeed(f) => player.move_speed *= f,
        PassiveEffect::MaxHealth(amount) => {
            if let Some(health) = health {
                health.increase_max(amount);
            }
        }
        PassiveEffect::Armor(amount) => player.armor += amount,
        PassiveEffect::Luck(f) => player.luck *= f,
        PassiveEffect::PickupRadius(f) => player.pickup_radius *= f,
    }
}

fn scale_slots(weapon: Option<&mut Weapon>, mut scale: impl FnMut(&mut WeaponStats)) {
    if let Some(weapon) = weapon {
        for slot in &mut weapon.slots {
            scale(&mut slot.stats);
        }
    }
}
