//! Multi-slot weapon component
//!
//! The player carries one `Weapon` holding an ordered list of slots. Each
//! slot cools down on its own and fires when its cooldown reaches zero.

use horde_engine::ecs::Component;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every weapon the simulation knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponType {
    MagicMissile,
    Fireball,
    FireWall,
    Meteor,
    IceBolt,
    WaterShield,
    Blizzard,
    WindBlade,
    Tornado,
    AirSlash,
    RockSpike,
    Earthquake,
    SummonGolem,
    LightningBolt,
    ChainLightning,
    ThunderStorm,
}

impl WeaponType {
    /// All weapon types in catalog order
    pub const ALL: [Self; 16] = [
        Self::MagicMissile,
        Self::Fireball,
        Self::FireWall,
        Self::Meteor,
        Self::IceBolt,
        Self::WaterShield,
        Self::Blizzard,
        Self::WindBlade,
        Self::Tornado,
        Self::AirSlash,
        Self::RockSpike,
        Self::Earthquake,
        Self::SummonGolem,
        Self::LightningBolt,
        Self::ChainLightning,
        Self::ThunderStorm,
    ];

    /// Magical element of the weapon
    pub const fn element(self) -> Element {
        match self {
            Self::MagicMissile => Element::None,
            Self::Fireball | Self::FireWall | Self::Meteor => Element::Fire,
            Self::IceBolt | Self::WaterShield | Self::Blizzard => Element::Water,
            Self::WindBlade | Self::Tornado | Self::AirSlash => Element::Wind,
            Self::RockSpike | Self::Earthquake | Self::SummonGolem => Element::Earth,
            Self::LightningBolt | Self::ChainLightning | Self::ThunderStorm => Element::Lightning,
        }
    }

    /// Stable identifier used by upgrade options
    pub const fn id(self) -> &'static str {
        match self {
            Self::MagicMissile => "magic_missile",
            Self::Fireball => "fireball",
            Self::FireWall => "fire_wall",
            Self::Meteor => "meteor",
            Self::IceBolt => "ice_bolt",
            Self::WaterShield => "water_shield",
            Self::Blizzard => "blizzard",
            Self::WindBlade => "wind_blade",
            Self::Tornado => "tornado",
            Self::AirSlash => "air_slash",
            Self::RockSpike => "rock_spike",
            Self::Earthquake => "earthquake",
            Self::SummonGolem => "summon_golem",
            Self::LightningBolt => "lightning_bolt",
            Self::ChainLightning => "chain_lightning",
            Self::ThunderStorm => "thunder_storm",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Magical element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    None,
    Fire,
    Water,
    Wind,
    Earth,
    Lightning,
}

/// Stat block shared by every attack behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    /// Damage per hit (shield capacity for shield weapons)
    pub damage: f32,
    /// Seconds between casts
    pub cooldown: f32,
    /// Travel speed of moving attacks
    pub projectile_speed: f32,
    /// Attacks per cast
    pub projectile_count: u32,
    /// Radius multiplier
    pub area: f32,
    /// Seconds an attack persists
    pub duration: f32,
    /// Hits per attack
    pub pierce: i32,
}

impl Default for WeaponStats {
    fn default() -> Self {
        Self {
            damage: 10.0,
            cooldown: 1.0,
            projectile_speed: 300.0,
            projectile_count: 1,
            area: 1.0,
            duration: 2.0,
            pierce: 1,
        }
    }
}

/// Multipliers applied to a slot when it levels up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeCurve {
    pub damage: f32,
    pub cooldown: f32,
    pub area: f32,
    /// Add one attack per cast on every even level
    pub adds_projectiles: bool,
}

/// One equipped weapon
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponSlot {
    pub weapon_type: WeaponType,
    pub level: u32,
    /// Seconds until the next cast; zero means ready
    pub current_cooldown: f32,
    pub stats: WeaponStats,
    pub element: Element,
}

impl WeaponSlot {
    /// A level 1 slot, ready to fire immediately
    pub fn new(weapon_type: WeaponType, stats: WeaponStats) -> Self {
        Self {
            weapon_type,
            level: 1,
            current_cooldown: 0.0,
            stats,
            element: weapon_type.element(),
        }
    }

    /// Count the cooldown down. Returns true when the slot is ready to fire.
    pub fn cool_down(&mut self, dt: f32) -> bool {
        if self.current_cooldown > 0.0 {
            self.current_cooldown -= dt;
        }
        self.current_cooldown <= 0.0
    }

    /// Restart the cooldown after a cast
    pub fn reset_cooldown(&mut self) {
        self.current_cooldown = self.stats.cooldown;
    }

    /// Level up along `curve`
    pub fn upgrade(&mut self, curve: UpgradeCurve) {
        self.level += 1;
        self.stats.damage *= curve.damage;
        self.stats.cooldown *= curve.cooldown;
        self.stats.area *= curve.area;
        if curve.adds_projectiles && self.level % 2 == 0 {
            self.stats.projectile_count += 1;
        }
    }
}

/// Component holding every equipped weapon, in acquisition order
#[derive(Debug, Clone, Default)]
pub struct Weapon {
    pub slots: Vec<WeaponSlot>,
}

impl Component for Weapon {}

impl Weapon {
    /// Empty loadout
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip a weapon. Returns false if one of that type is already equipped.
    pub fn add_slot(&mut self, slot: WeaponSlot) -> bool {
        if self.has(slot.weapon_type) {
            return false;
        }
        self.slots.push(slot);
        true
    }

    /// Whether a weapon of this type is equipped
    pub fn has(&self, weapon_type: WeaponType) -> bool {
        self.slot(weapon_type).is_some()
    }

    pub fn slot(&self, weapon_type: WeaponType) -> Option<&WeaponSlot> {
        self.slots.iter().find(|s| s.weapon_type == weapon_type)
    }

    pub fn slot_mut(&mut self, weapon_type: WeaponType) -> Option<&mut WeaponSlot> {
        self.slots.iter_mut().find(|s| s.weapon_type == weapon_type)
    }

    /// Equipped weapon types with their levels
    pub fn levels(&self) -> Vec<(WeaponType, u32)> {
        self.slots.iter().map(|s| (s.weapon_type, s.level)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_slot_fires_on_first_tick() {
        let mut slot = WeaponSlot::new(WeaponType::Fireball, WeaponStats::default());
        assert!(slot.cool_down(0.016));
        slot.reset_cooldown();
        assert_relative_eq!(slot.current_cooldown, 1.0);
        assert!(!slot.cool_down(0.5));
        assert!(slot.cool_down(0.5));
    }

    #[test]
    fn test_ready_slot_cooldown_does_not_go_further_negative() {
        let mut slot = WeaponSlot::new(WeaponType::Fireball, WeaponStats::default());
        slot.current_cooldown = -0.01;
        assert!(slot.cool_down(1.0));
        assert_relative_eq!(slot.current_cooldown, -0.01);
    }

    #[test]
    fn test_upgrade_adds_projectile_on_even_levels() {
        let curve = UpgradeCurve { damage: 1.2, cooldown: 0.95, area: 1.1, adds_projectiles: true };
        let mut slot = WeaponSlot::new(WeaponType::WindBlade, WeaponStats::default());
        slot.upgrade(curve);
        assert_eq!(slot.level, 2);
        assert_eq!(slot.stats.projectile_count, 2);
        assert_relative_eq!(slot.stats.damage, 12.0);
        assert_relative_eq!(slot.stats.cooldown, 0.95);
        slot.upgrade(curve);
        assert_eq!(slot.stats.projectile_count, 2);
        slot.upgrade(curve);
        assert_eq!(slot.stats.projectile_count, 3);
    }

    #[test]
    fn test_duplicate_weapon_rejected() {
        let mut weapon = Weapon::new();
        assert!(weapon.add_slot(WeaponSlot::new(WeaponType::Meteor, WeaponStats::default())));
        assert!(!weapon.add_slot(WeaponSlot::new(WeaponType::Meteor, WeaponStats::default())));
        assert_eq!(weapon.levels(), vec![(WeaponType::Meteor, 1)]);
    }

    #[test]
    fn test_element_mapping() {
        assert_eq!(WeaponType::Meteor.element(), Element::Fire);
        assert_eq!(WeaponType::ChainLightning.element(), Element::Lightning);
        assert_eq!(WeaponType::MagicMissile.element(), Element::None);
    }
}
