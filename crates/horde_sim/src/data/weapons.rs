//! Static weapon catalog
//!
//! Each weapon type maps to a definition: its base stats, level cap and the
//! attack behavior the weapon system dispatches on.

use crate::components::projectile::UNLIMITED_PIERCE;
use crate::components::weapon::{UpgradeCurve, WeaponStats, WeaponType};

/// Level cap shared by every weapon
pub const WEAPON_MAX_LEVEL: u32 = 8;

/// Where scatter impacts land, relative to the caster
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Uniform in a disc of `radius × area`
    Disc { radius: f32 },
    /// Uniform in an annulus between `inner` and `outer`
    Ring { inner: f32, outer: f32 },
    /// Uniform in a rectangle of the given half extents
    Field { half_width: f32, half_height: f32 },
}

/// Parameters of a scatter-burst weapon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPattern {
    pub placement: Placement,
    /// Extra delay per impact index
    pub stagger: f32,
    /// Random extra delay in `[0, jitter)`
    pub jitter: f32,
    /// Delay before the first impact lands
    pub impact_delay: f32,
    /// Hit volume radius, scaled by area
    pub radius: f32,
    /// Hit volume lifetime; `None` uses the weapon's duration
    pub lifetime: Option<f32>,
    /// Hits per volume; `None` uses the weapon's pierce
    pub pierce: Option<i32>,
    /// Impacts freeze what they hit
    pub freezes: bool,
}

/// Attack pattern families
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttackBehavior {
    /// Moving shots aimed at the nearest enemy, fanned around the aim angle
    Directed { radius: f32 },
    /// Moving shots spaced evenly around a full circle
    Radial { radius: f32 },
    /// Stationary pulse centred on the caster
    Aura { radius: f32 },
    /// Stationary zone pushed out toward the nearest enemy
    Wall { offset: f32, radius: f32 },
    /// Long-lived attacker that keeps chasing enemies
    Summon { radius: f32, scatter: f32 },
    /// Delayed hit volumes at random positions
    Scatter(ScatterPattern),
    /// Moving volume aimed once at cast time
    Homing { radius: f32 },
    /// Stationary burst on the nearest enemy
    TargetPoint { radius: f32, fallback: f32 },
    /// Jumps from enemy to enemy with a delay per step
    Chain { range: f32, step_delay: f32, radius: f32, lifetime: f32 },
    /// Refreshes the caster's shield
    Shield,
}

impl AttackBehavior {
    /// Per-level multipliers for this family
    pub const fn upgrade_curve(&self) -> UpgradeCurve {
        match self {
            Self::Aura { .. } => UpgradeCurve {
                damage: 1.25,
                cooldown: 1.0,
                area: 1.15,
                adds_projectiles: false,
            },
            _ => UpgradeCurve {
                damage: 1.2,
                cooldown: 0.95,
                area: 1.1,
                adds_projectiles: true,
            },
        }
    }
}

/// Static description of a weapon
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponDefinition {
    pub weapon_type: WeaponType,
    pub name: &'static str,
    pub base: WeaponStats,
    pub max_level: u32,
    pub behavior: AttackBehavior,
}

const fn stats(
    damage: f32,
    cooldown: f32,
    projectile_speed: f32,
    projectile_count: u32,
    area: f32,
    duration: f32,
    pierce: i32,
) -> WeaponStats {
    WeaponStats {
        damage,
        cooldown,
        projectile_speed,
        projectile_count,
        area,
        duration,
        pierce,
    }
}

const fn def(
    weapon_type: WeaponType,
    name: &'static str,
    base: WeaponStats,
    behavior: AttackBehavior,
) -> WeaponDefinition {
    WeaponDefinition {
        weapon_type,
        name,
        base,
        max_level: WEAPON_MAX_LEVEL,
        behavior,
    }
}

const U: i32 = UNLIMITED_PIERCE;

// Indexed by `WeaponType as usize`.
static DEFINITIONS: [WeaponDefinition; 16] = [
    def(
        WeaponType::MagicMissile,
        "Magic Missile",
        stats(8.0, 0.8, 350.0, 1, 1.0, 2.0, 1),
        AttackBehavior::Directed { radius: 8.0 },
    ),
    def(
        WeaponType::Fireball,
        "Fireball",
        stats(15.0, 1.2, 300.0, 1, 1.3, 2.5, 1),
        AttackBehavior::Directed { radius: 10.0 },
    ),
    def(
        WeaponType::FireWall,
        "Fire Wall",
        stats(6.0, 3.0, 0.0, 1, 2.0, 4.0, U),
        AttackBehavior::Wall { offset: 80.0, radius: 40.0 },
    ),
    def(
        WeaponType::Meteor,
        "Meteor",
        stats(40.0, 5.0, 400.0, 1, 2.5, 1.5, U),
        AttackBehavior::Scatter(ScatterPattern {
            placement: Placement::Field { half_width: 409.6, half_height: 307.2 },
            stagger: 0.3,
            jitter: 0.0,
            impact_delay: 0.917,
            radius: 80.0,
            lifetime: Some(0.5),
            pierce: None,
            freezes: false,
        }),
    ),
    def(
        WeaponType::IceBolt,
        "Ice Bolt",
        stats(3.0, 2.0, 0.0, 1, 1.2, 1.5, U),
        AttackBehavior::Scatter(ScatterPattern {
            placement: Placement::Ring { inner: 50.0, outer: 120.0 },
            stagger: 0.0,
            jitter: 0.0,
            impact_delay: 0.0,
            radius: 80.0,
            lifetime: None,
            pierce: Some(U),
            freezes: true,
        }),
    ),
    def(
        WeaponType::WaterShield,
        "Water Shield",
        stats(4.0, 0.5, 0.0, 1, 1.8, 0.1, U),
        AttackBehavior::Shield,
    ),
    def(
        WeaponType::Blizzard,
        "Blizzard",
        stats(8.0, 4.0, 0.0, 8, 3.0, 5.0, U),
        AttackBehavior::Scatter(ScatterPattern {
            placement: Placement::Disc { radius: 100.0 },
            stagger: 0.2,
            jitter: 0.0,
            impact_delay: 0.0,
            radius: 15.0,
            lifetime: Some(0.5),
            pierce: Some(1),
            freezes: false,
        }),
    ),
    def(
        WeaponType::WindBlade,
        "Wind Blade",
        stats(6.0, 0.4, 600.0, 2, 0.7, 1.0, 2),
        AttackBehavior::Directed { radius: 8.0 },
    ),
    def(
        WeaponType::Tornado,
        "Tornado",
        stats(5.0, 4.0, 100.0, 1, 2.0, 5.0, U),
        AttackBehavior::Homing { radius: 35.0 },
    ),
    def(
        WeaponType::AirSlash,
        "Air Slash",
        stats(12.0, 2.0, 350.0, 8, 1.0, 1.5, 3),
        AttackBehavior::Radial { radius: 8.0 },
    ),
    def(
        WeaponType::RockSpike,
        "Rock Spike",
        stats(20.0, 1.5, 0.0, 1, 1.5, 0.5, U),
        AttackBehavior::TargetPoint { radius: 25.0, fallback: 50.0 },
    ),
    def(
        WeaponType::Earthquake,
        "Earthquake",
        stats(15.0, 5.0, 0.0, 1, 4.0, 1.0, U),
        AttackBehavior::Aura { radius: 50.0 },
    ),
    def(
        WeaponType::SummonGolem,
        "Summon Golem",
        stats(25.0, 15.0, 60.0, 1, 2.0, 8.0, U),
        AttackBehavior::Summon { radius: 24.0, scatter: 30.0 },
    ),
    def(
        WeaponType::LightningBolt,
        "Lightning Bolt",
        stats(18.0, 1.0, 1000.0, 1, 0.8, 0.3, 2),
        AttackBehavior::Directed { radius: 8.0 },
    ),
    def(
        WeaponType::ChainLightning,
        "Chain Lightning",
        stats(12.0, 1.5, 800.0, 1, 1.0, 0.5, 5),
        AttackBehavior::Chain { range: 150.0, step_delay: 0.1, radius: 15.0, lifetime: 0.1 },
    ),
    def(
        WeaponType::ThunderStorm,
        "Thunder Storm",
        stats(22.0, 3.0, 0.0, 5, 1.2, 3.0, U),
        AttackBehavior::Scatter(ScatterPattern {
            placement: Placement::Disc { radius: 150.0 },
            stagger: 0.3,
            jitter: 0.2,
            impact_delay: 0.0,
            radius: 20.0,
            lifetime: Some(0.3),
            pierce: None,
            freezes: false,
        }),
    ),
];

/// Definition of a weapon type
pub fn definition(weapon_type: WeaponType) -> &'static WeaponDefinition {
    &DEFINITIONS[weapon_type as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_type() {
        for weapon_type in WeaponType::ALL {
            assert_eq!(definition(weapon_type).weapon_type, weapon_type);
        }
    }

    #[test]
    fn test_aura_keeps_projectile_count() {
        let quake = definition(WeaponType::Earthquake).behavior.upgrade_curve();
        assert!(!quake.adds_projectiles);
        assert_eq!(quake.cooldown, 1.0);
        let missile = definition(WeaponType::MagicMissile).behavior.upgrade_curve();
        assert!(missile.adds_projectiles);
    }

    #[test]
    fn test_only_ice_bolt_freezes() {
        for weapon_type in WeaponType::ALL {
            let freezes = matches!(
                definition(weapon_type).behavior,
                AttackBehavior::Scatter(ScatterPattern { freezes: true, .. })
            );
            assert_eq!(freezes, weapon_type == WeaponType::IceBolt);
        }
    }
}
