//! Level-up offers and their application

use crate::components::{Health, Player, Weapon, WeaponSlot, WeaponStats, WeaponType};
use crate::data::passives::{apply_effect, PassiveId, PASSIVE_MAX_LEVEL};
use crate::data::weapons::{definition, WEAPON_MAX_LEVEL};
use crate::error::UpgradeError;
use crate::tags;
use horde_engine::ecs::World;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// What an option upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    Weapon,
    Passive,
}

/// A single level-up choice.
///
/// `level` is the level the target reaches once applied; a weapon option at
/// level 1 grants a new weapon.
#[derive(Debug, Clone, PartialEq)]
pub struct UpgradeOption {
    pub kind: UpgradeKind,
    pub weapon: Option<WeaponType>,
    pub passive: Option<PassiveId>,
    pub id: String,
    pub level: u32,
}

impl UpgradeOption {
    pub fn weapon(weapon_type: WeaponType, level: u32) -> Self {
        Self {
            kind: UpgradeKind::Weapon,
            weapon: Some(weapon_type),
            passive: None,
            id: weapon_type.id().to_string(),
            level,
        }
    }

    pub fn passive(passive: PassiveId, level: u32) -> Self {
        Self {
            kind: UpgradeKind::Passive,
            weapon: None,
            passive: Some(passive),
            id: passive.id().to_string(),
            level,
        }
    }

    /// Whether this option adds a weapon rather than levelling one
    pub fn is_new_weapon(&self) -> bool {
        self.kind == UpgradeKind::Weapon && self.level == 1
    }
}

/// Eligible options for the current loadout, shuffled and cut to `count`.
pub fn generate_options<R: Rng + ?Sized>(
    owned_weapons: &[(WeaponType, u32)],
    owned_passives: &[(PassiveId, u32)],
    offerable: &[WeaponType],
    count: usize,
    rng: &mut R,
) -> Vec<UpgradeOption> {
    let weapon_level = |t: WeaponType| owned_weapons.iter().find(|(w, _)| *w == t).map_or(0, |(_, l)| *l);
    let passive_level = |p: PassiveId| owned_passives.iter().find(|(q, _)| *q == p).map_or(0, |(_, l)| *l);

    let mut options: Vec<UpgradeOption> = offerable
        .iter()
        .filter(|t| weapon_level(**t) < definition(**t).max_level)
        .map(|t| UpgradeOption::weapon(*t, weapon_level(*t) + 1))
        .collect();
    options.extend(
        PassiveId::ALL
            .into_iter()
            .filter(|p| passive_level(*p) < PASSIVE_MAX_LEVEL)
            .map(|p| UpgradeOption::passive(p, passive_level(p) + 1)),
    );

    options.shuffle(rng);
    options.truncate(count);
    options
}

/// Apply `option` to the world's player
pub fn apply_upgrade(world: &mut World, option: &UpgradeOption) -> Result<(), UpgradeError> {
    let result = match (option.kind, option.weapon, option.passive) {
        (UpgradeKind::Weapon, Some(weapon_type), _) => apply_weapon(world, weapon_type, option.level),
        (UpgradeKind::Passive, _, Some(passive)) => apply_passive(world, passive),
        _ => Err(UpgradeError::Unknown(option.id.clone())),
    };
    if let Err(e) = &result {
        warn!("Rejected upgrade {}: {}", option.id, e);
    }
    result
}

fn apply_weapon(world: &mut World, weapon_type: WeaponType, level: u32) -> Result<(), UpgradeError> {
    let player = world.first_with_tag(tags::PLAYER).ok_or(UpgradeError::NoPlayer)?;
    let modifiers = world
        .get_component::<Player>(player)
        .ok_or(UpgradeError::NoPlayer)?
        .modifiers;
    let def = definition(weapon_type);

    if world.get_component::<Weapon>(player).is_none() {
        world.add_component(player, Weapon::new());
    }
    let weapon = world
        .get_component_mut::<Weapon>(player)
        .ok_or(UpgradeError::NoPlayer)?;

    if let Some(slot) = weapon.slot_mut(weapon_type) {
        if slot.level >= def.max_level {
            return Err(UpgradeError::MaxLevel {
                id: weapon_type.id().to_string(),
                max: WEAPON_MAX_LEVEL,
            });
        }
        slot.upgrade(def.behavior.upgrade_curve());
        info!("{} upgraded to level {}", def.name, slot.level);
        return Ok(());
    }

    if level != 1 {
        return Err(UpgradeError::NotOwned(weapon_type));
    }
    let stats = WeaponStats {
        damage: def.base.damage * modifiers.damage,
        cooldown: def.base.cooldown * modifiers.cooldown,
        area: def.base.area * modifiers.area,
        ..def.base
    };
    weapon.add_slot(WeaponSlot::new(weapon_type, stats));
    info!("Acquired {}", def.name);
    Ok(())
}

fn apply_passive(world: &mut World, passive: PassiveId) -> Result<(), UpgradeError> {
    let entity = world.first_with_tag(tags::PLAYER).ok_or(UpgradeError::NoPlayer)?;
    let mut player = world
        .get_component::<Player>(entity)
        .cloned()
        .ok_or(UpgradeError::NoPlayer)?;
    let level = player.passive_level(passive);
    if level >= PASSIVE_MAX_LEVEL {
        return Err(UpgradeError::MaxLevel {
            id: passive.id().to_string(),
            max: PASSIVE_MAX_LEVEL,
        });
    }

    let mut weapon = world.get_component::<Weapon>(entity).cloned();
    let mut health = world.get_component::<Health>(entity).copied();
    apply_effect(passive.effect(), &mut player, weapon.as_mut(), health.as_mut());
    player.passives.insert(passive, level + 1);
    info!("{} raised to level {}", passive.id(), level + 1);

    world.add_component(entity, player);
    if let Some(weapon) = weapon {
        world.add_component(entity, weapon);
    }
    if let Some(health) = health {
        world.add_component(entity, health);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerConfig;
    use crate::spawn::spawn_player;
    use approx::assert_relative_eq;
    use horde_engine::foundation::math::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world_with_player() -> (World, horde_engine::ecs::Entity) {
        let mut world = World::new();
        let player = spawn_player(&mut world, &PlayerConfig::default(), Vec2::zeros());
        (world, player)
    }

    #[test]
    fn test_options_exclude_maxed_entries() {
        let mut rng = StdRng::seed_from_u64(1);
        let owned = [(WeaponType::Fireball, WEAPON_MAX_LEVEL), (WeaponType::IceBolt, 2)];
        let passives = [(PassiveId::ManaFlow, PASSIVE_MAX_LEVEL)];
        let options = generate_options(
            &owned,
            &passives,
            &[WeaponType::Fireball, WeaponType::IceBolt, WeaponType::Meteor],
            usize::MAX,
            &mut rng,
        );

        assert!(options.iter().all(|o| o.weapon != Some(WeaponType::Fireball)));
        assert!(options.iter().all(|o| o.passive != Some(PassiveId::ManaFlow)));
        let ice = options.iter().find(|o| o.weapon == Some(WeaponType::IceBolt)).unwrap();
        assert_eq!(ice.level, 3);
        let meteor = options.iter().find(|o| o.weapon == Some(WeaponType::Meteor)).unwrap();
        assert!(meteor.is_new_weapon());
        // 2 weapons + 7 passives
        assert_eq!(options.len(), 9);
    }

    #[test]
    fn test_options_truncated_to_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = generate_options(&[], &[], &[WeaponType::Fireball], 3, &mut rng);
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_upgrade_owned_weapon() {
        let (mut world, player) = world_with_player();
        apply_upgrade(&mut world, &UpgradeOption::weapon(WeaponType::Fireball, 2)).unwrap();

        let slot = world
            .get_component::<Weapon>(player)
            .unwrap()
            .slot(WeaponType::Fireball)
            .cloned()
            .unwrap();
        assert_eq!(slot.level, 2);
        assert_relative_eq!(slot.stats.damage, 18.0, epsilon = 1e-4);
        assert_relative_eq!(slot.stats.cooldown, 1.14, epsilon = 1e-4);
        assert_eq!(slot.stats.projectile_count, 2);
    }

    #[test]
    fn test_upgrade_at_max_level_rejected() {
        let (mut world, player) = world_with_player();
        world
            .get_component_mut::<Weapon>(player)
            .unwrap()
            .slot_mut(WeaponType::Meteor)
            .unwrap()
            .level = WEAPON_MAX_LEVEL;

        let err = apply_upgrade(&mut world, &UpgradeOption::weapon(WeaponType::Meteor, 9)).unwrap_err();
        assert!(matches!(err, UpgradeError::MaxLevel { max: WEAPON_MAX_LEVEL, .. }));
    }

    #[test]
    fn test_unowned_weapon_requires_first_level() {
        let (mut world, _) = world_with_player();
        let err = apply_upgrade(&mut world, &UpgradeOption::weapon(WeaponType::Tornado, 3)).unwrap_err();
        assert_eq!(err, UpgradeError::NotOwned(WeaponType::Tornado));
    }

    #[test]
    fn test_new_weapon_inherits_modifiers() {
        let (mut world, player) = world_with_player();
        apply_upgrade(&mut world, &UpgradeOption::passive(PassiveId::ArcanePower, 1)).unwrap();
        apply_upgrade(&mut world, &UpgradeOption::weapon(WeaponType::Tornado, 1)).unwrap();

        let weapon = world.get_component::<Weapon>(player).unwrap();
        let slot = weapon.slot(WeaponType::Tornado).unwrap();
        let base = definition(WeaponType::Tornado).base;
        assert_eq!(slot.level, 1);
        assert_relative_eq!(slot.stats.damage, base.damage * 1.12, epsilon = 1e-4);
    }

    #[test]
    fn test_passive_levels_and_cap() {
        let (mut world, player) = world_with_player();
        let option = UpgradeOption::passive(PassiveId::Vitality, 1);
        for _ in 0..PASSIVE_MAX_LEVEL {
            apply_upgrade(&mut world, &option).unwrap();
        }
        assert_eq!(
            world.get_component::<Player>(player).unwrap().passive_level(PassiveId::Vitality),
            PASSIVE_MAX_LEVEL
        );
        let health = world.get_component::<Health>(player).unwrap();
        assert_relative_eq!(health.max, 225.0);
        assert_relative_eq!(health.current, 225.0);

        let err = apply_upgrade(&mut world, &option).unwrap_err();
        assert!(matches!(err, UpgradeError::MaxLevel { max: PASSIVE_MAX_LEVEL, .. }));
    }

    #[test]
    fn test_cooldown_passive_stacks_on_every_weapon() {
        let (mut world, player) = world_with_player();
        let option = UpgradeOption::passive(PassiveId::ManaFlow, 1);
        for _ in 0..3 {
            apply_upgrade(&mut world, &option).unwrap();
        }
        let weapon = world.get_component::<Weapon>(player).unwrap();
        let factor = 0.92_f32.powi(3);
        assert_relative_eq!(weapon.slot(WeaponType::IceBolt).unwrap().stats.cooldown, 1.5 * factor, epsilon = 1e-4);
        assert_relative_eq!(weapon.slot(WeaponType::Meteor).unwrap().stats.cooldown, 5.0 * factor, epsilon = 1e-4);
    }

    #[test]
    fn test_no_player() {
        let mut world = World::new();
        let err = apply_upgrade(&mut world, &UpgradeOption::passive(PassiveId::Fortune, 1)).unwrap_err();
        assert_eq!(err, UpgradeError::NoPlayer);
    }

    #[test]
    fn test_malformed_option() {
        let (mut world, _) = world_with_player();
        let option = UpgradeOption {
            kind: UpgradeKind::Passive,
            weapon: None,
            passive: None,
            id: "mystery".to_string(),
            level: 1,
        };
        assert_eq!(
            apply_upgrade(&mut world, &option).unwrap_err(),
            UpgradeError::Unknown("mystery".to_string())
        );
    }
}
