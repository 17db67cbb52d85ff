//! Entity factories
//!
//! Every entity the simulation creates goes through one of these functions
//! so tags, colliders and components stay consistent.

use crate::components::*;
use crate::config::{PickupConfig, PlayerConfig};
use crate::data::{base_stats, definition};
use crate::tags;
use horde_engine::ecs::{Entity, World};
use horde_engine::foundation::math::Vec2;
use horde_engine::physics::CollisionLayers;

/// Create the player with its starting loadout
pub fn spawn_player(world: &mut World, config: &PlayerConfig, position: Vec2) -> Entity {
    let entity = world.create_tagged(&[tags::PLAYER]);
    let player = Player {
        pickup_radius: config.pickup_radius,
        luck: config.luck,
        armor: config.armor,
        move_speed: config.move_speed,
        ..Player::default()
    };
    let mut weapon = Weapon::new();
    for start in &config.starting_weapons {
        let stats = start.stats.unwrap_or(definition(start.weapon_type).base);
        weapon.add_slot(WeaponSlot::new(start.weapon_type, stats));
    }

    world.add_component(entity, Transform::from_position(position));
    world.add_component(entity, Velocity::zero());
    world.add_component(entity, Health::new(config.max_health).with_regen(config.regen_rate));
    world.add_component(
        entity,
        Collider::circle(config.radius)
            .with_layers(CollisionLayers::PLAYER, CollisionLayers::ENEMY | CollisionLayers::PICKUP),
    );
    world.add_component(entity, player);
    world.add_component(entity, weapon);
    entity
}

/// Create an enemy with wave multipliers applied
pub fn spawn_enemy(
    world: &mut World,
    enemy_type: EnemyType,
    position: Vec2,
    health_multiplier: f32,
    damage_multiplier: f32,
) -> Entity {
    let stats = base_stats(enemy_type).scaled(health_multiplier, damage_multiplier);
    let entity = world.create_tagged(&[tags::ENEMY]);
    world.add_component(entity, Transform::from_position(position));
    world.add_component(entity, Velocity::zero());
    world.add_component(entity, Health::new(stats.health));
    world.add_component(
        entity,
        Collider::circle(stats.radius).with_layers(
            CollisionLayers::ENEMY,
            CollisionLayers::PLAYER | CollisionLayers::PLAYER_PROJECTILE,
        ),
    );
    world.add_component(entity, Enemy::new(enemy_type, stats.damage, stats.xp, stats.speed));
    entity
}

/// Create an experience orb worth `value`
pub fn spawn_experience_orb(world: &mut World, position: Vec2, value: u32, config: &PickupConfig) -> Entity {
    spawn_pickup(world, position, Pickup::experience(value, config.attract_speed), config.experience_radius)
}

/// Create a health pickup
pub fn spawn_health_pickup(world: &mut World, position: Vec2, config: &PickupConfig) -> Entity {
    spawn_pickup(world, position, Pickup::health(config.attract_speed), config.health_radius)
}

fn spawn_pickup(world: &mut World, position: Vec2, pickup: Pickup, radius: f32) -> Entity {
    let entity = world.create_tagged(&[tags::PICKUP]);
    world.add_component(entity, Transform::from_position(position));
    world.add_component(
        entity,
        Collider::circle(radius)
            .with_layers(CollisionLayers::PICKUP, CollisionLayers::PLAYER)
            .as_trigger(),
    );
    world.add_component(entity, pickup);
    entity
}

/// Everything needed to create one player attack entity
#[derive(Debug, Clone)]
pub struct AttackSpec {
    pub weapon: WeaponType,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub damage: f32,
    pub pierce: i32,
    pub lifetime: f32,
    pub owner: Option<Entity>,
    pub freezes: bool,
    pub summon: bool,
    /// Targets the attack must never hit
    pub exclude: Vec<Entity>,
}

impl AttackSpec {
    /// Stationary attack with no owner
    pub fn new(weapon: WeaponType, position: Vec2, radius: f32, damage: f32, pierce: i32, lifetime: f32) -> Self {
        Self {
            weapon,
            position,
            velocity: Vec2::zeros(),
            radius,
            damage,
            pierce,
            lifetime,
            owner: None,
            freezes: false,
            summon: false,
            exclude: Vec::new(),
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_owner(mut self, owner: Option<Entity>) -> Self {
        self.owner = owner;
        self
    }

    pub fn freezing(mut self, freezes: bool) -> Self {
        self.freezes = freezes;
        self
    }

    pub fn as_summon(mut self) -> Self {
        self.summon = true;
        self
    }

    pub fn excluding(mut self, exclude: Vec<Entity>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// Create a player attack. Damage is floored to a whole number.
pub fn spawn_attack(world: &mut World, spec: AttackSpec) -> Entity {
    let entity = if spec.freezes {
        world.create_tagged(&[tags::PROJECTILE, tags::ICE])
    } else {
        world.create_tagged(&[tags::PROJECTILE])
    };
    let speed = spec.velocity.norm();
    let mut projectile = Projectile::new(spec.weapon, spec.damage.floor(), spec.pierce, spec.lifetime)
        .with_speed(speed)
        .with_prior_hits(spec.exclude);
    if let Some(owner) = spec.owner {
        projectile = projectile.with_owner(owner);
    }
    let rotation = if speed > 0.0 { spec.velocity.y.atan2(spec.velocity.x) } else { 0.0 };

    world.add_component(entity, Transform::from_position(spec.position).with_rotation(rotation));
    world.add_component(entity, Velocity::from_vec(spec.velocity));
    world.add_component(
        entity,
        Collider::circle(spec.radius)
            .with_layers(CollisionLayers::PLAYER_PROJECTILE, CollisionLayers::ENEMY)
            .as_trigger(),
    );
    world.add_component(entity, projectile);
    if spec.summon {
        world.add_component(entity, Summon);
    }
    entity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_gets_default_loadout() {
        let mut world = World::new();
        let player = spawn_player(&mut world, &PlayerConfig::default(), Vec2::zeros());
        let weapon = world.get_component::<Weapon>(player).unwrap();
        assert_eq!(
            weapon.levels(),
            vec![(WeaponType::IceBolt, 1), (WeaponType::Fireball, 1), (WeaponType::Meteor, 1)]
        );
        assert_eq!(weapon.slot(WeaponType::Fireball).unwrap().stats.pierce, 4);
        assert!(world.has_tag(player, tags::PLAYER));
        assert_eq!(world.get_component::<Health>(player).unwrap().max, 100.0);
    }

    #[test]
    fn test_enemy_stats_are_scaled() {
        let mut world = World::new();
        let e = spawn_enemy(&mut world, EnemyType::Slime, Vec2::zeros(), 1.5, 1.2);
        assert_eq!(world.get_component::<Health>(e).unwrap().max, 22.0);
        assert_eq!(world.get_component::<Enemy>(e).unwrap().damage, 6.0);
        let collider = world.get_component::<Collider>(e).unwrap();
        assert_eq!(collider.radius, 12.0);
        assert_eq!(collider.layer, CollisionLayers::ENEMY);
    }

    #[test]
    fn test_attack_damage_is_floored_and_ice_tagged() {
        let mut world = World::new();
        let spec = AttackSpec::new(WeaponType::IceBolt, Vec2::zeros(), 10.0, 13.7, 1, 1.0).freezing(true);
        let e = spawn_attack(&mut world, spec);
        assert_eq!(world.get_component::<Projectile>(e).unwrap().damage, 13.0);
        assert!(world.has_tag(e, tags::ICE));
        assert!(world.has_tag(e, tags::PROJECTILE));
    }
}
