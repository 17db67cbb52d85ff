//! Attack behavior families
//!
//! `fire` dispatches one cast on the definition's behavior. No path fails:
//! without a target each family falls back to a random direction or point.

use super::pending::{ChainStep, PendingAction, PendingQueue};
use crate::components::{Player, WeaponStats, WeaponType, UNLIMITED_PIERCE};
use crate::data::{AttackBehavior, Placement, ScatterPattern};
use crate::events::SimEvent;
use crate::spawn::{spawn_attack, AttackSpec};
use crate::systems::{emit, nearest_enemy};
use horde_engine::ecs::{Entity, World};
use horde_engine::foundation::math::{angle_to, direction_to, from_angle, Vec2};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Angle between neighbouring shots of a directed volley
pub const DIRECTED_SPREAD: f32 = PI / 6.0;

/// One cast of one weapon slot
#[derive(Debug, Clone, Copy)]
pub struct Cast {
    pub caster: Entity,
    pub origin: Vec2,
    pub weapon: WeaponType,
    pub stats: WeaponStats,
}

impl Cast {
    fn attack(&self, position: Vec2, radius: f32, pierce: i32, lifetime: f32) -> AttackSpec {
        AttackSpec::new(
            self.weapon,
            position,
            radius * self.stats.area,
            self.stats.damage,
            pierce,
            lifetime,
        )
        .with_owner(Some(self.caster))
    }
}

/// Fire one cast
pub fn fire<R: Rng>(
    world: &mut World,
    rng: &mut R,
    queue: &mut PendingQueue,
    cast: &Cast,
    behavior: &AttackBehavior,
) {
    match *behavior {
        AttackBehavior::Directed { radius } => directed(world, rng, cast, radius),
        AttackBehavior::Radial { radius } => radial(world, cast, radius),
        AttackBehavior::Aura { radius } => {
            let spec = cast.attack(cast.origin, radius, UNLIMITED_PIERCE, cast.stats.duration);
            spawn_attack(world, spec);
        }
        AttackBehavior::Wall { offset, radius } => {
            let direction = aim_direction(world, rng, cast.origin);
            let spec = cast.attack(cast.origin + direction * offset, radius, cast.stats.pierce, cast.stats.duration);
            spawn_attack(world, spec);
        }
        AttackBehavior::Summon { radius, scatter } => {
            let position = cast.origin
                + Vec2::new(rng.gen_range(-scatter..=scatter), rng.gen_range(-scatter..=scatter));
            let velocity = nearest_enemy(world, position, &[], None)
                .map_or_else(Vec2::zeros, |(_, target)| direction_to(position, target) * cast.stats.projectile_speed);
            let spec = cast
                .attack(position, radius, UNLIMITED_PIERCE, cast.stats.duration)
                .with_velocity(velocity)
                .as_summon();
            spawn_attack(world, spec);
        }
        AttackBehavior::Scatter(pattern) => scatter(rng, queue, cast, &pattern),
        AttackBehavior::Homing { radius } => {
            let velocity = aim_direction(world, rng, cast.origin) * cast.stats.projectile_speed;
            let spec = cast
                .attack(cast.origin, radius, cast.stats.pierce, cast.stats.duration)
                .with_velocity(velocity);
            spawn_attack(world, spec);
        }
        AttackBehavior::TargetPoint { radius, fallback } => {
            let position = nearest_enemy(world, cast.origin, &[], None).map_or_else(
                || cast.origin + Vec2::new(rng.gen_range(-fallback..=fallback), rng.gen_range(-fallback..=fallback)),
                |(_, p)| p,
            );
            spawn_attack(world, cast.attack(position, radius, cast.stats.pierce, cast.stats.duration));
        }
        AttackBehavior::Chain { range, step_delay, radius, lifetime } => {
            let Ok(jumps) = u32::try_from(cast.stats.pierce) else {
                return;
            };
            let Some((target, point)) = nearest_enemy(world, cast.origin, &[], None) else {
                return;
            };
            if jumps == 0 {
                return;
            }
            queue.push(
                0.0,
                PendingAction::Chain(ChainStep {
                    weapon: cast.weapon,
                    owner: Some(cast.caster),
                    damage: cast.stats.damage,
                    target,
                    last_point: point,
                    hit: vec![target],
                    jumps_left: jumps,
                    range,
                    step_delay,
                    radius,
                    lifetime,
                }),
            );
        }
        AttackBehavior::Shield => {
            let amount = cast.stats.damage.floor();
            let duration = cast.stats.duration;
            if let Some(player) = world.get_component_mut::<Player>(cast.caster) {
                player.shield.activate(amount, duration);
                emit(world, SimEvent::ShieldActivated { amount, duration });
            }
        }
    }
}

/// Run a pending action whose delay has elapsed
pub fn execute(world: &mut World, queue: &mut PendingQueue, action: PendingAction) {
    match action {
        PendingAction::Impact(spec) => {
            spawn_attack(world, spec);
        }
        PendingAction::Chain(step) => chain_step(world, queue, step),
    }
}

fn aim_direction<R: Rng>(world: &World, rng: &mut R, origin: Vec2) -> Vec2 {
    from_angle(aim_angle(world, rng, origin))
}

fn aim_angle<R: Rng>(world: &World, rng: &mut R, origin: Vec2) -> f32 {
    nearest_enemy(world, origin, &[], None)
        .map_or_else(|| rng.gen_range(0.0..TAU), |(_, target)| angle_to(origin, target))
}

fn directed<R: Rng>(world: &mut World, rng: &mut R, cast: &Cast, radius: f32) {
    let aim = aim_angle(world, rng, cast.origin);
    let count = cast.stats.projectile_count.max(1);
    let middle = (count - 1) as f32 / 2.0;
    for i in 0..count {
        let angle = aim + DIRECTED_SPREAD * (i as f32 - middle);
        let spec = cast
            .attack(cast.origin, radius, cast.stats.pierce, cast.stats.duration)
            .with_velocity(from_angle(angle) * cast.stats.projectile_speed);
        spawn_attack(world, spec);
    }
}

fn radial(world: &mut World, cast: &Cast, radius: f32) {
    let count = cast.stats.projectile_count.max(1);
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        let spec = cast
            .attack(cast.origin, radius, cast.stats.pierce, cast.stats.duration)
            .with_velocity(from_angle(angle) * cast.stats.projectile_speed);
        spawn_attack(world, spec);
    }
}

fn scatter<R: Rng>(rng: &mut R, queue: &mut PendingQueue, cast: &Cast, pattern: &ScatterPattern) {
    let lifetime = pattern.lifetime.unwrap_or(cast.stats.duration);
    let pierce = pattern.pierce.unwrap_or(cast.stats.pierce);
    for i in 0..cast.stats.projectile_count {
        let offset = match pattern.placement {
            Placement::Disc { radius } => {
                // sqrt keeps the density uniform over the disc
                let r = radius * cast.stats.area * rng.gen::<f32>().sqrt();
                from_angle(rng.gen_range(0.0..TAU)) * r
            }
            Placement::Ring { inner, outer } => {
                from_angle(rng.gen_range(0.0..TAU)) * rng.gen_range(inner..=outer)
            }
            Placement::Field { half_width, half_height } => Vec2::new(
                rng.gen_range(-half_width..=half_width),
                rng.gen_range(-half_height..=half_height),
            ),
        };
        let jitter = if pattern.jitter > 0.0 { rng.gen_range(0.0..pattern.jitter) } else { 0.0 };
        let delay = pattern.impact_delay + pattern.stagger * i as f32 + jitter;
        let spec = cast
            .attack(cast.origin + offset, pattern.radius, pierce, lifetime)
            .freezing(pattern.freezes);
        queue.push(delay, PendingAction::Impact(spec));
    }
}

fn chain_step(world: &mut World, queue: &mut PendingQueue, step: ChainStep) {
    let alive = world.contains(step.target) && !world.is_pending_removal(step.target);
    let point = if alive {
        world
            .get_component::<crate::components::Transform>(step.target)
            .map_or(step.last_point, |t| t.position)
    } else {
        step.last_point
    };

    let earlier = step.hit[..step.hit.len().saturating_sub(1)].to_vec();
    let spec = AttackSpec::new(step.weapon, point, step.radius, step.damage, 1, step.lifetime)
        .with_owner(step.owner)
        .excluding(earlier);
    spawn_attack(world, spec);
    log::debug!("{} chain jump at ({:.0}, {:.0}), {} left", step.weapon, point.x, point.y, step.jumps_left - 1);

    if step.jumps_left <= 1 {
        return;
    }
    let Some((next, next_point)) = nearest_enemy(world, point, &step.hit, Some(step.range)) else {
        return;
    };
    let mut hit = step.hit.clone();
    hit.push(next);
    queue.push(
        step.step_delay,
        PendingAction::Chain(ChainStep {
            target: next,
            last_point: next_point,
            hit,
            jumps_left: step.jumps_left - 1,
            ..step
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{EnemyType, Projectile, Transform, Velocity};
    use crate::config::PlayerConfig;
    use crate::data::definition;
    use crate::spawn::{spawn_enemy, spawn_player};
    use crate::tags;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (World, Entity, StdRng, PendingQueue) {
        let mut world = World::new();
        let config = PlayerConfig { starting_weapons: Vec::new(), ..PlayerConfig::default() };
        let player = spawn_player(&mut world, &config, Vec2::zeros());
        (world, player, StdRng::seed_from_u64(11), PendingQueue::new())
    }

    fn cast(caster: Entity, weapon: WeaponType, stats: WeaponStats) -> Cast {
        Cast { caster, origin: Vec2::zeros(), weapon, stats }
    }

    fn attacks(world: &World) -> Vec<Entity> {
        world.entities_with_tag(tags::PROJECTILE)
    }

    #[test]
    fn test_directed_volley_is_symmetric_around_target() {
        let (mut world, player, mut rng, mut queue) = setup();
        spawn_enemy(&mut world, EnemyType::Slime, Vec2::new(100.0, 0.0), 1.0, 1.0);
        let stats = WeaponStats { projectile_count: 3, projectile_speed: 100.0, ..WeaponStats::default() };
        let c = cast(player, WeaponType::MagicMissile, stats);
        fire(&mut world, &mut rng, &mut queue, &c, &AttackBehavior::Directed { radius: 8.0 });

        let angles: Vec<f32> = attacks(&world)
            .iter()
            .map(|e| {
                let v = world.get_component::<Velocity>(*e).unwrap().linear;
                v.y.atan2(v.x)
            })
            .collect();
        assert_eq!(angles.len(), 3);
        assert_relative_eq!(angles[0], -DIRECTED_SPREAD, epsilon = 1e-5);
        assert_relative_eq!(angles[1], 0.0, epsilon = 1e-5);
        assert_relative_eq!(angles[2], DIRECTED_SPREAD, epsilon = 1e-5);
    }

    #[test]
    fn test_directed_without_target_still_fires() {
        let (mut world, player, mut rng, mut queue) = setup();
        let c = cast(player, WeaponType::MagicMissile, WeaponStats::default());
        fire(&mut world, &mut rng, &mut queue, &c, &AttackBehavior::Directed { radius: 8.0 });
        let shots = attacks(&world);
        assert_eq!(shots.len(), 1);
        let v = world.get_component::<Velocity>(shots[0]).unwrap().linear;
        assert_relative_eq!(v.norm(), 300.0, epsilon = 1e-3);
        assert!(!v.x.is_nan());
    }

    #[test]
    fn test_aura_is_stationary_and_unlimited() {
        let (mut world, player, mut rng, mut queue) = setup();
        let stats = definition(WeaponType::Earthquake).base;
        let c = cast(player, WeaponType::Earthquake, stats);
        fire(&mut world, &mut rng, &mut queue, &c, &definition(WeaponType::Earthquake).behavior);
        let aura = attacks(&world)[0];
        assert_eq!(world.get_component::<Velocity>(aura).unwrap().linear, Vec2::zeros());
        assert_eq!(world.get_component::<Projectile>(aura).unwrap().pierce, UNLIMITED_PIERCE);
        assert_relative_eq!(world.get_component::<crate::components::Collider>(aura).unwrap().radius, 200.0);
    }

    #[test]
    fn test_wall_is_offset_toward_enemy() {
        let (mut world, player, mut rng, mut queue) = setup();
        spawn_enemy(&mut world, EnemyType::Slime, Vec2::new(0.0, -300.0), 1.0, 1.0);
        let def = definition(WeaponType::FireWall);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);
        let wall = attacks(&world)[0];
        let p = world.get_component::<Transform>(wall).unwrap().position;
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-3);
        assert_relative_eq!(p.y, -80.0, epsilon = 1e-3);
    }

    #[test]
    fn test_scatter_queues_staggered_impacts() {
        let (mut world, player, mut rng, mut queue) = setup();
        let def = definition(WeaponType::Blizzard);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);
        assert!(attacks(&world).is_empty());
        assert_eq!(queue.len(), 8);
        // Impact 0 has no delay.
        for action in queue.take_ready() {
            execute(&mut world, &mut queue, action);
        }
        assert_eq!(attacks(&world).len(), 1);
        queue.advance(0.2);
        for action in queue.take_ready() {
            execute(&mut world, &mut queue, action);
        }
        assert_eq!(attacks(&world).len(), 2);
        for e in attacks(&world) {
            let p = world.get_component::<Transform>(e).unwrap().position;
            assert!(p.norm() <= 300.0 + 1e-3);
            assert_eq!(world.get_component::<Projectile>(e).unwrap().pierce, 1);
        }
    }

    #[test]
    fn test_ice_bolt_impacts_are_tagged_ice() {
        let (mut world, player, mut rng, mut queue) = setup();
        let def = definition(WeaponType::IceBolt);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);
        for action in queue.take_ready() {
            execute(&mut world, &mut queue, action);
        }
        let bolt = attacks(&world)[0];
        assert!(world.has_tag(bolt, tags::ICE));
        let d = world.get_component::<Transform>(bolt).unwrap().position.norm();
        assert!((50.0 - 1e-3..=120.0 + 1e-3).contains(&d));
    }

    #[test]
    fn test_homing_keeps_cast_heading() {
        let (mut world, player, mut rng, mut queue) = setup();
        spawn_enemy(&mut world, EnemyType::Slime, Vec2::new(-50.0, 0.0), 1.0, 1.0);
        let def = definition(WeaponType::Tornado);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);
        let tornado = attacks(&world)[0];
        assert!(!world.has_component::<crate::components::Summon>(tornado));
        let v = world.get_component::<Velocity>(tornado).unwrap().linear;
        assert_relative_eq!(v.x, -100.0, epsilon = 1e-3);
    }

    #[test]
    fn test_target_point_lands_on_enemy() {
        let (mut world, player, mut rng, mut queue) = setup();
        spawn_enemy(&mut world, EnemyType::Slime, Vec2::new(30.0, 40.0), 1.0, 1.0);
        let def = definition(WeaponType::RockSpike);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);
        let spike = attacks(&world)[0];
        assert_eq!(world.get_component::<Transform>(spike).unwrap().position, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_shield_replaces_previous_state() {
        let (mut world, player, mut rng, mut queue) = setup();
        world.get_component_mut::<Player>(player).unwrap().shield.activate(50.0, 9.0);
        let stats = WeaponStats { damage: 4.7, duration: 0.1, ..WeaponStats::default() };
        fire(&mut world, &mut rng, &mut queue, &cast(player, WeaponType::WaterShield, stats), &AttackBehavior::Shield);
        let shield = world.get_component::<Player>(player).unwrap().shield;
        assert_relative_eq!(shield.amount, 4.0);
        assert_relative_eq!(shield.duration, 0.1);
        assert!(attacks(&world).is_empty());
    }

    fn run_chain(world: &mut World, queue: &mut PendingQueue) -> Vec<Entity> {
        for _ in 0..20 {
            for action in queue.take_ready() {
                execute(world, queue, action);
            }
            queue.advance(0.1);
        }
        attacks(world)
    }

    #[test]
    fn test_chain_stops_when_next_enemy_out_of_range() {
        let (mut world, player, mut rng, mut queue) = setup();
        let a = spawn_enemy(&mut world, EnemyType::Ogre, Vec2::new(100.0, 0.0), 1.0, 1.0);
        let b = spawn_enemy(&mut world, EnemyType::Ogre, Vec2::new(200.0, 0.0), 1.0, 1.0);
        spawn_enemy(&mut world, EnemyType::Ogre, Vec2::new(600.0, 0.0), 1.0, 1.0);
        let def = definition(WeaponType::ChainLightning);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);

        let jumps = run_chain(&mut world, &mut queue);
        assert_eq!(jumps.len(), 2);
        let points: Vec<Vec2> = jumps
            .iter()
            .map(|e| world.get_component::<Transform>(*e).unwrap().position)
            .collect();
        assert_eq!(points, vec![Vec2::new(100.0, 0.0), Vec2::new(200.0, 0.0)]);
        // The second jump may not strike the first target again.
        assert!(world.get_component::<Projectile>(jumps[1]).unwrap().has_hit(a));
        assert!(!world.get_component::<Projectile>(jumps[1]).unwrap().has_hit(b));
    }

    #[test]
    fn test_chain_never_exceeds_pierce_or_revisits() {
        let (mut world, player, mut rng, mut queue) = setup();
        for i in 1..=10 {
            spawn_enemy(&mut world, EnemyType::Ogre, Vec2::new(50.0 * i as f32, 0.0), 1.0, 1.0);
        }
        let stats = WeaponStats { pierce: 4, ..definition(WeaponType::ChainLightning).base };
        let def = definition(WeaponType::ChainLightning);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, stats), &def.behavior);

        let jumps = run_chain(&mut world, &mut queue);
        assert_eq!(jumps.len(), 4);
        let mut xs: Vec<i32> = jumps
            .iter()
            .map(|e| world.get_component::<Transform>(*e).unwrap().position.x as i32)
            .collect();
        xs.dedup();
        assert_eq!(xs, vec![50, 100, 150, 200]);
    }

    #[test]
    fn test_chain_without_enemies_does_nothing() {
        let (mut world, player, mut rng, mut queue) = setup();
        let def = definition(WeaponType::ChainLightning);
        fire(&mut world, &mut rng, &mut queue, &cast(player, def.weapon_type, def.base), &def.behavior);
        assert!(queue.is_empty());
    }
}
