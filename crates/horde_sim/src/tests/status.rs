use super::quiet_simulation;
use crate::components::*;
use crate::spawn::{spawn_attack, spawn_enemy, AttackSpec};
use approx::assert_relative_eq;
use horde_engine::foundation::math::Vec2;

const DT: f32 = 0.1;

#[test]
fn test_frozen_enemy_stands_still_then_walks_slowed() {
    let mut sim = quiet_simulation();
    let at = Vec2::new(200.0, 0.0);
    let slime = spawn_enemy(sim.world_mut(), EnemyType::Slime, at, 1.0, 1.0);
    spawn_attack(
        sim.world_mut(),
        AttackSpec::new(WeaponType::IceBolt, at, 8.0, 1.0, 1, 2.0).freezing(true),
    );

    sim.tick(DT);
    assert!(sim.world().has_component::<Freeze>(slime));

    let mut frozen_ticks = 0;
    loop {
        let velocity = sim.world().get_component::<Velocity>(slime).unwrap().linear;
        if sim.world().has_component::<Freeze>(slime) {
            assert_eq!(velocity, Vec2::zeros());
            assert_eq!(sim.transform(slime).unwrap().position, at);
            frozen_ticks += 1;
            assert!(frozen_ticks < 100, "freeze never wore off");
            sim.tick(DT);
            continue;
        }

        // First tick without the freeze: slowed by 20% and heading for the player.
        assert!(sim.world().has_component::<Slow>(slime));
        assert_relative_eq!(velocity.norm(), 40.0 * 0.8, epsilon = 1e-3);
        assert!(velocity.x < 0.0);
        assert_relative_eq!(velocity.y, 0.0, epsilon = 1e-3);
        break;
    }
    assert!((29..=31).contains(&frozen_ticks));
}

#[test]
fn test_slow_wears_off() {
    let mut sim = quiet_simulation();
    let at = Vec2::new(400.0, 0.0);
    let slime = spawn_enemy(sim.world_mut(), EnemyType::Slime, at, 1.0, 1.0);
    sim.world_mut().add_component(slime, Slow::new(0.5, 1.0));

    sim.tick(DT);
    let slowed = sim.world().get_component::<Velocity>(slime).unwrap().linear.norm();
    assert_relative_eq!(slowed, 20.0, epsilon = 1e-3);

    for _ in 0..12 {
        sim.tick(DT);
    }
    assert!(!sim.world().has_component::<Slow>(slime));
    let full = sim.world().get_component::<Velocity>(slime).unwrap().linear.norm();
    assert_relative_eq!(full, 40.0, epsilon = 1e-3);
}
