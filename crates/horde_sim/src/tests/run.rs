use super::quiet_config;
use crate::components::EnemyType;
use crate::config::SimulationConfig;
use crate::events::SimEvent;
use crate::spawn::spawn_enemy;
use crate::Simulation;
use horde_engine::foundation::math::Vec2;

const DT: f32 = 1.0 / 60.0;

fn run(config: SimulationConfig, ticks: usize) -> Simulation {
    let mut sim = Simulation::new(config);
    sim.set_move_intent(Vec2::new(0.5, -0.5));
    for _ in 0..ticks {
        sim.tick(DT);
    }
    sim
}

#[test]
fn test_same_seed_same_run() {
    let config = SimulationConfig { seed: 42, ..SimulationConfig::default() };
    let a = run(config.clone(), 600);
    let b = run(config, 600);

    assert_eq!(a.player_stats(), b.player_stats());
    assert_eq!(a.enemy_count(), b.enemy_count());
    let positions = |sim: &Simulation| -> Vec<Vec2> {
        sim.entities_with_tag(crate::tags::ENEMY)
            .into_iter()
            .filter_map(|e| sim.transform(e).map(|t| t.position))
            .collect()
    };
    assert_eq!(positions(&a), positions(&b));
}

#[test]
fn test_default_run_fights_back() {
    let sim = run(SimulationConfig::default(), 1200);
    assert!(sim.player_stats().unwrap().kills > 0);
}

#[test]
fn test_player_death_ends_run() {
    let mut config = quiet_config();
    config.player.max_health = 10.0;
    let mut sim = Simulation::new(config);
    spawn_enemy(sim.world_mut(), EnemyType::Ogre, Vec2::new(5.0, 0.0), 1.0, 1.0);

    sim.tick(DT);
    assert!(sim.is_game_over());
    assert!(sim.drain_events().contains(&SimEvent::GameOver));
    assert_eq!(sim.player_stats().unwrap().health, 0.0);

    let elapsed = sim.elapsed();
    sim.tick(DT);
    assert_eq!(sim.elapsed(), elapsed);
    assert!(sim.drain_events().is_empty());
}
