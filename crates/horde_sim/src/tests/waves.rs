use super::quiet_config;
use crate::components::EnemyType;
use crate::data::WaveDefinition;
use crate::events::SimEvent;
use crate::Simulation;

fn sturdy_config(waves: Vec<WaveDefinition>) -> crate::SimulationConfig {
    let mut config = quiet_config();
    config.player.max_health = 1.0e9;
    config.spawn.waves = waves;
    config
}

/// Run `seconds` one-second ticks, returning the wave batches per tick
fn spawned_per_tick(sim: &mut Simulation, seconds: u32) -> Vec<Vec<EnemyType>> {
    (0..seconds)
        .map(|_| {
            sim.tick(1.0);
            sim.drain_events()
                .into_iter()
                .filter_map(|event| match event {
                    SimEvent::WaveSpawned { enemy_type, .. } => Some(enemy_type),
                    _ => None,
                })
                .collect()
        })
        .collect()
}

#[test]
fn test_wave_windows_hand_over_at_boundary() {
    let mut sim = Simulation::new(sturdy_config(vec![
        WaveDefinition::new(0.0, Some(120.0), EnemyType::Slime, 1, 1.0),
        WaveDefinition::new(120.0, None, EnemyType::Goblin, 1, 1.0),
    ]));
    let batches = spawned_per_tick(&mut sim, 130);

    // Tick index i ends at t = i + 1.
    assert_eq!(batches[118], vec![EnemyType::Slime]);
    assert_eq!(batches[129], vec![EnemyType::Goblin]);
    assert!(batches[..119].iter().flatten().all(|t| *t == EnemyType::Slime));
    assert!(batches[119..].iter().flatten().all(|t| *t == EnemyType::Goblin));
}

#[test]
fn test_enemy_cap_limits_live_enemies() {
    let mut config = sturdy_config(vec![WaveDefinition::new(0.0, None, EnemyType::Slime, 5, 1.0)]);
    config.spawn.max_enemies = 3;
    let mut sim = Simulation::new(config);

    for _ in 0..5 {
        sim.tick(1.0);
    }
    assert_eq!(sim.enemy_count(), 3);
}

#[test]
fn test_enemies_spawn_in_distance_band() {
    let mut sim = Simulation::new(sturdy_config(vec![WaveDefinition::new(
        0.0,
        None,
        EnemyType::Orc,
        10,
        1.0,
    )]));
    sim.tick(1.0);

    let player = sim.transform(sim.player()).unwrap().position;
    let enemies = sim.entities_with_tag(crate::tags::ENEMY);
    assert_eq!(enemies.len(), 10);
    for enemy in enemies {
        let distance = (sim.transform(enemy).unwrap().position - player).norm();
        assert!((399.9..=500.1).contains(&distance), "spawned at {distance}");
    }
}
