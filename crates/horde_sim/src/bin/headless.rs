//! Headless run of the horde simulation.
//!
//! Plays a fixed-step session with no renderer, circling the player around
//! the origin and taking the first upgrade offered at every level-up, then
//! prints a summary.

use clap::Parser;
use horde_engine::foundation::logging;
use horde_engine::foundation::math::from_angle;
use horde_sim::prelude::*;
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "horde-headless", about = "Run the horde simulation without rendering")]
struct Args {
    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 300.0)]
    seconds: f32,

    /// Fixed time step in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// RNG seed, overriding the config
    #[arg(long)]
    seed: Option<u64>,

    /// TOML or RON config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), SimError> {
    logging::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            <SimulationConfig as horde_engine::config::Config>::load_from_file(path)?
        }
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let dt = if args.dt > 0.0 { args.dt } else { 1.0 / 60.0 };
    let ticks = (args.seconds.max(0.0) / dt).ceil() as u64;
    let mut sim = Simulation::new(config);
    let mut upgrades_taken = 0;

    for tick in 0..ticks {
        // Slow circle so the player keeps meeting new enemies.
        sim.set_move_intent(from_angle(tick as f32 * dt * 0.2));
        sim.tick(dt);

        for event in sim.drain_events() {
            match event {
                SimEvent::LevelUp { level } => {
                    let Some(choice) = sim.level_up_options().into_iter().next() else {
                        continue;
                    };
                    match sim.apply_upgrade(&choice) {
                        Ok(()) => {
                            upgrades_taken += 1;
                            info!("Level {}: took {} (level {})", level, choice.id, choice.level);
                        }
                        Err(e) => warn!("Level {}: could not take {}: {}", level, choice.id, e),
                    }
                }
                SimEvent::GameOver => info!("Game over at t={:.1}s", sim.elapsed()),
                _ => {}
            }
        }
        if sim.is_game_over() {
            break;
        }
    }

    let Some(stats) = sim.player_stats() else {
        println!("No player in the simulation");
        return Ok(());
    };
    println!("Survived:    {:.1}s", stats.elapsed);
    println!("Health:      {:.0}/{:.0}", stats.health, stats.max_health);
    println!("Level:       {} ({}/{} xp)", stats.level, stats.xp, stats.xp_to_next);
    println!("Kills:       {}", stats.kills);
    println!("Enemies:     {}", sim.enemy_count());
    println!("Upgrades:    {}", upgrades_taken);
    for (weapon, level) in sim.owned_weapon_levels() {
        println!("  {:<16} lv {}", weapon.to_string(), level);
    }
    for (passive, level) in sim.passive_levels() {
        println!("  {:<16} lv {}", passive.id(), level);
    }
    Ok(())
}
