//! Whole-simulation scenarios run through the full system schedule

mod run;
mod status;
mod waves;

use crate::config::{PlayerConfig, SimulationConfig, SpawnConfig};
use crate::Simulation;

/// A run with no waves, no starting weapons and no random health drops,
/// so a scenario controls every entity itself.
pub(crate) fn quiet_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.player = PlayerConfig {
        starting_weapons: Vec::new(),
        ..PlayerConfig::default()
    };
    config.spawn = SpawnConfig {
        waves: Vec::new(),
        ..SpawnConfig::default()
    };
    config.health_pickups.chance = 0.0;
    config
}

pub(crate) fn quiet_simulation() -> Simulation {
    Simulation::new(quiet_config())
}
