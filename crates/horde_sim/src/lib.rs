//! # Horde Sim
//!
//! Survivor-horde combat simulation: one player against escalating waves of
//! enemies, fought with multi-slot auto-firing weapons.
//!
//! The crate is render-agnostic. A front end owns a [`Simulation`], feeds it
//! movement intent, calls [`Simulation::tick`] at a fixed rate and reads
//! entity state and [`SimEvent`]s back out.
//!
//! ## Quick Start
//!
//! ```rust
//! use horde_sim::prelude::*;
//!
//! let mut sim = Simulation::new(SimulationConfig::default());
//! sim.set_move_intent(Vec2::new(1.0, 0.0));
//! for _ in 0..60 {
//!     sim.tick(1.0 / 60.0);
//! }
//! let stats = sim.player_stats().unwrap();
//! assert!(stats.elapsed > 0.9);
//! ```

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod simulation;
pub mod spawn;
pub mod systems;
pub mod tags;

#[cfg(test)]
mod tests;

pub use config::SimulationConfig;
pub use error::{SimError, UpgradeError};
pub use events::SimEvent;
pub use simulation::{PlayerStats, Simulation};

/// Commonly used types
pub mod prelude {
    pub use crate::components::{EnemyType, Health, Player, WeaponType};
    pub use crate::config::SimulationConfig;
    pub use crate::data::{PassiveId, UpgradeKind, UpgradeOption};
    pub use crate::error::{SimError, UpgradeError};
    pub use crate::events::SimEvent;
    pub use crate::simulation::{PlayerStats, Simulation};
    pub use crate::tags;
    pub use horde_engine::foundation::math::Vec2;
}
