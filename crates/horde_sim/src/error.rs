//! Error types

use crate::components::WeaponType;
use horde_engine::config::ConfigError;

/// Upgrade application errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UpgradeError {
    /// The world has no player entity
    #[error("no player entity")]
    NoPlayer,

    /// Already at the level cap
    #[error("{id} is already at max level {max}")]
    MaxLevel { id: String, max: u32 },

    /// A non-first level was offered for a weapon the player does not own
    #[error("weapon {0} is not owned")]
    NotOwned(WeaponType),

    /// The option names neither a weapon nor a passive
    #[error("unknown upgrade: {0}")]
    Unknown(String),
}

/// Top-level simulation error
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    /// Configuration could not be loaded
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Upgrade was rejected
    #[error("upgrade error: {0}")]
    Upgrade(#[from] UpgradeError),
}
