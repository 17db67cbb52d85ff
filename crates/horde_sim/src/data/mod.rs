//! Static game data: weapons, enemies, passives, waves and upgrade offers

pub mod enemies;
pub mod passives;
pub mod upgrades;
pub mod waves;
pub mod weapons;

pub use enemies::{base_stats, EnemyStats};
pub use passives::{PassiveEffect, PassiveId, PASSIVE_MAX_LEVEL};
pub use upgrades::{UpgradeKind, UpgradeOption};
pub use waves::{default_waves, WaveDefinition};
pub use weapons::{definition, AttackBehavior, Placement, ScatterPattern, WeaponDefinition, WEAPON_MAX_LEVEL};
