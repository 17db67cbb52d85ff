//! Game-specific components

pub use horde_engine::ecs::components::{Collider, Transform, Velocity};

pub mod enemy;
pub mod health;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod status;
pub mod weapon;

pub use enemy::{Enemy, EnemyType};
pub use health::Health;
pub use pickup::{Pickup, PickupType};
pub use player::{Player, Shield, StatModifiers};
pub use projectile::{Projectile, Summon, UNLIMITED_PIERCE};
pub use status::{Freeze, Slow};
pub use weapon::{Element, UpgradeCurve, Weapon, WeaponSlot, WeaponStats, WeaponType};
