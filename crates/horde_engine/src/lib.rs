//! # Horde Engine
//!
//! Simulation substrate for top-down horde games.
//!
//! ## Features
//!
//! - **ECS Architecture**: generational entities, per-type component storage,
//!   tag queries and a fixed-priority scheduler with deferred removal
//! - **2D Physics**: circle colliders filtered by collision layers
//! - **Configuration**: TOML and RON loading through serde
//!
//! ## Quick Start
//!
//! ```rust
//! use horde_engine::prelude::*;
//!
//! struct Drift;
//!
//! impl System for Drift {
//!     fn name(&self) -> &'static str { "drift" }
//!     fn priority(&self) -> i32 { 10 }
//!     fn update(&mut self, world: &mut World, dt: f32) {
//!         for e in world.entities_with::<(Transform,)>() {
//!             if let Some(t) = world.get_component_mut::<Transform>(e) {
//!                 t.position.x += dt;
//!             }
//!         }
//!     }
//! }
//!
//! let mut world = World::new();
//! let e = world.create_entity();
//! world.add_component(e, Transform::at(0.0, 0.0));
//!
//! let mut scheduler = SystemScheduler::new();
//! scheduler.add_system(Drift);
//! scheduler.execute_frame(&mut world, 1.0);
//! assert_eq!(world.get_component::<Transform>(e).unwrap().position.x, 1.0);
//! ```

pub mod config;
pub mod ecs;
pub mod events;
pub mod foundation;
pub mod physics;

/// Commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigError, ConfigFormat};
    pub use crate::ecs::components::{Collider, Transform, Velocity};
    pub use crate::ecs::{Component, ComponentQuery, Entity, System, SystemScheduler, Tag, World};
    pub use crate::events::EventQueue;
    pub use crate::foundation::math::Vec2;
    pub use crate::foundation::time::SimClock;
    pub use crate::physics::CollisionLayers;
}
