//! Entity-Component-System implementation
//!
//! Generational entity arena, per-type component storage, tag queries,
//! resources and a fixed-priority scheduler.

pub mod component;
pub mod components;
pub mod entity;
pub mod query;
pub mod scheduler;
pub mod storage;
pub mod system;
pub mod world;

pub use component::Component;
pub use entity::{Entity, Tag};
pub use query::ComponentQuery;
pub use scheduler::SystemScheduler;
pub use system::System;
pub use world::World;
