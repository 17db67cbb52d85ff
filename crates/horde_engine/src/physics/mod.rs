//! 2D physics: collision layers and circle overlap tests

pub mod circle;
pub mod collision_layers;

pub use circle::{overlapping_pairs, CircleBody, ContactPair};
pub use collision_layers::CollisionLayers;
