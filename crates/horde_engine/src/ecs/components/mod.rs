//! Engine components shared by every simulation

pub mod collider;
pub mod transform;
pub mod velocity;

pub use collider::Collider;
pub use transform::Transform;
pub use velocity::Velocity;
