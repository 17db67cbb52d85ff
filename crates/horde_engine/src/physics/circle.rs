//! Circle-vs-circle overlap detection
//!
//! Brute-force pairwise test, adequate for a few hundred live bodies.

use super::CollisionLayers;
use crate::ecs::Entity;
use crate::foundation::math::Vec2;

/// Snapshot of one collider used for overlap testing
#[derive(Debug, Clone, Copy)]
pub struct CircleBody {
    /// Owning entity
    pub entity: Entity,
    /// World-space centre
    pub center: Vec2,
    /// Radius
    pub radius: f32,
    /// Layers this body occupies
    pub layer: CollisionLayers,
    /// Layers this body is interested in
    pub mask: CollisionLayers,
}

impl CircleBody {
    /// Strict overlap: centres closer than the sum of radii
    pub fn overlaps(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        (other.center - self.center).norm_squared() < reach * reach
    }

    /// Layer filter for this pair
    pub fn interested_in(&self, other: &Self) -> bool {
        CollisionLayers::should_collide(self.layer, self.mask, other.layer, other.mask)
    }
}

/// Pair of overlapping bodies, `a` earlier than `b` in the input order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    /// First entity
    pub a: Entity,
    /// Second entity
    pub b: Entity,
}

/// Every unordered pair that passes the layer filter and overlaps.
///
/// Pairs are emitted in input order: `(0,1) (0,2) .. (1,2) ..`.
pub fn overlapping_pairs(bodies: &[CircleBody]) -> Vec<ContactPair> {
    let mut pairs = Vec::new();
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            if a.interested_in(b) && a.overlaps(b) {
                pairs.push(ContactPair {
                    a: a.entity,
                    b: b.entity,
                });
            }
        }
    }
    pairs
}
