//! Math utilities and types
//!
//! Provides the 2D vector types used by the simulation plus a handful of
//! helpers that never produce NaN for degenerate input.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Lengths below this are treated as zero.
pub const EPSILON: f32 = 1.0e-6;

/// Unit vector pointing from `from` to `to`, or zero if the points coincide.
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    normalize_or_zero(to - from)
}

/// Normalize `v`, returning the zero vector for zero-length input.
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.norm();
    if len <= EPSILON {
        Vec2::zeros()
    } else {
        v / len
    }
}

/// Unit vector for an angle in radians.
pub fn from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Angle of the segment `from -> to`; zero if the points coincide.
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d.norm_squared() <= EPSILON * EPSILON {
        0.0
    } else {
        d.y.atan2(d.x)
    }
}

/// Euclidean distance between two points
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).norm()
}

/// Clamp the length of `v` to `max`. A `max` of zero or less means no limit.
pub fn clamp_length(v: Vec2, max: f32) -> Vec2 {
    if max <= 0.0 {
        return v;
    }
    let len_sq = v.norm_squared();
    if len_sq > max * max {
        v * (max / len_sq.sqrt())
    } else {
        v
    }
}
