//! Vector type alias for 2D positions and field directions.

use nalgebra::Vector2;

/// 2D vector type for positions, velocities, and field vectors.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`. The simulation plane is
/// `x` horizontal and `y` altitude above ground, in meters.
pub type Vec2 = Vector2<f32>;

/// Lengths below this are treated as zero when normalising.
pub const EPSILON_LENGTH: f32 = 0.0001;

/// Rotate a vector 90° counter-clockwise.
#[inline]
#[must_use]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
#[must_use]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Normalise `v`, or return `fallback` when `v` is (nearly) zero length.
#[inline]
#[must_use]
pub fn unit_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let length = v.norm();
    if length > EPSILON_LENGTH {
        v / length
    } else {
        fallback
    }
}
