//! Lorentz force in the plane.
//!
//! `F = qE + q(v × B)`. In 2-D the cross product is the scalar
//! `vx·By − vy·Bx`; the magnetic part acts along the unit perpendicular of the
//! velocity, scaled by that scalar and by the body's magnetic susceptibility.

use crate::core_types::vec2::{cross, perpendicular, Vec2, EPSILON_LENGTH};
use crate::core_types::ChargeProperties;

/// Force on a charge moving at `velocity` through fields `electric` and `magnetic`.
///
/// A zero charge yields zero force. A stationary body feels only the electric part.
pub fn lorentz_force(
    charge: &ChargeProperties,
    velocity: Vec2,
    electric: Vec2,
    magnetic: Vec2,
) -> Vec2 {
    let q = charge.charge;
    if q == 0.0 {
        return Vec2::zeros();
    }

    let electric_force = electric * q;

    let speed = velocity.norm();
    if speed <= EPSILON_LENGTH {
        return electric_force;
    }
    let magnetic_scalar = q * cross(velocity, magnetic);
    let magnetic_force =
        perpendicular(velocity / speed) * magnetic_scalar * charge.magnetic_susceptibility;

    electric_force + magnetic_force
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn electric_only_when_stationary() {
        let charge = ChargeProperties::new(2.0);
        let f = lorentz_force(&charge, Vec2::zeros(), Vec2::new(3.0, -1.0), Vec2::new(0.0, 50.0));
        assert_relative_eq!(f.x, 6.0);
        assert_relative_eq!(f.y, -2.0);
    }

    #[test]
    fn neutral_feels_nothing() {
        let charge = ChargeProperties::new(0.0);
        let f = lorentz_force(&charge, Vec2::new(1.0, 0.0), Vec2::new(3.0, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(f, Vec2::zeros());
    }

    #[test]
    fn magnetic_part_is_perpendicular_to_velocity() {
        let charge = ChargeProperties::new(1.0);
        // v = +x, B = +y: cross = 1·1 − 0 = 1, perpendicular of +x is +y
        let f = lorentz_force(&charge, Vec2::new(1.0, 0.0), Vec2::zeros(), Vec2::new(0.0, 1.0));
        assert_relative_eq!(f.x, 0.0);
        assert_relative_eq!(f.y, 1.0);

        let v = Vec2::new(3.0, 4.0);
        let f = lorentz_force(&charge, v, Vec2::zeros(), Vec2::new(0.0, 2.0));
        assert_relative_eq!(f.dot(&v), 0.0, epsilon = 1e-4);
        // |F| = |q·cross| = |3·2 − 4·0| = 6
        assert_relative_eq!(f.norm(), 6.0, epsilon = 1e-4);
    }

    #[test]
    fn susceptibility_scales_magnetic_part_only() {
        let charge = ChargeProperties::new(1.0).with_magnetic_susceptibility(0.5);
        let f = lorentz_force(&charge, Vec2::new(1.0, 0.0), Vec2::new(0.0, -4.0), Vec2::new(0.0, 1.0));
        assert_relative_eq!(f.x, 0.0);
        assert_relative_eq!(f.y, -4.0 + 0.5);
    }
}
