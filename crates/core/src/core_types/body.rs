//! Minimal rigid-body state seen by field force application.
//!
//! Integration of position and velocity happens elsewhere; fields only add to
//! the force accumulator. Charge is an explicit capability: a body without
//! [`ChargeProperties`] never receives electromagnetic force.

use super::vec2::Vec2;
use serde::{Deserialize, Serialize};

const DEFAULT_MAGNETIC_SUSCEPTIBILITY: f32 = 1.0;
const DEFAULT_PLASMA_INTERACTION: f32 = 0.5;

/// Electromagnetic response of a charged body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargeProperties {
    /// Coulombs
    pub charge: f32,
    /// Scale on the magnetic part of the Lorentz force
    pub magnetic_susceptibility: f32,
    /// Coupling to the ionosphere plasma field (0-1)
    pub plasma_interaction: f32,
}

impl ChargeProperties {
    pub fn new(charge: f32) -> Self {
        Self {
            charge,
            magnetic_susceptibility: DEFAULT_MAGNETIC_SUSCEPTIBILITY,
            plasma_interaction: DEFAULT_PLASMA_INTERACTION,
        }
    }

    pub fn with_magnetic_susceptibility(mut self, susceptibility: f32) -> Self {
        self.magnetic_susceptibility = susceptibility;
        self
    }

    pub fn with_plasma_interaction(mut self, interaction: f32) -> Self {
        self.plasma_interaction = interaction.clamp(0.0, 1.0);
        self
    }
}

/// A point body with a force accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    force: Vec2,
    charge: Option<ChargeProperties>,
}

impl Body {
    /// Uncharged body at rest.
    pub fn neutral(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            force: Vec2::zeros(),
            charge: None,
        }
    }

    /// Charged body at rest.
    pub fn charged(position: Vec2, charge: ChargeProperties) -> Self {
        Self {
            charge: Some(charge),
            ..Self::neutral(position)
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Add to the accumulated force.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Return the accumulated force and reset it to zero.
    pub fn take_force(&mut self) -> Vec2 {
        std::mem::replace(&mut self.force, Vec2::zeros())
    }

    pub fn charge(&self) -> Option<&ChargeProperties> {
        self.charge.as_ref()
    }

    pub fn is_charged(&self) -> bool {
        self.charge.is_some()
    }
}
