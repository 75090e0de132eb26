//! Field radiating from a single point with inverse-square falloff.

use super::{inverse_square_decay, FieldType};
use crate::core_types::vec2::{Vec2, EPSILON_LENGTH};
use serde::{Deserialize, Serialize};

/// Radial field pointing away from `source`, optionally cut off at a radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSourceField {
    field_type: FieldType,
    strength: f32,
    source: Vec2,
    /// Beyond this distance the field is exactly zero; `None` means unbounded
    radius_of_influence: Option<f32>,
}

impl PointSourceField {
    pub fn new(field_type: FieldType, strength: f32, source: Vec2) -> Self {
        Self {
            field_type,
            strength,
            source,
            radius_of_influence: None,
        }
    }

    /// Limit the field to a disc around the source.
    pub fn with_radius_of_influence(mut self, radius: f32) -> Self {
        self.radius_of_influence = Some(radius.max(0.0));
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    pub fn source(&self) -> Vec2 {
        self.source
    }

    pub fn set_source(&mut self, source: Vec2) {
        self.source = source;
    }

    pub fn radius_of_influence(&self) -> Option<f32> {
        self.radius_of_influence
    }

    fn out_of_reach(&self, distance: f32) -> bool {
        self.radius_of_influence.is_some_and(|radius| distance > radius)
    }

    pub fn field_vector_at(&self, position: Vec2) -> Vec2 {
        let distance = (position - self.source).norm();
        if self.out_of_reach(distance) {
            return Vec2::zeros();
        }
        radial_inverse_square(self.source, position, self.strength)
    }

    pub fn field_strength_at(&self, position: Vec2) -> f32 {
        let distance = (position - self.source).norm();
        if self.out_of_reach(distance) {
            return 0.0;
        }
        self.strength * inverse_square_decay(distance)
    }
}

/// `normalize(position − source) × strength × decay(distance)`; zero at the source.
pub(crate) fn radial_inverse_square(source: Vec2, position: Vec2, strength: f32) -> Vec2 {
    let offset = position - source;
    let distance = offset.norm();
    if distance <= EPSILON_LENGTH {
        return Vec2::zeros();
    }
    offset / distance * strength * inverse_square_decay(distance)
}
