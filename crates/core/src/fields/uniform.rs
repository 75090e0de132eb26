//! Position-independent background field.

use super::FieldType;
use crate::core_types::vec2::{unit_or, Vec2};
use serde::{Deserialize, Serialize};

/// Same direction and strength everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformField {
    field_type: FieldType,
    strength: f32,
    /// Unit direction
    direction: Vec2,
}

impl UniformField {
    /// Create a uniform field. A zero direction defaults to straight up.
    pub fn new(field_type: FieldType, strength: f32, direction: Vec2) -> Self {
        Self {
            field_type,
            strength,
            direction: unit_or(direction, Vec2::new(0.0, 1.0)),
        }
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

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Re-normalise and replace the direction.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = unit_or(direction, Vec2::new(0.0, 1.0));
    }

    pub fn field_vector_at(&self, _position: Vec2) -> Vec2 {
        self.direction * self.strength
    }

    pub fn field_strength_at(&self, _position: Vec2) -> f32 {
        self.strength
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_normalised() {
        let field = UniformField::new(FieldType::Magnetic, 50.0, Vec2::new(0.0, 4.0));
        assert_eq!(field.direction(), Vec2::new(0.0, 1.0));
        assert_eq!(field.field_vector_at(Vec2::new(123.0, -9.0)), Vec2::new(0.0, 50.0));
    }

    #[test]
    fn zero_direction_defaults_up() {
        let mut field = UniformField::new(FieldType::Electric, 2.0, Vec2::new(1.0, 0.0));
        field.set_direction(Vec2::zeros());
        assert_eq!(field.direction(), Vec2::new(0.0, 1.0));
    }
}
