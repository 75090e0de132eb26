//! Closed set of field sources.

use super::{FieldType, LightningBolt, PlasmaRegion, PointSourceField, UniformField};
use crate::core_types::vec2::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One field source. Dispatch is by exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldPrimitive {
    Uniform(UniformField),
    PointSource(PointSourceField),
    Lightning(LightningBolt),
    Plasma(PlasmaRegion),
}

impl FieldPrimitive {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldPrimitive::Uniform(field) => field.field_type(),
            FieldPrimitive::PointSource(field) => field.field_type(),
            FieldPrimitive::Lightning(bolt) => bolt.field_type(),
            FieldPrimitive::Plasma(region) => region.field_type(),
        }
    }

    pub fn field_vector_at(&self, position: Vec2) -> Vec2 {
        match self {
            FieldPrimitive::Uniform(field) => field.field_vector_at(position),
            FieldPrimitive::PointSource(field) => field.field_vector_at(position),
            FieldPrimitive::Lightning(bolt) => bolt.field_vector_at(position),
            FieldPrimitive::Plasma(region) => region.field_vector_at(position),
        }
    }

    pub fn field_strength_at(&self, position: Vec2) -> f32 {
        match self {
            FieldPrimitive::Uniform(field) => field.field_strength_at(position),
            FieldPrimitive::PointSource(field) => field.field_strength_at(position),
            FieldPrimitive::Lightning(bolt) => bolt.field_strength_at(position),
            FieldPrimitive::Plasma(region) => region.field_strength_at(position),
        }
    }

    /// Advance temporal state. Static sources are unaffected.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        match self {
            FieldPrimitive::Uniform(_) | FieldPrimitive::PointSource(_) => {}
            FieldPrimitive::Lightning(bolt) => bolt.update(dt),
            FieldPrimitive::Plasma(region) => region.update(dt, rng),
        }
    }

    /// Only lightning expires; it is then eligible for pruning.
    pub fn is_expired(&self) -> bool {
        match self {
            FieldPrimitive::Lightning(bolt) => !bolt.is_active(),
            _ => false,
        }
    }

    pub fn as_lightning(&self) -> Option<&LightningBolt> {
        match self {
            FieldPrimitive::Lightning(bolt) => Some(bolt),
            _ => None,
        }
    }

    pub fn as_plasma(&self) -> Option<&PlasmaRegion> {
        match self {
            FieldPrimitive::Plasma(region) => Some(region),
            _ => None,
        }
    }
}

impl From<UniformField> for FieldPrimitive {
    fn from(field: UniformField) -> Self {
        FieldPrimitive::Uniform(field)
    }
}

impl From<PointSourceField> for FieldPrimitive {
    fn from(field: PointSourceField) -> Self {
        FieldPrimitive::PointSource(field)
    }
}

impl From<LightningBolt> for FieldPrimitive {
    fn from(bolt: LightningBolt) -> Self {
        FieldPrimitive::Lightning(bolt)
    }
}

impl From<PlasmaRegion> for FieldPrimitive {
    fn from(region: PlasmaRegion) -> Self {
        FieldPrimitive::Plasma(region)
    }
}
