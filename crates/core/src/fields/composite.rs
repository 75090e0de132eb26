//! Superposition of field sources.

use super::{lorentz_force, FieldPrimitive, FieldType, LightningBolt, PlasmaRegion};
use crate::core_types::{Body, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Owns a collection of field sources and answers net-field queries.
///
/// Sources are kept in insertion order. Removal happens only by pruning
/// expired lightning in [`FieldComposite::update`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldComposite {
    fields: Vec<FieldPrimitive>,
}

impl FieldComposite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source. Duplicates are allowed.
    pub fn add_field(&mut self, field: impl Into<FieldPrimitive>) {
        self.fields.push(field.into());
    }

    /// Sum of every source of `field_type` at `position`, in insertion order.
    pub fn net_field_vector(&self, position: Vec2, field_type: FieldType) -> Vec2 {
        self.fields_by_type(field_type)
            .fold(Vec2::zeros(), |acc, field| acc + field.field_vector_at(position))
    }

    pub fn fields_by_type(&self, field_type: FieldType) -> impl Iterator<Item = &FieldPrimitive> {
        self.fields
            .iter()
            .filter(move |field| field.field_type() == field_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPrimitive> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Lightning bolts that have not expired.
    pub fn active_lightning(&self) -> impl Iterator<Item = &LightningBolt> {
        self.fields
            .iter()
            .filter_map(FieldPrimitive::as_lightning)
            .filter(|bolt| bolt.is_active())
    }

    pub fn plasma_regions(&self) -> impl Iterator<Item = &PlasmaRegion> {
        self.fields.iter().filter_map(FieldPrimitive::as_plasma)
    }

    /// Advance every source by `dt`, then drop expired lightning.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        for field in &mut self.fields {
            field.update(dt, rng);
        }

        let before = self.fields.len();
        self.fields.retain(|field| !field.is_expired());
        let pruned = before - self.fields.len();
        if pruned > 0 {
            debug!("Pruned {} expired lightning bolt(s)", pruned);
        }
        trace!("Field composite tick dt={:.4}s, {} source(s)", dt, self.fields.len());
    }

    /// Add the Lorentz force from this composite's fields to a charged body.
    ///
    /// Bodies without charge properties are left untouched.
    pub fn apply_lorentz_force(&self, body: &mut Body) {
        let Some(charge) = body.charge().copied() else {
            return;
        };
        let electric = self.net_field_vector(body.position, FieldType::Electric);
        let magnetic = self.net_field_vector(body.position, FieldType::Magnetic);
        body.apply_force(lorentz_force(&charge, body.velocity, electric, magnetic));
    }
}
