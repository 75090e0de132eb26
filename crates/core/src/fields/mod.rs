//! Electromagnetic and plasma vector fields.
//!
//! This module models the field sources a charged body can feel:
//! - Uniform background fields
//! - Point sources with inverse-square falloff
//! - Lightning bolts: segment sources that decay and expire
//! - Plasma regions: discs whose direction pattern depends on the discharge kind
//!
//! Sources are superposed per [`FieldType`] by a [`FieldComposite`], which also
//! advances their temporal state once per tick and prunes expired lightning.
//!
//! # Conventions
//!
//! `x` is horizontal and `y` is altitude. Query methods (`*_at`) are pure;
//! only `update` mutates temporal state.

mod composite;
mod lightning;
mod lorentz;
mod plasma;
mod point_source;
pub mod presets;
mod primitive;
mod uniform;

pub use composite::FieldComposite;
pub use lightning::{LightningBolt, LightningPhase};
pub use lorentz::lorentz_force;
pub use plasma::{DischargeKind, PlasmaFalloff, PlasmaRegion};
pub use point_source::PointSourceField;
pub use primitive::FieldPrimitive;
pub use uniform::UniformField;

use crate::constants::MIN_DECAY_DISTANCE;
use serde::{Deserialize, Serialize};

/// Category a field contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    Electric,
    Magnetic,
    Plasma,
}

/// Inverse-square attenuation, `1 / max(d, 0.1)²`.
#[inline]
#[must_use]
pub fn inverse_square_decay(distance: f32) -> f32 {
    let distance = distance.max(MIN_DECAY_DISTANCE);
    1.0 / (distance * distance)
}
