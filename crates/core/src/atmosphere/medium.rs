//! Bulk properties of the surrounding medium at a point.

use crate::constants::{
    STANDARD_AIR_DENSITY, STANDARD_AIR_VISCOSITY, STANDARD_PRESSURE, STANDARD_TEMPERATURE,
};
use serde::{Deserialize, Serialize};

/// Snapshot of the medium an object sits in.
///
/// This is what the integrator consumes for buoyancy and drag, and what every
/// fallback path in the layered model returns when a height resolves to no layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediumProperties {
    /// Density (kg/m³)
    pub density: f32,
    /// Pressure (Pa)
    pub pressure: f32,
    /// Temperature (K)
    pub temperature: f32,
    /// Dynamic viscosity (Pa·s)
    pub viscosity: f32,
}

impl MediumProperties {
    /// Standard sea-level air.
    pub const STANDARD: MediumProperties = MediumProperties {
        density: STANDARD_AIR_DENSITY,
        pressure: STANDARD_PRESSURE,
        temperature: STANDARD_TEMPERATURE,
        viscosity: STANDARD_AIR_VISCOSITY,
    };
}

impl Default for MediumProperties {
    fn default() -> Self {
        Self::STANDARD
    }
}
