//! Layered atmosphere model.
//!
//! Density, pressure, temperature, and viscosity as functions of altitude,
//! evaluated from a stack of barometric layers with different lapse rates.
//!
//! # Scientific Background
//!
//! Each layer carries its own base temperature and base pressure. Within a
//! layer the barometric formula gives pressure from the temperature ratio, and
//! the ideal-gas law gives density. Queries are total: heights outside every
//! layer extrapolate to the nearest end layer, and gaps fall back to standard
//! sea-level air.
//!
//! # References
//!
//! - ICAO Standard Atmosphere (1993)
//! - U.S. Standard Atmosphere (1976)

mod layer;
mod layered;
mod medium;
pub mod standard;

pub use layer::AtmosphereLayer;
pub use layered::LayeredAtmosphere;
pub use medium::MediumProperties;
pub use standard::{
    ionosphere_layer, standard_atmosphere, standard_atmosphere_with_fallback, LayerSpec,
};
