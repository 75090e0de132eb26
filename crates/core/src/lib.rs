//! Sky Simulation Core Library
//!
//! Environment model queried by a rigid-body integrator every tick: a layered
//! atmosphere giving density, pressure, temperature, and viscosity by altitude,
//! and a field engine superposing electric, magnetic, and plasma sources.
//!
//! ## Components
//!
//! - Layered barometric atmosphere with boundary and gap fallback
//! - Uniform, point-source, lightning, and plasma-region fields
//! - Field composites with transient pruning and Lorentz force application
//! - Ionosphere band with a parabolic ionization profile and spontaneous lightning
//!
//! The model is single-threaded and tick-driven. Randomness comes from an
//! injected [`rand::Rng`], so seeded runs are reproducible.

// Core types and utilities
pub mod core_types;

pub mod atmosphere;
pub mod config;
pub mod constants;
pub mod environment;
pub mod error;
pub mod fields;
pub mod ionosphere;

// Re-export core types
pub use core_types::{Body, ChargeProperties, Vec2};

pub use atmosphere::{
    standard_atmosphere, AtmosphereLayer, LayeredAtmosphere, MediumProperties,
};
pub use config::{EnvironmentConfig, IonosphereConfig, LightningConfig};
pub use environment::{Environment, EnvironmentSample};
pub use error::{EnvResult, EnvironmentError};
pub use fields::{
    lorentz_force, DischargeKind, FieldComposite, FieldPrimitive, FieldType, LightningBolt,
    LightningPhase, PlasmaFalloff, PlasmaRegion, PointSourceField, UniformField,
};
pub use ionosphere::Ionosphere;
