//! Ionosphere band with plasma regions and spontaneous lightning.
//!
//! # Scientific Background
//!
//! Ionization peaks mid-band and vanishes at both edges. With
//! `t = (h − lower) / thickness`:
//!
//! ```text
//! level(h) = base · 4·t·(1 − t),   t ∈ [0, 1]
//! ```
//!
//! Inside the band a weak horizontal plasma field flows along +x. The band
//! owns its own field composite holding plasma regions and lightning bolts.
//! Each tick those are advanced, expired bolts are pruned, and one uniform
//! draw decides whether a new ground strike is spawned.
//!
//! # References
//!
//! - Chapman, S. (1931). "The absorption and ionising effect of monochromatic
//!   radiation in an atmosphere on a rotating earth"

use crate::config::{IonosphereConfig, LightningConfig};
use crate::core_types::Vec2;
use crate::error::{ensure_finite, EnvResult, EnvironmentError};
use crate::fields::presets::{lightning_strike, sample_ground_point};
use crate::fields::{
    FieldComposite, FieldType, LightningBolt, PlasmaFalloff, PlasmaRegion, UniformField,
};
use rand::Rng;
use tracing::debug;

/// Altitude band of ionized gas.
#[derive(Debug, Clone, PartialEq)]
pub struct Ionosphere {
    lower_boundary: f32,
    thickness: f32,
    base_ionization: f32,
    band_field: UniformField,
    lightning: LightningConfig,
    fields: FieldComposite,
}

impl Ionosphere {
    /// Band between `lower_boundary` and `upper_boundary` with default ionization,
    /// band field, and lightning parameters.
    pub fn new(lower_boundary: f32, upper_boundary: f32) -> EnvResult<Self> {
        let lower = ensure_finite("lower_boundary", lower_boundary)?;
        let upper = ensure_finite("upper_boundary", upper_boundary)?;
        if lower >= upper {
            return Err(EnvironmentError::InvalidIonosphereBounds { lower, upper });
        }
        Self::from_config(&IonosphereConfig {
            lower_boundary: lower,
            thickness: upper - lower,
            ..IonosphereConfig::default()
        })
    }

    pub fn from_config(config: &IonosphereConfig) -> EnvResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Band with the reference parameters (80-580 km).
    pub fn standard() -> Self {
        Self::from_valid_config(&IonosphereConfig::default())
    }

    fn from_valid_config(config: &IonosphereConfig) -> Self {
        Self {
            lower_boundary: config.lower_boundary,
            thickness: config.thickness,
            base_ionization: config.base_ionization,
            band_field: UniformField::new(
                FieldType::Plasma,
                config.band_field_strength,
                Vec2::new(1.0, 0.0),
            ),
            lightning: config.lightning.clone(),
            fields: FieldComposite::new(),
        }
    }

    pub fn lower_boundary(&self) -> f32 {
        self.lower_boundary
    }

    pub fn upper_boundary(&self) -> f32 {
        self.lower_boundary + self.thickness
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn base_ionization(&self) -> f32 {
        self.base_ionization
    }

    pub fn lightning_config(&self) -> &LightningConfig {
        &self.lightning
    }

    /// Owned plasma regions and lightning.
    pub fn fields(&self) -> &FieldComposite {
        &self.fields
    }

    /// True when `position.y` lies within `[lower, lower + thickness]`.
    pub fn contains_position(&self, position: Vec2) -> bool {
        (self.lower_boundary..=self.upper_boundary()).contains(&position.y)
    }

    /// Parabolic ionization profile; zero outside the band.
    pub fn ionization_level(&self, height: f32) -> f32 {
        let t = (height - self.lower_boundary) / self.thickness;
        if !(0.0..=1.0).contains(&t) {
            return 0.0;
        }
        self.base_ionization * 4.0 * t * (1.0 - t)
    }

    /// Profile level plus owned plasma contributions, clamped to 0-1.
    pub fn ionization_at(&self, position: Vec2) -> f32 {
        let plasma: f32 = self
            .fields
            .plasma_regions()
            .map(|region| region.ionization_at(position))
            .sum();
        (self.ionization_level(position.y) + plasma).clamp(0.0, 1.0)
    }

    /// Ambient horizontal plasma field; zero outside the band.
    pub fn band_field_vector(&self, position: Vec2) -> Vec2 {
        if self.contains_position(position) {
            self.band_field.field_vector_at(position)
        } else {
            Vec2::zeros()
        }
    }

    /// Net field of `field_type` from owned sources, plus the band field for plasma.
    pub fn field_vector_at(&self, position: Vec2, field_type: FieldType) -> Vec2 {
        let owned = self.fields.net_field_vector(position, field_type);
        match field_type {
            FieldType::Plasma => owned + self.band_field_vector(position),
            FieldType::Electric | FieldType::Magnetic => owned,
        }
    }

    /// Take ownership of a plasma region. Band-owned plasma always uses the
    /// quadratic falloff, whatever the region was built with.
    pub fn add_plasma_region(&mut self, region: PlasmaRegion) {
        self.fields
            .add_field(region.with_falloff(PlasmaFalloff::Quadratic));
    }

    pub fn plasma_regions(&self) -> impl Iterator<Item = &PlasmaRegion> {
        self.fields.plasma_regions()
    }

    /// Bolts still active.
    pub fn lightning_bolts(&self) -> impl Iterator<Item = &LightningBolt> {
        self.fields.active_lightning()
    }

    /// Advance owned sources, prune expired bolts, then maybe spawn a strike.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        self.fields.update(dt, rng);

        let draw = rng.random::<f32>();
        if draw < self.lightning.generation_probability {
            let ground = sample_ground_point(&self.lightning, rng);
            let bolt = lightning_strike(ground, &self.lightning, rng);
            debug!(
                "Spontaneous lightning at x={:.0} m: strength {:.0}, duration {:.2}s",
                ground.x,
                bolt.strength(),
                bolt.duration()
            );
            self.fields.add_field(bolt);
        }
    }

    /// Spawn a strike ending at `position` and return a copy of it.
    pub fn generate_lightning_strike(&mut self, position: Vec2, rng: &mut impl Rng) -> LightningBolt {
        let bolt = lightning_strike(position, &self.lightning, rng);
        debug!(
            "Lightning strike at ({:.0}, {:.0}): strength {:.0}, duration {:.2}s",
            position.x,
            position.y,
            bolt.strength(),
            bolt.duration()
        );
        self.fields.add_field(bolt.clone());
        bolt
    }
}

impl Default for Ionosphere {
    fn default() -> Self {
        Self::standard()
    }
}
