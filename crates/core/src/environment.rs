//! The assembled sky environment queried by a rigid-body integrator.
//!
//! One [`Environment`] owns the layered atmosphere, the global field composite,
//! an optional ionosphere band, and the random source that drives plasma
//! fluctuation and spontaneous lightning. Call [`Environment::update`] once per
//! tick before any queries of that tick.

use crate::atmosphere::{standard_atmosphere_with_fallback, LayeredAtmosphere, MediumProperties};
use crate::config::{EnvironmentConfig, LightningConfig};
use crate::core_types::{Body, Vec2};
use crate::error::EnvResult;
use crate::fields::presets::{self, lightning_strike};
use crate::fields::{lorentz_force, FieldComposite, FieldType, LightningBolt};
use crate::ionosphere::Ionosphere;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

/// Everything the environment says about one position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSample {
    pub position: Vec2,
    pub medium: MediumProperties,
    pub electric: Vec2,
    pub magnetic: Vec2,
    pub plasma: Vec2,
    /// 0-1
    pub ionization: f32,
    pub in_ionosphere: bool,
}

/// Atmosphere, fields, and ionosphere advanced together.
#[derive(Debug, Clone)]
pub struct Environment {
    atmosphere: LayeredAtmosphere,
    fields: FieldComposite,
    ionosphere: Option<Ionosphere>,
    /// Strike parameters when there is no ionosphere
    lightning: LightningConfig,
    rng: StdRng,
    elapsed_time: f32,
}

impl Environment {
    /// Standard atmosphere, standard fields, and the reference ionosphere.
    pub fn standard(seed: u64) -> Self {
        let environment = Self::assemble(
            standard_atmosphere_with_fallback(MediumProperties::STANDARD),
            presets::standard_field_model(),
            Some(Ionosphere::standard()),
            StdRng::seed_from_u64(seed),
        );
        info!("Standard environment ready (seed {})", seed);
        environment
    }

    pub fn from_config(config: &EnvironmentConfig) -> EnvResult<Self> {
        config.validate()?;

        let fields = if config.standard_fields {
            presets::standard_field_model()
        } else {
            FieldComposite::new()
        };
        let ionosphere = config
            .ionosphere
            .as_ref()
            .map(Ionosphere::from_config)
            .transpose()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let environment = Self::assemble(
            standard_atmosphere_with_fallback(config.fallback),
            fields,
            ionosphere,
            rng,
        );
        info!(
            "Environment ready: {} field source(s), ionosphere {}",
            environment.fields.len(),
            if environment.ionosphere.is_some() { "on" } else { "off" }
        );
        Ok(environment)
    }

    /// Combine pre-built parts. The atmosphere may be any layer stack.
    pub fn with_parts(
        atmosphere: LayeredAtmosphere,
        fields: FieldComposite,
        ionosphere: Option<Ionosphere>,
        seed: u64,
    ) -> Self {
        Self::assemble(atmosphere, fields, ionosphere, StdRng::seed_from_u64(seed))
    }

    fn assemble(
        atmosphere: LayeredAtmosphere,
        fields: FieldComposite,
        ionosphere: Option<Ionosphere>,
        rng: StdRng,
    ) -> Self {
        let lightning = ionosphere
            .as_ref()
            .map(|band| band.lightning_config().clone())
            .unwrap_or_default();
        Self {
            atmosphere,
            fields,
            ionosphere,
            lightning,
            rng,
            elapsed_time: 0.0,
        }
    }

    pub fn atmosphere(&self) -> &LayeredAtmosphere {
        &self.atmosphere
    }

    pub fn fields(&self) -> &FieldComposite {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FieldComposite {
        &mut self.fields
    }

    pub fn ionosphere(&self) -> Option<&Ionosphere> {
        self.ionosphere.as_ref()
    }

    pub fn ionosphere_mut(&mut self) -> Option<&mut Ionosphere> {
        self.ionosphere.as_mut()
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// Advance global fields, then the ionosphere.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.fields.update(dt, &mut self.rng);
        if let Some(ionosphere) = self.ionosphere.as_mut() {
            ionosphere.update(dt, &mut self.rng);
        }
        self.elapsed_time += dt;
        trace!("Environment tick t={:.3}s", self.elapsed_time);
    }

    pub fn density_at(&self, position: Vec2) -> f32 {
        self.atmosphere.density_at(position.y)
    }

    pub fn pressure_at(&self, position: Vec2) -> f32 {
        self.atmosphere.pressure_at(position.y)
    }

    pub fn temperature_at(&self, position: Vec2) -> f32 {
        self.atmosphere.temperature_at(position.y)
    }

    pub fn viscosity_at(&self, position: Vec2) -> f32 {
        self.atmosphere.viscosity_at(position.y)
    }

    /// Net field of one type from global sources and the ionosphere.
    pub fn field_at(&self, position: Vec2, field_type: FieldType) -> Vec2 {
        let global = self.fields.net_field_vector(position, field_type);
        self.ionosphere.as_ref().map_or(global, |band| {
            global + band.field_vector_at(position, field_type)
        })
    }

    pub fn electric_field_at(&self, position: Vec2) -> Vec2 {
        self.field_at(position, FieldType::Electric)
    }

    pub fn magnetic_field_at(&self, position: Vec2) -> Vec2 {
        self.field_at(position, FieldType::Magnetic)
    }

    pub fn plasma_field_at(&self, position: Vec2) -> Vec2 {
        self.field_at(position, FieldType::Plasma)
    }

    /// Ionosphere ionization at `position`; zero without an ionosphere.
    pub fn ionization_at(&self, position: Vec2) -> f32 {
        self.ionosphere
            .as_ref()
            .map_or(0.0, |band| band.ionization_at(position))
    }

    pub fn in_ionosphere(&self, position: Vec2) -> bool {
        self.ionosphere
            .as_ref()
            .is_some_and(|band| band.contains_position(position))
    }

    pub fn sample(&self, position: Vec2) -> EnvironmentSample {
        EnvironmentSample {
            position,
            medium: self.atmosphere.properties_at(position.y),
            electric: self.electric_field_at(position),
            magnetic: self.magnetic_field_at(position),
            plasma: self.plasma_field_at(position),
            ionization: self.ionization_at(position),
            in_ionosphere: self.in_ionosphere(position),
        }
    }

    /// Add electromagnetic force to a charged body.
    ///
    /// Lorentz force from the net electric and magnetic fields. Inside the
    /// ionosphere the plasma field, weighted by local ionization and the body's
    /// plasma interaction, acts as an extra electric field. Uncharged bodies are
    /// left untouched.
    pub fn apply_field_forces(&self, body: &mut Body) {
        let Some(charge) = body.charge().copied() else {
            return;
        };
        let position = body.position;
        let mut force = lorentz_force(
            &charge,
            body.velocity,
            self.electric_field_at(position),
            self.magnetic_field_at(position),
        );

        if self.in_ionosphere(position) {
            let coupling = self.ionization_at(position) * charge.plasma_interaction;
            force += self.plasma_field_at(position) * (coupling * charge.charge);
        }
        body.apply_force(force);
    }

    /// Spawn a ground strike ending at `position` into the global fields.
    pub fn generate_lightning_strike(&mut self, position: Vec2) -> LightningBolt {
        let bolt = lightning_strike(position, &self.lightning, &mut self.rng);
        debug!(
            "Manual lightning strike at ({:.0}, {:.0}): strength {:.0}",
            position.x,
            position.y,
            bolt.strength()
        );
        self.fields.add_field(bolt.clone());
        bolt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IonosphereConfig;
    use crate::core_types::ChargeProperties;
    use approx::assert_relative_eq;

    fn quiet_config() -> EnvironmentConfig {
        EnvironmentConfig {
            seed: Some(3),
            standard_fields: false,
            ionosphere: Some(IonosphereConfig {
                lightning: LightningConfig {
                    generation_probability: 0.0,
                    ..LightningConfig::default()
                },
                ..IonosphereConfig::default()
            }),
            ..EnvironmentConfig::default()
        }
    }

    #[test]
    fn sea_level_sample() {
        let environment = Environment::standard(1);
        let sample = environment.sample(Vec2::zeros());
        assert_relative_eq!(sample.medium.density, 1.225, epsilon = 0.01);
        assert_relative_eq!(sample.medium.pressure, 101_325.0, max_relative = 1e-4);
        assert_relative_eq!(sample.medium.temperature, 288.15, epsilon = 1e-3);
        assert!(!sample.in_ionosphere);
        assert_eq!(sample.ionization, 0.0);
        assert_eq!(sample.magnetic, Vec2::new(0.0, 50.0));
    }

    #[test]
    fn plasma_field_only_in_band() {
        let environment = Environment::from_config(&quiet_config()).unwrap();
        assert_eq!(environment.plasma_field_at(Vec2::new(0.0, 1_000.0)), Vec2::zeros());
        assert_eq!(
            environment.plasma_field_at(Vec2::new(0.0, 300_000.0)),
            Vec2::new(0.5, 0.0)
        );
    }

    #[test]
    fn plasma_coupling_inside_band() {
        let environment = Environment::from_config(&quiet_config()).unwrap();
        let position = Vec2::new(0.0, 330_000.0);
        let mut body = Body::charged(position, ChargeProperties::new(2.0).with_plasma_interaction(0.5));
        environment.apply_field_forces(&mut body);

        // Mid-band ionization 0.5: 0.5 field · 0.5 · 0.5 interaction · 2 C
        let force = body.force();
        assert_relative_eq!(force.x, 0.25, epsilon = 1e-4);
        assert_relative_eq!(force.y, 0.0, epsilon = 1e-6);

        let mut neutral = Body::neutral(position);
        environment.apply_field_forces(&mut neutral);
        assert_eq!(neutral.force(), Vec2::zeros());
    }

    #[test]
    fn manual_strike_joins_global_fields() {
        let mut environment = Environment::from_config(&quiet_config()).unwrap();
        let bolt = environment.generate_lightning_strike(Vec2::new(100.0, 0.0));
        assert_eq!(environment.fields().active_lightning().count(), 1);

        let e = environment.electric_field_at(Vec2::new(150.0, 2_000.0));
        assert!(e.norm() > 0.0);

        environment.update(bolt.duration() + 0.1);
        assert_eq!(environment.fields().active_lightning().count(), 0);
        assert_eq!(environment.electric_field_at(Vec2::new(150.0, 2_000.0)), Vec2::zeros());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = quiet_config();
        config.fallback.density = -1.0;
        assert!(Environment::from_config(&config).is_err());
    }
}
