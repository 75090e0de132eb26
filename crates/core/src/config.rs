//! Configuration for the stochastic lightning generator, the ionosphere, and
//! the assembled environment.
//!
//! All structs deserialize with `#[serde(default)]`, so a partial document
//! overrides only the fields it names. Call `validate()` before use; sampling
//! ranges that fail validation would otherwise make the random draws panic.

use crate::atmosphere::MediumProperties;
use crate::error::{ensure_finite, ensure_non_negative, ensure_range, EnvResult, EnvironmentError};
use serde::{Deserialize, Serialize};

/// Parameters for synthesising ground strikes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightningConfig {
    /// Chance per tick that a spontaneous strike is generated (0-1)
    pub generation_probability: f32,
    /// Ground-point x range for spontaneous strikes (m)
    pub strike_x_range: (f32, f32),
    /// Cloud height above the ground point (m)
    pub cloud_height_range: (f32, f32),
    /// Maximum horizontal offset of the cloud point from the ground point (m)
    pub horizontal_offset: f32,
    pub strength_range: (f32, f32),
    /// Bolt lifetime (s)
    pub duration_range: (f32, f32),
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            generation_probability: 0.002,
            strike_x_range: (-10_000.0, 10_000.0),
            cloud_height_range: (5_000.0, 10_000.0),
            horizontal_offset: 1_000.0,
            strength_range: (8_000.0, 15_000.0),
            duration_range: (0.3, 1.2),
        }
    }
}

impl LightningConfig {
    pub fn validate(&self) -> EnvResult<()> {
        let p = ensure_finite("generation_probability", self.generation_probability)?;
        if !(0.0..=1.0).contains(&p) {
            return Err(EnvironmentError::InvalidProbability { value: p });
        }
        ensure_range("strike_x_range", self.strike_x_range)?;
        ensure_range("cloud_height_range", self.cloud_height_range)?;
        ensure_non_negative("cloud_height_range", self.cloud_height_range.0)?;
        ensure_non_negative("horizontal_offset", self.horizontal_offset)?;
        ensure_range("strength_range", self.strength_range)?;
        ensure_non_negative("strength_range", self.strength_range.0)?;
        ensure_range("duration_range", self.duration_range)?;
        ensure_non_negative("duration_range", self.duration_range.0)?;
        Ok(())
    }
}

/// Ionosphere band geometry and ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IonosphereConfig {
    /// Bottom of the band (m)
    pub lower_boundary: f32,
    /// Band thickness (m)
    pub thickness: f32,
    /// Peak ionization at mid-band (0-1)
    pub base_ionization: f32,
    /// Strength of the horizontal plasma field inside the band
    pub band_field_strength: f32,
    pub lightning: LightningConfig,
}

impl Default for IonosphereConfig {
    fn default() -> Self {
        Self {
            lower_boundary: 80_000.0,
            thickness: 500_000.0,
            base_ionization: 0.5,
            band_field_strength: 0.5,
            lightning: LightningConfig::default(),
        }
    }
}

impl IonosphereConfig {
    pub fn upper_boundary(&self) -> f32 {
        self.lower_boundary + self.thickness
    }

    pub fn validate(&self) -> EnvResult<()> {
        let lower = ensure_finite("lower_boundary", self.lower_boundary)?;
        let thickness = ensure_finite("thickness", self.thickness)?;
        if thickness <= 0.0 {
            return Err(EnvironmentError::InvalidIonosphereBounds {
                lower,
                upper: lower + thickness,
            });
        }
        let level = ensure_non_negative("base_ionization", self.base_ionization)?;
        if level > 1.0 {
            return Err(EnvironmentError::InvalidProbability { value: level });
        }
        ensure_non_negative("band_field_strength", self.band_field_strength)?;
        self.lightning.validate()
    }
}

/// Everything needed to assemble an [`crate::Environment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Install the standard electromagnetic model into the global fields
    pub standard_fields: bool,
    /// Ionosphere band, if any
    pub ionosphere: Option<IonosphereConfig>,
    /// Medium answered where no layer covers a height
    pub fallback: MediumProperties,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            seed: None,
            standard_fields: true,
            ionosphere: Some(IonosphereConfig::default()),
            fallback: MediumProperties::STANDARD,
        }
    }
}

impl EnvironmentConfig {
    pub fn validate(&self) -> EnvResult<()> {
        ensure_non_negative("fallback.density", self.fallback.density)?;
        ensure_non_negative("fallback.pressure", self.fallback.pressure)?;
        ensure_non_negative("fallback.temperature", self.fallback.temperature)?;
        ensure_non_negative("fallback.viscosity", self.fallback.viscosity)?;
        self.ionosphere
            .as_ref()
            .map_or(Ok(()), IonosphereConfig::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(LightningConfig::default().validate().is_ok());
        assert!(IonosphereConfig::default().validate().is_ok());
        assert!(EnvironmentConfig::default().validate().is_ok());
        assert_eq!(IonosphereConfig::default().upper_boundary(), 580_000.0);
    }

    #[test]
    fn partial_documents_override_only_named_fields() {
        let config: IonosphereConfig = serde_json::from_str(r#"{"thickness": 1000}"#).unwrap();
        assert_eq!(config.thickness, 1_000.0);
        assert_eq!(
            config,
            IonosphereConfig {
                thickness: 1_000.0,
                ..IonosphereConfig::default()
            }
        );

        let lightning: LightningConfig =
            serde_json::from_str(r#"{"duration_range": [0.5, 0.8]}"#).unwrap();
        assert_eq!(lightning.duration_range, (0.5, 0.8));
        assert_eq!(lightning.generation_probability, 0.002);

        let environment: EnvironmentConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(environment, EnvironmentConfig::default());
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = EnvironmentConfig {
            seed: Some(42),
            standard_fields: false,
            ..EnvironmentConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let decoded: EnvironmentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, config);
        assert!(decoded.validate().is_ok());
    }

    #[test]
    fn rejects_bad_probability() {
        let config = LightningConfig {
            generation_probability: 1.5,
            ..LightningConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(EnvironmentError::InvalidProbability { value: 1.5 })
        );
    }

    #[test]
    fn rejects_inverted_ranges() {
        let config = LightningConfig {
            duration_range: (2.0, 1.0),
            ..LightningConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EnvironmentError::InvalidRange { parameter: "duration_range", .. })
        ));
    }

    #[test]
    fn rejects_empty_band() {
        let config = IonosphereConfig {
            thickness: 0.0,
            ..IonosphereConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(EnvironmentError::InvalidIonosphereBounds { .. })
        ));
    }

    #[test]
    fn nested_lightning_config_is_checked() {
        let mut config = EnvironmentConfig::default();
        if let Some(ionosphere) = config.ionosphere.as_mut() {
            ionosphere.lightning.horizontal_offset = -1.0;
        }
        assert!(matches!(
            config.validate(),
            Err(EnvironmentError::NegativeParameter { parameter: "horizontal_offset", .. })
        ));
    }
}
