//! A single altitude band with a closed-form barometric profile.
//!
//! Temperature falls linearly with height from the layer base. Pressure follows
//! the barometric formula for a constant lapse rate, or the exponential form when
//! the layer is isothermal. Density comes from the ideal-gas law and viscosity
//! from Sutherland's law.
//!
//! # References
//!
//! - ICAO Standard Atmosphere (1993)
//! - Sutherland, W. (1893). "The viscosity of gases and molecular force."

use crate::constants::{
    DEFAULT_LAPSE_RATE, GAS_CONSTANT_AIR, GRAVITY, ISOTHERMAL_THRESHOLD, MIN_TEMPERATURE,
    SUTHERLAND_CONSTANT, SUTHERLAND_REF_TEMPERATURE, SUTHERLAND_REF_VISCOSITY,
    TEMPERATURE_GUARD,
};
use super::standard::LayerSpec;
use crate::error::{ensure_finite, ensure_non_negative, EnvResult, EnvironmentError};
use serde::{Deserialize, Serialize};

/// One band of a layered atmosphere.
///
/// Immutable once built; owned by the [`LayeredAtmosphere`](super::LayeredAtmosphere)
/// that contains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereLayer {
    name: String,
    /// Reference density (kg/m³), informational only
    base_density: f32,
    /// Temperature at the lower boundary (K)
    base_temperature: f32,
    /// Lower boundary height (m)
    lower_boundary: f32,
    /// Upper boundary height (m), exclusive
    upper_boundary: f32,
    /// Pressure at the lower boundary (Pa)
    pressure_at_lower_boundary: f32,
    /// Temperature decrease per meter (K/m); negative for an inversion
    lapse_rate: f32,
}

impl AtmosphereLayer {
    /// Create a layer with the default 0.0065 K/m lapse rate.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the layer
    /// * `base_density` - Reference density (kg/m³)
    /// * `base_temperature` - Temperature at the lower boundary (K)
    /// * `lower_boundary` - Layer base (m)
    /// * `upper_boundary` - Layer top (m), must exceed `lower_boundary`
    /// * `pressure_at_lower_boundary` - Pressure at the layer base (Pa)
    pub fn new(
        name: impl Into<String>,
        base_density: f32,
        base_temperature: f32,
        lower_boundary: f32,
        upper_boundary: f32,
        pressure_at_lower_boundary: f32,
    ) -> EnvResult<Self> {
        let name = name.into();
        let lower_boundary = ensure_finite("lower_boundary", lower_boundary)?;
        let upper_boundary = ensure_finite("upper_boundary", upper_boundary)?;
        if lower_boundary >= upper_boundary {
            return Err(EnvironmentError::InvalidLayerBounds {
                name,
                lower: lower_boundary,
                upper: upper_boundary,
            });
        }

        Ok(Self {
            name,
            base_density: ensure_non_negative("base_density", base_density)?,
            base_temperature: ensure_non_negative("base_temperature", base_temperature)?,
            lower_boundary,
            upper_boundary,
            pressure_at_lower_boundary: ensure_non_negative(
                "pressure_at_lower_boundary",
                pressure_at_lower_boundary,
            )?,
            lapse_rate: DEFAULT_LAPSE_RATE,
        })
    }

    /// Build a reference layer without validation.
    pub(crate) fn from_reference(spec: &LayerSpec) -> Self {
        debug_assert!(spec.lower_boundary < spec.upper_boundary);
        Self {
            name: spec.name.to_owned(),
            base_density: spec.density,
            base_temperature: spec.temperature,
            lower_boundary: spec.lower_boundary,
            upper_boundary: spec.upper_boundary,
            pressure_at_lower_boundary: spec.pressure,
            lapse_rate: DEFAULT_LAPSE_RATE,
        }
    }

    /// Replace the lapse rate (K/m).
    pub fn with_lapse_rate(mut self, lapse_rate: f32) -> EnvResult<Self> {
        self.lapse_rate = ensure_finite("lapse_rate", lapse_rate)?;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_density(&self) -> f32 {
        self.base_density
    }

    pub fn base_temperature(&self) -> f32 {
        self.base_temperature
    }

    pub fn lower_boundary(&self) -> f32 {
        self.lower_boundary
    }

    pub fn upper_boundary(&self) -> f32 {
        self.upper_boundary
    }

    pub fn thickness(&self) -> f32 {
        self.upper_boundary - self.lower_boundary
    }

    pub fn pressure_at_lower_boundary(&self) -> f32 {
        self.pressure_at_lower_boundary
    }

    pub fn lapse_rate(&self) -> f32 {
        self.lapse_rate
    }

    /// Whether the layer's thermal profile is flat.
    pub fn is_isothermal(&self) -> bool {
        self.lapse_rate.abs() < ISOTHERMAL_THRESHOLD
    }

    /// True iff `lower_boundary <= height < upper_boundary`.
    pub fn contains_height(&self, height: f32) -> bool {
        height >= self.lower_boundary && height < self.upper_boundary
    }

    /// Temperature at `height` (K), floored at 2 K.
    pub fn temperature_at(&self, height: f32) -> f32 {
        let relative_height = height - self.lower_boundary;
        (self.base_temperature - self.lapse_rate * relative_height).max(MIN_TEMPERATURE)
    }

    /// Pressure at `height` (Pa), never negative.
    ///
    /// The height is clamped into `[lower, upper - 1]` first so queries far
    /// outside the band cannot blow up the power law.
    ///
    /// ```text
    /// isothermal:  P = P0 · exp(−g·Δh / (R·T0))
    /// otherwise:   P = P0 · (T/T0)^(g / (R·L))
    /// ```
    pub fn pressure_at(&self, height: f32) -> f32 {
        let clamped = height
            .min(self.upper_boundary - 1.0)
            .max(self.lower_boundary);
        let relative_height = clamped - self.lower_boundary;

        let pressure = if self.is_isothermal() {
            let scale = GRAVITY / (GAS_CONSTANT_AIR * self.base_temperature);
            self.pressure_at_lower_boundary * (-scale * relative_height).exp()
        } else {
            let ratio = self.temperature_at(clamped) / self.base_temperature;
            if ratio <= 0.0 || !ratio.is_finite() {
                return 0.0;
            }
            let exponent = GRAVITY / (GAS_CONSTANT_AIR * self.lapse_rate);
            self.pressure_at_lower_boundary * ratio.powf(exponent)
        };

        if pressure.is_finite() {
            pressure.max(0.0)
        } else {
            0.0
        }
    }

    /// Density at `height` (kg/m³) from the ideal-gas law `ρ = P/(R·T)`.
    pub fn density_at(&self, height: f32) -> f32 {
        let temperature = self.temperature_at(height);
        if temperature < TEMPERATURE_GUARD {
            return 0.0;
        }
        (self.pressure_at(height) / (GAS_CONSTANT_AIR * temperature)).max(0.0)
    }

    /// Dynamic viscosity at `height` (Pa·s) from Sutherland's law.
    ///
    /// ```text
    /// μ = μ_ref · (T/T_ref)^1.5 · (T_ref + S) / (T + S)
    /// ```
    pub fn viscosity_at(&self, height: f32) -> f32 {
        let temperature = self.temperature_at(height);
        if temperature < TEMPERATURE_GUARD {
            return SUTHERLAND_REF_VISCOSITY * 0.01;
        }
        SUTHERLAND_REF_VISCOSITY
            * (temperature / SUTHERLAND_REF_TEMPERATURE).powf(1.5)
            * (SUTHERLAND_REF_TEMPERATURE + SUTHERLAND_CONSTANT)
            / (temperature + SUTHERLAND_CONSTANT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn troposphere() -> AtmosphereLayer {
        AtmosphereLayer::new("Troposphere", 1.225, 288.15, 0.0, 12_000.0, 101_325.0)
            .expect("valid layer")
    }

    #[test]
    fn rejects_inverted_bounds() {
        let err = AtmosphereLayer::new("Broken", 1.0, 280.0, 500.0, 500.0, 1000.0).unwrap_err();
        assert!(matches!(err, EnvironmentError::InvalidLayerBounds { .. }));
    }

    #[test]
    fn rejects_negative_pressure() {
        assert!(AtmosphereLayer::new("Broken", 1.0, 280.0, 0.0, 10.0, -1.0).is_err());
    }

    #[test]
    fn contains_height_is_half_open() {
        let layer = troposphere();
        assert!(layer.contains_height(0.0));
        assert!(layer.contains_height(11_999.9));
        assert!(!layer.contains_height(12_000.0));
        assert!(!layer.contains_height(-0.1));
    }

    #[test]
    fn sea_level_values() {
        let layer = troposphere();
        assert_eq!(layer.temperature_at(0.0), 288.15);
        assert_eq!(layer.pressure_at(0.0), 101_325.0);
        assert_relative_eq!(layer.density_at(0.0), 1.225, epsilon = 1e-3);
    }

    #[test]
    fn temperature_floor() {
        let layer = AtmosphereLayer::new("Cold", 0.0, 4.0, 0.0, 10_000.0, 0.0).unwrap();
        assert_eq!(layer.temperature_at(9_000.0), MIN_TEMPERATURE);
    }

    #[test]
    fn pressure_clamps_outside_band() {
        let layer = troposphere();
        assert_eq!(layer.pressure_at(-500.0), layer.pressure_at(0.0));
        assert_eq!(layer.pressure_at(50_000.0), layer.pressure_at(11_999.0));
    }

    #[test]
    fn pressure_non_increasing_with_height() {
        let layer = troposphere();
        let mut previous = f32::INFINITY;
        for step in 0..120 {
            let p = layer.pressure_at(step as f32 * 100.0);
            assert!(p <= previous, "pressure rose at {} m: {p} > {previous}", step * 100);
            previous = p;
        }
    }

    #[test]
    fn isothermal_branch_is_exponential() {
        let layer = AtmosphereLayer::new("Flat", 0.36, 216.65, 0.0, 20_000.0, 19_399.0)
            .unwrap()
            .with_lapse_rate(0.0)
            .unwrap();
        assert!(layer.is_isothermal());
        let expected = 19_399.0 * (-GRAVITY * 5_000.0 / (GAS_CONSTANT_AIR * 216.65)).exp();
        assert_relative_eq!(layer.pressure_at(5_000.0), expected, max_relative = 1e-5);
        assert_eq!(layer.temperature_at(5_000.0), 216.65);
    }

    #[test]
    fn inversion_layer_still_loses_pressure() {
        let layer = AtmosphereLayer::new("Inversion", 0.001, 200.0, 0.0, 10_000.0, 100.0)
            .unwrap()
            .with_lapse_rate(-0.002)
            .unwrap();
        assert!(layer.temperature_at(5_000.0) > 200.0);
        assert!(layer.pressure_at(5_000.0) < 100.0);
    }

    #[test]
    fn ideal_gas_consistency() {
        let layer = troposphere();
        for height in [0.0, 1_500.0, 6_000.0, 11_000.0] {
            let expected =
                layer.pressure_at(height) / (GAS_CONSTANT_AIR * layer.temperature_at(height));
            assert_relative_eq!(layer.density_at(height), expected, max_relative = 1e-6);
        }
    }

    #[test]
    fn viscosity_matches_sutherland_reference() {
        let layer = AtmosphereLayer::new("Ref", 1.0, SUTHERLAND_REF_TEMPERATURE, 0.0, 10.0, 1.0)
            .unwrap();
        assert_relative_eq!(
            layer.viscosity_at(0.0),
            SUTHERLAND_REF_VISCOSITY,
            max_relative = 1e-5
        );
        assert!(layer.viscosity_at(5.0) > 0.0);
    }
}
