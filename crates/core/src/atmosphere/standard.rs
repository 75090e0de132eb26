//! Reference layer stack from the surface to the firmament dome.
//!
//! Boundary values follow the ICAO standard atmosphere up to the mesosphere;
//! the exosphere and firmament cap the model at 10 001 km.

use super::{AtmosphereLayer, LayeredAtmosphere, MediumProperties};
use crate::error::EnvResult;
use tracing::info;

/// Literal constants for one reference layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSpec {
    pub name: &'static str,
    /// kg/m³
    pub density: f32,
    /// K
    pub temperature: f32,
    /// m
    pub lower_boundary: f32,
    /// m
    pub upper_boundary: f32,
    /// Pa
    pub pressure: f32,
}

impl LayerSpec {
    /// Build the layer, validating the literal values.
    pub fn try_build(&self) -> EnvResult<AtmosphereLayer> {
        AtmosphereLayer::new(
            self.name,
            self.density,
            self.temperature,
            self.lower_boundary,
            self.upper_boundary,
            self.pressure,
        )
    }

    /// Build one of the reference layers in this module, which are valid by
    /// construction.
    pub(crate) fn build(&self) -> AtmosphereLayer {
        AtmosphereLayer::from_reference(self)
    }
}

/// Troposphere: 0-12 km, where weather occurs
pub const TROPOSPHERE: LayerSpec = LayerSpec {
    name: "Troposphere",
    density: 1.225,
    temperature: 288.15,
    lower_boundary: 0.0,
    upper_boundary: 12_000.0,
    pressure: 101_325.0,
};

/// Stratosphere: 12-50 km, contains the ozone layer
pub const STRATOSPHERE: LayerSpec = LayerSpec {
    name: "Stratosphere",
    density: 0.36,
    temperature: 216.65,
    lower_boundary: 12_000.0,
    upper_boundary: 50_000.0,
    pressure: 19_399.0,
};

/// Mesosphere: 50-85 km, where meteors burn up
pub const MESOSPHERE: LayerSpec = LayerSpec {
    name: "Mesosphere",
    density: 0.001,
    temperature: 270.65,
    lower_boundary: 50_000.0,
    upper_boundary: 85_000.0,
    pressure: 75.65,
};

/// Thermosphere: 85-600 km, where aurora occurs
pub const THERMOSPHERE: LayerSpec = LayerSpec {
    name: "Thermosphere",
    density: 0.00001,
    temperature: 186.87,
    lower_boundary: 85_000.0,
    upper_boundary: 600_000.0,
    pressure: 0.3734,
};

/// Exosphere: 600-10 000 km, transitioning to vacuum
pub const EXOSPHERE: LayerSpec = LayerSpec {
    name: "Exosphere",
    density: 0.000000001,
    temperature: 1000.0,
    lower_boundary: 600_000.0,
    upper_boundary: 10_000_000.0,
    pressure: 0.0002,
};

/// Firmament: the dome above, 10 000-10 001 km
pub const FIRMAMENT: LayerSpec = LayerSpec {
    name: "Firmament",
    density: 2.5,
    temperature: 4.0,
    lower_boundary: 10_000_000.0,
    upper_boundary: 10_001_000.0,
    pressure: 0.0,
};

/// Electrically charged band, 60-1000 km. Overlaps the standard stack, so it is
/// only used for overlaid models and never inserted by [`standard_atmosphere`].
pub const IONOSPHERE: LayerSpec = LayerSpec {
    name: "Ionosphere",
    density: 0.000001,
    temperature: 1500.0,
    lower_boundary: 60_000.0,
    upper_boundary: 1_000_000.0,
    pressure: 0.1,
};

/// The six contiguous reference layers, bottom to top.
pub const STANDARD_LAYERS: [LayerSpec; 6] = [
    TROPOSPHERE,
    STRATOSPHERE,
    MESOSPHERE,
    THERMOSPHERE,
    EXOSPHERE,
    FIRMAMENT,
];

/// Build the six-layer standard atmosphere.
pub fn standard_atmosphere() -> LayeredAtmosphere {
    standard_atmosphere_with_fallback(MediumProperties::STANDARD)
}

/// Six-layer standard atmosphere answering gaps with `fallback`.
pub fn standard_atmosphere_with_fallback(fallback: MediumProperties) -> LayeredAtmosphere {
    let mut atmosphere = LayeredAtmosphere::with_fallback(fallback);
    for spec in &STANDARD_LAYERS {
        atmosphere.add_layer(spec.build());
    }
    info!(
        "Standard atmosphere built: {} layers, 0-{:.0} km",
        atmosphere.layers().len(),
        FIRMAMENT.upper_boundary / 1000.0
    );
    atmosphere
}

/// Standalone ionosphere band layer.
pub fn ionosphere_layer() -> AtmosphereLayer {
    IONOSPHERE.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_stack_is_contiguous() {
        let atmosphere = standard_atmosphere();
        assert_eq!(atmosphere.layers().len(), 6);
        assert!(atmosphere.is_contiguous());
    }

    #[test]
    fn each_layer_resolves_at_its_base() {
        let atmosphere = standard_atmosphere();
        for spec in &STANDARD_LAYERS {
            let layer = atmosphere.layer_at(spec.lower_boundary).expect("layer");
            assert_eq!(layer.name(), spec.name);
        }
    }

    #[test]
    fn reference_specs_pass_validation() {
        for spec in STANDARD_LAYERS.iter().chain(std::iter::once(&IONOSPHERE)) {
            let validated = spec.try_build().expect("reference spec is valid");
            assert_eq!(validated, spec.build());
        }
    }

    #[test]
    fn custom_fallback_is_kept() {
        let thin = MediumProperties {
            density: 0.1,
            ..MediumProperties::STANDARD
        };
        let atmosphere = standard_atmosphere_with_fallback(thin);
        assert_eq!(atmosphere.fallback(), thin);
        assert_eq!(atmosphere.layers().len(), 6);
    }

    #[test]
    fn ionosphere_layer_overlaps_stack() {
        let layer = ionosphere_layer();
        assert!(layer.contains_height(80_000.0));
        assert_eq!(layer.thickness(), 940_000.0);
    }
}
