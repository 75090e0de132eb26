//! Ordered stack of atmosphere layers with height lookup and fallback.

use super::{AtmosphereLayer, MediumProperties};
use tracing::{debug, warn};

/// Boundaries closer than this are considered touching (m).
const CONTIGUITY_TOLERANCE: f32 = 1e-3;

/// Layers sorted ascending by lower boundary.
///
/// Lookup policy:
/// 1. the first layer containing the height;
/// 2. the top layer if the height is at or above its upper boundary;
/// 3. the bottom layer if the height is below its lower boundary;
/// 4. otherwise (a gap between non-contiguous layers, or no layers at all) `None`,
///    and property queries answer with the fallback medium.
///
/// The fallback keeps every query total at the cost of a discontinuity at gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredAtmosphere {
    layers: Vec<AtmosphereLayer>,
    fallback: MediumProperties,
}

impl Default for LayeredAtmosphere {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredAtmosphere {
    /// Empty atmosphere answering with standard sea-level air everywhere.
    pub fn new() -> Self {
        Self::with_fallback(MediumProperties::STANDARD)
    }

    /// Empty atmosphere with a custom fallback medium.
    pub fn with_fallback(fallback: MediumProperties) -> Self {
        Self {
            layers: Vec::new(),
            fallback,
        }
    }

    /// Insert a layer, keeping the stack sorted by lower boundary.
    ///
    /// Gaps and overlaps with the new neighbours are tolerated but logged.
    pub fn add_layer(&mut self, layer: AtmosphereLayer) {
        let index = self
            .layers
            .partition_point(|existing| existing.lower_boundary() <= layer.lower_boundary());

        if let Some(below) = index.checked_sub(1).and_then(|i| self.layers.get(i)) {
            Self::check_seam(below, &layer);
        }
        if let Some(above) = self.layers.get(index) {
            Self::check_seam(&layer, above);
        }

        self.layers.insert(index, layer);
    }

    fn check_seam(lower: &AtmosphereLayer, upper: &AtmosphereLayer) {
        let seam = upper.lower_boundary() - lower.upper_boundary();
        if seam.abs() > CONTIGUITY_TOLERANCE {
            warn!(
                "Non-contiguous layers '{}' and '{}': {} of {:.1} m at {:.1} m",
                lower.name(),
                upper.name(),
                if seam > 0.0 { "gap" } else { "overlap" },
                seam.abs(),
                lower.upper_boundary()
            );
        }
    }

    pub fn layers(&self) -> &[AtmosphereLayer] {
        &self.layers
    }

    pub fn fallback(&self) -> MediumProperties {
        self.fallback
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// True when every layer's top meets the next layer's base.
    pub fn is_contiguous(&self) -> bool {
        self.layers.windows(2).all(|pair| {
            (pair[1].lower_boundary() - pair[0].upper_boundary()).abs() <= CONTIGUITY_TOLERANCE
        })
    }

    /// Resolve the layer governing `height`.
    pub fn layer_at(&self, height: f32) -> Option<&AtmosphereLayer> {
        if let Some(layer) = self.layers.iter().find(|l| l.contains_height(height)) {
            return Some(layer);
        }

        let (bottom, top) = (self.layers.first()?, self.layers.last()?);
        if height >= top.upper_boundary() {
            return Some(top);
        }
        if height < bottom.lower_boundary() {
            return Some(bottom);
        }

        debug!("Height {:.1} m falls in a layer gap, using fallback medium", height);
        None
    }

    /// Density at `height` (kg/m³).
    pub fn density_at(&self, height: f32) -> f32 {
        self.layer_at(height)
            .map_or(self.fallback.density, |layer| layer.density_at(height))
    }

    /// Pressure at `height` (Pa).
    pub fn pressure_at(&self, height: f32) -> f32 {
        self.layer_at(height)
            .map_or(self.fallback.pressure, |layer| layer.pressure_at(height))
    }

    /// Temperature at `height` (K).
    pub fn temperature_at(&self, height: f32) -> f32 {
        self.layer_at(height)
            .map_or(self.fallback.temperature, |layer| layer.temperature_at(height))
    }

    /// Dynamic viscosity at `height` (Pa·s).
    pub fn viscosity_at(&self, height: f32) -> f32 {
        self.layer_at(height)
            .map_or(self.fallback.viscosity, |layer| layer.viscosity_at(height))
    }

    /// All four properties from a single lookup.
    pub fn properties_at(&self, height: f32) -> MediumProperties {
        match self.layer_at(height) {
            Some(layer) => MediumProperties {
                density: layer.density_at(height),
                pressure: layer.pressure_at(height),
                temperature: layer.temperature_at(height),
                viscosity: layer.viscosity_at(height),
            },
            None => self.fallback,
        }
    }
}
