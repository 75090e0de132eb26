//! Reference field sources for the standard sky model.
//!
//! Strengths are in model units, not SI. The central electric source sits
//! 100 km below the surface so the near-surface field points roughly up, and
//! the firmament barrier pushes charged bodies back down.

use super::{
    DischargeKind, FieldComposite, FieldType, LightningBolt, PlasmaFalloff, PlasmaRegion,
    PointSourceField, UniformField,
};
use crate::config::LightningConfig;
use crate::core_types::Vec2;
use rand::Rng;
use tracing::info;

pub const GLOBAL_MAGNETIC_STRENGTH: f32 = 50.0;
pub const CENTRAL_FIELD_STRENGTH: f32 = 10_000.0;
pub const CENTRAL_FIELD_DEPTH: f32 = 100_000.0;
pub const FIRMAMENT_BARRIER_STRENGTH: f32 = 2.0e6;

// Aurora plasma
const AURORA_STRENGTH: f32 = 1_000.0;
const AURORA_RADIUS: f32 = 20_000.0;
const AURORA_X_SPAN: f32 = 100_000.0;
const AURORA_ALTITUDE: (f32, f32) = (90_000.0, 120_000.0);
const AURORA_IONIZATION: f32 = 0.7;
const AURORA_TEMPERATURE: f32 = 3_000.0;

/// Planet-wide magnetic field pointing up.
pub fn global_magnetic_field() -> UniformField {
    UniformField::new(FieldType::Magnetic, GLOBAL_MAGNETIC_STRENGTH, Vec2::new(0.0, 1.0))
}

/// Electric point source below the surface.
pub fn central_field() -> PointSourceField {
    PointSourceField::new(
        FieldType::Electric,
        CENTRAL_FIELD_STRENGTH,
        Vec2::new(0.0, -CENTRAL_FIELD_DEPTH),
    )
}

/// Strong downward electric field capping the sky.
pub fn firmament_barrier() -> UniformField {
    UniformField::new(FieldType::Electric, FIRMAMENT_BARRIER_STRENGTH, Vec2::new(0.0, -1.0))
}

/// Composite holding the global magnetic, central, and firmament fields.
pub fn standard_field_model() -> FieldComposite {
    let mut fields = FieldComposite::new();
    fields.add_field(global_magnetic_field());
    fields.add_field(central_field());
    fields.add_field(firmament_barrier());
    info!("Standard field model built: {} sources", fields.len());
    fields
}

/// Aurora-type plasma region at a random high-altitude position.
pub fn aurora(rng: &mut impl Rng) -> PlasmaRegion {
    let center = Vec2::new(
        rng.random_range(-AURORA_X_SPAN..=AURORA_X_SPAN),
        rng.random_range(AURORA_ALTITUDE.0..=AURORA_ALTITUDE.1),
    );
    let mut region = PlasmaRegion::from_valid(AURORA_STRENGTH, center, AURORA_RADIUS)
        .with_discharge_kind(DischargeKind::AuroraEffect)
        .with_falloff(PlasmaFalloff::Quadratic);
    region.set_ionization_level(AURORA_IONIZATION);
    region.set_temperature(AURORA_TEMPERATURE);
    region
}

/// Random ground point for a spontaneous strike.
pub(crate) fn sample_ground_point(config: &LightningConfig, rng: &mut impl Rng) -> Vec2 {
    let (min_x, max_x) = config.strike_x_range;
    Vec2::new(rng.random_range(min_x..=max_x), 0.0)
}

/// Bolt from a randomised cloud point down to `ground`.
///
/// `config` must have passed [`LightningConfig::validate`].
///
/// # Arguments
///
/// * `ground` - Strike point; the bolt ends here
/// * `config` - Height, offset, strength, and duration ranges
/// * `rng` - Random source
pub(crate) fn lightning_strike(ground: Vec2, config: &LightningConfig, rng: &mut impl Rng) -> LightningBolt {
    let (min_height, max_height) = config.cloud_height_range;
    let offset = config.horizontal_offset;
    let cloud = Vec2::new(
        ground.x + rng.random_range(-offset..=offset),
        ground.y + rng.random_range(min_height..=max_height),
    );
    let strength = rng.random_range(config.strength_range.0..=config.strength_range.1);
    let duration = rng.random_range(config.duration_range.0..=config.duration_range.1);
    LightningBolt::new(strength, cloud, ground, duration)
}
