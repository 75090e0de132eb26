//! Disc-shaped plasma regions.
//!
//! A plasma region acts within `radius` of its centre and is exactly zero
//! outside. Inside, the magnitude is
//!
//! ```text
//! |E| = strength · falloff(d / radius) · ionization
//! ```
//!
//! and the direction depends on the discharge kind: radial for corona and solar
//! flares, a rotating vector for arcs, straight down for lightning-like plasma,
//! a swirl for aurora, and horizontal for plasma sheets.
//!
//! Each tick the oscillation phase advances, the strength jitters within a
//! bounded band around its base value, and temperature and ionization drift
//! slowly around their base values.

use super::FieldType;
use crate::core_types::vec2::{Vec2, EPSILON_LENGTH};
use crate::error::{ensure_finite, ensure_non_negative, EnvResult, EnvironmentError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Phase advance of the oscillation (rad/s).
const OSCILLATION_RATE: f32 = 2.0;

/// Peak relative strength change per second from random fluctuation.
const FLUCTUATION_RATE: f32 = 0.1;

/// Strength stays within `base · (1 ± STRENGTH_BAND)`.
const STRENGTH_BAND: f32 = 0.25;

/// Relative amplitude and angular rate of the temperature drift.
const TEMPERATURE_DRIFT: f32 = 0.05;
const TEMPERATURE_DRIFT_RATE: f32 = 0.1;
const TEMPERATURE_RANGE: (f32, f32) = (100.0, 100_000.0);

/// Absolute amplitude and angular rate of the ionization drift.
const IONIZATION_DRIFT: f32 = 0.05;
const IONIZATION_DRIFT_RATE: f32 = 0.07;
const IONIZATION_RANGE: (f32, f32) = (0.1, 0.9);

/// Temperature at which ionization saturates (K).
const FULL_IONIZATION_TEMPERATURE: f32 = 10_000.0;

// Solar flare evolution
const FLARE_EXPANSION_RATE: f32 = 10.0; // m/s
const FLARE_DECAY_RATE: f32 = 0.1; // strength/s

/// Plasma sheet drift speed along +x (m/s).
const SHEET_DRIFT_SPEED: f32 = 10.0;

const DEFAULT_TEMPERATURE: f32 = 5000.0;
const DEFAULT_IONIZATION: f32 = 0.5;

/// Discharge pattern governing field direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DischargeKind {
    /// Radially outward from the centre
    Corona,
    /// Rotating with the oscillation phase: `(cos φ, sin φ)`
    Arc,
    /// Fixed vertical, pointing down
    Lightning,
    /// Swirl: angle of the offset from the centre plus the phase
    AuroraEffect,
    /// Radially outward, expanding and fading until extinguished
    SolarFlare,
    /// Horizontal along +x, drifting with the flow
    PlasmaSheet,
}

/// Attenuation with normalised distance `n = d / radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlasmaFalloff {
    /// `1 − n`
    Linear,
    /// `1 − n²`
    Quadratic,
}

impl PlasmaFalloff {
    #[inline]
    pub fn factor(self, normalized_distance: f32) -> f32 {
        let n = normalized_distance;
        match self {
            PlasmaFalloff::Linear => (1.0 - n).max(0.0),
            PlasmaFalloff::Quadratic => (1.0 - n * n).max(0.0),
        }
    }
}

/// A plasma disc with discharge-dependent directionality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlasmaRegion {
    center: Vec2,
    radius: f32,
    strength: f32,
    base_strength: f32,
    discharge_kind: DischargeKind,
    falloff: PlasmaFalloff,
    /// K
    temperature: f32,
    base_temperature: f32,
    /// 0-1
    ionization_level: f32,
    base_ionization: f32,
    /// rad, in [0, 2π)
    oscillation_phase: f32,
    elapsed_time: f32,
    /// Optional lifetime (s); `None` lives until extinguished
    duration: Option<f32>,
    active: bool,
}

impl PlasmaRegion {
    /// Create a corona-discharge region with linear falloff.
    ///
    /// # Arguments
    ///
    /// * `strength` - Peak field strength at the centre, non-negative
    /// * `center` - Disc centre (m)
    /// * `radius` - Disc radius (m), must be positive
    pub fn new(strength: f32, center: Vec2, radius: f32) -> EnvResult<Self> {
        let strength = ensure_non_negative("strength", strength)?;
        let radius = ensure_finite("radius", radius)?;
        if radius <= 0.0 {
            return Err(EnvironmentError::InvalidRadius { radius });
        }
        ensure_finite("center.x", center.x)?;
        ensure_finite("center.y", center.y)?;
        Ok(Self::from_valid(strength, center, radius))
    }

    /// Build from values already known to be valid.
    pub(crate) fn from_valid(strength: f32, center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            strength,
            base_strength: strength,
            discharge_kind: DischargeKind::Corona,
            falloff: PlasmaFalloff::Linear,
            temperature: DEFAULT_TEMPERATURE,
            base_temperature: DEFAULT_TEMPERATURE,
            ionization_level: DEFAULT_IONIZATION,
            base_ionization: DEFAULT_IONIZATION,
            oscillation_phase: 0.0,
            elapsed_time: 0.0,
            duration: None,
            active: true,
        }
    }

    pub fn with_discharge_kind(mut self, kind: DischargeKind) -> Self {
        self.discharge_kind = kind;
        self
    }

    pub fn with_falloff(mut self, falloff: PlasmaFalloff) -> Self {
        self.falloff = falloff;
        self
    }

    /// Limit the region to `duration` seconds; it deactivates once that much
    /// time has elapsed. A non-positive or non-finite duration expires on the
    /// first update.
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = Some(if duration.is_finite() { duration.max(0.0) } else { 0.0 });
        self
    }

    /// Set the ionization level (clamped to 0-1); it becomes the drift centre.
    pub fn set_ionization_level(&mut self, level: f32) {
        let level = if level.is_finite() { level.clamp(0.0, 1.0) } else { 0.0 };
        self.ionization_level = level;
        self.base_ionization = level;
    }

    /// Set the temperature (K, non-negative); it becomes the drift centre.
    pub fn set_temperature(&mut self, temperature: f32) {
        let temperature = if temperature.is_finite() { temperature.max(0.0) } else { 0.0 };
        self.temperature = temperature;
        self.base_temperature = temperature;
    }

    pub fn field_type(&self) -> FieldType {
        FieldType::Plasma
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn discharge_kind(&self) -> DischargeKind {
        self.discharge_kind
    }

    pub fn falloff(&self) -> PlasmaFalloff {
        self.falloff
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn ionization_level(&self) -> f32 {
        self.ionization_level
    }

    pub fn oscillation_phase(&self) -> f32 {
        self.oscillation_phase
    }

    pub fn duration(&self) -> Option<f32> {
        self.duration
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    /// False once a solar flare has burnt out or a finite lifetime has elapsed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset from the centre and its length, or `None` outside the disc.
    fn reach(&self, position: Vec2) -> Option<(Vec2, f32)> {
        if !self.active {
            return None;
        }
        let offset = position - self.center;
        let distance = offset.norm();
        (distance <= self.radius).then_some((offset, distance))
    }

    /// Unit field direction for an in-disc offset; `None` where undefined.
    fn direction(&self, offset: Vec2, distance: f32) -> Option<Vec2> {
        let phase = self.oscillation_phase;
        match self.discharge_kind {
            DischargeKind::Corona | DischargeKind::SolarFlare => {
                (distance > EPSILON_LENGTH).then(|| offset / distance)
            }
            DischargeKind::Arc => Some(Vec2::new(phase.cos(), phase.sin())),
            DischargeKind::Lightning => Some(Vec2::new(0.0, -1.0)),
            DischargeKind::AuroraEffect => (distance > EPSILON_LENGTH).then(|| {
                let angle = offset.y.atan2(offset.x) + phase;
                Vec2::new(angle.cos(), angle.sin())
            }),
            DischargeKind::PlasmaSheet => Some(Vec2::new(1.0, 0.0)),
        }
    }

    fn magnitude(&self, distance: f32) -> f32 {
        self.strength * self.falloff.factor(distance / self.radius) * self.ionization_level
    }

    pub fn field_vector_at(&self, position: Vec2) -> Vec2 {
        self.reach(position)
            .and_then(|(offset, distance)| {
                self.direction(offset, distance)
                    .map(|direction| direction * self.magnitude(distance))
            })
            .unwrap_or_else(Vec2::zeros)
    }

    pub fn field_strength_at(&self, position: Vec2) -> f32 {
        self.reach(position)
            .map_or(0.0, |(_, distance)| self.magnitude(distance))
    }

    /// Local ionization, `level · (1 − d/r) · min(T/10000, 1)`.
    pub fn ionization_at(&self, position: Vec2) -> f32 {
        self.reach(position).map_or(0.0, |(_, distance)| {
            let temperature_factor = (self.temperature / FULL_IONIZATION_TEMPERATURE).min(1.0);
            self.ionization_level
                * PlasmaFalloff::Linear.factor(distance / self.radius)
                * temperature_factor
        })
    }

    /// Advance oscillation, fluctuation, and drift by `dt` seconds.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) {
        if !self.active {
            return;
        }
        let dt = dt.max(0.0);
        self.elapsed_time += dt;
        if self.duration.is_some_and(|lifetime| self.elapsed_time >= lifetime) {
            self.active = false;
            return;
        }
        self.oscillation_phase = (self.oscillation_phase + OSCILLATION_RATE * dt).rem_euclid(TAU);

        match self.discharge_kind {
            DischargeKind::SolarFlare => {
                self.radius += FLARE_EXPANSION_RATE * dt;
                self.strength = (self.strength - FLARE_DECAY_RATE * dt).max(0.0);
                if self.strength <= 0.0 {
                    self.active = false;
                }
            }
            kind => {
                let fluctuation = rng.random_range(-FLUCTUATION_RATE..=FLUCTUATION_RATE);
                self.strength = (self.strength * (1.0 + fluctuation * dt)).clamp(
                    self.base_strength * (1.0 - STRENGTH_BAND),
                    self.base_strength * (1.0 + STRENGTH_BAND),
                );
                if kind == DischargeKind::PlasmaSheet {
                    self.center.x += SHEET_DRIFT_SPEED * dt;
                }
            }
        }

        let t = self.elapsed_time;
        self.temperature = (self.base_temperature
            * (1.0 + TEMPERATURE_DRIFT * (TEMPERATURE_DRIFT_RATE * t).sin()))
        .clamp(TEMPERATURE_RANGE.0, TEMPERATURE_RANGE.1);
        self.ionization_level = (self.base_ionization
            + IONIZATION_DRIFT * (IONIZATION_DRIFT_RATE * t).sin())
        .clamp(IONIZATION_RANGE.0, IONIZATION_RANGE.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn corona() -> PlasmaRegion {
        PlasmaRegion::new(50.0, Vec2::zeros(), 100.0).unwrap()
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(matches!(
            PlasmaRegion::new(1.0, Vec2::zeros(), 0.0),
            Err(EnvironmentError::InvalidRadius { .. })
        ));
        assert!(PlasmaRegion::new(-1.0, Vec2::zeros(), 10.0).is_err());
    }

    #[test]
    fn corona_points_outward_with_linear_falloff() {
        let mut region = corona();
        region.set_ionization_level(1.0);
        let v = region.field_vector_at(Vec2::new(50.0, 0.0));
        assert_relative_eq!(v.x, 25.0, epsilon = 1e-4);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);

        // Default ionization scales the same point by 0.5
        let v = corona().field_vector_at(Vec2::new(50.0, 0.0));
        assert_relative_eq!(v.x, 12.5, epsilon = 1e-4);
    }

    #[test]
    fn zero_outside_radius() {
        for kind in [
            DischargeKind::Corona,
            DischargeKind::Arc,
            DischargeKind::Lightning,
            DischargeKind::AuroraEffect,
            DischargeKind::SolarFlare,
            DischargeKind::PlasmaSheet,
        ] {
            let region = corona().with_discharge_kind(kind);
            assert_eq!(region.field_vector_at(Vec2::new(100.5, 0.0)), Vec2::zeros());
            assert_eq!(region.field_strength_at(Vec2::new(0.0, -150.0)), 0.0);
            assert_eq!(region.ionization_at(Vec2::new(80.0, 80.0)), 0.0);
        }
    }

    #[test]
    fn quadratic_falloff() {
        let region = corona().with_falloff(PlasmaFalloff::Quadratic);
        // 50 · (1 − 0.25) · 0.5
        assert_relative_eq!(region.field_strength_at(Vec2::new(0.0, 50.0)), 18.75, epsilon = 1e-4);
    }

    #[test]
    fn discharge_directions() {
        let probe = Vec2::new(0.0, 50.0);

        let lightning = corona().with_discharge_kind(DischargeKind::Lightning);
        let v = lightning.field_vector_at(probe);
        assert_eq!(v.x, 0.0);
        assert!(v.y < 0.0);

        let sheet = corona().with_discharge_kind(DischargeKind::PlasmaSheet);
        let v = sheet.field_vector_at(probe);
        assert!(v.x > 0.0);
        assert_eq!(v.y, 0.0);

        // Arc at phase 0 points along +x regardless of position
        let arc = corona().with_discharge_kind(DischargeKind::Arc);
        let v = arc.field_vector_at(probe);
        assert!(v.x > 0.0);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-6);

        // Aurora at phase 0 follows the offset angle
        let aurora = corona().with_discharge_kind(DischargeKind::AuroraEffect);
        let v = aurora.field_vector_at(probe);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-5);
        assert!(v.y > 0.0);
    }

    #[test]
    fn radial_kinds_vanish_at_centre() {
        let region = corona();
        assert_eq!(region.field_vector_at(Vec2::zeros()), Vec2::zeros());
        let arc = corona().with_discharge_kind(DischargeKind::Arc);
        assert!(arc.field_vector_at(Vec2::zeros()).norm() > 0.0);
    }

    #[test]
    fn ionization_scales_with_temperature() {
        let mut region = corona();
        region.set_temperature(20_000.0);
        assert_relative_eq!(region.ionization_at(Vec2::new(50.0, 0.0)), 0.25, epsilon = 1e-6);
        region.set_temperature(5_000.0);
        assert_relative_eq!(region.ionization_at(Vec2::new(50.0, 0.0)), 0.125, epsilon = 1e-6);
    }

    #[test]
    fn update_keeps_state_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut region = corona().with_discharge_kind(DischargeKind::Arc);
        region.set_ionization_level(1.0);
        for _ in 0..10_000 {
            region.update(0.1, &mut rng);
            assert!(region.strength() >= 50.0 * 0.75 && region.strength() <= 50.0 * 1.25);
            assert!((0.1..=0.9).contains(&region.ionization_level()));
            assert!((0.0..TAU).contains(&region.oscillation_phase()));
            assert!(region.temperature() > 0.0);
        }
    }

    #[test]
    fn arc_rotates_with_phase() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut arc = corona().with_discharge_kind(DischargeKind::Arc);
        let before = arc.field_vector_at(Vec2::new(10.0, 0.0)).normalize();
        arc.update(0.25, &mut rng);
        let after = arc.field_vector_at(Vec2::new(10.0, 0.0)).normalize();
        assert_relative_eq!(after.x, 0.5_f32.cos(), epsilon = 1e-5);
        assert_relative_eq!(after.y, 0.5_f32.sin(), epsilon = 1e-5);
        assert!((before - after).norm() > 0.1);
    }

    #[test]
    fn solar_flare_burns_out() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut flare = PlasmaRegion::new(1.0, Vec2::zeros(), 100.0)
            .unwrap()
            .with_discharge_kind(DischargeKind::SolarFlare);
        flare.update(5.0, &mut rng);
        assert_relative_eq!(flare.radius(), 150.0, epsilon = 1e-4);
        assert!(flare.is_active());
        flare.update(6.0, &mut rng);
        assert!(!flare.is_active());
        assert_eq!(flare.strength(), 0.0);
        assert_eq!(flare.field_vector_at(Vec2::new(10.0, 0.0)), Vec2::zeros());
    }

    #[test]
    fn finite_lifetime_deactivates() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut region = corona().with_duration(1.0);
        assert_eq!(region.duration(), Some(1.0));

        region.update(0.6, &mut rng);
        assert!(region.is_active());
        assert!(region.field_strength_at(Vec2::new(10.0, 0.0)) > 0.0);

        region.update(0.6, &mut rng);
        assert!(!region.is_active());
        assert_eq!(region.field_vector_at(Vec2::new(10.0, 0.0)), Vec2::zeros());
        assert_eq!(region.ionization_at(Vec2::new(10.0, 0.0)), 0.0);

        // No further evolution once expired
        let elapsed = region.elapsed_time();
        region.update(1.0, &mut rng);
        assert_eq!(region.elapsed_time(), elapsed);
    }

    #[test]
    fn unbounded_by_default() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut region = corona();
        assert_eq!(region.duration(), None);
        region.update(1_000.0, &mut rng);
        assert!(region.is_active());
    }

    #[test]
    fn plasma_sheet_drifts() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sheet = corona().with_discharge_kind(DischargeKind::PlasmaSheet);
        sheet.update(2.0, &mut rng);
        assert_relative_eq!(sheet.center().x, 20.0, epsilon = 1e-4);
    }
}
