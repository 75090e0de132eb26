//! Transient lightning discharge between two points.
//!
//! A bolt is a line-segment source. Its field circles the channel (perpendicular
//! to the bolt axis) and falls off with the inverse square of the distance to
//! the nearest point on the segment. Strength decays quadratically in the
//! remaining lifetime:
//!
//! ```text
//! strength(t) = S0 · max(0, 1 − t/duration)²
//! ```
//!
//! Lifecycle is one-way: Created → Active → Expired. Expired bolts contribute
//! nothing and are pruned by the owning composite.

use super::point_source::radial_inverse_square;
use super::{inverse_square_decay, FieldType};
use crate::core_types::vec2::{perpendicular, Vec2, EPSILON_LENGTH};
use serde::{Deserialize, Serialize};

/// Where a bolt is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightningPhase {
    /// No time has elapsed yet
    Created,
    /// Decaying, `elapsed < duration`
    Active,
    /// `elapsed >= duration`; strength is zero
    Expired,
}

/// Time-bounded electric discharge along a segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightningBolt {
    start: Vec2,
    end: Vec2,
    /// Lifetime (s)
    duration: f32,
    /// Time since creation (s)
    elapsed_time: f32,
    initial_strength: f32,
    strength: f32,
}

impl LightningBolt {
    /// Create a bolt from `start` (cloud) to `end` (ground).
    ///
    /// A non-positive duration yields a bolt that is already expired.
    pub fn new(strength: f32, start: Vec2, end: Vec2, duration: f32) -> Self {
        let strength = strength.max(0.0);
        Self {
            start,
            end,
            duration,
            elapsed_time: 0.0,
            initial_strength: strength,
            strength: if duration > 0.0 { strength } else { 0.0 },
        }
    }

    pub fn field_type(&self) -> FieldType {
        FieldType::Electric
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }

    pub fn initial_strength(&self) -> f32 {
        self.initial_strength
    }

    /// Current (decayed) strength.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn is_active(&self) -> bool {
        self.elapsed_time < self.duration
    }

    pub fn phase(&self) -> LightningPhase {
        if !self.is_active() {
            LightningPhase::Expired
        } else if self.elapsed_time == 0.0 {
            LightningPhase::Created
        } else {
            LightningPhase::Active
        }
    }

    /// Advance the bolt's clock and decay its strength.
    ///
    /// Negative `dt` is ignored so the lifecycle never runs backwards.
    pub fn update(&mut self, dt: f32) {
        self.elapsed_time += dt.max(0.0);

        let remaining_ratio = if self.duration > 0.0 {
            (1.0 - self.elapsed_time / self.duration).max(0.0)
        } else {
            0.0
        };
        self.strength = self.initial_strength * remaining_ratio * remaining_ratio;
    }

    /// Unit bolt axis and segment length, or `None` for a degenerate bolt.
    fn axis(&self) -> Option<(Vec2, f32)> {
        let bolt = self.end - self.start;
        let length = bolt.norm();
        (length >= EPSILON_LENGTH).then(|| (bolt / length, length))
    }

    /// Distance from `position` to the nearest point on the segment.
    pub fn distance_to(&self, position: Vec2) -> f32 {
        match self.axis() {
            Some((axis, length)) => {
                let projection = (position - self.start).dot(&axis).clamp(0.0, length);
                let closest = self.start + axis * projection;
                (position - closest).norm()
            }
            None => (position - self.start).norm(),
        }
    }

    pub fn field_vector_at(&self, position: Vec2) -> Vec2 {
        if !self.is_active() {
            return Vec2::zeros();
        }
        match self.axis() {
            Some((axis, _)) => {
                let decay = inverse_square_decay(self.distance_to(position));
                perpendicular(axis) * self.strength * decay
            }
            None => radial_inverse_square(self.start, position, self.strength),
        }
    }

    pub fn field_strength_at(&self, position: Vec2) -> f32 {
        if !self.is_active() {
            return 0.0;
        }
        self.strength * inverse_square_decay(self.distance_to(position))
    }
}
