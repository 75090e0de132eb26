//! Error types for environment construction.
//!
//! Queries and ticks never fail: numeric edge cases are clamped or fall back to
//! standard values. Only malformed construction inputs are rejected here.

use thiserror::Error;

/// Result type for environment construction.
pub type EnvResult<T> = Result<T, EnvironmentError>;

/// Errors raised when building layers, fields, or configurations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("layer '{name}' has lower boundary {lower} m not below upper boundary {upper} m")]
    InvalidLayerBounds {
        name: String,
        lower: f32,
        upper: f32,
    },

    #[error("parameter '{parameter}' must be finite, got {value}")]
    NonFiniteParameter { parameter: &'static str, value: f32 },

    #[error("parameter '{parameter}' must be non-negative, got {value}")]
    NegativeParameter { parameter: &'static str, value: f32 },

    #[error("range '{parameter}' is empty: min {min} > max {max}")]
    InvalidRange {
        parameter: &'static str,
        min: f32,
        max: f32,
    },

    #[error("probability must lie in [0, 1], got {value}")]
    InvalidProbability { value: f32 },

    #[error("plasma region radius must be positive, got {radius} m")]
    InvalidRadius { radius: f32 },

    #[error("ionosphere lower boundary {lower} m must be below upper boundary {upper} m")]
    InvalidIonosphereBounds { lower: f32, upper: f32 },
}

/// Reject NaN and infinities.
pub(crate) fn ensure_finite(parameter: &'static str, value: f32) -> EnvResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EnvironmentError::NonFiniteParameter { parameter, value })
    }
}

/// Reject non-finite and negative values.
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f32) -> EnvResult<f32> {
    let value = ensure_finite(parameter, value)?;
    if value < 0.0 {
        return Err(EnvironmentError::NegativeParameter { parameter, value });
    }
    Ok(value)
}

/// Reject a sampling range that `rand` would panic on.
pub(crate) fn ensure_range(parameter: &'static str, range: (f32, f32)) -> EnvResult<()> {
    ensure_finite(parameter, range.0)?;
    ensure_finite(parameter, range.1)?;
    if range.0 > range.1 {
        return Err(EnvironmentError::InvalidRange {
            parameter,
            min: range.0,
            max: range.1,
        });
    }
    Ok(())
}
