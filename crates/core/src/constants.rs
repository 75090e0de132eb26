//! Physical constants and reference values shared across the environment model.

/// Gravitational acceleration used by the barometric formula (m/s²).
pub const GRAVITY: f32 = 9.8;

/// Specific gas constant for dry air (J/(kg·K)).
pub const GAS_CONSTANT_AIR: f32 = 287.05;

/// Default temperature lapse rate (K/m).
pub const DEFAULT_LAPSE_RATE: f32 = 0.0065;

/// Layers with a lapse rate below this magnitude are treated as isothermal.
pub const ISOTHERMAL_THRESHOLD: f32 = 1e-4;

/// Absolute temperature floor for layer profiles (K).
pub const MIN_TEMPERATURE: f32 = 2.0;

/// Below this temperature density is zero and viscosity uses the floor value (K).
pub const TEMPERATURE_GUARD: f32 = 0.1;

// Sutherland's law for air
pub const SUTHERLAND_CONSTANT: f32 = 110.4; // K
pub const SUTHERLAND_REF_TEMPERATURE: f32 = 273.15; // K
pub const SUTHERLAND_REF_VISCOSITY: f32 = 1.715e-5; // Pa·s

/// Distance clamp for inverse-square decay (m).
pub const MIN_DECAY_DISTANCE: f32 = 0.1;

/// Standard sea-level air density used by fallback media (kg/m³).
pub const STANDARD_AIR_DENSITY: f32 = 1.2;

/// Standard sea-level air viscosity (Pa·s).
pub const STANDARD_AIR_VISCOSITY: f32 = 1.81e-5;

/// Standard sea-level pressure (Pa).
pub const STANDARD_PRESSURE: f32 = 101_325.0;

/// Standard sea-level temperature (K).
pub const STANDARD_TEMPERATURE: f32 = 288.15;
