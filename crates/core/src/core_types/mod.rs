//! Core types shared across the environment model

pub mod body;
pub mod vec2;

pub use body::{Body, ChargeProperties};
pub use vec2::Vec2;
