//! Fuel combustion emission estimates.
//!
//! Given a fuel's energy content, the mass burned, and its CO₂ and CH₄
//! emission intensities, [`Combustion`] computes the emitted gas masses, the
//! 20-year CO₂ equivalent of the methane, and how many trees a year of
//! offsetting would take.

mod core;

pub use core::{Combustion, CombustionError, CombustionInput, EmissionDisplay, EmissionReport};
