//! Combustion emission computation.
//!
//! The arithmetic is deliberately linear: emitted mass is energy content ×
//! fuel mass × emission intensity, evaluated at full precision. All rounding
//! is confined to [`EmissionDisplay`].

mod error;
mod input;
mod results;
mod solve;

pub use error::CombustionError;
pub use input::CombustionInput;
pub use results::{EmissionDisplay, EmissionReport};

/// Entry point for the combustion emissions calculator.
///
/// # Example
///
/// ```
/// use ghg_models::models::combustion::{Combustion, CombustionInput};
/// use ghg_models::support::units::{EmissionIntensity, GramsPerMegajoule};
/// use uom::si::{
///     available_energy::megajoule_per_kilogram,
///     f64::{AvailableEnergy, Mass},
///     mass::kilogram,
/// };
///
/// let input = CombustionInput::new(
///     AvailableEnergy::new::<megajoule_per_kilogram>(50.0),
///     Mass::new::<kilogram>(2.0),
///     EmissionIntensity::from_grams_per_megajoule(70.0),
///     EmissionIntensity::from_grams_per_megajoule(0.0),
/// )
/// .unwrap();
///
/// let report = Combustion::solve(&input);
/// assert!((report.co2.get::<kilogram>() - 7.0).abs() < 1e-12);
/// ```
pub struct Combustion;

impl Combustion {
    /// Computes the emission report for a validated input.
    ///
    /// Validation happens at [`CombustionInput`] construction, so solving
    /// itself cannot fail.
    #[must_use]
    pub fn solve(input: &CombustionInput) -> EmissionReport {
        solve::solve(input)
    }
}
