//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities (e.g., mass, volume,
//! energy content). This module provides extensions that are useful for
//! emission modeling but aren't included in [`uom`].
//!
//! ## Emission intensity
//!
//! Emission factors are conventionally reported in grams of gas per megajoule
//! of energy released. [`uom`] has no named quantity for mass-per-energy, so
//! [`EmissionIntensity`] is defined here, along with the
//! [`GramsPerMegajoule`] trait for converting to and from the reporting unit:
//!
//! ```
//! use ghg_models::support::units::{EmissionIntensity, GramsPerMegajoule};
//!
//! let intensity = EmissionIntensity::from_grams_per_megajoule(56.1);
//! assert!((intensity.to_grams_per_megajoule() - 56.1).abs() < 1e-12);
//! ```

mod quantities;

use uom::si::{
    energy::megajoule,
    f64::{Energy, Mass},
    mass::gram,
};

pub use quantities::EmissionIntensity;

/// Converts an [`EmissionIntensity`] to and from its conventional reporting
/// unit, grams of gas per megajoule of energy released.
///
/// [`uom`] has no unit definitions for mass-per-energy quantities, so the
/// conversion goes through a gram mass and a megajoule energy rather than a
/// `Quantity::new::<unit>` call.
pub trait GramsPerMegajoule: Sized {
    /// Constructs an intensity from a gCO₂/MJ (or gCH₄/MJ) scalar.
    fn from_grams_per_megajoule(value: f64) -> Self;

    /// Returns the intensity as a gCO₂/MJ (or gCH₄/MJ) scalar.
    fn to_grams_per_megajoule(&self) -> f64;
}

impl GramsPerMegajoule for EmissionIntensity {
    fn from_grams_per_megajoule(value: f64) -> Self {
        Mass::new::<gram>(value) / Energy::new::<megajoule>(1.0)
    }

    fn to_grams_per_megajoule(&self) -> f64 {
        (*self * Energy::new::<megajoule>(1.0)).get::<gram>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{available_energy::megajoule_per_kilogram, f64::AvailableEnergy, mass::kilogram};

    #[test]
    fn roundtrip_through_si() {
        let intensity = EmissionIntensity::from_grams_per_megajoule(70.0);
        assert_relative_eq!(intensity.to_grams_per_megajoule(), 70.0, max_relative = 1e-12);
    }

    #[test]
    fn emitted_mass_has_mass_dimension() {
        // 50 MJ/kg × 2 kg × 70 g/MJ = 7000 g = 7 kg
        let energy_content = AvailableEnergy::new::<megajoule_per_kilogram>(50.0);
        let fuel_mass = Mass::new::<kilogram>(2.0);
        let intensity = EmissionIntensity::from_grams_per_megajoule(70.0);

        let emitted: Mass = energy_content * fuel_mass * intensity;
        assert_relative_eq!(emitted.get::<kilogram>(), 7.0, max_relative = 1e-12);
    }
}
