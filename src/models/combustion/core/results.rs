use serde::Serialize;
use uom::si::{
    energy::megajoule,
    f64::{Energy, Mass},
    mass::kilogram,
};

/// Emission masses for one combustion interaction, at full precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionReport {
    /// Total energy released by the burn.
    pub energy_released: Energy,

    /// CO₂ mass emitted.
    pub co2: Mass,

    /// CH₄ mass emitted.
    pub ch4: Mass,

    /// The emitted CH₄ expressed as a CO₂ mass over a 20-year horizon.
    pub ch4_co2_equivalent: Mass,

    /// Trees needed to absorb the emitted CO₂ within a year.
    pub trees_to_offset: i64,
}

impl EmissionReport {
    /// Returns the rounded, plain-scalar record handed to the view layer.
    #[must_use]
    pub fn display(&self) -> EmissionDisplay {
        EmissionDisplay {
            energy_released_mj: round_to(self.energy_released.get::<megajoule>(), 3),
            co2_kg: round_to(self.co2.get::<kilogram>(), 3),
            ch4_kg: round_to(self.ch4.get::<kilogram>(), 3),
            ch4_co2_equivalent_kg: round_to(self.ch4_co2_equivalent.get::<kilogram>(), 2),
            trees_to_offset: self.trees_to_offset,
        }
    }
}

/// Rounded emission figures for display.
///
/// Rounding here is presentation-only; [`EmissionReport`] keeps the
/// unrounded quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionDisplay {
    pub energy_released_mj: f64,
    pub co2_kg: f64,
    pub ch4_kg: f64,
    pub ch4_co2_equivalent_kg: f64,
    pub trees_to_offset: i64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
