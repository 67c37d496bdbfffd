use serde::Serialize;
use uom::si::{available_energy::megajoule_per_kilogram, f64::AvailableEnergy};

use crate::support::units::{EmissionIntensity, GramsPerMegajoule};

/// Fuels annotated as renewable in the reference table.
///
/// Hydrogen entries assume green hydrogen, with no direct CO₂ emissions upon
/// use.
pub const RENEWABLE_FUELS: &[&str] = &[
    "Hydrogen (HHV)",
    "Hydrogen (LHV)",
    "Vegetable Oil",
    "Biodiesel",
];

/// One fuel from the reference table.
///
/// Records are immutable once loaded and are identified by name. Name
/// uniqueness is assumed from the source data, not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelRecord {
    /// Fuel name as it appears in the source table.
    pub name: String,

    /// Energy released per unit mass of fuel burned.
    pub energy_content: AvailableEnergy,

    /// CO₂ mass emitted per unit of energy released.
    pub emission_intensity: EmissionIntensity,

    /// Whether the fuel is in the renewable set ([`RENEWABLE_FUELS`]).
    pub renewable: bool,
}

impl FuelRecord {
    /// Returns the plain-scalar display row for tabular rendering.
    #[must_use]
    pub fn display_row(&self) -> FuelRow {
        FuelRow {
            fuel: self.name.clone(),
            energy_content_mj_per_kg: self.energy_content.get::<megajoule_per_kilogram>(),
            carbon_emissions_g_per_mj: self.emission_intensity.to_grams_per_megajoule(),
            renewable: self.renewable,
        }
    }
}

/// A fuel-table row with plain scalars, ready for tabular display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelRow {
    pub fuel: String,
    pub energy_content_mj_per_kg: f64,
    pub carbon_emissions_g_per_mj: f64,
    pub renewable: bool,
}
