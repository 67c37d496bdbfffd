use uom::si::f64::{AvailableEnergy, Mass};

use crate::support::{
    constraint::{ConstraintError, NonNegative, StrictlyPositive},
    form::NumberField,
    units::EmissionIntensity,
};

use super::CombustionError;

/// Validated inputs for the combustion calculator.
///
/// Energy content and fuel mass are guaranteed strictly positive; the
/// emission intensities are guaranteed non-negative.
#[derive(Debug, Clone, Copy)]
pub struct CombustionInput {
    energy_content: AvailableEnergy,
    fuel_mass: Mass,
    co2_intensity: EmissionIntensity,
    ch4_intensity: EmissionIntensity,
}

impl CombustionInput {
    /// Constructs a validated input.
    ///
    /// # Errors
    ///
    /// Returns [`CombustionError::ZeroInput`] if the energy content or fuel
    /// mass is zero, and [`CombustionError::InvalidQuantity`] for negative or
    /// non-numeric values.
    pub fn new(
        energy_content: AvailableEnergy,
        fuel_mass: Mass,
        co2_intensity: EmissionIntensity,
        ch4_intensity: EmissionIntensity,
    ) -> Result<Self, CombustionError> {
        let energy_content = StrictlyPositive::new(energy_content)
            .map_err(|err| nonzero_error("energy content", err))?
            .into_inner();
        let fuel_mass = StrictlyPositive::new(fuel_mass)
            .map_err(|err| nonzero_error("fuel mass", err))?
            .into_inner();
        let co2_intensity = NonNegative::new(co2_intensity)
            .map_err(|err| invalid("CO₂ emission intensity", err))?
            .into_inner();
        let ch4_intensity = NonNegative::new(ch4_intensity)
            .map_err(|err| invalid("CH₄ emission intensity", err))?
            .into_inner();

        Ok(Self {
            energy_content,
            fuel_mass,
            co2_intensity,
            ch4_intensity,
        })
    }

    /// Energy released per unit mass of fuel.
    #[must_use]
    pub fn energy_content(&self) -> AvailableEnergy {
        self.energy_content
    }

    /// Mass of fuel consumed.
    #[must_use]
    pub fn fuel_mass(&self) -> Mass {
        self.fuel_mass
    }

    /// CO₂ mass emitted per unit of energy released.
    #[must_use]
    pub fn co2_intensity(&self) -> EmissionIntensity {
        self.co2_intensity
    }

    /// CH₄ mass emitted per unit of energy released.
    #[must_use]
    pub fn ch4_intensity(&self) -> EmissionIntensity {
        self.ch4_intensity
    }

    /// The form fields a view layer renders to collect this input.
    #[must_use]
    pub const fn form_fields() -> [NumberField; 4] {
        [
            NumberField::non_negative("Energy content of the fuel", "MJ/kg"),
            NumberField::non_negative("Mass of the fuel consumed", "kg"),
            NumberField::non_negative("Carbon emissions", "gCO₂/MJ"),
            NumberField::non_negative("Methane emissions", "gCH₄/MJ"),
        ]
    }
}

/// Zero maps to the calculator's blocking "must be nonzero" warning; other
/// constraint failures keep their field context.
fn nonzero_error(field: &'static str, err: ConstraintError) -> CombustionError {
    match err {
        ConstraintError::Zero => CombustionError::ZeroInput,
        other => invalid(field, other),
    }
}

fn invalid(field: &'static str, source: ConstraintError) -> CombustionError {
    CombustionError::InvalidQuantity { field, source }
}
