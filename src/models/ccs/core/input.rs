use uom::si::{
    f64::{MassDensity, Ratio, Volume},
    ratio::ratio,
};

use crate::support::{
    constraint::NonNegative,
    form::{ChoiceField, NumberField},
};

use super::{CaptureRate, CcsError, EnergyShare, LeakageRate};

/// Where the energy for compression and capture comes from.
///
/// The choice gates which inputs are meaningful: drawing on the plant's own
/// fossil generation re-emits CO₂ in proportion to the energy shares, while
/// external clean energy emits nothing for either step.
#[derive(Debug, Clone, Copy)]
pub enum EnergySource {
    /// Compression and capture draw the given shares of the plant's own
    /// fossil energy output.
    PlantFossilFuels {
        /// Energy required for compression, as a share of total output.
        compression: EnergyShare,

        /// Energy required for capture, as a share of total output.
        capture: EnergyShare,
    },

    /// External clean energy powers compression and capture; neither step
    /// emits CO₂.
    ExternalCleanEnergy,
}

impl EnergySource {
    /// Option labels for the energy-source choice field.
    pub const CHOICES: &'static [&'static str] =
        &["Fossil Fuels of Same Plant", "External Clean Energy"];

    /// Resolves an optional form selection, rejecting the unselected state.
    ///
    /// # Errors
    ///
    /// Returns [`CcsError::EnergySourceRequired`] when nothing was chosen.
    pub fn required(selection: Option<Self>) -> Result<Self, CcsError> {
        selection.ok_or(CcsError::EnergySourceRequired)
    }

    /// The compression and capture energy shares this source implies.
    #[must_use]
    pub fn shares(&self) -> (Ratio, Ratio) {
        match self {
            Self::PlantFossilFuels {
                compression,
                capture,
            } => (**compression, **capture),
            Self::ExternalCleanEnergy => (*EnergyShare::none(), *EnergyShare::none()),
        }
    }
}

/// Validated inputs for the CCS capture-chain model.
#[derive(Debug, Clone, Copy)]
pub struct CcsInput {
    volume: Volume,
    density: MassDensity,
    energy_source: EnergySource,
    capture_rate: CaptureRate,
    leakage: LeakageRate,
}

impl CcsInput {
    /// Constructs a validated input.
    ///
    /// # Errors
    ///
    /// Returns [`CcsError::InvalidQuantity`] for a negative volume or
    /// density, and [`CcsError::EnergyOversubscribed`] when the compression
    /// and capture shares together exceed the total energy produced.
    pub fn new(
        volume: Volume,
        density: MassDensity,
        energy_source: EnergySource,
        capture_rate: CaptureRate,
        leakage: LeakageRate,
    ) -> Result<Self, CcsError> {
        let volume = NonNegative::new(volume)
            .map_err(|source| CcsError::InvalidQuantity {
                field: "volume",
                source,
            })?
            .into_inner();
        let density = NonNegative::new(density)
            .map_err(|source| CcsError::InvalidQuantity {
                field: "density",
                source,
            })?
            .into_inner();

        let (compression, capture) = energy_source.shares();
        if (compression + capture).get::<ratio>() > 1.0 {
            return Err(CcsError::EnergyOversubscribed);
        }

        Ok(Self {
            volume,
            density,
            energy_source,
            capture_rate,
            leakage,
        })
    }

    /// Volume of CO₂ produced at the facility.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// CO₂ density at the facility's actual temperature and pressure.
    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    /// Energy source for compression and capture.
    #[must_use]
    pub fn energy_source(&self) -> EnergySource {
        self.energy_source
    }

    /// Average capture efficiency of the facility.
    #[must_use]
    pub fn capture_rate(&self) -> CaptureRate {
        self.capture_rate
    }

    /// Estimated post-capture leakage.
    #[must_use]
    pub fn leakage(&self) -> LeakageRate {
        self.leakage
    }

    /// The numeric form fields a view layer renders to collect this input.
    #[must_use]
    pub const fn form_fields() -> [NumberField; 6] {
        [
            NumberField::non_negative("Volume of CO₂ produced at the facility", "m³"),
            NumberField::non_negative("Density of the CO₂ at actual conditions", "kg/m³"),
            NumberField::percentage("Energy required for compression"),
            NumberField::percentage("Energy required for capture"),
            NumberField::percentage("Average capture rate of the CCS facility"),
            NumberField::percentage("Estimated leakage percentage after capture"),
        ]
    }

    /// The energy-source choice field.
    #[must_use]
    pub const fn energy_source_field() -> ChoiceField {
        ChoiceField {
            label: "Compression and Capture Energy Source",
            options: EnergySource::CHOICES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{mass_density::kilogram_per_cubic_meter, volume::cubic_meter};

    fn valid_rates() -> (CaptureRate, LeakageRate) {
        (
            CaptureRate::from_percent(90.0).unwrap(),
            LeakageRate::from_percent(5.0).unwrap(),
        )
    }

    #[test]
    fn clean_energy_has_zero_shares() {
        let (compression, capture) = EnergySource::ExternalCleanEnergy.shares();
        assert_relative_eq!(compression.get::<ratio>(), 0.0);
        assert_relative_eq!(capture.get::<ratio>(), 0.0);
    }

    #[test]
    fn unselected_energy_source_is_rejected() {
        assert_eq!(
            EnergySource::required(None).unwrap_err(),
            CcsError::EnergySourceRequired
        );
    }

    #[test]
    fn negative_volume_is_rejected() {
        let (capture_rate, leakage) = valid_rates();
        let err = CcsInput::new(
            Volume::new::<cubic_meter>(-1.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.98),
            EnergySource::ExternalCleanEnergy,
            capture_rate,
            leakage,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CcsError::InvalidQuantity { field: "volume", .. }
        ));
    }

    #[test]
    fn oversubscribed_energy_is_rejected() {
        let (capture_rate, leakage) = valid_rates();
        let err = CcsInput::new(
            Volume::new::<cubic_meter>(100.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.98),
            EnergySource::PlantFossilFuels {
                compression: EnergyShare::from_percent(60.0).unwrap(),
                capture: EnergyShare::from_percent(50.0).unwrap(),
            },
            capture_rate,
            leakage,
        )
        .unwrap_err();
        assert_eq!(err, CcsError::EnergyOversubscribed);
    }

    #[test]
    fn full_split_is_accepted() {
        let (capture_rate, leakage) = valid_rates();
        let input = CcsInput::new(
            Volume::new::<cubic_meter>(100.0),
            MassDensity::new::<kilogram_per_cubic_meter>(1.98),
            EnergySource::PlantFossilFuels {
                compression: EnergyShare::from_percent(50.0).unwrap(),
                capture: EnergyShare::from_percent(50.0).unwrap(),
            },
            capture_rate,
            leakage,
        );
        assert!(input.is_ok());
    }
}
