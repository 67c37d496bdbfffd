use uom::si::{
    f64::{Energy, Mass},
    mass::kilogram,
    ratio::ratio,
};

use super::{CombustionInput, EmissionReport};

/// One tree's approximate annual CO₂ uptake, kg per year.
const TREE_ANNUAL_UPTAKE_KG: f64 = 26.635;

/// 20-year global warming potential of methane relative to CO₂.
const CH4_GWP_20_YEAR: f64 = 80.0;

pub(super) fn solve(input: &CombustionInput) -> EmissionReport {
    let energy_released: Energy = input.energy_content() * input.fuel_mass();

    let co2: Mass = energy_released * input.co2_intensity();
    let ch4: Mass = energy_released * input.ch4_intensity();
    let ch4_co2_equivalent = ch4 * CH4_GWP_20_YEAR;

    let trees_to_offset = (co2 / Mass::new::<kilogram>(TREE_ANNUAL_UPTAKE_KG))
        .get::<ratio>()
        .round() as i64;

    EmissionReport {
        energy_released,
        co2,
        ch4,
        ch4_co2_equivalent,
        trees_to_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{available_energy::megajoule_per_kilogram, f64::AvailableEnergy};

    use crate::support::units::{EmissionIntensity, GramsPerMegajoule};

    fn input(energy_mj_per_kg: f64, mass_kg: f64, co2: f64, ch4: f64) -> CombustionInput {
        CombustionInput::new(
            AvailableEnergy::new::<megajoule_per_kilogram>(energy_mj_per_kg),
            Mass::new::<kilogram>(mass_kg),
            EmissionIntensity::from_grams_per_megajoule(co2),
            EmissionIntensity::from_grams_per_megajoule(ch4),
        )
        .expect("test input should be valid")
    }

    #[test]
    fn worked_example() {
        // 50 MJ/kg × 2 kg × 70 gCO₂/MJ → 7.0 kg CO₂, 0 trees.
        let report = solve(&input(50.0, 2.0, 70.0, 0.0));

        assert_relative_eq!(report.co2.get::<kilogram>(), 7.0, max_relative = 1e-12);
        assert_eq!(report.trees_to_offset, 0);
    }

    #[test]
    fn co2_mass_matches_linear_formula() {
        for (energy, mass, factor) in [(10.0, 1.0, 5.0), (55.5, 3.2, 56.1), (141.8, 0.4, 98.3)] {
            let report = solve(&input(energy, mass, factor, 0.0));
            assert_relative_eq!(
                report.co2.get::<kilogram>(),
                energy * mass * factor / 1000.0,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn methane_uses_20_year_gwp() {
        let report = solve(&input(50.0, 2.0, 0.0, 1.5));

        assert_relative_eq!(report.ch4.get::<kilogram>(), 0.15, max_relative = 1e-12);
        assert_relative_eq!(
            report.ch4_co2_equivalent.get::<kilogram>(),
            12.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn tree_offset_rounds_to_nearest() {
        // 1000 kg CO₂ / 26.635 ≈ 37.55 → 38 trees.
        let report = solve(&input(100.0, 100.0, 100.0, 0.0));
        assert_eq!(report.trees_to_offset, 38);
    }

    #[test]
    fn zero_intensity_emits_nothing() {
        let report = solve(&input(120.0, 5.0, 0.0, 0.0));

        assert_relative_eq!(report.co2.get::<kilogram>(), 0.0);
        assert_relative_eq!(report.ch4.get::<kilogram>(), 0.0);
        assert_eq!(report.trees_to_offset, 0);
    }
}
