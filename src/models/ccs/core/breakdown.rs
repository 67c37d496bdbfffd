use serde::Serialize;
use uom::si::{
    f64::Mass,
    mass::{kilogram, ton},
};

use super::FlowGraph;

/// Average yearly CO₂ emissions of one car, metric tons.
const CAR_ANNUAL_EMISSIONS_TONNES: f64 = 4.6;

/// Where the produced CO₂ mass ends up, at full precision.
///
/// Two invariants hold by construction:
///
/// - `compression_emitted + capture_emitted + usable_emitted == total`
/// - `captured + uncaptured + leaked == total`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowBreakdown {
    /// Total CO₂ mass released from the plant.
    pub total: Mass,

    /// CO₂ emitted generating the compression energy.
    pub compression_emitted: Mass,

    /// CO₂ emitted generating the capture energy.
    pub capture_emitted: Mass,

    /// CO₂ emitted from the plant's usable energy output.
    pub usable_emitted: Mass,

    /// CO₂ the capture train failed to remove from the flue stream.
    pub uncaptured: Mass,

    /// CO₂ lost after capture, during transport or storage.
    pub leaked: Mass,

    /// CO₂ successfully captured and stored.
    pub captured: Mass,
}

impl FlowBreakdown {
    /// Everything that reached the atmosphere: uncaptured plus leaked.
    #[must_use]
    pub fn total_uncaptured(&self) -> Mass {
        self.uncaptured + self.leaked
    }

    /// Captured mass in metric tons.
    #[must_use]
    pub fn captured_tonnes(&self) -> f64 {
        self.captured.get::<ton>()
    }

    /// How many cars' yearly emissions the captured mass is equivalent to.
    #[must_use]
    pub fn cars_equivalent(&self) -> f64 {
        self.captured_tonnes() / CAR_ANNUAL_EMISSIONS_TONNES
    }

    /// Returns the breakdown as labeled rows for tabular display.
    #[must_use]
    pub fn flow_table(&self) -> Vec<FlowTableRow> {
        let row = |description, mass: Mass| FlowTableRow {
            description,
            mass_kg: mass.get::<kilogram>(),
        };

        vec![
            row("Total mass of CO₂ emitted by the plant", self.total),
            row("CO₂ emitted during compression", self.compression_emitted),
            row(
                "CO₂ emitted from capture process energy use",
                self.capture_emitted,
            ),
            row("CO₂ emitted from usable energy output", self.usable_emitted),
            row("Mass of CO₂ not captured by CCS", self.uncaptured),
            row("Mass of CO₂ leaked", self.leaked),
            row("Total mass of CO₂ captured", self.captured),
        ]
    }

    /// Returns the seven-node flow graph for Sankey-diagram rendering.
    #[must_use]
    pub fn sankey(&self) -> FlowGraph {
        FlowGraph::from_breakdown(self)
    }
}

/// One labeled row of the flow table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowTableRow {
    pub description: &'static str,
    pub mass_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn breakdown() -> FlowBreakdown {
        let kg = Mass::new::<kilogram>;
        FlowBreakdown {
            total: kg(198.0),
            compression_emitted: kg(19.8),
            capture_emitted: kg(9.9),
            usable_emitted: kg(168.3),
            uncaptured: kg(19.8),
            leaked: kg(8.91),
            captured: kg(169.29),
        }
    }

    #[test]
    fn total_uncaptured_sums_both_losses() {
        assert_relative_eq!(
            breakdown().total_uncaptured().get::<kilogram>(),
            28.71,
            max_relative = 1e-12
        );
    }

    #[test]
    fn cars_equivalent_uses_metric_tons() {
        let breakdown = breakdown();
        assert_relative_eq!(
            breakdown.cars_equivalent(),
            0.16929 / 4.6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn flow_table_lists_all_seven_flows() {
        let rows = breakdown().flow_table();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].description, "Total mass of CO₂ emitted by the plant");
        assert_relative_eq!(rows[0].mass_kg, 198.0);
        assert_eq!(rows[6].description, "Total mass of CO₂ captured");
        assert_relative_eq!(rows[6].mass_kg, 169.29);
    }
}
