use serde::Serialize;

/// Which fuel property a series ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    /// Energy released per unit mass, MJ/kg.
    EnergyContent,

    /// CO₂ emitted per unit of energy released, gCO₂/MJ.
    EmissionIntensity,
}

impl Metric {
    /// Axis label for chart rendering.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::EnergyContent => "Energy Content (MJ/kg)",
            Self::EmissionIntensity => "Carbon Emissions (gCO₂/MJ)",
        }
    }
}

/// One bar of a ranked series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesEntry {
    /// Fuel name, as in the reference table.
    pub fuel: String,

    /// The ranked metric's value, in the metric's reporting unit.
    pub value: f64,

    /// Palette color assigned to the fuel. The same fuel carries the same
    /// color in both series of a chart.
    pub color: &'static str,

    /// Whether the fuel is in the renewable set.
    pub renewable: bool,
}

/// A series of fuels ordered ascending by one metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSeries {
    /// The metric this series ranks by.
    pub metric: Metric,

    /// Entries in ascending metric order. Ties preserve selection order.
    pub entries: Vec<SeriesEntry>,
}

/// Both rankings over one fuel selection, sharing a color assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    /// Fuels ordered ascending by energy content.
    pub by_energy_content: RankedSeries,

    /// Fuels ordered ascending by emission intensity.
    pub by_emission_intensity: RankedSeries,
}
