use uom::si::available_energy::megajoule_per_kilogram;

use crate::support::{
    fuel::{FuelRecord, FuelTable},
    units::GramsPerMegajoule,
};

use super::{
    ComparisonChart, ComparisonError, Metric, RankedSeries, SeriesEntry, palette,
};

pub(super) fn rank(
    table: &FuelTable,
    selection: &[&str],
) -> Result<ComparisonChart, ComparisonError> {
    if selection.is_empty() {
        return Err(ComparisonError::EmptySelection);
    }

    // Inner join against the table, collapsing duplicates to their first
    // occurrence so each fuel gets exactly one bar and one color.
    let mut matched: Vec<&FuelRecord> = Vec::new();
    for name in selection {
        if matched.iter().any(|record| record.name == *name) {
            continue;
        }
        if let Some(record) = table.get(name) {
            matched.push(record);
        }
    }

    if matched.is_empty() {
        return Err(ComparisonError::NoMatches);
    }

    let by_energy_content = ranked_series(&matched, Metric::EnergyContent, |record| {
        record.energy_content.get::<megajoule_per_kilogram>()
    });
    let by_emission_intensity = ranked_series(&matched, Metric::EmissionIntensity, |record| {
        record.emission_intensity.to_grams_per_megajoule()
    });

    Ok(ComparisonChart {
        by_energy_content,
        by_emission_intensity,
    })
}

/// Builds one ascending series; the color index is the fuel's position in
/// the matched selection, so both series agree on it.
fn ranked_series(
    matched: &[&FuelRecord],
    metric: Metric,
    value: impl Fn(&FuelRecord) -> f64,
) -> RankedSeries {
    let mut entries: Vec<SeriesEntry> = matched
        .iter()
        .enumerate()
        .map(|(index, record)| SeriesEntry {
            fuel: record.name.clone(),
            value: value(record),
            color: palette::color_for(index),
            renewable: record.renewable,
        })
        .collect();

    entries.sort_by(|a, b| {
        a.value
            .partial_cmp(&b.value)
            .expect("table quantities are validated non-NaN")
    });

    RankedSeries { metric, entries }
}
