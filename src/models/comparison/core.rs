//! Comparison series construction.

mod error;
mod palette;
mod series;
mod solve;

pub use error::ComparisonError;
pub use series::{ComparisonChart, Metric, RankedSeries, SeriesEntry};

use crate::support::fuel::FuelTable;

/// Entry point for the fuel comparison engine.
///
/// # Example
///
/// ```
/// use ghg_models::models::comparison::Comparison;
/// use ghg_models::support::fuel::FuelTable;
///
/// let table = FuelTable::bundled();
/// let chart = Comparison::rank(&table, &["Diesel", "Natural Gas"]).unwrap();
///
/// let order: Vec<_> = chart
///     .by_energy_content
///     .entries
///     .iter()
///     .map(|entry| entry.fuel.as_str())
///     .collect();
/// assert_eq!(order, vec!["Diesel", "Natural Gas"]);
/// ```
pub struct Comparison;

impl Comparison {
    /// Ranks the selected fuels by energy content and by emission intensity.
    ///
    /// Selected names not present in the table are ignored, matching the
    /// join the original charts perform; duplicate selections collapse to
    /// their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::EmptySelection`] for an empty selection
    /// and [`ComparisonError::NoMatches`] when nothing in the selection
    /// exists in the table.
    pub fn rank(table: &FuelTable, selection: &[&str]) -> Result<ComparisonChart, ComparisonError> {
        solve::rank(table, selection)
    }
}
