use std::{fs, io::Read, path::Path};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;
use uom::si::{available_energy::megajoule_per_kilogram, f64::AvailableEnergy};

use crate::support::{
    constraint::NonNegative,
    units::{EmissionIntensity, GramsPerMegajoule},
};

use super::{FuelRecord, FuelTableError, RENEWABLE_FUELS};

/// Canonical column names, as written in the default table.
const FUEL_COLUMN: &str = "Fuel";
const ENERGY_COLUMN: &str = "Energy Content (MJ/kg)";
const EMISSIONS_COLUMN: &str = "Carbon Emissions (gCO₂/MJ)";

/// The compiled-in default reference table.
const DEFAULT_TABLE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/fuels.csv"));

/// An ordered collection of [`FuelRecord`]s loaded from a CSV source.
///
/// The table preserves source order, is immutable after loading, and is
/// intended to be loaded once per session and shared by reference.
///
/// # Example
///
/// ```
/// use ghg_models::support::fuel::FuelTable;
///
/// let table = FuelTable::bundled();
/// let gas = table.get("Natural Gas").unwrap();
/// assert!(!gas.renewable);
/// assert!(table.get("Biodiesel").unwrap().renewable);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FuelTable {
    records: Vec<FuelRecord>,
}

impl FuelTable {
    /// Loads a fuel table from a file path.
    ///
    /// # Errors
    ///
    /// Returns a [`FuelTableError`] if the file is missing or malformed.
    pub fn from_path(path: &Path) -> Result<Self, FuelTableError> {
        let file = fs::File::open(path)?;
        let table = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            fuels = table.len(),
            "loaded fuel table"
        );
        Ok(table)
    }

    /// Loads a fuel table from a reader (e.g., a file or an in-memory buffer).
    ///
    /// The source must have a header row naming the fuel, energy content
    /// (MJ/kg), and carbon emissions (gCO₂/MJ) columns. Header matching
    /// tolerates spacing, capitalization, and unit-suffix variants.
    ///
    /// # Errors
    ///
    /// Returns a [`FuelTableError`] if a required column is absent, a field
    /// fails to parse, or a quantity is negative.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FuelTableError> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = Columns::locate(&headers)?;

        let mut records = Vec::new();

        // Header occupies row 1.
        let mut row = 1;
        for result in csv_reader.records() {
            row += 1;
            let record = result?;
            records.push(columns.parse_row(&record, row)?);
        }

        debug!(fuels = records.len(), "parsed fuel table");
        Ok(Self { records })
    }

    /// Returns the compiled-in default table.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_reader(DEFAULT_TABLE.as_bytes()).expect("bundled fuel table is well-formed")
    }

    /// Looks up a fuel by its exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FuelRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    /// Returns all records in source order.
    #[must_use]
    pub fn records(&self) -> &[FuelRecord] {
        &self.records
    }

    /// Returns all fuel names in source order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    /// Returns the number of fuels in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table holds no fuels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Resolved column indices for the three required columns.
struct Columns {
    fuel: usize,
    energy: usize,
    emissions: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, FuelTableError> {
        let normalized: Vec<String> = headers.iter().map(normalize).collect();

        let find = |column: &'static str, key: &str| {
            normalized
                .iter()
                .position(|header| header.contains(key))
                .ok_or_else(|| FuelTableError::MissingColumn {
                    column,
                    found: headers.iter().collect::<Vec<_>>().join(", "),
                })
        };

        Ok(Self {
            fuel: find(FUEL_COLUMN, "fuel")?,
            energy: find(ENERGY_COLUMN, "energycontent")?,
            emissions: find(EMISSIONS_COLUMN, "carbonemissions")?,
        })
    }

    fn parse_row(&self, record: &StringRecord, row: usize) -> Result<FuelRecord, FuelTableError> {
        let name = record.get(self.fuel).unwrap_or_default().to_string();

        let energy_content = AvailableEnergy::new::<megajoule_per_kilogram>(parse_field(
            record,
            self.energy,
            ENERGY_COLUMN,
            &name,
            row,
        )?);
        let emission_intensity = EmissionIntensity::from_grams_per_megajoule(parse_field(
            record,
            self.emissions,
            EMISSIONS_COLUMN,
            &name,
            row,
        )?);

        Ok(FuelRecord {
            renewable: RENEWABLE_FUELS.contains(&name.as_str()),
            name,
            energy_content,
            emission_intensity,
        })
    }
}

/// Lowercases and strips a header down to its ASCII alphanumerics, so
/// `"Energy Content (MJ/kg)"` matches `"energy_content_mj_per_kg"` and
/// similar variants.
fn normalize(header: &str) -> String {
    header
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Parses one numeric field, rejecting negatives.
fn parse_field(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    fuel: &str,
    row: usize,
) -> Result<f64, FuelTableError> {
    let invalid = |message: String| FuelTableError::InvalidField {
        column,
        fuel: fuel.to_string(),
        row,
        message,
    };

    let raw = record
        .get(index)
        .ok_or_else(|| invalid("field is missing".to_string()))?;
    let value: f64 = raw
        .parse()
        .map_err(|err| invalid(format!("`{raw}`: {err}")))?;

    NonNegative::new(value).map_err(|err| invalid(err.to_string()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use approx::assert_relative_eq;

    const SAMPLE: &str = "\
Fuel,Energy Content (MJ/kg),Carbon Emissions (gCO₂/MJ)
Natural Gas,55.5,56.1
Biodiesel,37.8,70.8
";

    #[test]
    fn loads_records_in_source_order() {
        let table = FuelTable::from_reader(Cursor::new(SAMPLE)).unwrap();

        assert_eq!(table.names(), vec!["Natural Gas", "Biodiesel"]);

        let gas = table.get("Natural Gas").unwrap();
        assert_relative_eq!(gas.energy_content.get::<megajoule_per_kilogram>(), 55.5);
        assert_relative_eq!(
            gas.emission_intensity.to_grams_per_megajoule(),
            56.1,
            max_relative = 1e-12
        );
        assert!(!gas.renewable);
        assert!(table.get("Biodiesel").unwrap().renewable);
    }

    #[test]
    fn header_matching_tolerates_variants() {
        let csv = "fuel,energy_content_mj_per_kg,carbon_emissions_g_per_mj\nDiesel,45.6,74.1\n";
        let table = FuelTable::from_reader(Cursor::new(csv)).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get("Diesel").is_some());
    }

    #[test]
    fn missing_column_is_named() {
        let csv = "Fuel,Energy Content (MJ/kg)\nDiesel,45.6\n";
        let err = FuelTable::from_reader(Cursor::new(csv)).unwrap_err();

        match err {
            FuelTableError::MissingColumn { column, .. } => {
                assert_eq!(column, EMISSIONS_COLUMN);
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_field_is_rejected_with_location() {
        let csv = "\
Fuel,Energy Content (MJ/kg),Carbon Emissions (gCO₂/MJ)
Diesel,45.6,74.1
Wood,not-a-number,112.0
";
        let err = FuelTable::from_reader(Cursor::new(csv)).unwrap_err();

        match err {
            FuelTableError::InvalidField {
                column, fuel, row, ..
            } => {
                assert_eq!(column, ENERGY_COLUMN);
                assert_eq!(fuel, "Wood");
                assert_eq!(row, 3);
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let csv = "\
Fuel,Energy Content (MJ/kg),Carbon Emissions (gCO₂/MJ)
Diesel,-45.6,74.1
";
        assert!(matches!(
            FuelTable::from_reader(Cursor::new(csv)),
            Err(FuelTableError::InvalidField { .. })
        ));
    }

    #[test]
    fn bundled_table_contains_renewables() {
        let table = FuelTable::bundled();

        assert!(!table.is_empty());
        for name in RENEWABLE_FUELS {
            assert!(
                table.get(name).is_some_and(|record| record.renewable),
                "bundled table should carry renewable fuel `{name}`"
            );
        }
    }
}
