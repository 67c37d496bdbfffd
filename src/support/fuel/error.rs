use thiserror::Error;

/// Errors raised while loading the fuel reference table.
///
/// Any of these is fatal to the session: the models cannot run without the
/// reference data, so callers should abort startup rather than retry.
#[derive(Debug, Error)]
pub enum FuelTableError {
    /// The table file could not be read.
    #[error("failed to read fuel table: {0}")]
    Io(#[from] std::io::Error),

    /// The table could not be parsed as CSV.
    #[error("failed to parse fuel table: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("fuel table is missing required column `{column}` (found: {found})")]
    MissingColumn {
        /// Canonical name of the absent column.
        column: &'static str,

        /// Comma-separated headers that were present.
        found: String,
    },

    /// A field failed to parse or violated a numeric constraint.
    #[error("invalid {column} for fuel `{fuel}` at row {row}: {message}")]
    InvalidField {
        /// Canonical name of the offending column.
        column: &'static str,

        /// Fuel name from the offending row, if one was read.
        fuel: String,

        /// One-based row number, counting the header as row 1.
        row: usize,

        /// Parse or constraint failure description.
        message: String,
    },
}
