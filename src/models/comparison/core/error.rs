use thiserror::Error;

/// Validation errors for the comparison engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComparisonError {
    /// The selection was empty.
    #[error("select at least one fuel")]
    EmptySelection,

    /// None of the selected names exist in the reference table.
    #[error("selection matched no fuels in the table")]
    NoMatches,
}
