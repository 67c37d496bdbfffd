use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Validation errors for the combustion calculator.
///
/// These surface to the user as a blocking warning; the interaction aborts
/// and re-runs cleanly once the input is corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombustionError {
    /// Energy content or fuel mass was zero.
    #[error("energy content and mass must be nonzero")]
    ZeroInput,

    /// A quantity was negative or not a number.
    #[error("invalid {field}: {source}")]
    InvalidQuantity {
        /// Which input failed.
        field: &'static str,

        /// The violated numeric constraint.
        #[source]
        source: ConstraintError,
    },
}
