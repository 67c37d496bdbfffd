use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Validation errors for the CCS capture-chain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CcsError {
    /// No energy source was chosen for compression and capture.
    #[error("select an energy source")]
    EnergySourceRequired,

    /// A quantity was negative, out of its percentage range, or not a number.
    #[error("invalid {field}: {source}")]
    InvalidQuantity {
        /// Which input failed.
        field: &'static str,

        /// The violated numeric constraint.
        #[source]
        source: ConstraintError,
    },

    /// Compression and capture together claim more than the total energy.
    #[error("compression and capture energy exceed the total energy produced")]
    EnergyOversubscribed,
}
