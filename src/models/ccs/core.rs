//! CCS capture-chain computation.
//!
//! The produced CO₂ mass is split two ways from the same total: by what the
//! emission powers (compression, capture, usable output) and by where the
//! mass ends up (captured, uncaptured, leaked). Both splits sum to the total.

mod breakdown;
mod error;
mod input;
mod rates;
mod sankey;
mod solve;

pub use breakdown::{FlowBreakdown, FlowTableRow};
pub use error::CcsError;
pub use input::{CcsInput, EnergySource};
pub use rates::{CaptureRate, EnergyShare, LeakageRate};
pub use sankey::{FlowGraph, FlowLink, FlowNode};

/// Entry point for the CCS capture-chain model.
///
/// # Example
///
/// ```
/// use ghg_models::models::ccs::{CaptureChain, CaptureRate, CcsInput, EnergySource, LeakageRate};
/// use uom::si::{
///     f64::{MassDensity, Volume},
///     mass::kilogram,
///     mass_density::kilogram_per_cubic_meter,
///     volume::cubic_meter,
/// };
///
/// let input = CcsInput::new(
///     Volume::new::<cubic_meter>(100.0),
///     MassDensity::new::<kilogram_per_cubic_meter>(1.98),
///     EnergySource::ExternalCleanEnergy,
///     CaptureRate::from_percent(90.0).unwrap(),
///     LeakageRate::from_percent(5.0).unwrap(),
/// )
/// .unwrap();
///
/// let breakdown = CaptureChain::solve(&input);
/// assert!((breakdown.total.get::<kilogram>() - 198.0).abs() < 1e-12);
/// ```
pub struct CaptureChain;

impl CaptureChain {
    /// Computes the mass-flow breakdown for a validated input.
    ///
    /// Validation happens at [`CcsInput`] construction, so solving itself
    /// cannot fail.
    #[must_use]
    pub fn solve(input: &CcsInput) -> FlowBreakdown {
        solve::solve(input)
    }
}
