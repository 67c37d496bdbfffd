use uom::si::f64::{Mass, Ratio};

use crate::support::constraint::UnitBounds;

use super::{CcsInput, FlowBreakdown};

pub(super) fn solve(input: &CcsInput) -> FlowBreakdown {
    let total: Mass = input.volume() * input.density();

    // Split by what the emission powers.
    let (compression, capture) = input.energy_source().shares();
    let compression_emitted = total * compression;
    let capture_emitted = total * capture;
    let usable_emitted = total - compression_emitted - capture_emitted;

    // Split by where the mass ends up. Leakage is taken from the mass the
    // capture train removed from the flue stream.
    let uncaptured = total * (Ratio::one() - *input.capture_rate());
    let leaked = (total - uncaptured) * *input.leakage();
    let captured = total - uncaptured - leaked;

    FlowBreakdown {
        total,
        compression_emitted,
        capture_emitted,
        usable_emitted,
        uncaptured,
        leaked,
        captured,
    }
}
