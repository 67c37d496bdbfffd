//! Carbon-capture-and-storage mass flows.
//!
//! [`CaptureChain`] models where the CO₂ produced by a facility ends up: how
//! much is re-emitted powering compression and capture, how much escapes the
//! capture train, how much leaks afterwards, and how much is stored. The
//! breakdown conserves mass by construction and maps directly onto a
//! seven-node Sankey diagram.

mod core;

pub use core::{
    CaptureChain, CaptureRate, CcsError, CcsInput, EnergyShare, EnergySource, FlowBreakdown,
    FlowGraph, FlowLink, FlowNode, FlowTableRow, LeakageRate,
};
