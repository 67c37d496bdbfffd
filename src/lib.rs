//! # GHG Models
//!
//! Estimation models for greenhouse-gas emissions from fuel combustion and
//! for carbon-capture-and-storage (CCS) mass flows.
//!
//! ## Crate layout
//!
//! - [`models`]: The calculators themselves: combustion emissions, fuel
//!   comparison ranking, and the CCS capture chain.
//! - [`support`]: Supporting utilities used by models: numeric constraints,
//!   [`uom`] unit extensions, the fuel reference table, and the descriptors
//!   a form-driven view layer consumes.
//!
//! All physical quantities are [`uom`] types; scalar values only appear in
//! the display records handed across the presentation boundary. Models are
//! pure functions of their validated inputs: the fuel table is loaded once
//! per session and passed in by reference, and nothing is mutated after
//! construction.

pub mod models;
pub mod support;
