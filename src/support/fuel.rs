//! The fuel reference table.
//!
//! A [`FuelTable`] is an ordered, immutable catalog of fuels, each with an
//! energy content (MJ/kg) and a carbon emission intensity (gCO₂/MJ). It is
//! loaded once per session, from a CSV file or from the compiled-in default
//! table, and passed by reference into the models that consume it.
//!
//! A missing or malformed table is fatal to session startup and surfaces as
//! a [`FuelTableError`].

mod error;
mod record;
mod table;

pub use error::FuelTableError;
pub use record::{FuelRecord, FuelRow, RENEWABLE_FUELS};
pub use table::FuelTable;
