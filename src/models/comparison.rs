//! Fuel comparison ranking for bar-chart rendering.
//!
//! Given a selection of fuels from the reference table, [`Comparison`]
//! produces two ascending-ordered series (by energy content and by carbon
//! emission intensity) with a stable color per fuel and renewable-fuel
//! tags. Rendering is the view layer's concern.

mod core;

pub use core::{
    Comparison, ComparisonChart, ComparisonError, Metric, RankedSeries, SeriesEntry,
};
