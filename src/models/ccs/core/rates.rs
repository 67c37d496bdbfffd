use std::ops::Deref;

use uom::si::{f64::Ratio, ratio::percent};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Share of a plant's energy output drawn by one step of the capture chain.
///
/// Entered as a percentage of total energy produced; must fall in [0, 100] %.
#[derive(Debug, Clone, Copy)]
pub struct EnergyShare(Constrained<Ratio, UnitInterval>);

impl EnergyShare {
    /// Creates an [`EnergyShare`] from a percentage (0–100).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside 0–100 % or is not a number.
    pub fn from_percent(value: f64) -> ConstraintResult<Self> {
        Self::from_ratio(Ratio::new::<percent>(value))
    }

    /// Creates an [`EnergyShare`] from a dimensionless ratio in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ratio lies outside [0, 1] or is not a number.
    pub fn from_ratio(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// A share of zero, for steps that draw no plant energy.
    #[must_use]
    pub fn none() -> Self {
        Self(UnitInterval::zero())
    }
}

impl Deref for EnergyShare {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Average capture efficiency of a CCS facility.
///
/// The fraction of produced CO₂ the capture train removes from the flue
/// stream; must fall in [0, 100] %.
#[derive(Debug, Clone, Copy)]
pub struct CaptureRate(Constrained<Ratio, UnitInterval>);

impl CaptureRate {
    /// Creates a [`CaptureRate`] from a percentage (0–100).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside 0–100 % or is not a number.
    pub fn from_percent(value: f64) -> ConstraintResult<Self> {
        Self::from_ratio(Ratio::new::<percent>(value))
    }

    /// Creates a [`CaptureRate`] from a dimensionless ratio in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ratio lies outside [0, 1] or is not a number.
    pub fn from_ratio(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for CaptureRate {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Estimated post-capture leakage during transport and storage.
///
/// Applied to the mass the capture train removed from the flue stream; must
/// fall in [0, 100] %.
#[derive(Debug, Clone, Copy)]
pub struct LeakageRate(Constrained<Ratio, UnitInterval>);

impl LeakageRate {
    /// Creates a [`LeakageRate`] from a percentage (0–100).
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside 0–100 % or is not a number.
    pub fn from_percent(value: f64) -> ConstraintResult<Self> {
        Self::from_ratio(Ratio::new::<percent>(value))
    }

    /// Creates a [`LeakageRate`] from a dimensionless ratio in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ratio lies outside [0, 1] or is not a number.
    pub fn from_ratio(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }
}

impl Deref for LeakageRate {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
