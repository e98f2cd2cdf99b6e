//! Fixed-point cost values and the per-run cost configuration.
//!
//! Costs are stored as whole tenths of a unit. Every cost the default
//! configuration uses is a one-decimal constant, so sums of costs are exact
//! and tie detection in the enumerator reduces to integer equality.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::error::{EditError, Result};

/// Number of fixed-point steps per unit of cost.
pub const COST_SCALE: u64 = 10;

/// Tolerance when checking that an `f64` sits on the fixed-point grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// A non-negative cost measured in tenths of a unit.
///
/// Addition saturates at `u64::MAX` instead of wrapping. Costs built with
/// [`Cost::from_f64`] are at most [`Cost::MAX`], so any realistic sum of them
/// stays far below that bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(u64);

impl Cost {
    /// The zero cost (a copy of a matching symbol).
    pub const ZERO: Cost = Cost(0);

    /// Largest single cost accepted from user input: `u32::MAX` tenths.
    pub const MAX: Cost = Cost(u32::MAX as u64);

    /// Build a cost directly from a count of tenths.
    #[inline]
    pub const fn from_tenths(tenths: u64) -> Self {
        Cost(tenths)
    }

    /// Convert a decimal value such as `0.4` into a cost.
    ///
    /// Rejects negative or non-finite values, values above [`Cost::MAX`] and
    /// values with more than one decimal place.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(EditError::InvalidCost(value));
        }
        let scaled = value * COST_SCALE as f64;
        let rounded = scaled.round();
        if rounded > Cost::MAX.0 as f64 {
            return Err(EditError::CostTooLarge(value));
        }
        if (scaled - rounded).abs() > GRID_TOLERANCE * scaled.max(1.0) {
            return Err(EditError::CostPrecision(value));
        }
        Ok(Cost(rounded as u64))
    }

    /// Raw number of tenths.
    #[inline]
    pub const fn tenths(self) -> u64 {
        self.0
    }

    /// Lossy conversion back to a floating-point value.
    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / COST_SCALE as f64
    }
}

impl Add for Cost {
    type Output = Cost;

    #[inline]
    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::ZERO, Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{}.{}", self.0 / COST_SCALE, self.0 % COST_SCALE);
        f.pad(&text)
    }
}

/// The three operation costs used for one run.
///
/// `change` applies only when the aligned symbols differ; substituting a
/// symbol with itself is free.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditCosts {
    pub insert: Cost,
    pub delete: Cost,
    pub change: Cost,
}

impl EditCosts {
    pub const fn new(insert: Cost, delete: Cost, change: Cost) -> Self {
        Self {
            insert,
            delete,
            change,
        }
    }

    /// Build a configuration from decimal values, validating each one.
    pub fn from_f64(insert: f64, delete: f64, change: f64) -> Result<Self> {
        Ok(Self {
            insert: Cost::from_f64(insert)?,
            delete: Cost::from_f64(delete)?,
            change: Cost::from_f64(change)?,
        })
    }

    /// Exchange the insert and delete costs.
    ///
    /// Transforming `x` into `y` under `self` costs the same as transforming
    /// `y` into `x` under `self.swapped()`.
    pub fn swapped(self) -> Self {
        Self {
            insert: self.delete,
            delete: self.insert,
            change: self.change,
        }
    }
}

impl Default for EditCosts {
    /// insert = 0.5, delete = 0.4, change = 1.2
    fn default() -> Self {
        Self::new(Cost::from_tenths(5), Cost::from_tenths(4), Cost::from_tenths(12))
    }
}
