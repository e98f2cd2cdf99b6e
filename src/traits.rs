//! Core trait definitions for weighted edit costs.
//!
//! The matrix builder and the decision-sequence enumerator never look at a
//! cost configuration directly. They ask a [`CostModel`] what each primitive
//! operation costs, so a per-symbol cost table can be plugged in without
//! touching either algorithm.
//!
//! Both algorithms must see the *same* model: the enumerator re-derives which
//! recurrence terms achieved each cell's minimum by recomputing the costs the
//! builder used.

use crate::cost::{Cost, EditCosts};

/// Cost of each primitive edit operation over symbols of type `T`.
///
/// Implementations must return non-negative costs (guaranteed by [`Cost`])
/// and must be deterministic: the same arguments always yield the same cost.
/// Optimal substructure, and therefore the correctness of the dynamic
/// program, depends on both.
pub trait CostModel<T> {
    /// Cost of inserting `symbol` from the target.
    fn insert(&self, symbol: &T) -> Cost;

    /// Cost of deleting `symbol` from the source.
    fn delete(&self, symbol: &T) -> Cost;

    /// Cost of aligning source symbol `from` with target symbol `to`.
    ///
    /// Expected to be [`Cost::ZERO`] when the symbols are equal.
    fn substitute(&self, from: &T, to: &T) -> Cost;
}

impl<T: PartialEq> CostModel<T> for EditCosts {
    #[inline]
    fn insert(&self, _symbol: &T) -> Cost {
        self.insert
    }

    #[inline]
    fn delete(&self, _symbol: &T) -> Cost {
        self.delete
    }

    #[inline]
    fn substitute(&self, from: &T, to: &T) -> Cost {
        if from == to {
            Cost::ZERO
        } else {
            self.change
        }
    }
}
