//! Decision steps and decision sequences.
//!
//! A decision sequence is one concrete minimum-cost edit script, stored in
//! chronological order from the origin cell `(0, 0)` to `(n, m)`. Each
//! non-origin step names the cell it arrives at and the operation that got
//! it there:
//!
//! - `Insert` moves `(i, j-1) -> (i, j)` and emits `y[j]`,
//! - `Delete` moves `(i-1, j) -> (i, j)` and consumes `x[i]`,
//! - `Change`/`Copy` move `(i-1, j-1) -> (i, j)`.

use std::fmt;

use crate::cost::Cost;
use crate::traits::CostModel;

/// A primitive edit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Insert,
    Delete,
    /// Substitute one symbol for a different one.
    Change,
    /// Keep a matching symbol; costs nothing.
    Copy,
}

impl Operation {
    /// Single-letter tag used in the text form.
    ///
    /// `Copy` shares the `C` tag with `Change`: both are diagonal moves.
    pub fn tag(self) -> char {
        match self {
            Operation::Insert => 'I',
            Operation::Delete => 'D',
            Operation::Change | Operation::Copy => 'C',
        }
    }

    /// Row and column deltas of the move this operation makes.
    #[inline]
    pub fn delta(self) -> (usize, usize) {
        match self {
            Operation::Insert => (0, 1),
            Operation::Delete => (1, 0),
            Operation::Change | Operation::Copy => (1, 1),
        }
    }
}

/// One cell of a decision sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecisionStep {
    pub row: usize,
    pub col: usize,
    /// `None` only for the origin step.
    pub operation: Option<Operation>,
}

impl DecisionStep {
    /// The `(0, 0)` step every sequence starts with.
    pub const ORIGIN: DecisionStep = DecisionStep {
        row: 0,
        col: 0,
        operation: None,
    };

    pub const fn new(row: usize, col: usize, operation: Operation) -> Self {
        Self {
            row,
            col,
            operation: Some(operation),
        }
    }
}

impl fmt::Display for DecisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)?;
        if let Some(op) = self.operation {
            write!(f, "-{}", op.tag())?;
        }
        Ok(())
    }
}

/// Per-kind operation totals of a decision sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationCounts {
    pub inserts: usize,
    pub deletes: usize,
    pub changes: usize,
    pub copies: usize,
}

/// A minimum-cost edit script in chronological order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecisionSequence {
    steps: Vec<DecisionStep>,
}

impl DecisionSequence {
    /// Wrap steps already in chronological order.
    pub fn from_steps(steps: Vec<DecisionStep>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[DecisionStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Operations in order, skipping the origin marker.
    pub fn operations(&self) -> impl Iterator<Item = Operation> + '_ {
        self.steps.iter().filter_map(|step| step.operation)
    }

    pub fn operation_counts(&self) -> OperationCounts {
        let mut counts = OperationCounts::default();
        for op in self.operations() {
            match op {
                Operation::Insert => counts.inserts += 1,
                Operation::Delete => counts.deletes += 1,
                Operation::Change => counts.changes += 1,
                Operation::Copy => counts.copies += 1,
            }
        }
        counts
    }

    /// Sum of the cost of every step under `costs`.
    ///
    /// # Panics
    /// Panics if a step refers to a symbol outside `source` or `target`.
    pub fn total_cost<T, C>(&self, source: &[T], target: &[T], costs: &C) -> Cost
    where
        C: CostModel<T> + ?Sized,
    {
        self.steps
            .iter()
            .filter_map(|step| step.operation.map(|op| (step.row, step.col, op)))
            .map(|(i, j, op)| match op {
                Operation::Insert => costs.insert(&target[j - 1]),
                Operation::Delete => costs.delete(&source[i - 1]),
                Operation::Change | Operation::Copy => {
                    costs.substitute(&source[i - 1], &target[j - 1])
                }
            })
            .sum()
    }

    /// Replay the script over `source` and return the sequence it produces.
    ///
    /// Inserted and changed symbols are taken from `target`; copies take the
    /// source symbol, and fail the replay if it does not match the target.
    /// Returns `None` unless the steps form a contiguous unit-step path that
    /// starts at the origin and ends at `(source.len(), target.len())`.
    pub fn apply<T: Clone + PartialEq>(&self, source: &[T], target: &[T]) -> Option<Vec<T>> {
        let (first, rest) = self.steps.split_first()?;
        if *first != DecisionStep::ORIGIN {
            return None;
        }

        let mut out = Vec::with_capacity(target.len());
        let (mut i, mut j) = (0usize, 0usize);
        for step in rest {
            let op = step.operation?;
            let (di, dj) = op.delta();
            if step.row != i + di || step.col != j + dj {
                return None;
            }
            i = step.row;
            j = step.col;
            match op {
                Operation::Insert | Operation::Change => out.push(target.get(j - 1)?.clone()),
                Operation::Delete => {
                    source.get(i - 1)?;
                }
                Operation::Copy => {
                    let kept = source.get(i - 1)?;
                    if Some(kept) != target.get(j - 1) {
                        return None;
                    }
                    out.push(kept.clone());
                }
            }
        }

        (i == source.len() && j == target.len()).then_some(out)
    }
}

impl fmt::Display for DecisionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (k, step) in self.steps.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{step}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::EditCosts;
    use crate::utils::symbols;

    fn insert_then_delete() -> DecisionSequence {
        DecisionSequence::from_steps(vec![
            DecisionStep::ORIGIN,
            DecisionStep::new(0, 1, Operation::Insert),
            DecisionStep::new(1, 1, Operation::Delete),
        ])
    }

    #[test]
    fn text_form_brackets_and_tags() {
        assert_eq!(insert_then_delete().to_string(), "[[0,0], [0,1]-I, [1,1]-D]");
        assert_eq!(DecisionStep::new(2, 3, Operation::Copy).to_string(), "[2,3]-C");
    }

    #[test]
    fn replay_reproduces_target() {
        let x = symbols("a");
        let y = symbols("b");
        assert_eq!(insert_then_delete().apply(&x, &y), Some(y.clone()));
        let costs = EditCosts::default();
        assert_eq!(insert_then_delete().total_cost(&x, &y, &costs), Cost::from_tenths(9));
    }

    #[test]
    fn replay_rejects_broken_paths() {
        let x = symbols("ab");
        let y = symbols("ab");
        let skipped = DecisionSequence::from_steps(vec![
            DecisionStep::ORIGIN,
            DecisionStep::new(2, 2, Operation::Copy),
        ]);
        assert_eq!(skipped.apply(&x, &y), None);

        let short = DecisionSequence::from_steps(vec![
            DecisionStep::ORIGIN,
            DecisionStep::new(1, 1, Operation::Copy),
        ]);
        assert_eq!(short.apply(&x, &y), None);

        let bad_copy = DecisionSequence::from_steps(vec![
            DecisionStep::ORIGIN,
            DecisionStep::new(1, 1, Operation::Copy),
        ]);
        assert_eq!(bad_copy.apply(&['a'], &['z']), None);

        assert_eq!(DecisionSequence::from_steps(Vec::new()).apply(&x, &y), None);
    }

    #[test]
    fn counts_skip_origin() {
        let counts = insert_then_delete().operation_counts();
        assert_eq!(counts.inserts, 1);
        assert_eq!(counts.deletes, 1);
        assert_eq!(counts.changes + counts.copies, 0);
        assert_eq!(insert_then_delete().operations().count(), 2);
    }
}
