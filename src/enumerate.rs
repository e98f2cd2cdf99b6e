//! Exhaustive enumeration of minimum-cost decision sequences.
//!
//! Starting from the bottom-right cell `(n, m)`, the enumerator walks back to
//! `(0, 0)` along every edge whose cost exactly accounts for the difference
//! between two cells. A cell where more than one recurrence term achieved
//! the stored minimum is a tie and forks the search; every fork that reaches
//! the origin yields one decision sequence.
//!
//! At each cell the branches are tried in a fixed order (insert, delete,
//! then change/copy), which fixes the order sequences are reported in.
//!
//! The sequential search keeps an explicit frame stack instead of recursing,
//! so its depth is bounded by `n + m` frames on the heap. The path buffer is
//! extended on descent and truncated on return; every completed sequence is
//! copied out of it. The parallel search runs the same loop over disjoint
//! subtrees.

use crate::builder::EnumeratorBuilder;
use crate::cost::Cost;
use crate::decision::{DecisionSequence, DecisionStep, Operation};
use crate::matrix::CostMatrix;
use crate::traits::CostModel;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an enumeration run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Sequences in discovery order.
    pub sequences: Vec<DecisionSequence>,
    /// `true` when a configured limit stopped the search while at least one
    /// more optimal sequence existed.
    pub truncated: bool,
}

impl Enumeration {
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}

/// A back-edge from a cell to one of its predecessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Move {
    row: usize,
    col: usize,
    op: Operation,
}

type Branches = [Option<Move>; 3];

struct Frame {
    row: usize,
    col: usize,
    branches: Branches,
    next: usize,
}

impl Frame {
    fn next_branch(&mut self) -> Option<Move> {
        while self.next < self.branches.len() {
            let candidate = self.branches[self.next];
            self.next += 1;
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}

/// Collects finished sequences, honouring the optional limit.
struct Sink {
    limit: Option<usize>,
    found: Enumeration,
}

impl Sink {
    fn new(limit: Option<usize>) -> Self {
        Self {
            limit,
            found: Enumeration::default(),
        }
    }

    /// `path` holds the steps recorded while walking back from `(n, m)`.
    fn accept(&mut self, path: &[DecisionStep]) {
        if self.limit.is_some_and(|limit| self.found.len() >= limit) {
            self.found.truncated = true;
            return;
        }
        self.found.sequences.push(chronological(path));
    }

    fn stopped(&self) -> bool {
        self.found.truncated
    }
}

fn chronological(path: &[DecisionStep]) -> DecisionSequence {
    let mut steps = Vec::with_capacity(path.len() + 1);
    steps.push(DecisionStep::ORIGIN);
    steps.extend(path.iter().rev().copied());
    DecisionSequence::from_steps(steps)
}

/// Enumerator over one built cost matrix.
///
/// Typical usage:
/// ```
/// use optimal_edits::{build, EditCosts, Enumerator};
///
/// let x: Vec<char> = "a".chars().collect();
/// let y: Vec<char> = "b".chars().collect();
/// let costs = EditCosts::default();
/// let matrix = build(&x, &y, &costs);
/// let found = Enumerator::new(&x, &y, &matrix, &costs).run();
/// assert_eq!(found.sequences.len(), 2);
/// assert!(!found.truncated);
/// ```
pub struct Enumerator<'a, T, C: ?Sized> {
    source: &'a [T],
    target: &'a [T],
    matrix: &'a CostMatrix,
    costs: &'a C,
    limit: Option<usize>,
}

impl<'a, T, C> Enumerator<'a, T, C>
where
    T: PartialEq,
    C: CostModel<T> + ?Sized,
{
    /// Create an uncapped enumerator.
    ///
    /// # Panics
    /// Panics if `matrix` is not `(source.len() + 1) × (target.len() + 1)`.
    pub fn new(
        source: &'a [T],
        target: &'a [T],
        matrix: &'a CostMatrix,
        costs: &'a C,
    ) -> Self {
        EnumeratorBuilder::new(source, target, matrix, costs).build()
    }

    /// Create an enumerator with an explicit limit.
    ///
    /// # Panics
    /// Panics if `matrix` is not `(source.len() + 1) × (target.len() + 1)`.
    pub fn with_limit(
        source: &'a [T],
        target: &'a [T],
        matrix: &'a CostMatrix,
        costs: &'a C,
        limit: Option<usize>,
    ) -> Self {
        assert!(
            matrix.rows() == source.len() + 1 && matrix.cols() == target.len() + 1,
            "matrix is {}x{} but inputs need {}x{}",
            matrix.rows(),
            matrix.cols(),
            source.len() + 1,
            target.len() + 1
        );
        Self {
            source,
            target,
            matrix,
            costs,
            limit,
        }
    }

    /// Configured cap on the number of sequences, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Back-edges out of `(i, j)` whose cost matches the stored minimum.
    fn branches(&self, i: usize, j: usize) -> Branches {
        let here = self.matrix[(i, j)];
        let mut out = [None; 3];

        if j > 0 && self.matrix[(i, j - 1)] + self.costs.insert(&self.target[j - 1]) == here {
            out[0] = Some(Move {
                row: i,
                col: j - 1,
                op: Operation::Insert,
            });
        }
        if i > 0 && self.matrix[(i - 1, j)] + self.costs.delete(&self.source[i - 1]) == here {
            out[1] = Some(Move {
                row: i - 1,
                col: j,
                op: Operation::Delete,
            });
        }
        if i > 0 && j > 0 {
            let (x, y) = (&self.source[i - 1], &self.target[j - 1]);
            if self.matrix[(i - 1, j - 1)] + self.costs.substitute(x, y) == here {
                let op = if x == y {
                    Operation::Copy
                } else {
                    Operation::Change
                };
                out[2] = Some(Move {
                    row: i - 1,
                    col: j - 1,
                    op,
                });
            }
        }
        out
    }

    /// Enter cell `(i, j)`; returns `true` if a frame was pushed.
    fn enter(
        &self,
        i: usize,
        j: usize,
        optimum: Cost,
        stack: &mut Vec<Frame>,
        path: &[DecisionStep],
        sink: &mut Sink,
    ) -> bool {
        if self.matrix[(i, j)] > optimum {
            return false;
        }
        if i == 0 && j == 0 {
            sink.accept(path);
            return false;
        }
        stack.push(Frame {
            row: i,
            col: j,
            branches: self.branches(i, j),
            next: 0,
        });
        true
    }

    /// Depth-first search of every optimal path from `(row, col)` back to the
    /// origin. `path` holds the steps already recorded above that cell.
    fn search(
        &self,
        row: usize,
        col: usize,
        mut path: Vec<DecisionStep>,
        optimum: Cost,
        sink: &mut Sink,
    ) {
        path.reserve(row + col);
        let mut stack: Vec<Frame> = Vec::with_capacity(row + col + 1);

        self.enter(row, col, optimum, &mut stack, &path, sink);

        while !sink.stopped() {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let (row, col) = (frame.row, frame.col);
            match frame.next_branch() {
                Some(mv) => {
                    path.push(DecisionStep::new(row, col, mv.op));
                    if !self.enter(mv.row, mv.col, optimum, &mut stack, &path, sink) {
                        path.pop();
                    }
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }
    }

    /// Enumerate every optimal decision sequence, depth-first.
    pub fn run(&self) -> Enumeration {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "enumerate",
            n = self.source.len(),
            m = self.target.len(),
            limit = ?self.limit
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (n, m) = (self.source.len(), self.target.len());
        let optimum = self.matrix.final_cost();
        let mut sink = Sink::new(self.limit);
        self.search(n, m, Vec::new(), optimum, &mut sink);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sequences = sink.found.len(),
            truncated = sink.found.truncated,
            "enumeration finished"
        );

        sink.found
    }
}

/// Subtrees handed to each worker thread by [`Enumerator::run_parallel`].
#[cfg(feature = "parallel")]
const SEEDS_PER_THREAD: usize = 4;

/// An unexplored subtree: the cell reached and the steps recorded on the
/// way back to it from `(n, m)`.
#[cfg(feature = "parallel")]
struct Seed {
    row: usize,
    col: usize,
    path: Vec<DecisionStep>,
}

#[cfg(feature = "parallel")]
impl<'a, T, C> Enumerator<'a, T, C>
where
    T: PartialEq + Sync,
    C: CostModel<T> + Sync + ?Sized,
{
    /// Enumerate with independent subtrees searched in parallel.
    ///
    /// The top of the search tree is expanded breadth-first in branch order
    /// until there are a few subtrees per worker. Each subtree is then
    /// searched with the same iterative search as [`run`](Self::run), so
    /// stack use does not grow with the input length. Results are merged in
    /// subtree order and the output is identical to [`run`](Self::run).
    ///
    /// With a limit of `k`, every subtree stops after `k` sequences, so a
    /// capped run does at most `k` sequences of work per subtree.
    pub fn run_parallel(&self) -> Enumeration {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "enumerate_parallel",
            n = self.source.len(),
            m = self.target.len(),
            limit = ?self.limit
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let optimum = self.matrix.final_cost();
        let seeds = self.split(rayon::current_num_threads() * SEEDS_PER_THREAD);

        #[cfg(feature = "tracing")]
        tracing::debug!(subtrees = seeds.len(), "search tree split");

        let parts: Vec<Enumeration> = seeds
            .into_par_iter()
            .map(|seed| {
                #[cfg(feature = "tracing")]
                let _span =
                    tracing::trace_span!("subtree", row = seed.row, col = seed.col).entered();
                let mut sink = Sink::new(self.limit);
                self.search(seed.row, seed.col, seed.path, optimum, &mut sink);
                sink.found
            })
            .collect();

        merge(self.limit, parts)
    }

    /// Expand the search tree one level at a time, keeping children in
    /// branch order, until there are at least `target` subtrees or every
    /// subtree has reached the origin.
    fn split(&self, target: usize) -> Vec<Seed> {
        let mut seeds = vec![Seed {
            row: self.source.len(),
            col: self.target.len(),
            path: Vec::new(),
        }];

        while seeds.len() < target {
            let mut next = Vec::with_capacity(seeds.len() * 3);
            let mut expanded = false;
            for seed in seeds {
                if seed.row == 0 && seed.col == 0 {
                    next.push(seed);
                    continue;
                }
                expanded = true;
                let Seed { row, col, mut path } = seed;
                let mut moves = self.branches(row, col).into_iter().flatten().peekable();
                while let Some(mv) = moves.next() {
                    let mut own = if moves.peek().is_some() {
                        path.clone()
                    } else {
                        std::mem::take(&mut path)
                    };
                    own.push(DecisionStep::new(row, col, mv.op));
                    next.push(Seed {
                        row: mv.row,
                        col: mv.col,
                        path: own,
                    });
                }
            }
            seeds = next;
            if !expanded {
                break;
            }
        }

        seeds
    }
}

/// Concatenate per-subtree results in order and apply the limit overall.
///
/// A subtree that hit the limit had more sequences than the whole run may
/// keep, so its `truncated` flag carries over.
#[cfg(feature = "parallel")]
fn merge(limit: Option<usize>, parts: Vec<Enumeration>) -> Enumeration {
    let mut out = Enumeration::default();
    for part in parts {
        out.truncated |= part.truncated;
        out.sequences.extend(part.sequences);
    }
    if let Some(limit) = limit {
        if out.sequences.len() > limit {
            out.sequences.truncate(limit);
            out.truncated = true;
        }
    }
    out
}

/// Enumerate every minimum-cost decision sequence, without a cap.
///
/// # Panics
/// Panics if `matrix` is not `(source.len() + 1) × (target.len() + 1)`.
pub fn enumerate<T, C>(
    source: &[T],
    target: &[T],
    matrix: &CostMatrix,
    costs: &C,
) -> Vec<DecisionSequence>
where
    T: PartialEq,
    C: CostModel<T> + ?Sized,
{
    Enumerator::new(source, target, matrix, costs).run().sequences
}
