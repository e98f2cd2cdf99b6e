//! Weighted edit distance with exhaustive optimal-script enumeration.
//!
//! This crate computes the minimum cost of transforming one symbol sequence
//! into another using insertions, deletions and substitutions with
//! independent, configurable costs, and then recovers *every* edit script
//! that achieves that minimum.
//!
//! ## Core idea
//! 1. [`build`] fills the `(n+1) × (m+1)` cost matrix with the classic
//!    dynamic-programming recurrence. It stores values only.
//! 2. [`Enumerator`] walks back from `(n, m)` to `(0, 0)` along every edge
//!    whose cost exactly explains the step between two cells. Ties fork the
//!    walk, and each fork that reaches the origin is one optimal
//!    [`DecisionSequence`].
//!
//! Costs are fixed-point tenths ([`Cost`]), so tie detection is exact.
//!
//! ## Quick start
//! ```
//! use optimal_edits::{build, enumerate, EditCosts};
//!
//! let x: Vec<char> = "aabab".chars().collect();
//! let y: Vec<char> = "babb".chars().collect();
//! let costs = EditCosts::default(); // insert 0.5, delete 0.4, change 1.2
//!
//! let matrix = build(&x, &y, &costs);
//! assert_eq!(matrix.final_cost().to_string(), "1.3");
//!
//! for script in enumerate(&x, &y, &matrix, &costs) {
//!     assert_eq!(script.apply(&x, &y), Some(y.clone()));
//!     assert_eq!(script.total_cost(&x, &y, &costs), matrix.final_cost());
//! }
//! ```
//!
//! The number of optimal scripts can grow combinatorially with the number of
//! ties; use [`EnumeratorBuilder::with_limit`] to cap it.
//!
//! ## Features
//! - `parallel`: [`Enumerator::run_parallel`] searches independent subtrees with rayon.
//! - `tracing`: spans and events around matrix construction and enumeration.

pub mod builder;
pub mod cost;
pub mod decision;
pub mod enumerate;
pub mod error;
pub mod input;
pub mod matrix;
pub mod render;
pub mod traits;
pub mod utils;

pub use crate::builder::EnumeratorBuilder;
pub use crate::cost::{Cost, EditCosts};
pub use crate::decision::{DecisionSequence, DecisionStep, Operation};
pub use crate::enumerate::{enumerate, Enumeration, Enumerator};
pub use crate::error::{EditError, Result};
pub use crate::matrix::{build, CostMatrix};
pub use crate::traits::CostModel;
