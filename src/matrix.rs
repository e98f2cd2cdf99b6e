//! Cost matrix construction for weighted edit distance.
//!
//! `matrix[i][j]` holds the minimum cumulative cost of transforming the first
//! `i` source symbols into the first `j` target symbols. Row 0 and column 0
//! are the pure-insert and pure-delete base cases; every other cell is the
//! minimum of
//!
//! - `matrix[i][j-1] + insert(y[j])`
//! - `matrix[i-1][j] + delete(x[i])`
//! - `matrix[i-1][j-1] + substitute(x[i], y[j])`
//!
//! Only the minimum value is stored. Which terms achieved it is re-derived by
//! the [`enumerate`](crate::enumerate) module.

use std::ops::Index;

use crate::cost::Cost;
use crate::traits::CostModel;

/// Dense `(n+1) × (m+1)` table of minimum cumulative costs, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl CostMatrix {
    fn zeroed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cost::ZERO; rows * cols],
        }
    }

    /// Number of rows, `n + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `m + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell `(i, j)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<Cost> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    /// All cells of row `i`.
    ///
    /// # Panics
    /// Panics if `i >= self.rows()`.
    pub fn row(&self, i: usize) -> &[Cost] {
        let start = i * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate over rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        self.cells.chunks(self.cols)
    }

    /// The bottom-right cell: the minimum edit cost of the whole input.
    #[inline]
    pub fn final_cost(&self) -> Cost {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: Cost) {
        self.cells[i * self.cols + j] = value;
    }
}

impl Index<(usize, usize)> for CostMatrix {
    type Output = Cost;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.cells[i * self.cols + j]
    }
}

/// Build the full cost matrix for transforming `source` into `target`.
///
/// Runs in O(n·m) time and space. Cells are filled row-major, so each cell
/// only reads cells with strictly smaller indices.
pub fn build<T, C>(source: &[T], target: &[T], costs: &C) -> CostMatrix
where
    C: CostModel<T> + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("build_cost_matrix", n = source.len(), m = target.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let rows = source.len() + 1;
    let cols = target.len() + 1;
    let mut matrix = CostMatrix::zeroed(rows, cols);

    for i in 1..rows {
        let above = matrix[(i - 1, 0)];
        matrix.set(i, 0, above + costs.delete(&source[i - 1]));
    }
    for j in 1..cols {
        let left = matrix[(0, j - 1)];
        matrix.set(0, j, left + costs.insert(&target[j - 1]));
    }

    for i in 1..rows {
        let x = &source[i - 1];
        for j in 1..cols {
            let y = &target[j - 1];
            let insert = matrix[(i, j - 1)] + costs.insert(y);
            let delete = matrix[(i - 1, j)] + costs.delete(x);
            let diagonal = matrix[(i - 1, j - 1)] + costs.substitute(x, y);
            matrix.set(i, j, insert.min(delete).min(diagonal));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(cost = %matrix.final_cost(), "cost matrix built");

    matrix
}

/// Compute only `matrix[n][m]`, keeping two rows live.
///
/// Agrees with `build(source, target, costs).final_cost()` while using O(m)
/// memory, for inputs whose full table would be too large to keep.
pub fn final_cost<T, C>(source: &[T], target: &[T], costs: &C) -> Cost
where
    C: CostModel<T> + ?Sized,
{
    let m = target.len();
    let mut prev = Vec::with_capacity(m + 1);
    let mut curr = vec![Cost::ZERO; m + 1];

    prev.push(Cost::ZERO);
    for j in 1..=m {
        prev.push(prev[j - 1] + costs.insert(&target[j - 1]));
    }

    for x in source {
        curr[0] = prev[0] + costs.delete(x);
        for j in 1..=m {
            let y = &target[j - 1];
            let insert = curr[j - 1] + costs.insert(y);
            let delete = prev[j] + costs.delete(x);
            let diagonal = prev[j - 1] + costs.substitute(x, y);
            curr[j] = insert.min(delete).min(diagonal);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}
