//! Text rendering of cost matrices and decision sequences.
//!
//! Nothing here feeds back into the algorithms; these helpers only format
//! results for people. Callers decide whether an input is small enough to
//! render, see [`fits_display`](crate::utils::fits_display).

use std::fmt::{Display, Write};

use crate::decision::{DecisionSequence, Operation};
use crate::enumerate::Enumeration;
use crate::matrix::CostMatrix;
use crate::utils::fits_display;

/// Minimum width of a grid cell, wide enough for `0.0` and `[0]`.
const MIN_CELL_WIDTH: usize = 4;

const GAP: &str = "-";

fn write_row(out: &mut String, label: &str, label_width: usize, cells: &[String], width: usize) {
    let _ = write!(out, "{label:>label_width$}");
    for cell in cells {
        let _ = write!(out, ",{cell:>width$}");
    }
    out.push('\n');
}

/// Render `matrix` as an aligned grid labelled with symbols and indices.
///
/// ```text
///  ,    ,    ,   b,   a
///  , i/j, [0], [1], [2]
///  , [0], 0.0, 0.5, 1.0
/// a, [1], 0.4, 0.9, 0.5
/// ```
pub fn matrix_grid<T: Display>(source: &[T], target: &[T], matrix: &CostMatrix) -> String {
    let source_labels: Vec<String> = source.iter().map(ToString::to_string).collect();
    let target_labels: Vec<String> = target.iter().map(ToString::to_string).collect();
    let values: Vec<Vec<String>> = matrix
        .iter_rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let label_width = source_labels
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let index_width = format!("[{}]", matrix.rows().max(matrix.cols()) - 1).len();
    let width = values
        .iter()
        .flatten()
        .chain(target_labels.iter())
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        .max(index_width)
        .max(MIN_CELL_WIDTH);

    let mut out = String::new();

    let mut header = vec![String::new(), String::new()];
    header.extend(target_labels);
    write_row(&mut out, "", label_width, &header, width);

    let mut indices = vec!["i/j".to_string()];
    indices.extend((0..matrix.cols()).map(|j| format!("[{j}]")));
    write_row(&mut out, "", label_width, &indices, width);

    for (i, row) in values.into_iter().enumerate() {
        let label = if i == 0 { "" } else { source_labels[i - 1].as_str() };
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push(format!("[{i}]"));
        cells.extend(row);
        write_row(&mut out, label, label_width, &cells, width);
    }

    out
}

/// One decision sequence per line.
pub fn sequence_list(sequences: &[DecisionSequence]) -> String {
    let mut out = String::new();
    for sequence in sequences {
        let _ = writeln!(out, "{sequence}");
    }
    out
}

/// Two gapped rows showing how `sequence` lines the inputs up.
///
/// Deletions put a gap in the target row, insertions a gap in the source
/// row. Steps that fall outside the inputs are skipped.
pub fn alignment<T: Display>(
    source: &[T],
    target: &[T],
    sequence: &DecisionSequence,
) -> (String, String) {
    let mut top = String::new();
    let mut bottom = String::new();

    for step in sequence.steps() {
        let Some(op) = step.operation else {
            continue;
        };
        let from = step.row.checked_sub(1).and_then(|i| source.get(i));
        let to = step.col.checked_sub(1).and_then(|j| target.get(j));
        let (a, b): (&dyn Display, &dyn Display) = match (op, from, to) {
            (Operation::Insert, _, Some(to)) => (&GAP, to),
            (Operation::Delete, Some(from), _) => (from, &GAP),
            (Operation::Change | Operation::Copy, Some(from), Some(to)) => (from, to),
            _ => continue,
        };
        let _ = write!(top, "{a}");
        let _ = write!(bottom, "{b}");
    }

    (top, bottom)
}

/// Presentation settings for [`report`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Inputs longer than this are reported by final cost only.
    pub display_limit: usize,
    /// Print the gapped alignment under each decision sequence.
    pub alignments: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            display_limit: 10,
            alignments: false,
        }
    }
}

/// Full text report for one input pair.
///
/// The inputs and matrix are shown only when both sequences fit the display
/// limit. The final cost is always shown. Decision sequences are shown when
/// `found` is supplied.
pub fn report<T: Display>(
    source: &[T],
    target: &[T],
    matrix: &CostMatrix,
    found: Option<&Enumeration>,
    options: &ReportOptions,
) -> String {
    let mut out = String::new();
    let (n, m) = (source.len(), target.len());

    if fits_display(n, m, options.display_limit) {
        let from: String = source.iter().map(ToString::to_string).collect();
        let to: String = target.iter().map(ToString::to_string).collect();
        let _ = write!(out, "Input Sequences:\nFrom: {from}\nTo: {to}\n\n");
        out.push_str("Matrix:\n");
        out.push_str(&matrix_grid(source, target, matrix));
        out.push('\n');
    }

    let _ = write!(
        out,
        "Final cost(n,m) = cost({n},{m}) = {}\n\n",
        matrix.final_cost()
    );

    if let Some(found) = found {
        out.push_str("Decision Sequences:\n");
        if options.alignments {
            for sequence in &found.sequences {
                let (top, bottom) = alignment(source, target, sequence);
                let _ = write!(out, "{sequence}\n  {top}\n  {bottom}\n");
            }
        } else {
            out.push_str(&sequence_list(&found.sequences));
        }
        if found.truncated {
            let _ = writeln!(
                out,
                "(stopped after {} sequences; more optimal sequences exist)",
                found.len()
            );
        }
        out.push('\n');
    }

    out
}
