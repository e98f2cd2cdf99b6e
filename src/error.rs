//! Error types for cost configuration and input handling.
//!
//! The dynamic program and the enumerator are total over valid input, so the
//! only failures are invalid costs and unusable input resources.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum EditError {
    /// A cost was negative, NaN or infinite.
    #[error("cost must be a finite, non-negative number (got {0})")]
    InvalidCost(f64),

    /// A cost was above the largest supported value.
    #[error("cost {0} exceeds the maximum of {max}", max = crate::cost::Cost::MAX)]
    CostTooLarge(f64),

    /// A cost had more precision than the fixed-point representation holds.
    #[error("cost {0} has more than one decimal place")]
    CostPrecision(f64),

    /// An input resource ended before all expected lines were read.
    #[error("expected {expected} lines of input, found {found}")]
    MissingLine {
        /// Number of lines the reader needs.
        expected: usize,
        /// Number of lines actually available.
        found: usize,
    },

    /// An input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, EditError>;
