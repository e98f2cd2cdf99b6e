//! Reading source/target pairs from text.
//!
//! An input resource holds the source sequence on its first line and the
//! target sequence on its second. Anything after the second line is ignored.

use std::fs;
use std::path::Path;

use crate::error::{EditError, Result};

const PAIR_LINES: usize = 2;

/// A source/target pair of symbol sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPair {
    pub source: Vec<char>,
    pub target: Vec<char>,
}

impl InputPair {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.chars().collect(),
            target: target.chars().collect(),
        }
    }
}

/// Parse the first two lines of `text`.
///
/// A trailing `\r` is stripped from each line. An empty line is a valid
/// empty sequence; a missing line is an error.
pub fn parse_pair(text: &str) -> Result<InputPair> {
    let mut lines = text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line));
    let source = lines.next().ok_or(EditError::MissingLine {
        expected: PAIR_LINES,
        found: 0,
    })?;
    let target = lines.next().ok_or(EditError::MissingLine {
        expected: PAIR_LINES,
        found: 1,
    })?;
    Ok(InputPair::new(source, target))
}

/// Read a pair from the file at `path`.
pub fn read_pair(path: impl AsRef<Path>) -> Result<InputPair> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| EditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), bytes = text.len(), "read input pair");
    parse_pair(&text)
}
