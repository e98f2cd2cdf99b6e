//! Assorted utilities and helpers.

/// Split a line of text into its atomic symbols.
#[inline]
pub fn symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Whether both sequence lengths are small enough to render in full.
///
/// Rendering the matrix and every decision sequence is only readable for
/// short inputs; the reporting tool uses a limit of 10.
#[inline]
pub fn fits_display(source_len: usize, target_len: usize, max_len: usize) -> bool {
    source_len <= max_len && target_len <= max_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_chars_not_bytes() {
        assert_eq!(symbols("aé"), vec!['a', 'é']);
        assert!(symbols("").is_empty());
    }

    #[test]
    fn display_limit_is_inclusive() {
        assert!(fits_display(10, 10, 10));
        assert!(fits_display(0, 3, 10));
        assert!(!fits_display(11, 3, 10));
        assert!(!fits_display(3, 11, 10));
    }
}
