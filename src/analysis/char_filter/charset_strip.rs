//! Charset strip char filter implementation.

use super::CharFilter;

/// A char filter that removes every character that is not a letter, an
/// apostrophe, or whitespace.
///
/// Runs after bracket removal, so stray `[` and `]` left by unmatched pairs
/// are dropped here along with digits and punctuation. Whitespace survives
/// untouched for the tokenizer to split on.
#[derive(Clone, Debug, Default)]
pub struct CharsetStripCharFilter;

impl CharsetStripCharFilter {
    /// Create a new charset strip char filter.
    pub fn new() -> Self {
        CharsetStripCharFilter
    }

    fn is_allowed(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '\'' || c.is_whitespace()
    }
}

impl CharFilter for CharsetStripCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| Self::is_allowed(c)).collect()
    }

    fn name(&self) -> &'static str {
        "charset_strip"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_and_digits() {
        let filter = CharsetStripCharFilter::new();
        assert_eq!(filter.filter("Hello, world! 42"), "Hello world ");
    }

    #[test]
    fn test_keeps_apostrophes() {
        let filter = CharsetStripCharFilter::new();
        assert_eq!(filter.filter("don't stop"), "don't stop");
    }

    #[test]
    fn test_keeps_whitespace_runs() {
        let filter = CharsetStripCharFilter::new();
        assert_eq!(filter.filter("a  b\tc\nd"), "a  b\tc\nd");
    }

    #[test]
    fn test_strips_stray_brackets() {
        let filter = CharsetStripCharFilter::new();
        assert_eq!(filter.filter("[left over"), "left over");
    }

    #[test]
    fn test_purely_symbolic_input() {
        let filter = CharsetStripCharFilter::new();
        assert_eq!(filter.filter("123 !!! ---"), "  ");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(CharsetStripCharFilter::new().name(), "charset_strip");
    }
}
