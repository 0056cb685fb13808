//! Bracket strip char filter implementation.

use regex::Regex;

use super::CharFilter;
use crate::error::{LyricgraphError, Result};

/// Matches a bracketed segment, shortest match per pair, within a single line.
const BRACKET_PATTERN: &str = r"\[[^\]\n]*\]";

/// A char filter that removes square-bracketed segments along with their
/// contents.
///
/// Lyric sheets annotate structure with markers like `[Chorus]` or
/// `[Verse 2]`; those are stage directions, not words, and are dropped
/// entirely. Bracket pairs do not nest and never span a line break. An
/// unmatched `[` or `]` is left in place as literal text.
pub struct BracketStripCharFilter {
    pattern: Regex,
}

impl BracketStripCharFilter {
    /// Create a new bracket strip char filter.
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(BRACKET_PATTERN)
                .map_err(|e| LyricgraphError::analysis(e.to_string()))?,
        })
    }
}

impl CharFilter for BracketStripCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "bracket_strip"
    }
}
