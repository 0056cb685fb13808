//! Lyrics analyzer providing the canned normalization pipeline.
//!
//! # Pipeline
//!
//! 1. BracketStripCharFilter (drops `[Chorus]`-style section markers)
//! 2. CharsetStripCharFilter (keeps letters, apostrophes, whitespace)
//! 3. WhitespaceTokenizer
//! 4. LowercaseFilter
//!
//! # Examples
//!
//! ```
//! use lyricgraph::analysis::analyzer::{Analyzer, LyricsAnalyzer};
//!
//! let analyzer = LyricsAnalyzer::new().unwrap();
//! let tokens: Vec<_> = analyzer.analyze("[Chorus] Na, na!").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "na");
//! assert_eq!(tokens[1].text, "na");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::char_filter::bracket_strip::BracketStripCharFilter;
use crate::analysis::char_filter::charset_strip::CharsetStripCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// The default analyzer for lyric text.
///
/// Normalizes raw lyrics into an ordered sequence of lowercase word tokens
/// made of letters and apostrophes. Total over any string input: empty,
/// whitespace-only, or purely symbolic text simply yields no tokens.
pub struct LyricsAnalyzer {
    inner: PipelineAnalyzer,
}

impl LyricsAnalyzer {
    /// Create a new lyrics analyzer with the default pipeline.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_char_filter(Arc::new(BracketStripCharFilter::new()?))
            .add_char_filter(Arc::new(CharsetStripCharFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("lyrics".to_string());

        Ok(LyricsAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for LyricsAnalyzer {
    fn default() -> Self {
        Self::new().expect("Lyrics analyzer should be creatable with default settings")
    }
}

impl Analyzer for LyricsAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "lyrics"
    }
}

impl std::fmt::Debug for LyricsAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LyricsAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
