//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in Lyricgraph. Analyzers combine char filters, a tokenizer, and
//! token filters to transform raw lyrics into a normalized token stream.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Graph
//!             ↓
//!         Char Filters
//!             ↓
//!         Tokenizer
//!             ↓
//!         Token Filters
//! ```
//!
//! # Available Implementations
//!
//! - [`LyricsAnalyzer`](super::lyrics::LyricsAnalyzer) - The canned lyric normalization pipeline
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom char-filter/tokenizer/filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// Analysis is total over strings: `analyze` never fails on malformed text,
/// only construction of an analyzer can fail (e.g. a bad filter pattern).
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// thread boundaries.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This performs the complete analysis pipeline, including char
    /// filtering, tokenization, and all configured token filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
