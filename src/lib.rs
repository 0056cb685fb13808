//! # Lyricgraph
//!
//! Converts a plain-text lyric corpus into a directed word-adjacency graph
//! and serializes it as a yEd-flavoured GraphML document.
//!
//! ## Pipeline
//!
//! - Flexible text analysis pipeline (char filters, tokenizer, token filters)
//! - Frequency counting over the normalized token stream
//! - Word-adjacency graph construction (nodes sized by frequency)
//! - Deterministic GraphML serialization with yWorks visual metadata

pub mod analysis;
pub mod cli;
pub mod error;
pub mod graph;
pub mod graphml;
pub mod style;
pub mod util;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
