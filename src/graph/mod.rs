//! Word-adjacency graph construction.
//!
//! Derives a directed graph from the analyzed token stream: nodes are the
//! distinct words weighted by occurrence frequency, edges are the observed
//! word-to-next-word transitions in reading order.

pub mod builder;
pub mod frequency;

// Re-export commonly used types
pub use builder::*;
pub use frequency::*;
