//! GraphML serialization for the word-adjacency graph.
//!
//! Emits the yEd dialect: the base GraphML namespace plus the yWorks `y:`
//! extension namespace carrying visual metadata (shape, geometry, colors,
//! labels) for each node and edge.

pub mod writer;

// Re-export commonly used items
pub use writer::write_graphml;
