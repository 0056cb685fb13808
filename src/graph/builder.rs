//! Graph types and the builder that derives them from a token sequence.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::graph::frequency::TermFrequencies;

/// A graph vertex representing one distinct word.
///
/// The word doubles as the node's identifier and its label in the output
/// document; presentation attributes are derived from `frequency` at
/// serialization time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordNode {
    /// The word itself (node id and label)
    pub word: String,

    /// Number of times the word occurs in the token sequence
    pub frequency: u64,
}

/// A directed edge representing one observed word-to-next-word transition.
///
/// Edges are not deduplicated: a transition sung twice appears twice, each
/// occurrence getting its own positional identifier at serialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEdge {
    /// Word at position i
    pub source: String,

    /// Word at position i + 1
    pub target: String,
}

/// A directed word-adjacency graph.
///
/// Nodes are sorted lexicographically ascending (this governs output order,
/// not graph semantics); edges preserve the original transition order, so
/// the structure is a multigraph in edge space while nodes are deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGraph {
    /// Distinct words, lexicographically sorted
    pub nodes: Vec<WordNode>,

    /// Adjacent-word transitions in reading order
    pub edges: Vec<WordEdge>,
}

impl WordGraph {
    /// Number of distinct words.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of transitions (equals `max(0, tokens - 1)`).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check whether the graph has no nodes and no edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Builds a [`WordGraph`] from a token sequence and its term frequencies.
///
/// # Examples
///
/// ```
/// use lyricgraph::analysis::token::Token;
/// use lyricgraph::graph::builder::GraphBuilder;
/// use lyricgraph::graph::frequency::count_frequencies;
///
/// let tokens = vec![
///     Token::new("hello", 0),
///     Token::new("hello", 1),
///     Token::new("world", 2),
/// ];
/// let frequencies = count_frequencies(&tokens);
/// let graph = GraphBuilder::build(&tokens, &frequencies);
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
pub struct GraphBuilder;

impl GraphBuilder {
    /// Derive the node set and edge sequence from the tokens.
    ///
    /// A sequence of 0 or 1 tokens yields no edges; a single token still
    /// yields one node. Pure data transformation with no failure modes.
    pub fn build(tokens: &[Token], frequencies: &TermFrequencies) -> WordGraph {
        let words: BTreeSet<&str> = tokens.iter().map(|t| t.text.as_str()).collect();

        let nodes = words
            .into_iter()
            .map(|word| WordNode {
                word: word.to_string(),
                frequency: frequencies.get(word).copied().unwrap_or(0),
            })
            .collect();

        let edges = tokens
            .windows(2)
            .map(|pair| WordEdge {
                source: pair[0].text.clone(),
                target: pair[1].text.clone(),
            })
            .collect();

        WordGraph { nodes, edges }
    }
}
