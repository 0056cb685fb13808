//! Term frequency counting over a token sequence.

use ahash::AHashMap;

use crate::analysis::token::Token;

/// Mapping from distinct word to its occurrence count.
///
/// Unordered by key; covers the token multiset exactly. Counts are
/// order-independent, so only the map's content matters downstream.
pub type TermFrequencies = AHashMap<String, u64>;

/// Tally the occurrences of each distinct token text.
///
/// # Examples
///
/// ```
/// use lyricgraph::analysis::token::Token;
/// use lyricgraph::graph::frequency::count_frequencies;
///
/// let tokens = vec![
///     Token::new("hello", 0),
///     Token::new("hello", 1),
///     Token::new("world", 2),
/// ];
/// let frequencies = count_frequencies(&tokens);
///
/// assert_eq!(frequencies["hello"], 2);
/// assert_eq!(frequencies["world"], 1);
/// ```
pub fn count_frequencies(tokens: &[Token]) -> TermFrequencies {
    let mut frequencies = TermFrequencies::new();
    for token in tokens {
        *frequencies.entry(token.text.clone()).or_insert(0) += 1;
    }
    frequencies
}
