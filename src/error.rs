//! Error types for the Lyricgraph library.
//!
//! All errors are represented by the [`LyricgraphError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use lyricgraph::error::{LyricgraphError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LyricgraphError::analysis("Invalid pattern"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Lyricgraph operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum LyricgraphError {
    /// I/O errors (reading lyrics, writing the output document)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Document serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LyricgraphError.
pub type Result<T> = std::result::Result<T, LyricgraphError>;

impl LyricgraphError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        LyricgraphError::Analysis(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        LyricgraphError::Serialization(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LyricgraphError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LyricgraphError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = LyricgraphError::serialization("Test serialization error");
        assert_eq!(
            error.to_string(),
            "Serialization error: Test serialization error"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lyricgraph_error = LyricgraphError::from(io_error);

        match lyricgraph_error {
            LyricgraphError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
