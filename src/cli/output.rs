//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LyricgraphArgs, OutputFormat};
use crate::error::Result;

/// Result structure for a lyrics-to-graph conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversionResult {
    pub input: String,
    pub output: String,
    pub tokens: usize,
    pub nodes: usize,
    pub edges: usize,
}

/// Report a conversion result in the requested format.
///
/// Human mode always prints the resolved output path; JSON mode prints the
/// full result structure.
pub fn output_result(result: &ConversionResult, args: &LyricgraphArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("Wrote graph to {}", result.output);
            if args.verbosity() > 1 {
                println!(
                    "{} tokens, {} nodes, {} edges",
                    result.tokens, result.nodes, result.edges
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_to_json() {
        let result = ConversionResult {
            input: "lyrics.txt".to_string(),
            output: "lyrics.graphml".to_string(),
            tokens: 3,
            nodes: 2,
            edges: 2,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"output\":\"lyrics.graphml\""));
        assert!(json.contains("\"nodes\":2"));
    }
}
