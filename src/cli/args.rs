//! Command line argument parsing for the Lyricgraph CLI using clap.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lyricgraph - turn song lyrics into a word-adjacency graph for yEd
#[derive(Parser, Debug, Clone)]
#[command(name = "lyricgraph")]
#[command(about = "Convert song lyrics into a yEd GraphML word-adjacency graph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LyricgraphArgs {
    /// Lyrics text file to read
    #[arg(value_name = "LYRICS_FILE")]
    pub input: PathBuf,

    /// Output GraphML path (defaults to the input path with a .graphml extension)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: Option<PathBuf>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,
}

impl LyricgraphArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output formats for CLI result reporting
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
