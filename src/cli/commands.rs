//! Command implementation for the Lyricgraph CLI.

use std::fs;

use log::{debug, info};

use crate::analysis::analyzer::{Analyzer, LyricsAnalyzer};
use crate::analysis::token::Token;
use crate::cli::args::{LyricgraphArgs, OutputFormat};
use crate::cli::output::{ConversionResult, output_result};
use crate::error::Result;
use crate::graph::builder::GraphBuilder;
use crate::graph::frequency::count_frequencies;
use crate::graphml::write_graphml;
use crate::style::StyleConfig;
use crate::util::path::derive_output_path;

/// Execute the CLI command: read lyrics, build the graph, write GraphML.
pub fn execute_command(args: &LyricgraphArgs) -> Result<()> {
    if args.verbosity() > 0 && matches!(args.output_format, OutputFormat::Human) {
        println!("Processing {} ...", args.input.display());
    }

    let lyrics = fs::read_to_string(&args.input)?;
    info!("read {} bytes from {}", lyrics.len(), args.input.display());

    let analyzer = LyricsAnalyzer::new()?;
    let tokens: Vec<Token> = analyzer.analyze(&lyrics)?.collect();
    debug!("analyzed {} tokens", tokens.len());

    let frequencies = count_frequencies(&tokens);
    let graph = GraphBuilder::build(&tokens, &frequencies);
    debug!(
        "built graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let document = write_graphml(&graph, &StyleConfig::default())?;

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.input));
    fs::write(&output_path, &document)?;

    output_result(
        &ConversionResult {
            input: args.input.display().to_string(),
            output: output_path.display().to_string(),
            tokens: tokens.len(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        },
        args,
    )?;

    Ok(())
}
