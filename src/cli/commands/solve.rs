//! Solve command - determine the evader-safe vertices of a graph

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::cli::output;

#[derive(Parser, Debug)]
#[command(about = "Determine the evader-safe vertices of a graph")]
pub struct SolveArgs {
    /// Input graph file (reads standard input when omitted)
    pub input: Option<PathBuf>,

    /// Emit a JSON summary instead of the plain count
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SolveSummary {
    vertex_count: usize,
    edge_count: usize,
    safe_count: usize,
    safe_vertices: Vec<usize>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let graph = super::load_graph(args.input.as_deref())?;

    let spinner = output::create_spinner("Labeling configurations...");
    let analysis = crate::solver::solve(&graph);
    spinner.finish_and_clear();

    let safe_vertices = analysis.safe_vertices();
    if args.json {
        let summary = SolveSummary {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            safe_count: safe_vertices.len(),
            safe_vertices,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        // The count is the primary result; the listing is diagnostic.
        println!("{}", safe_vertices.len());
        eprintln!("safe vertices: {safe_vertices:?}");
    }

    Ok(())
}
