//! Analyze command - graph and configuration-space diagnostics
//!
//! Reports structural statistics of the input graph, the outcome breakdown
//! of its configuration space, and the safe vertices.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::output::{create_spinner, format_number, print_kv, print_section};

#[derive(Parser, Debug)]
#[command(about = "Report graph and configuration-space statistics")]
pub struct AnalyzeArgs {
    /// Input graph file (reads standard input when omitted)
    pub input: Option<PathBuf>,

    /// List every safe vertex instead of only the count
    #[arg(long)]
    pub list: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let graph = super::load_graph(args.input.as_deref())?;
    let n = graph.vertex_count();

    print_section("Graph");
    print_kv("vertices", &format_number(n));
    print_kv("edges", &format_number(graph.edge_count()));
    if n > 0 {
        // Neighbor counts, the always-present self-loop not included.
        let degrees: Vec<usize> = (0..n).map(|u| graph.degree(u) - 1).collect();
        let max = degrees.iter().copied().max().unwrap_or(0);
        let min = degrees.iter().copied().min().unwrap_or(0);
        let average = degrees.iter().sum::<usize>() as f64 / n as f64;
        print_kv("max degree", &format_number(max));
        print_kv("min degree", &format_number(min));
        print_kv("average degree", &format!("{average:.2}"));
    }

    let spinner = create_spinner("Labeling configurations...");
    let analysis = crate::solver::solve(&graph);
    spinner.finish_and_clear();

    let counts = analysis.outcome_counts();
    print_section("Configuration space");
    print_kv("configurations", &format_number(2 * n * n));
    print_kv("winning", &format_number(counts.winning));
    print_kv("losing", &format_number(counts.losing));
    print_kv("undetermined", &format_number(counts.undetermined));

    let safe_vertices = analysis.safe_vertices();
    print_section("Safe vertices");
    print_kv("count", &format_number(safe_vertices.len()));
    if args.list {
        print_kv("vertices", &format!("{safe_vertices:?}"));
    }

    Ok(())
}
