//! Pursuit CLI - research toolkit for pursuit-evasion games on graphs
//!
//! This CLI provides a unified interface for:
//! - Solving a graph: which starting vertices are safe for the evader
//! - Generating reproducible synthetic benchmark graphs
//! - Analyzing a graph's configuration space and outcome breakdown

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pursuit")]
#[command(version, about = "Analyze pursuit-evasion games on undirected graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Determine the evader-safe vertices of a graph
    Solve(pursuit::cli::commands::solve::SolveArgs),

    /// Generate a synthetic benchmark graph
    Generate(pursuit::cli::commands::generate::GenerateArgs),

    /// Report graph and configuration-space statistics
    Analyze(pursuit::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => pursuit::cli::commands::solve::execute(args),
        Commands::Generate(args) => pursuit::cli::commands::generate::execute(args),
        Commands::Analyze(args) => pursuit::cli::commands::analyze::execute(args),
    }
}
