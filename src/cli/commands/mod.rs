//! Command implementations for the pursuit CLI

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};

use crate::graph::Graph;

pub mod analyze;
pub mod generate;
pub mod solve;

/// Load a graph from a file, or from standard input when no path is given.
fn load_graph(input: Option<&Path>) -> Result<Graph> {
    match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("open {}", path.display()))?;
            crate::io::read_graph(BufReader::new(file))
                .with_context(|| format!("read graph from {}", path.display()))
        }
        None => crate::io::read_graph(std::io::stdin().lock())
            .context("read graph from standard input"),
    }
}
