//! Reading and writing graphs in the edge-list text format
//!
//! The format is one header line `<vertices> <edges>` followed by one line
//! `<u> <v>` per undirected edge, all indices 0-based. Self-loops never
//! appear in the text: the loader adds them to every vertex, as the solver
//! requires.

use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::generator::EdgeList;
use crate::graph::Graph;

fn parse_pair(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second))
}

/// Read a graph from edge-list text.
///
/// Blank lines are ignored. The returned graph has symmetric adjacency and a
/// self-loop at every vertex, satisfying the solver's preconditions.
///
/// # Errors
///
/// Returns a structured error for a malformed header or edge line, an edge
/// endpoint out of range, or fewer edge lines than the header promised.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph> {
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => {
                return Err(Error::InvalidHeader {
                    line: String::new(),
                });
            }
        }
    };
    let (vertex_count, edge_count) =
        parse_pair(&header).ok_or_else(|| Error::InvalidHeader {
            line: header.clone(),
        })?;

    let mut graph = Graph::with_vertices(vertex_count);
    let mut found = 0;
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if found == edge_count {
            break;
        }
        let (u, v) = parse_pair(&line).ok_or_else(|| Error::InvalidEdge { line: line.clone() })?;
        graph.add_edge(u, v)?;
        found += 1;
    }

    if found < edge_count {
        return Err(Error::TruncatedEdgeList {
            expected: edge_count,
            found,
        });
    }

    Ok(graph)
}

/// Write an edge list in the loader's input format.
pub fn write_edge_list<W: Write>(mut writer: W, edge_list: &EdgeList) -> Result<()> {
    writeln!(writer, "{} {}", edge_list.vertex_count, edge_list.edges.len())?;
    for &(u, v) in &edge_list.edges {
        writeln!(writer, "{u} {v}")?;
    }
    Ok(())
}
