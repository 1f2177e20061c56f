//! Common test utilities for the pursuit test suite.
//!
//! Small graph builders used across multiple integration tests. All of them
//! return solver-ready graphs: symmetric adjacency with self-loops.

use pursuit::Graph;

/// A path `0 - 1 - ... - n-1`.
pub fn path_graph(n: usize) -> Graph {
    Graph::from_edges(n, (0..n - 1).map(|u| (u, u + 1))).expect("path edges are in range")
}

/// A cycle `0 - 1 - ... - n-1 - 0`.
pub fn cycle_graph(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|u| (u, (u + 1) % n))).expect("cycle edges are in range")
}

/// The complete graph on `n` vertices.
pub fn complete_graph(n: usize) -> Graph {
    let edges = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v)));
    Graph::from_edges(n, edges).expect("clique edges are in range")
}
