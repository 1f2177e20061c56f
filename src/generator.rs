//! Synthetic test-fixture graphs
//!
//! The generator produces the disjoint union of three segments of equal
//! size, with all vertex labels randomly permuted so that the structure is
//! not apparent from the indices:
//!
//! - a cycle, whose vertices are all safe for the evader (for segments of
//!   at least 4 vertices; a 3-cycle is a clique and the pursuer catches
//!   immediately),
//! - a path, none of whose vertices are safe,
//! - a bounded-degree random graph, where some vertices are safe.
//!
//! The output matches the loader's input format: an edge list without
//! self-loops (the loader adds those).

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;

/// Shape parameters for the synthetic graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Vertices per segment; the generated graph has three times as many.
    /// Should be at least 4 so the cycle segment is a proper cycle.
    pub segment_size: usize,
    /// Degree parameter of the random segment: edges span at most this many
    /// positions, and no vertex exceeds three times this degree.
    pub degree: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            segment_size: 333,
            degree: 10,
        }
    }
}

/// A generated graph in the loader's input format: each undirected edge
/// appears once as `(u, v)` with `u < v`, self-loops omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize)>,
}

impl EdgeList {
    /// Build the solver-ready graph: symmetric adjacency plus self-loops.
    pub fn to_graph(&self) -> Result<Graph, crate::Error> {
        Graph::from_edges(self.vertex_count, self.edges.iter().copied())
    }
}

/// Generate a synthetic graph.
///
/// Passing a seed makes the output fully reproducible; without one the
/// generator seeds itself from the operating system.
///
/// # Panics
///
/// Panics if `options.segment_size` is below 4.
pub fn generate(options: &GeneratorOptions, seed: Option<u64>) -> EdgeList {
    assert!(
        options.segment_size >= 4,
        "segment_size below 4 degenerates the cycle segment"
    );

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let m = options.segment_size;
    let d = options.degree;
    let n = 3 * m;

    let mut label: Vec<usize> = (0..n).collect();
    label.shuffle(&mut rng);

    fn add_edge(adjacency: &mut [HashSet<usize>], u: usize, v: usize) {
        adjacency[u].insert(v);
        adjacency[v].insert(u);
    }

    let mut adjacency = vec![HashSet::new(); n];

    // Cycle segment over label[0..m].
    for u in 0..m {
        add_edge(&mut adjacency, label[u], label[(u + 1) % m]);
    }

    // Path segment over label[m..2m].
    for u in 0..m - 1 {
        add_edge(&mut adjacency, label[m + u], label[m + u + 1]);
    }

    // Random segment over label[2m..3m]: short-range edges, rejected when
    // either endpoint already has 3·d neighbors.
    for _ in 0..m * d {
        let u = rng.random_range(0..m);
        let v = rng.random_range(u..=u + d) % m;
        let u1 = label[2 * m + u];
        let v1 = label[2 * m + v];
        if u1 != v1 && adjacency[u1].len() < 3 * d && adjacency[v1].len() < 3 * d {
            add_edge(&mut adjacency, u1, v1);
        }
    }

    let mut edges: Vec<(usize, usize)> = adjacency
        .iter()
        .enumerate()
        .flat_map(|(u, neighbors)| neighbors.iter().filter(move |&&v| u < v).map(move |&v| (u, v)))
        .collect();
    edges.sort_unstable();

    EdgeList {
        vertex_count: n,
        edges,
    }
}
