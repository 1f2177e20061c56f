//! Undirected base graph with mandatory self-loops

use std::collections::HashSet;

/// An undirected graph over vertices `0..n`, stored as symmetric adjacency
/// sets.
///
/// Every vertex carries a self-loop from the moment it is created. The
/// self-loop encodes the "stay in place" move of the pursuit game, and the
/// game analysis relies on it: with self-loops present, every configuration
/// of the derived game has at least one move.
///
/// # Examples
///
/// ```
/// use pursuit::Graph;
///
/// let mut graph = Graph::with_vertices(3);
/// graph.add_edge(0, 1).unwrap();
///
/// assert!(graph.contains_edge(0, 1));
/// assert!(graph.contains_edge(1, 0));
/// assert!(graph.contains_edge(2, 2), "self-loops are always present");
/// assert_eq!(graph.edge_count(), 1, "self-loops are not counted as edges");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<HashSet<usize>>,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges beyond the
    /// self-loop at every vertex.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Graph {
            adjacency: (0..vertex_count).map(|u| HashSet::from([u])).collect(),
        }
    }

    /// Build a graph from an edge list.
    ///
    /// Self-loops are added at every vertex and each edge is inserted in both
    /// directions, so the adjacency invariants hold by construction.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::VertexOutOfRange`] if an edge endpoint is not
    /// in `0..vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, crate::Error>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::with_vertices(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Insert the undirected edge `{u, v}`.
    ///
    /// Inserting an existing edge is a no-op, as is `u == v` (the self-loop
    /// is already there).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::VertexOutOfRange`] if either endpoint is not a
    /// vertex of this graph.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), crate::Error> {
        let vertex_count = self.vertex_count();
        for vertex in [u, v] {
            if vertex >= vertex_count {
                return Err(crate::Error::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
        Ok(())
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges, self-loops excluded.
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .enumerate()
            .map(|(u, neighbors)| neighbors.iter().filter(|&&v| u < v).count())
            .sum()
    }

    /// Neighbors of `u`, including `u` itself via the self-loop.
    ///
    /// Iteration order is unspecified.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[u].iter().copied()
    }

    /// Degree of `u`, counting the self-loop.
    ///
    /// This is the branching factor of the player standing on `u`: each
    /// neighbor is a move, and the self-loop contributes the "stay" move.
    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    /// Whether `{u, v}` is an edge (or a self-loop when `u == v`).
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency.get(u).is_some_and(|set| set.contains(&v))
    }
}
