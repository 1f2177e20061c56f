//! Retrograde analysis of the pursuit game
//!
//! Configurations are labeled [`Outcome::Winning`] or [`Outcome::Losing`]
//! for the player to move by backward fixed-point propagation from the
//! capture configurations. The propagation uses an escape counter per
//! configuration: labeling a configuration Winning is existential (one
//! losing successor suffices, discovered directly), labeling it Losing is
//! universal (every successor must be winning, confirmed when the counter
//! of not-yet-winning successors reaches zero).
//!
//! Running time is proportional to the number of configurations (`2·n²`)
//! times the branching factor; memory holds the two maps, both of size
//! `2·n²`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::{Configuration, ConfigurationGraph, Turn};
use crate::graph::Graph;

/// Outcome of a configuration for the player to move, under perfect play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winning,
    Losing,
}

/// Tally of configuration outcomes across the whole space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeCounts {
    pub winning: usize,
    pub losing: usize,
    /// Configurations the propagation never forced a label onto. The game
    /// goes on forever from these, which is exactly what the evader wants.
    pub undetermined: usize,
}

/// The finished labeling of a graph's configuration space.
///
/// Configurations absent from the labeling are undetermined: neither player
/// can force anything from them, and they count in the evader's favor when
/// deriving safe vertices.
#[derive(Debug, Clone)]
pub struct Analysis {
    vertex_count: usize,
    labels: HashMap<Configuration, Outcome>,
}

impl Analysis {
    /// Number of vertices of the analyzed graph.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The label of `config`, or `None` if the propagation never determined
    /// one.
    pub fn outcome(&self, config: Configuration) -> Option<Outcome> {
        self.labels.get(&config).copied()
    }

    /// Count labeled and undetermined configurations.
    pub fn outcome_counts(&self) -> OutcomeCounts {
        let winning = self
            .labels
            .values()
            .filter(|&&outcome| outcome == Outcome::Winning)
            .count();
        let losing = self.labels.len() - winning;
        OutcomeCounts {
            winning,
            losing,
            undetermined: 2 * self.vertex_count * self.vertex_count - self.labels.len(),
        }
    }

    /// Whether `vertex` is safe for the evader: no pursuer starting vertex
    /// `k ≠ vertex` makes the configuration with the evader to move Losing.
    ///
    /// Undetermined configurations do not spoil safety, so disconnected
    /// graphs come out right: a pursuer in another component never threatens
    /// the evader.
    pub fn is_safe(&self, vertex: usize) -> bool {
        (0..self.vertex_count).filter(|&k| k != vertex).all(|k| {
            self.outcome(Configuration::new(vertex, k, Turn::Evader)) != Some(Outcome::Losing)
        })
    }

    /// All safe vertices, in ascending order.
    pub fn safe_vertices(&self) -> Vec<usize> {
        (0..self.vertex_count).filter(|&v| self.is_safe(v)).collect()
    }
}

/// Label every configuration of the game on `graph`.
///
/// The propagation seeds from the capture configurations (evader and
/// pursuer on the same vertex, evader to move), which are Losing outright,
/// and works backward over the move relation:
///
/// - a Losing configuration makes every unlabeled predecessor Winning (its
///   mover has a move into a position lost for the opponent);
/// - a Winning configuration uses up one escape of each predecessor; a
///   predecessor whose escapes run out while still unlabeled is Losing
///   (every one of its moves ends in a position won for the opponent).
///
/// Labels are write-once and each configuration enters the worklist at most
/// once, so the loop pops at most `2·n²` configurations regardless of pop
/// order. The graph must satisfy the [`Graph`] invariants (symmetric
/// adjacency, self-loops); no validation happens here.
pub fn solve(graph: &Graph) -> Analysis {
    let moves = ConfigurationGraph::new(graph);
    let n = graph.vertex_count();

    // Escapes left before a configuration is lost: initially its out-degree.
    let mut escapes: HashMap<Configuration, usize> = HashMap::with_capacity(2 * n * n);
    for config in moves.configurations() {
        escapes.insert(config, moves.successors(config).len());
    }

    let mut labels: HashMap<Configuration, Outcome> = HashMap::with_capacity(2 * n * n);
    let mut worklist: Vec<Configuration> = Vec::new();
    for v in 0..n {
        let captured = Configuration::new(v, v, Turn::Evader);
        labels.insert(captured, Outcome::Losing);
        worklist.push(captured);
    }

    while let Some(config) = worklist.pop() {
        match labels[&config] {
            Outcome::Losing => {
                for predecessor in moves.predecessors(config) {
                    if !labels.contains_key(&predecessor) {
                        labels.insert(predecessor, Outcome::Winning);
                        worklist.push(predecessor);
                    }
                }
            }
            Outcome::Winning => {
                for predecessor in moves.predecessors(config) {
                    let remaining = escapes
                        .get_mut(&predecessor)
                        .expect("every configuration has an escape counter");
                    *remaining -= 1;
                    if *remaining == 0 && !labels.contains_key(&predecessor) {
                        labels.insert(predecessor, Outcome::Losing);
                        worklist.push(predecessor);
                    }
                }
            }
        }
    }

    Analysis {
        vertex_count: n,
        labels,
    }
}
