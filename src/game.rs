//! Game model: configurations and the move relation between them
//!
//! The pursuit game on a base graph G is played on a derived directed graph
//! whose nodes are configurations `(evader, pursuer, turn)`. The player whose
//! turn it is replaces their own position with one of its neighbors in G (the
//! self-loop makes "stay" a legal move), and the turn passes to the other
//! player. This module defines the configuration type and enumerates the
//! relation in both directions without ever materializing it.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// The player to move at a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Evader,
    Pursuer,
}

impl Turn {
    /// Get the other player
    pub fn opponent(self) -> Turn {
        match self {
            Turn::Evader => Turn::Pursuer,
            Turn::Pursuer => Turn::Evader,
        }
    }
}

/// A game state: the evader's vertex, the pursuer's vertex, and whose move
/// it is.
///
/// This type implements `Copy`: it is two vertex indices and a turn flag,
/// and the solver stores millions of them as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Configuration {
    pub evader: usize,
    pub pursuer: usize,
    pub turn: Turn,
}

impl Configuration {
    pub fn new(evader: usize, pursuer: usize, turn: Turn) -> Self {
        Configuration {
            evader,
            pursuer,
            turn,
        }
    }

    /// Whether the pursuer has caught the evader: both stand on the same
    /// vertex and the evader is to move.
    pub fn is_capture(self) -> bool {
        self.evader == self.pursuer && self.turn == Turn::Evader
    }
}

/// The directed move relation over configurations, derived from a base
/// graph.
///
/// The relation is never stored; successor and predecessor sets are computed
/// on demand from the base graph's adjacency. Both directions replace one
/// coordinate with a neighbor and flip the turn, so they share one helper
/// and differ only in which player's coordinate is varied:
///
/// - [`successors`](ConfigurationGraph::successors) varies the player who is
///   to move,
/// - [`predecessors`](ConfigurationGraph::predecessors) varies the player who
///   is *not* to move (that player made the move leading here).
///
/// The symmetry of the base graph's adjacency makes the predecessor
/// enumeration exact: `u` can move to `v` exactly when `v` can move to `u`.
#[derive(Debug, Clone, Copy)]
pub struct ConfigurationGraph<'g> {
    graph: &'g Graph,
}

impl<'g> ConfigurationGraph<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        ConfigurationGraph { graph }
    }

    /// Enumerate the full configuration space, lazily.
    ///
    /// The space is `V × V × {Evader, Pursuer}`, of size `2·n²`.
    pub fn configurations(&self) -> impl Iterator<Item = Configuration> + 'g {
        let n = self.graph.vertex_count();
        (0..n).flat_map(move |evader| {
            (0..n).flat_map(move |pursuer| {
                [Turn::Evader, Turn::Pursuer]
                    .into_iter()
                    .map(move |turn| Configuration::new(evader, pursuer, turn))
            })
        })
    }

    /// Configurations reachable from `config` in exactly one move.
    ///
    /// The mover's coordinate ranges over its neighbors (the self-loop
    /// yields the "stay" option, so the result is never empty) and the turn
    /// flips.
    pub fn successors(&self, config: Configuration) -> Vec<Configuration> {
        self.moves(config, config.turn)
    }

    /// Configurations from which `config` is reachable in one move.
    ///
    /// The player who is *not* to move at `config` just moved, so their
    /// coordinate is the one varied.
    pub fn predecessors(&self, config: Configuration) -> Vec<Configuration> {
        self.moves(config, config.turn.opponent())
    }

    /// One-move relation with the varied coordinate chosen by `moved`.
    fn moves(&self, config: Configuration, moved: Turn) -> Vec<Configuration> {
        let next_turn = config.turn.opponent();
        match moved {
            Turn::Evader => self
                .graph
                .neighbors(config.evader)
                .map(|evader| Configuration::new(evader, config.pursuer, next_turn))
                .collect(),
            Turn::Pursuer => self
                .graph
                .neighbors(config.pursuer)
                .map(|pursuer| Configuration::new(config.evader, pursuer, next_turn))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn path_graph(n: usize) -> Graph {
        Graph::from_edges(n, (0..n - 1).map(|u| (u, u + 1))).unwrap()
    }

    #[test]
    fn evader_moves_vary_evader_and_flip_turn() {
        let graph = path_graph(3);
        let moves = ConfigurationGraph::new(&graph);

        let successors: HashSet<_> = moves
            .successors(Configuration::new(1, 2, Turn::Evader))
            .into_iter()
            .collect();
        let expected: HashSet<_> = [
            Configuration::new(0, 2, Turn::Pursuer),
            Configuration::new(1, 2, Turn::Pursuer),
            Configuration::new(2, 2, Turn::Pursuer),
        ]
        .into_iter()
        .collect();

        assert_eq!(successors, expected);
    }

    #[test]
    fn pursuer_moves_vary_pursuer_and_flip_turn() {
        let graph = path_graph(3);
        let moves = ConfigurationGraph::new(&graph);

        let successors: HashSet<_> = moves
            .successors(Configuration::new(0, 0, Turn::Pursuer))
            .into_iter()
            .collect();
        let expected: HashSet<_> = [
            Configuration::new(0, 0, Turn::Evader),
            Configuration::new(0, 1, Turn::Evader),
        ]
        .into_iter()
        .collect();

        assert_eq!(successors, expected);
    }

    #[test]
    fn every_configuration_has_a_stay_move() {
        let graph = Graph::with_vertices(2);
        let moves = ConfigurationGraph::new(&graph);

        for config in moves.configurations() {
            let successors = moves.successors(config);
            assert!(
                !successors.is_empty(),
                "configuration {config:?} has no moves"
            );
            let stayed = Configuration::new(config.evader, config.pursuer, config.turn.opponent());
            assert!(
                successors.contains(&stayed),
                "self-loop should always allow staying in place at {config:?}"
            );
        }
    }

    #[test]
    fn predecessors_are_the_inverse_of_successors() {
        let graph = path_graph(4);
        let moves = ConfigurationGraph::new(&graph);

        for config in moves.configurations() {
            for successor in moves.successors(config) {
                assert!(
                    moves.predecessors(successor).contains(&config),
                    "{config:?} -> {successor:?} has no matching backward edge"
                );
            }
            for predecessor in moves.predecessors(config) {
                assert!(
                    moves.successors(predecessor).contains(&config),
                    "{predecessor:?} -> {config:?} has no matching forward edge"
                );
            }
        }
    }

    #[test]
    fn configuration_space_has_expected_size() {
        let graph = path_graph(3);
        let moves = ConfigurationGraph::new(&graph);
        assert_eq!(moves.configurations().count(), 2 * 3 * 3);
    }
}
