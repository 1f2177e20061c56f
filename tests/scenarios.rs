//! End-to-end scenarios on graphs whose safe sets are known.

mod common;

use common::{complete_graph, cycle_graph, path_graph};
use pursuit::{Configuration, GeneratorOptions, Graph, Turn, generate, io, solve};

mod degenerate_graphs {
    use super::*;

    #[test]
    fn a_single_vertex_is_safe() {
        // The only configuration is the capture, but safety quantifies over
        // pursuer starts different from the evader's, of which there are none.
        let graph = Graph::with_vertices(1);
        let analysis = solve(&graph);
        assert_eq!(analysis.safe_vertices(), vec![0]);
    }

    #[test]
    fn disconnected_vertices_are_both_safe() {
        let graph = Graph::with_vertices(2);
        let analysis = solve(&graph);

        assert_eq!(analysis.safe_vertices(), vec![0, 1]);
        // The pursuer can never reach the other component, so the
        // cross-component configurations stay undetermined.
        assert_eq!(
            analysis.outcome(Configuration::new(0, 1, Turn::Evader)),
            None,
            "configurations across components must stay undetermined"
        );
        assert_eq!(
            analysis.outcome(Configuration::new(1, 0, Turn::Pursuer)),
            None
        );
    }
}

mod cycles {
    use super::*;

    #[test]
    fn every_vertex_of_a_cycle_is_safe() {
        // Holds from length 4 up: the evader keeps running along the cycle.
        for n in [4, 5, 8] {
            let analysis = solve(&cycle_graph(n));
            assert_eq!(
                analysis.safe_vertices(),
                (0..n).collect::<Vec<_>>(),
                "every vertex of the {n}-cycle should be safe"
            );
        }
    }

    #[test]
    fn the_three_cycle_is_a_clique_and_has_no_safe_vertex() {
        // On a 3-cycle the pursuer is adjacent to every vertex and catches
        // the evader on its first move.
        let analysis = solve(&cycle_graph(3));
        assert!(analysis.safe_vertices().is_empty());
    }
}

mod paths_and_cliques {
    use super::*;

    #[test]
    fn no_vertex_of_a_path_is_safe() {
        for n in [2, 3, 5, 9] {
            let analysis = solve(&path_graph(n));
            assert!(
                analysis.safe_vertices().is_empty(),
                "the pursuer corners the evader at an endpoint of the {n}-path"
            );
        }
    }

    #[test]
    fn no_vertex_of_a_clique_is_safe() {
        for n in [2, 4] {
            let analysis = solve(&complete_graph(n));
            assert!(analysis.safe_vertices().is_empty());
        }
    }
}

mod generated_fixtures {
    use super::*;

    /// The generated graph is a cycle segment (all safe), a path segment
    /// (none safe), and a random segment (anything goes), so the safe count
    /// is bounded by the segment sizes whatever the shuffle did.
    #[test]
    fn safe_count_is_bounded_by_the_segments() {
        let options = GeneratorOptions {
            segment_size: 12,
            degree: 3,
        };
        let graph = generate(&options, Some(2023)).to_graph().unwrap();
        let safe = solve(&graph).safe_vertices();

        assert!(
            safe.len() >= options.segment_size,
            "the cycle segment alone contributes {} safe vertices, found {}",
            options.segment_size,
            safe.len()
        );
        assert!(
            safe.len() <= 2 * options.segment_size,
            "the path segment contributes none, so at most {} are safe, found {}",
            2 * options.segment_size,
            safe.len()
        );
    }

    #[test]
    fn generated_graphs_round_trip_through_the_text_format() {
        let options = GeneratorOptions {
            segment_size: 6,
            degree: 2,
        };
        let edge_list = generate(&options, Some(7));

        let mut text = Vec::new();
        io::write_edge_list(&mut text, &edge_list).unwrap();
        let reloaded = io::read_graph(text.as_slice()).unwrap();

        assert_eq!(reloaded, edge_list.to_graph().unwrap());
        assert_eq!(
            solve(&reloaded).safe_vertices(),
            solve(&edge_list.to_graph().unwrap()).safe_vertices(),
            "the text round trip must not change the analysis"
        );
    }
}
