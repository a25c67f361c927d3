//! Betweenness centrality (Brandes)

use rayon::prelude::*;
use crate::centrality::shortest_paths::shortest_paths;
use crate::centrality::CentralityScores;
use crate::config::{BetweennessConfig, Normalization};
use crate::error::Result;
use crate::graph::CompressedGraph;

/// Betweenness centrality with the default configuration
pub fn compute_betweenness(graph: &CompressedGraph) -> Result<CentralityScores> {
    compute_betweenness_with(graph, &BetweennessConfig::default())
}

/// Betweenness centrality for every node.
///
/// Each source's contribution is computed from private BFS state and the
/// contributions are summed, so sources may run in any order or in parallel.
pub fn compute_betweenness_with(
    graph: &CompressedGraph,
    config: &BetweennessConfig,
) -> Result<CentralityScores> {
    let n = graph.node_count();
    log::info!("Computing betweenness centrality over {} nodes", n);

    let raw = if n < config.parallel_threshold {
        accumulate_sequential(graph)?
    } else {
        accumulate_parallel(graph)?
    };

    let values = normalize(raw, config.normalization);
    log::info!("Betweenness centrality complete ({:?} normalization)", config.normalization);

    Ok(CentralityScores::new(graph, values))
}

/// Dependencies of every node on one source, walking the BFS order backwards
/// so each node is finished before its predecessors.
pub fn source_dependencies(graph: &CompressedGraph, source: u32) -> Result<Vec<f64>> {
    let sp = shortest_paths(graph, source)?;
    let mut dependency = vec![0.0f64; graph.node_count()];

    for &w in sp.order.iter().rev() {
        let w_idx = w as usize;
        // Reached nodes always have a positive path count
        let coefficient = (1.0 + dependency[w_idx]) / sp.path_counts[w_idx];

        for &v in &sp.predecessors[w_idx] {
            dependency[v as usize] += sp.path_counts[v as usize] * coefficient;
        }
    }

    dependency[source as usize] = 0.0;
    Ok(dependency)
}

/// Sequential version for smaller graphs
fn accumulate_sequential(graph: &CompressedGraph) -> Result<Vec<f64>> {
    let mut scores = vec![0.0f64; graph.node_count()];

    for source in graph.nodes() {
        let contribution = source_dependencies(graph, source)?;
        add_into(&mut scores, &contribution);
    }

    Ok(scores)
}

fn accumulate_parallel(graph: &CompressedGraph) -> Result<Vec<f64>> {
    let n = graph.node_count();
    log::debug!("Accumulating {} sources on {} threads", n, rayon::current_num_threads());

    (0..n as u32)
        .into_par_iter()
        .map(|source| source_dependencies(graph, source))
        .try_reduce(
            || vec![0.0f64; n],
            |mut acc, contribution| {
                add_into(&mut acc, &contribution);
                Ok(acc)
            },
        )
}

fn add_into(acc: &mut [f64], contribution: &[f64]) {
    for (total, value) in acc.iter_mut().zip(contribution) {
        *total += value;
    }
}

fn normalize(mut scores: Vec<f64>, normalization: Normalization) -> Vec<f64> {
    let n = scores.len();
    let factor = match normalization {
        Normalization::Raw => 1.0,
        Normalization::Undirected => 0.5,
        Normalization::Scaled if n > 2 => {
            let pairs = ((n - 1) * (n - 2)) as f64 / 2.0;
            0.5 / pairs
        }
        // Fewer than three nodes: every score is already zero
        Normalization::Scaled => 0.5,
    };

    if factor != 1.0 {
        for score in &mut scores {
            *score *= factor;
        }
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::test_graphs::{assert_close, complete, cycle, path, star};
    use crate::graph::GraphBuilder;

    fn with_normalization(normalization: Normalization) -> BetweennessConfig {
        BetweennessConfig { normalization, ..Default::default() }
    }

    #[test]
    fn middle_of_three_path_carries_the_only_pair() {
        let scores = compute_betweenness(&path(3)).expect("betweenness");

        assert_close(scores.get(1).unwrap(), 1.0, 1e-12);
        assert_close(scores.get(0).unwrap(), 0.0, 1e-12);
        assert_close(scores.get(2).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn cycle_is_symmetric() {
        let scores = compute_betweenness(&cycle(4)).expect("betweenness");
        let first = scores.values()[0];

        for &value in scores.values() {
            assert_close(value, first, 1e-12);
        }
        // Each node sits on one of the two paths between its two neighbors
        assert_close(first, 0.5, 1e-12);
    }

    #[test]
    fn star_centre_carries_every_leaf_pair() {
        let leaves = 6u64;
        let graph = star(leaves);
        let undirected = compute_betweenness(&graph).expect("betweenness");
        let raw = compute_betweenness_with(&graph, &with_normalization(Normalization::Raw))
            .expect("betweenness");

        let pairs = (leaves * (leaves - 1) / 2) as f64;
        assert_close(undirected.get(0).unwrap(), pairs, 1e-9);
        for leaf in 1..=leaves {
            assert_close(undirected.get(leaf).unwrap(), 0.0, 1e-12);
        }

        // Raw counts every pair once from each endpoint
        for (u, r) in undirected.values().iter().zip(raw.values()) {
            assert_close(*r, 2.0 * u, 1e-9);
        }
    }

    #[test]
    fn scaled_star_centre_is_one() {
        let graph = star(5);
        let scaled = compute_betweenness_with(&graph, &with_normalization(Normalization::Scaled))
            .expect("betweenness");

        assert_close(scaled.get(0).unwrap(), 1.0, 1e-12);
        assert!(scaled.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }

    #[test]
    fn complete_graph_has_no_brokers() {
        let scores = compute_betweenness(&complete(5)).expect("betweenness");
        assert!(scores.values().iter().all(|&v| v.abs() < 1e-12));
    }

    #[test]
    fn disconnected_components_do_not_interact() {
        // Path 0-1-2 and a separate path 10-11-12-13
        let graph = GraphBuilder::from_edges([(0, 1), (1, 2), (10, 11), (11, 12), (12, 13)]);
        let scores = compute_betweenness(&graph).expect("betweenness");

        assert_close(scores.get(1).unwrap(), 1.0, 1e-12);
        assert_close(scores.get(11).unwrap(), 2.0, 1e-12);
        assert_close(scores.get(12).unwrap(), 2.0, 1e-12);
        assert_close(scores.get(10).unwrap(), 0.0, 1e-12);
    }

    #[test]
    fn isolated_nodes_score_zero() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1);
        builder.add_edge(1, 2);
        builder.add_node(7);
        let scores = compute_betweenness(&builder.build()).expect("betweenness");

        assert_eq!(scores.get(7), Some(0.0));
    }

    #[test]
    fn parallel_matches_sequential() {
        let graph = GraphBuilder::from_edges(
            (0..40u64).flat_map(|i| [(i, (i + 1) % 40), (i, (i * 7 + 3) % 40)]),
        );
        let sequential = compute_betweenness_with(
            &graph,
            &BetweennessConfig { parallel_threshold: usize::MAX, ..Default::default() },
        )
        .expect("sequential");
        let parallel = compute_betweenness_with(
            &graph,
            &BetweennessConfig { parallel_threshold: 0, ..Default::default() },
        )
        .expect("parallel");

        for (a, b) in sequential.values().iter().zip(parallel.values()) {
            assert_close(*a, *b, 1e-9);
        }
    }

    #[test]
    fn source_dependency_excludes_source() {
        let graph = path(4);
        let src = graph.index_of(1).unwrap();
        let dependency = source_dependencies(&graph, src).expect("dependencies");

        assert_eq!(dependency[src as usize], 0.0);
        // From 1: node 2 lies on the path to 3
        assert_close(dependency[graph.index_of(2).unwrap() as usize], 1.0, 1e-12);
    }
}
