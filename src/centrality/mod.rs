//! Node centrality measures

pub mod shortest_paths;
pub mod betweenness;
pub mod pagerank;
pub mod top_k;

use std::collections::HashMap;
use serde::Serialize;
use crate::graph::{CompressedGraph, NodeId};

pub use betweenness::{compute_betweenness, compute_betweenness_with};
pub use pagerank::{compute_pagerank, compute_pagerank_with, PageRankResult};
pub use shortest_paths::{shortest_paths, shortest_paths_from, ShortestPaths};
pub use top_k::{top_k, top_k_by};

/// Per-node scores aligned with a graph's internal node order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityScores {
    node_ids: Vec<NodeId>,
    values: Vec<f64>,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

impl CentralityScores {
    /// Pair a score vector with the graph it was computed on
    pub(crate) fn new(graph: &CompressedGraph, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), graph.node_count());
        let node_ids = graph.node_ids().to_vec();
        let index = node_ids.iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        Self {
            node_ids,
            values,
            index,
        }
    }

    /// Score of an external node ID
    pub fn get(&self, id: NodeId) -> Option<f64> {
        self.index.get(&id).map(|&idx| self.values[idx])
    }

    /// Dense score vector in node order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// External IDs in node order
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(id, score)` pairs in node order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.node_ids.iter().copied().zip(self.values.iter().copied())
    }

    /// Sum of all scores
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Copy into an ID-keyed map
    pub fn to_map(&self) -> HashMap<NodeId, f64> {
        self.iter().collect()
    }
}

#[cfg(test)]
pub(crate) mod test_graphs {
    use crate::graph::{CompressedGraph, GraphBuilder};

    pub fn path(n: u64) -> CompressedGraph {
        GraphBuilder::from_edges((0..n.saturating_sub(1)).map(|i| (i, i + 1)))
    }

    pub fn cycle(n: u64) -> CompressedGraph {
        GraphBuilder::from_edges((0..n).map(|i| (i, (i + 1) % n)))
    }

    /// Star with centre 0 and leaves 1..=leaves
    pub fn star(leaves: u64) -> CompressedGraph {
        GraphBuilder::from_edges((1..=leaves).map(|leaf| (0, leaf)))
    }

    pub fn complete(n: u64) -> CompressedGraph {
        let mut edges = Vec::new();
        for a in 0..n {
            for b in (a + 1)..n {
                edges.push((a, b));
            }
        }
        GraphBuilder::from_edges(edges)
    }

    pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {} +/- {}, got {}",
            expected,
            tolerance,
            actual
        );
    }
}
