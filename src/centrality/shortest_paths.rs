//! Single-source BFS with shortest-path counting

use std::collections::VecDeque;
use crate::error::{CentralityError, Result};
use crate::graph::{CompressedGraph, NodeId};

/// Output of one BFS run. Owned by a single source and discarded after its
/// dependencies are accumulated.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Source node (internal index)
    pub source: u32,

    /// Nodes in the order they were dequeued; non-decreasing distance
    pub order: Vec<u32>,

    /// Hop distance from the source, `None` when unreached
    pub distances: Vec<Option<u32>>,

    /// Number of distinct shortest paths from the source (0 when unreached)
    pub path_counts: Vec<f64>,

    /// Neighbors one hop closer to the source on some shortest path
    pub predecessors: Vec<Vec<u32>>,
}

impl ShortestPaths {
    /// Whether a node was reached from the source
    pub fn is_reached(&self, node: u32) -> bool {
        self.distances[node as usize].is_some()
    }
}

/// Run BFS from an internal node index
pub fn shortest_paths(graph: &CompressedGraph, source: u32) -> Result<ShortestPaths> {
    let n = graph.node_count();
    if source as usize >= n {
        return Err(CentralityError::UnknownIndex(source));
    }

    let mut order = Vec::with_capacity(n);
    let mut distances: Vec<Option<u32>> = vec![None; n];
    let mut path_counts = vec![0.0f64; n];
    let mut predecessors: Vec<Vec<u32>> = vec![Vec::new(); n];

    distances[source as usize] = Some(0);
    path_counts[source as usize] = 1.0;

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next = distances[v as usize].map_or(0, |d| d + 1);

        for &w in graph.neighbors(v) {
            let w_idx = w as usize;
            if distances[w_idx].is_none() {
                distances[w_idx] = Some(next);
                queue.push_back(w);
            }

            if distances[w_idx] == Some(next) {
                path_counts[w_idx] += path_counts[v as usize];
                predecessors[w_idx].push(v);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        order,
        distances,
        path_counts,
        predecessors,
    })
}

/// Run BFS from an external node ID
pub fn shortest_paths_from(graph: &CompressedGraph, source: NodeId) -> Result<ShortestPaths> {
    let idx = graph.index_of(source)
        .ok_or(CentralityError::UnknownNode(source))?;
    shortest_paths(graph, idx)
}
