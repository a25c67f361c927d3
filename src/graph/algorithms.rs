//! Structural helpers and petgraph interop

use petgraph::graph::{NodeIndex, UnGraph};
use serde::Serialize;
use crate::graph::{CompressedGraph, GraphBuilder, NodeId};

/// Basic structural statistics of a graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected_components: usize,
    pub isolated_nodes: usize,
    pub max_degree: usize,
    pub avg_degree: f64,
}

/// Convert to a petgraph undirected graph, node weights holding external IDs.
///
/// Node `i` of the result corresponds to internal index `i`.
pub fn to_petgraph(graph: &CompressedGraph) -> UnGraph<NodeId, ()> {
    let mut pg = UnGraph::with_capacity(graph.node_count(), graph.edge_count());

    for &id in graph.node_ids() {
        pg.add_node(id);
    }

    for v in graph.nodes() {
        for &w in graph.neighbors(v) {
            // Each undirected edge is stored twice; keep one copy
            if v < w {
                pg.add_edge(NodeIndex::new(v as usize), NodeIndex::new(w as usize), ());
            }
        }
    }

    pg
}

/// Build a CompressedGraph from a petgraph undirected graph keyed by node ID
pub fn from_petgraph<E>(pg: &UnGraph<NodeId, E>) -> CompressedGraph {
    let mut builder = GraphBuilder::with_capacity(pg.node_count());

    for idx in pg.node_indices() {
        builder.add_node(pg[idx]);
    }

    for edge in pg.raw_edges() {
        builder.add_edge(pg[edge.source()], pg[edge.target()]);
    }

    builder.build()
}

/// Count connected components (isolated nodes count as their own component)
pub fn connected_components(graph: &CompressedGraph) -> usize {
    petgraph::algo::connected_components(&to_petgraph(graph))
}

/// Compute structural statistics used for logging and the summary report
pub fn graph_stats(graph: &CompressedGraph) -> GraphStats {
    let node_count = graph.node_count();

    let mut isolated_nodes = 0;
    let mut max_degree = 0;
    for node in graph.nodes() {
        let degree = graph.degree(node);
        if degree == 0 {
            isolated_nodes += 1;
        }
        max_degree = max_degree.max(degree);
    }

    let avg_degree = if node_count == 0 {
        0.0
    } else {
        graph.edges.len() as f64 / node_count as f64
    };

    GraphStats {
        node_count,
        edge_count: graph.edge_count(),
        connected_components: connected_components(graph),
        isolated_nodes,
        max_degree,
        avg_degree,
    }
}
