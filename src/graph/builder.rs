//! Graph construction module

use std::collections::HashMap;
use crate::graph::compressed::{CompressedGraph, NodeId};

/// Builder for incrementally constructing an undirected CompressedGraph
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from external IDs to node indices
    id_to_index: HashMap<NodeId, u32>,

    /// External IDs in first-seen order
    node_ids: Vec<NodeId>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,

    /// Self-loops seen and dropped
    self_loops: usize,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
            self_loops: 0,
        }
    }

    /// Build a graph straight from an edge iterator
    pub fn from_edges<I>(edges: I) -> CompressedGraph
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut builder = Self::new();
        for (a, b) in edges {
            builder.add_edge(a, b);
        }
        builder.build()
    }

    /// Get or create a node index for the given external ID
    pub fn add_node(&mut self, id: NodeId) -> u32 {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id, idx);
        self.node_ids.push(id);
        self.adjacency_lists.push(Vec::new());

        idx
    }

    /// Add an undirected edge. Self-loops register the node but add no edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        let a_idx = self.add_node(a);
        let b_idx = self.add_node(b);

        if a_idx == b_idx {
            self.self_loops += 1;
            return;
        }

        self.adjacency_lists[a_idx as usize].push(b_idx);
        self.adjacency_lists[b_idx as usize].push(a_idx);
    }

    /// Build the compressed graph, collapsing parallel edges
    pub fn build(mut self) -> CompressedGraph {
        let mut duplicates = 0;
        for list in &mut self.adjacency_lists {
            // Sort for binary search efficiency
            list.sort_unstable();
            let before = list.len();
            list.dedup();
            duplicates += before - list.len();
        }

        if self.self_loops > 0 || duplicates > 0 {
            log::debug!(
                "Dropped {} self-loops and {} parallel edges",
                self.self_loops,
                duplicates / 2
            );
        }

        let edge_count: usize = self.adjacency_lists.iter()
            .map(|list| list.len())
            .sum();

        // Create offsets array
        let mut offsets = Vec::with_capacity(self.node_ids.len() + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        let mut edges = Vec::with_capacity(edge_count);
        for list in &self.adjacency_lists {
            edges.extend_from_slice(list);
        }

        CompressedGraph::from_parts(offsets, edges, self.node_ids)
    }
}
