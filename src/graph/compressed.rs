//! Memory-efficient undirected graph representation

use std::collections::HashMap;
use std::mem;

/// External node identifier, as read from the input edge list
pub type NodeId = u64;

/// Compressed sparse representation of an undirected, unweighted graph.
///
/// Every undirected edge `{u, v}` is stored twice, once in the adjacency range
/// of `u` and once in that of `v`, so neighbor lookup is a single slice. Each
/// adjacency range is sorted and free of duplicates and self-loops.
#[derive(Debug, Clone, Default)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's neighbors begin
    /// offsets[i] to offsets[i+1] defines the neighbor range for node i
    pub offsets: Vec<u32>,

    /// Neighbor array: concatenated neighbor lists (internal indices)
    pub edges: Vec<u32>,

    /// Mapping from internal node index to external node ID
    pub node_ids: Vec<NodeId>,

    /// Reverse lookup from external node ID to internal index
    id_to_index: HashMap<NodeId, u32>,
}

impl CompressedGraph {
    /// Assemble a graph from already-validated CSR parts.
    ///
    /// Callers must guarantee that `offsets` has `node_ids.len() + 1` entries
    /// and that every adjacency range is sorted, unique and symmetric.
    pub(crate) fn from_parts(offsets: Vec<u32>, edges: Vec<u32>, node_ids: Vec<NodeId>) -> Self {
        let id_to_index = node_ids.iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx as u32))
            .collect();

        Self {
            node_count: node_ids.len(),
            offsets,
            edges,
            node_ids,
            id_to_index,
        }
    }

    /// Iterate over internal node indices
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        0..self.node_count as u32
    }

    /// External IDs in internal index order
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Neighbors of a node given by internal index
    pub fn neighbors(&self, node: u32) -> &[u32] {
        let start = self.offsets[node as usize] as usize;
        let end = self.offsets[node as usize + 1] as usize;
        &self.edges[start..end]
    }

    /// Undirected degree (number of distinct neighbors)
    pub fn degree(&self, node: u32) -> usize {
        let start = self.offsets[node as usize] as usize;
        let end = self.offsets[node as usize + 1] as usize;
        end - start
    }

    /// Check if the graph contains an external node ID
    pub fn contains(&self, id: NodeId) -> bool {
        self.id_to_index.contains_key(&id)
    }

    /// Internal index of an external node ID
    pub fn index_of(&self, id: NodeId) -> Option<u32> {
        self.id_to_index.get(&id).copied()
    }

    /// External node ID of an internal index
    pub fn node_id(&self, node: u32) -> Option<NodeId> {
        self.node_ids.get(node as usize).copied()
    }

    /// Check if there's an edge between two internal indices
    pub fn has_edge(&self, a: u32, b: u32) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();
        let ids = self.node_ids.capacity() * mem::size_of::<NodeId>();
        let lookup = self.id_to_index.capacity() * (mem::size_of::<NodeId>() + mem::size_of::<u32>());

        base + offsets + edges + ids + lookup
    }
}
