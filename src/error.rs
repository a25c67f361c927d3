//! Error types for centrality computations

use crate::graph::NodeId;

/// Failures of the centrality core. All of them are precondition violations
/// over fixed input; none are transient.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CentralityError {
    /// A node ID that is not present in the graph.
    #[error("node {0} is not in the graph")]
    UnknownNode(NodeId),

    /// An internal node index outside the graph.
    #[error("node index {0} is out of range")]
    UnknownIndex(u32),

    /// An isolated node has no outgoing probability mass for PageRank.
    #[error("node {0} has degree 0; PageRank requires every node to have a neighbor")]
    ZeroDegreeNode(NodeId),

    /// Power iteration hit its iteration cap before meeting the tolerance.
    #[error("PageRank did not converge after {iterations} iterations (residual {residual:e})")]
    NonConvergence { iterations: usize, residual: f64 },

    /// The direct PageRank system could not be solved.
    #[error("PageRank linear system is singular")]
    SingularSystem,

    /// Out-of-range solver parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CentralityError>;
