//! Descending-score selection shared by both measures

use itertools::Itertools;
use crate::centrality::CentralityScores;
use crate::graph::NodeId;

/// The `k` highest-scoring node IDs, best first.
///
/// Ties keep node order. `k = 0` gives an empty list and `k >= len` gives
/// every node.
pub fn top_k(scores: &CentralityScores, k: usize) -> Vec<NodeId> {
    top_k_by(scores.iter(), k)
}

/// Generic selection over `(key, score)` pairs.
///
/// The sort is stable, so equal scores keep their input order; NaN is
/// ordered by [`f64::total_cmp`].
pub fn top_k_by<N, I>(entries: I, k: usize) -> Vec<N>
where
    I: IntoIterator<Item = (N, f64)>,
{
    if k == 0 {
        return Vec::new();
    }

    entries.into_iter()
        .sorted_by(|a, b| b.1.total_cmp(&a.1))
        .take(k)
        .map(|(node, _)| node)
        .collect()
}
