//! PageRank centrality over an undirected graph.
//!
//! Transition matrix `P = A^T D^-1`: a walker at `v` moves to each neighbor
//! with probability `1 / deg(v)`. With damping `alpha` and teleport
//! `beta = 1 - alpha` the stationary vector solves
//!
//! ```text
//! x = alpha * P x + beta / n * 1
//! ```
//!
//! Two solvers are provided. Power iteration computes each iterate into a new
//! vector, renormalizes it by its L1 norm and stops once the L1 change drops
//! below the tolerance or the iteration cap is hit. The direct solver builds
//! `(I - alpha * P)` densely and solves `(I - alpha * P) x = beta * 1` by
//! Gaussian elimination; its solution is scaled to sum to 1, which makes the
//! two agree.

use ndarray::{Array1, Array2};
use serde::Serialize;
use crate::centrality::CentralityScores;
use crate::config::{PageRankConfig, PageRankMethod};
use crate::error::{CentralityError, Result};
use crate::graph::CompressedGraph;

/// Pivots smaller than this are treated as zero by the direct solver
const SINGULAR_EPSILON: f64 = 1e-12;

/// Outcome of a PageRank run
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Per-node scores, summing to 1
    pub scores: CentralityScores,

    /// Iterations performed (1 for the direct solver)
    pub iterations: usize,

    /// Whether the tolerance was met before the iteration cap
    pub converged: bool,

    /// Final L1 change between iterates, or the L1 residual of the solve
    pub residual: f64,

    /// Formulation used
    pub method: PageRankMethod,
}

impl PageRankResult {
    /// Turn a non-converged result into [`CentralityError::NonConvergence`]
    pub fn require_converged(self) -> Result<Self> {
        if self.converged {
            Ok(self)
        } else {
            Err(CentralityError::NonConvergence {
                iterations: self.iterations,
                residual: self.residual,
            })
        }
    }
}

/// PageRank with the default configuration
pub fn compute_pagerank(graph: &CompressedGraph) -> Result<PageRankResult> {
    compute_pagerank_with(graph, &PageRankConfig::default())
}

/// PageRank with explicit damping, tolerance, iteration cap and method
pub fn compute_pagerank_with(
    graph: &CompressedGraph,
    config: &PageRankConfig,
) -> Result<PageRankResult> {
    config.validate()?;

    let n = graph.node_count();
    if n == 0 {
        return Ok(PageRankResult {
            scores: CentralityScores::new(graph, Vec::new()),
            iterations: 0,
            converged: true,
            residual: 0.0,
            method: config.method,
        });
    }

    let inv_degree = inverse_degrees(graph)?;

    log::info!(
        "Computing PageRank over {} nodes ({:?}, alpha = {})",
        n,
        config.method,
        config.alpha
    );

    let result = match config.method {
        PageRankMethod::Iterative => power_iteration(graph, &inv_degree, config),
        PageRankMethod::Direct => direct_solve(graph, &inv_degree, config)?,
    };

    if result.converged {
        log::info!(
            "PageRank finished after {} iterations (residual {:e})",
            result.iterations,
            result.residual
        );
    } else {
        log::warn!(
            "PageRank hit the {} iteration cap with residual {:e}",
            result.iterations,
            result.residual
        );
    }

    Ok(result)
}

/// `1 / deg(v)` per node; isolated nodes have no outgoing mass
fn inverse_degrees(graph: &CompressedGraph) -> Result<Vec<f64>> {
    graph.nodes()
        .map(|node| -> Result<f64> {
            match graph.degree(node) {
                0 => Err(CentralityError::ZeroDegreeNode(
                    graph.node_id(node).ok_or(CentralityError::UnknownIndex(node))?,
                )),
                degree => Ok(1.0 / degree as f64),
            }
        })
        .collect()
}

fn power_iteration(
    graph: &CompressedGraph,
    inv_degree: &[f64],
    config: &PageRankConfig,
) -> PageRankResult {
    let n = graph.node_count();
    let teleport = config.beta() / n as f64;

    let mut ranks = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    let mut residual = f64::INFINITY;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        // Each row reads only the previous iterate
        let mut next: Vec<f64> = graph.nodes()
            .map(|w| {
                let inflow: f64 = graph.neighbors(w)
                    .iter()
                    .map(|&v| ranks[v as usize] * inv_degree[v as usize])
                    .sum();
                config.alpha * inflow + teleport
            })
            .collect();

        l1_normalize(&mut next);

        residual = ranks.iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        ranks = next;

        log::debug!("PageRank iteration {}: residual {:e}", iterations, residual);

        if residual < config.tolerance {
            converged = true;
            break;
        }
    }

    PageRankResult {
        scores: CentralityScores::new(graph, ranks),
        iterations,
        converged,
        residual,
        method: PageRankMethod::Iterative,
    }
}

fn direct_solve(
    graph: &CompressedGraph,
    inv_degree: &[f64],
    config: &PageRankConfig,
) -> Result<PageRankResult> {
    let n = graph.node_count();
    if n > 5000 {
        log::warn!("Direct PageRank on {} nodes builds a dense {}x{} system", n, n, n);
    }

    // I - alpha * A^T * D^-1
    let mut system = Array2::<f64>::eye(n);
    for v in graph.nodes() {
        let weight = config.alpha * inv_degree[v as usize];
        for &w in graph.neighbors(v) {
            system[[w as usize, v as usize]] -= weight;
        }
    }
    let rhs = Array1::<f64>::from_elem(n, config.beta());

    let solution = gaussian_elimination(system.clone(), rhs.clone())?;
    let residual = (system.dot(&solution) - &rhs).mapv(f64::abs).sum();

    let mut ranks = solution.to_vec();
    l1_normalize(&mut ranks);

    Ok(PageRankResult {
        scores: CentralityScores::new(graph, ranks),
        iterations: 1,
        converged: true,
        residual,
        method: PageRankMethod::Direct,
    })
}

/// Solve `a x = b` with partial pivoting
fn gaussian_elimination(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[[i, col]].abs().total_cmp(&a[[j, col]].abs()))
            .ok_or(CentralityError::SingularSystem)?;

        if a[[pivot, col]].abs() < SINGULAR_EPSILON {
            return Err(CentralityError::SingularSystem);
        }

        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        let diagonal = a[[col, col]];
        for row in (col + 1)..n {
            let factor = a[[row, col]] / diagonal;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                let upper = a[[col, k]];
                a[[row, k]] -= factor * upper;
            }
            let upper = b[col];
            b[row] -= factor * upper;
        }
    }

    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let tail: f64 = ((row + 1)..n).map(|k| a[[row, k]] * x[k]).sum();
        x[row] = (b[row] - tail) / a[[row, row]];
    }

    Ok(x)
}

fn l1_normalize(values: &mut [f64]) {
    let norm: f64 = values.iter().map(|v| v.abs()).sum();
    if norm > 0.0 {
        for value in values.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::test_graphs::{assert_close, cycle, path, star};
    use crate::graph::GraphBuilder;

    fn direct() -> PageRankConfig {
        PageRankConfig { method: PageRankMethod::Direct, ..Default::default() }
    }

    #[test]
    fn sums_to_one_without_negatives() {
        let graph = GraphBuilder::from_edges([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);

        for config in [PageRankConfig::default(), direct()] {
            let result = compute_pagerank_with(&graph, &config).expect("pagerank");
            assert!(result.converged);
            assert_close(result.scores.total(), 1.0, 1e-9);
            assert!(result.scores.values().iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn regular_graph_is_uniform() {
        let result = compute_pagerank(&cycle(5)).expect("pagerank");

        assert!(result.converged);
        for &value in result.scores.values() {
            assert_close(value, 0.2, 1e-9);
        }
    }

    #[test]
    fn direct_and_iterative_agree() {
        let graph = GraphBuilder::from_edges([(0, 1), (0, 2), (0, 3), (1, 2), (3, 4), (4, 5)]);
        let iterative = compute_pagerank_with(
            &graph,
            &PageRankConfig { tolerance: 1e-12, ..Default::default() },
        )
        .expect("iterative");
        let exact = compute_pagerank_with(&graph, &direct()).expect("direct");

        assert!(exact.residual < 1e-9);
        for (a, b) in iterative.scores.values().iter().zip(exact.scores.values()) {
            assert_close(*a, *b, 1e-9);
        }
    }

    #[test]
    fn star_centre_ranks_first() {
        let result = compute_pagerank(&star(5)).expect("pagerank");
        let centre = result.scores.get(0).unwrap();

        for leaf in 1..=5 {
            assert!(centre > result.scores.get(leaf).unwrap());
        }
    }

    #[test]
    fn path_endpoints_match_by_symmetry() {
        let result = compute_pagerank_with(&path(4), &direct()).expect("pagerank");
        assert_close(result.scores.get(0).unwrap(), result.scores.get(3).unwrap(), 1e-12);
        assert_close(result.scores.get(1).unwrap(), result.scores.get(2).unwrap(), 1e-12);
    }

    #[test]
    fn isolated_node_is_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_edge(0, 1);
        builder.add_node(9);
        let graph = builder.build();

        for config in [PageRankConfig::default(), direct()] {
            assert_eq!(
                compute_pagerank_with(&graph, &config).unwrap_err(),
                CentralityError::ZeroDegreeNode(9)
            );
        }
    }

    #[test]
    fn iteration_cap_reports_best_iterate() {
        let config = PageRankConfig { max_iterations: 1, tolerance: 1e-15, ..Default::default() };
        let result = compute_pagerank_with(&star(4), &config).expect("pagerank");

        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert_close(result.scores.total(), 1.0, 1e-12);
        assert!(matches!(
            result.require_converged(),
            Err(CentralityError::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn empty_graph_yields_empty_scores() {
        let graph = GraphBuilder::new().build();
        let result = compute_pagerank(&graph).expect("pagerank");

        assert!(result.scores.is_empty());
        assert!(result.converged);
    }

    #[test]
    fn elimination_solves_small_system() {
        // 2x + y = 5, x + 3y = 10
        let a = ndarray::arr2(&[[2.0, 1.0], [1.0, 3.0]]);
        let b = ndarray::arr1(&[5.0, 10.0]);
        let x = gaussian_elimination(a, b).expect("solvable");

        assert_close(x[0], 1.0, 1e-12);
        assert_close(x[1], 3.0, 1e-12);
    }

    #[test]
    fn elimination_detects_singular_matrix() {
        let a = ndarray::arr2(&[[1.0, 2.0], [2.0, 4.0]]);
        let b = ndarray::arr1(&[1.0, 2.0]);
        assert_eq!(gaussian_elimination(a, b).unwrap_err(), CentralityError::SingularSystem);
    }
}
