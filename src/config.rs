//! Configuration management for the centrality analyzer

use serde::{Serialize, Deserialize};
use crate::error::{CentralityError, Result};

/// How the summed betweenness dependencies are normalized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Normalization {
    /// Sum over every source; each undirected pair contributes from both ends
    Raw,

    /// Raw sum halved, so each unordered pair contributes once
    #[default]
    Undirected,

    /// Undirected value divided by the (n-1)(n-2)/2 pairs excluding the node
    Scaled,
}

/// PageRank formulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PageRankMethod {
    /// Power iteration with L1 renormalization
    #[default]
    Iterative,

    /// Dense linear solve, O(n^3)
    Direct,
}

/// Betweenness settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetweennessConfig {
    /// Normalization applied after all sources are summed
    pub normalization: Normalization,

    /// Minimum node count before sources are processed on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for BetweennessConfig {
    fn default() -> Self {
        Self {
            normalization: Normalization::Undirected,
            parallel_threshold: 1000,
        }
    }
}

/// PageRank settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Damping factor: probability of following an edge rather than teleporting
    pub alpha: f64,

    /// Stop once the L1 change between iterates drops below this
    pub tolerance: f64,

    /// Hard iteration ceiling
    pub max_iterations: usize,

    /// Solver formulation
    pub method: PageRankMethod,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            alpha: 0.85,
            tolerance: 1e-4,
            max_iterations: 1000,
            method: PageRankMethod::Iterative,
        }
    }
}

impl PageRankConfig {
    /// Teleport probability
    pub fn beta(&self) -> f64 {
        1.0 - self.alpha
    }

    /// Reject parameters the solver cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(CentralityError::InvalidConfig(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        if !(self.tolerance > 0.0) {
            return Err(CentralityError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(CentralityError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default configuration for the centrality analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Betweenness settings
    pub betweenness: BetweennessConfig,

    /// PageRank settings
    pub pagerank: PageRankConfig,

    /// Number of top nodes reported per measure
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            betweenness: BetweennessConfig::default(),
            pagerank: PageRankConfig::default(),
            top_k: 10,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(betweenness: BetweennessConfig, pagerank: PageRankConfig, top_k: usize) -> Self {
        Self {
            betweenness,
            pagerank,
            top_k,
        }
    }
}
