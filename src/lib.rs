//! Betweenness and PageRank centrality for undirected social graphs

pub mod config;
pub mod error;
pub mod graph;
pub mod centrality;
pub mod data;
pub mod storage;

pub use centrality::{
    compute_betweenness, compute_betweenness_with, compute_pagerank, compute_pagerank_with,
    top_k, top_k_by, CentralityScores, PageRankResult,
};
pub use config::Config;
pub use error::CentralityError;
pub use graph::{CompressedGraph, GraphBuilder, NodeId};
