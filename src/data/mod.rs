//! Graph ingestion from edge lists and Parquet edge tables

pub mod edge_list;
pub mod parquet;

use std::path::Path;
use anyhow::Result;
use crate::graph::CompressedGraph;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Whitespace-separated `node node` pairs, one edge per line
    #[default]
    EdgeList,

    /// Parquet table with two integer columns
    Parquet,
}

impl InputFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("parquet") => Self::Parquet,
            _ => Self::EdgeList,
        }
    }
}

/// Column names used when reading Parquet input
#[derive(Debug, Clone)]
pub struct EdgeColumns {
    pub source: String,
    pub target: String,
}

impl Default for EdgeColumns {
    fn default() -> Self {
        Self {
            source: "source".to_string(),
            target: "target".to_string(),
        }
    }
}

/// Load an undirected graph in the given format
pub fn load_graph(path: &Path, format: InputFormat, columns: &EdgeColumns) -> Result<CompressedGraph> {
    match format {
        InputFormat::EdgeList => edge_list::load_edge_list(path),
        InputFormat::Parquet => parquet::load_edge_table(path, columns),
    }
}
