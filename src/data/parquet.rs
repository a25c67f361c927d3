//! Parquet edge table ingestion

use std::path::Path;
use anyhow::{anyhow, Result};
use polars::prelude::*;
use crate::data::EdgeColumns;
use crate::graph::{CompressedGraph, GraphBuilder};

/// Load an undirected graph from a Parquet table of `(source, target)` rows.
///
/// Both columns are cast to unsigned 64-bit IDs; rows with a null endpoint
/// are skipped.
pub fn load_edge_table(path: &Path, columns: &EdgeColumns) -> Result<CompressedGraph> {
    log::info!("Reading parquet file: {}", path.display());

    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let df = LazyFrame::scan_parquet(path, Default::default())?
        .select([
            col(columns.source.as_str()).cast(DataType::UInt64),
            col(columns.target.as_str()).cast(DataType::UInt64),
        ])
        .collect()?;

    log::info!("Loaded {} edge rows", df.height());

    let sources = df.column(columns.source.as_str())?.as_materialized_series().u64()?;
    let targets = df.column(columns.target.as_str())?.as_materialized_series().u64()?;

    let mut builder = GraphBuilder::new();
    let mut skipped = 0usize;

    for (src, dst) in sources.into_iter().zip(targets.into_iter()) {
        match (src, dst) {
            (Some(a), Some(b)) => builder.add_edge(a, b),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} rows with a null endpoint", skipped);
    }

    let graph = builder.build();
    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
