//! Plain-text edge list parsing

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use anyhow::{anyhow, Context, Result};
use crate::graph::{CompressedGraph, GraphBuilder, NodeId};

/// Read an edge list file into an undirected graph
pub fn load_edge_list(path: &Path) -> Result<CompressedGraph> {
    log::info!("Reading edge list: {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("failed to open edge list {}", path.display()))?;
    let graph = parse_edge_list(BufReader::new(file))
        .with_context(|| format!("failed to parse edge list {}", path.display()))?;

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse `node node` lines. Blank lines and `#` comments are skipped.
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<CompressedGraph> {
    let mut builder = GraphBuilder::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (a, b) = parse_line(trimmed)
            .with_context(|| format!("line {}: {:?}", line_no + 1, trimmed))?;
        builder.add_edge(a, b);
    }

    Ok(builder.build())
}

fn parse_line(line: &str) -> Result<(NodeId, NodeId)> {
    let mut fields = line.split_whitespace();

    let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(anyhow!("expected exactly two node IDs"));
    };

    Ok((a.parse()?, b.parse()?))
}
