//! Results persistence module

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use anyhow::{Context, Result};
use itertools::Itertools;
use serde_json::{json, to_string_pretty, Value};
use statrs::statistics::Statistics;
use crate::centrality::{top_k, CentralityScores, PageRankResult};
use crate::config::Config;
use crate::graph::algorithms::graph_stats;
use crate::graph::{CompressedGraph, NodeId};

/// Everything produced by one analysis run
pub struct AnalysisResults<'a> {
    pub graph: &'a CompressedGraph,
    pub betweenness: &'a CentralityScores,
    pub pagerank: &'a PageRankResult,
    pub config: &'a Config,
}

impl AnalysisResults<'_> {
    /// Top-k node IDs by betweenness
    pub fn top_betweenness(&self) -> Vec<NodeId> {
        top_k(self.betweenness, self.config.top_k)
    }

    /// Top-k node IDs by PageRank
    pub fn top_pagerank(&self) -> Vec<NodeId> {
        top_k(&self.pagerank.scores, self.config.top_k)
    }
}

/// Save analysis results to the specified directory
pub fn save_results(results: &AnalysisResults<'_>, output_dir: &Path) -> Result<()> {
    log::info!("Saving results to {}", output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let top_betweenness = results.top_betweenness();
    let top_pagerank = results.top_pagerank();

    save_top_nodes(&top_betweenness, &output_dir.join("top_betweenness.txt"))?;
    save_top_nodes(&top_pagerank, &output_dir.join("top_pagerank.txt"))?;

    let labels = membership_labels(results.graph.node_ids(), &top_betweenness, &top_pagerank);
    save_labels(&labels, &output_dir.join("node_labels.csv"))?;

    save_scores(results, &output_dir.join("scores.csv"))?;
    save_summary(results, &top_betweenness, &top_pagerank, &output_dir.join("summary.json"))?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Top-k IDs on one space-separated line
fn save_top_nodes(nodes: &[NodeId], path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writeln!(file, "{}", nodes.iter().join(" "))?;
    Ok(())
}

/// Label each node by top-k membership: 0 neither, 1 betweenness only,
/// 2 PageRank only, 3 both.
pub fn membership_labels(
    node_ids: &[NodeId],
    top_betweenness: &[NodeId],
    top_pagerank: &[NodeId],
) -> Vec<(NodeId, u8)> {
    let in_betweenness: HashSet<NodeId> = top_betweenness.iter().copied().collect();
    let in_pagerank: HashSet<NodeId> = top_pagerank.iter().copied().collect();

    node_ids.iter()
        .map(|&id| {
            let mut label = 0u8;
            if in_betweenness.contains(&id) {
                label |= 1;
            }
            if in_pagerank.contains(&id) {
                label |= 2;
            }
            (id, label)
        })
        .collect()
}

fn save_labels(labels: &[(NodeId, u8)], path: &Path) -> Result<()> {
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );

    writeln!(file, "id,label")?;
    for (id, label) in labels {
        writeln!(file, "{},{}", id, label)?;
    }
    file.flush()?;

    Ok(())
}

fn save_scores(results: &AnalysisResults<'_>, path: &Path) -> Result<()> {
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
    );

    writeln!(file, "id,betweenness,pagerank")?;
    for ((id, betweenness), pagerank) in results.betweenness.iter()
        .zip(results.pagerank.scores.values())
    {
        writeln!(file, "{},{:.10},{:.10}", id, betweenness, pagerank)?;
    }
    file.flush()?;

    Ok(())
}

/// Mean, spread and range of a score vector
fn score_stats(values: &[f64]) -> Value {
    json!({
        "mean": Statistics::mean(values),
        "std_dev": Statistics::std_dev(values),
        "min": Statistics::min(values),
        "max": Statistics::max(values),
        "sum": values.iter().sum::<f64>(),
    })
}

fn save_summary(
    results: &AnalysisResults<'_>,
    top_betweenness: &[NodeId],
    top_pagerank: &[NodeId],
    path: &Path,
) -> Result<()> {
    log::info!("Saving summary information");

    let summary = json!({
        "graph_stats": graph_stats(results.graph),
        "config": results.config,
        "betweenness": {
            "stats": score_stats(results.betweenness.values()),
            "top": top_betweenness,
        },
        "pagerank": {
            "method": results.pagerank.method,
            "iterations": results.pagerank.iterations,
            "converged": results.pagerank.converged,
            "residual": results.pagerank.residual,
            "stats": score_stats(results.pagerank.scores.values()),
            "top": top_pagerank,
        },
    });

    let mut file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::centrality::{compute_betweenness, compute_pagerank};
    use crate::graph::GraphBuilder;

    #[test]
    fn labels_encode_membership() {
        let labels = membership_labels(&[1, 2, 3, 4], &[1, 3], &[3, 4]);
        assert_eq!(labels, vec![(1, 1), (2, 0), (3, 3), (4, 2)]);
    }

    #[test]
    fn writes_all_report_files() {
        let graph = GraphBuilder::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)]);
        let betweenness = compute_betweenness(&graph).expect("betweenness");
        let pagerank = compute_pagerank(&graph).expect("pagerank");
        let config = Config { top_k: 2, ..Default::default() };
        let results = AnalysisResults {
            graph: &graph,
            betweenness: &betweenness,
            pagerank: &pagerank,
            config: &config,
        };

        let dir = tempfile::tempdir().expect("tempdir");
        save_results(&results, dir.path()).expect("save");

        let top = fs::read_to_string(dir.path().join("top_betweenness.txt")).expect("top file");
        let ids: Vec<&str> = top.split_whitespace().collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0], "0");

        let labels = fs::read_to_string(dir.path().join("node_labels.csv")).expect("labels");
        let mut lines = labels.lines();
        assert_eq!(lines.next(), Some("id,label"));
        assert_eq!(lines.count(), graph.node_count());

        let summary: Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("summary.json")).expect("summary"),
        )
        .expect("valid json");
        assert_eq!(summary["graph_stats"]["node_count"], 5);
        assert_eq!(summary["pagerank"]["converged"], true);
        assert_eq!(summary["config"]["top_k"], 2);
    }
}
