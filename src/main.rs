use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;

use social_centrality::config::{
    BetweennessConfig, Config, Normalization, PageRankConfig, PageRankMethod,
};
use social_centrality::data::{self, EdgeColumns, InputFormat};
use social_centrality::graph::algorithms::graph_stats;
use social_centrality::storage::{self, AnalysisResults};
use social_centrality::{compute_betweenness_with, compute_pagerank_with};

#[derive(Parser, Debug)]
#[clap(
    name = "social-centrality",
    about = "Betweenness and PageRank centrality for undirected social graphs"
)]
struct Cli {
    /// Path to the input graph (edge list or Parquet)
    #[clap(long)]
    input: PathBuf,

    /// Input format; guessed from the file extension when omitted
    #[clap(long, value_enum)]
    format: Option<InputFormat>,

    /// Source column for Parquet input
    #[clap(long, default_value = "source")]
    source_column: String,

    /// Target column for Parquet input
    #[clap(long, default_value = "target")]
    target_column: String,

    /// Output directory for results
    #[clap(long, default_value = "centrality_results")]
    output_dir: PathBuf,

    /// Number of top nodes reported per measure
    #[clap(long, default_value = "10")]
    top_k: usize,

    /// PageRank damping factor
    #[clap(long, default_value = "0.85")]
    alpha: f64,

    /// PageRank convergence tolerance (L1 change between iterates)
    #[clap(long, default_value = "1e-4")]
    tolerance: f64,

    /// PageRank iteration cap
    #[clap(long, default_value = "1000")]
    max_iterations: usize,

    /// PageRank formulation
    #[clap(long, value_enum, default_value = "iterative")]
    pagerank_method: PageRankMethod,

    /// Betweenness normalization
    #[clap(long, value_enum, default_value = "undirected")]
    normalization: Normalization,

    /// Fail instead of reporting a non-converged PageRank vector
    #[clap(long)]
    require_convergence: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new(
            BetweennessConfig {
                normalization: self.normalization,
                ..Default::default()
            },
            PageRankConfig {
                alpha: self.alpha,
                tolerance: self.tolerance,
                max_iterations: self.max_iterations,
                method: self.pagerank_method,
            },
            self.top_k,
        )
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = args.config();
    log::info!("Starting centrality analysis");
    log::info!("Input: {}", args.input.display());
    log::info!("Output: {}", args.output_dir.display());

    // 1. Load graph
    let format = args.format.unwrap_or_else(|| InputFormat::from_path(&args.input));
    let columns = EdgeColumns {
        source: args.source_column.clone(),
        target: args.target_column.clone(),
    };
    let graph = data::load_graph(&args.input, format, &columns)?;

    log::debug!("Graph occupies roughly {} bytes", graph.memory_usage());

    let stats = graph_stats(&graph);
    if stats.connected_components > 1 {
        log::info!(
            "Graph has {} connected components; pairs across components contribute nothing",
            stats.connected_components
        );
    }

    // 2. Betweenness
    let betweenness = compute_betweenness_with(&graph, &config.betweenness)
        .context("betweenness centrality failed")?;

    // 3. PageRank
    let mut pagerank = compute_pagerank_with(&graph, &config.pagerank)
        .context("PageRank centrality failed")?;
    if args.require_convergence {
        pagerank = pagerank.require_converged()?;
    }

    // 4. Report
    let results = AnalysisResults {
        graph: &graph,
        betweenness: &betweenness,
        pagerank: &pagerank,
        config: &config,
    };

    println!("betweenness: {}", results.top_betweenness().iter().join(" "));
    println!("pagerank: {}", results.top_pagerank().iter().join(" "));

    storage::save_results(&results, &args.output_dir)?;

    log::info!("Analysis complete. Results saved to {}", args.output_dir.display());

    Ok(())
}
