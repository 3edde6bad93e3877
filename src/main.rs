//! Sitegraph main entry point
//!
//! Command-line interface for the sitegraph site link mapper: crawl the
//! site at the given base URL and write its internal link graph to a file.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sitegraph::config::{CrawlConfig, DEFAULT_WORKERS};
use sitegraph::crawler::crawl;
use sitegraph::output::{self, CrawlStats, OutputFormat};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Sitegraph: map a website's internal link structure
#[derive(Parser, Debug)]
#[command(name = "sitegraph")]
#[command(version)]
#[command(about = "Maps a website's internal link graph to a Graphviz DOT file", long_about = None)]
struct Cli {
    /// Base URL of the site to map (e.g. https://example.com)
    #[arg(value_name = "URL")]
    url: String,

    /// Path of the graph file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Number of concurrent fetch workers
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Seconds without a new discovery before the crawl is considered done.
    /// A page that takes longer than this to fetch truncates the map.
    #[arg(long, default_value_t = 5)]
    idle_timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Dot)]
    format: Format,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Dot,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Dot => OutputFormat::Dot,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = CrawlConfig::new(&cli.url)
        .with_context(|| format!("invalid base URL '{}'", cli.url))?
        .with_workers(cli.workers)
        .with_idle_timeout(Duration::from_secs(cli.idle_timeout));

    // A crawl never fails once started; fetch errors degrade to missing
    // edges, so even an unreachable site yields a valid (empty) graph.
    let edges = crawl(&config).await.context("crawl failed")?;

    println!("{}", CrawlStats::from_edges(&edges));

    output::write_output(&edges, &cli.output, cli.format.into())
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitegraph=info,warn"),
            1 => EnvFilter::new("sitegraph=debug,info"),
            2 => EnvFilter::new("sitegraph=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
