//! Sitegraph: a concurrent site link mapper
//!
//! This crate crawls a website starting from a base URL, records every
//! (source page, linked page) relationship it discovers as a directed edge,
//! and renders the resulting graph as a Graphviz DOT (or JSON) file.
//!
//! The crawl engine is a single coordinator task that owns all shared state
//! plus a pool of stateless fetch workers, wired together with channels.
//! See [`crawler`] for the engine, [`output`] for serialization.

pub mod config;
pub mod crawler;
pub mod graph;
pub mod output;

use thiserror::Error;

/// Main error type for sitegraph operations
#[derive(Debug, Error)]
pub enum SiteGraphError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Crawl terminated without producing a result")]
    CrawlAborted,

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors a single fetch/extract attempt can fail with
///
/// These never abort a crawl: the worker that hits one logs a warning,
/// contributes no edges for that page, and moves on to the next work item.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Result type alias for sitegraph operations
pub type Result<T> = std::result::Result<T, SiteGraphError>;

// Re-export commonly used types
pub use config::CrawlConfig;
pub use graph::Edge;
