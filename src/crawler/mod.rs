//! Crawler module - the concurrent crawl engine
//!
//! This module contains the core crawling logic:
//! - A coordinator task owning the visited set and the edge list
//! - A pool of stateless fetch workers pulling from a shared work queue
//! - Pluggable link extraction behind the [`LinkExtractor`] trait
//! - Idle-timeout quiescence detection with a drain barrier at shutdown

mod coordinator;
mod extract;
mod worker;

pub use coordinator::{Coordinator, CoordinatorHandle};
pub use extract::{build_http_client, extract_links, HttpExtractor, LinkExtractor, LinkFuture};
pub use worker::run_worker;

use crate::config::CrawlConfig;
use crate::graph::Edge;
use crate::Result;
use std::sync::Arc;

/// Runs a complete crawl of the configured site.
///
/// Blocks until the crawl terminates via the idle timeout, then returns the
/// accumulated edge list exactly once. Fetch failures never fail the crawl;
/// a failed page simply contributes no edges.
pub async fn crawl(config: &CrawlConfig) -> Result<Vec<Edge>> {
    let extractor: Arc<dyn LinkExtractor> = Arc::new(HttpExtractor::new(&config.user_agent)?);
    crawl_with(config, extractor).await
}

/// Runs a crawl with a caller-supplied link extractor.
///
/// Spawns the coordinator and `config.workers` workers, then waits for the
/// result. Exposed separately so tests (and alternative parsers) can swap
/// the fetch+extract capability without touching the engine.
pub async fn crawl_with(config: &CrawlConfig, extractor: Arc<dyn LinkExtractor>) -> Result<Vec<Edge>> {
    config.validate()?;

    let handle = Coordinator::spawn(
        config.base_url.clone(),
        config.idle_timeout,
        config.queue_capacity,
    );

    for id in 0..config.workers {
        tokio::spawn(run_worker(
            id,
            Arc::clone(&handle.work),
            handle.edges.clone(),
            Arc::clone(&extractor),
        ));
    }

    handle.wait().await
}
