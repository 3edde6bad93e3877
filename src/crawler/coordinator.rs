//! Crawl coordinator - single owner of all shared crawl state
//!
//! The coordinator is the only task that reads or writes the visited set and
//! the accumulated edge list; mutual exclusion comes from confining mutation
//! to one sequential consumer, not from locks. Workers talk to it through
//! exactly two channels:
//!
//! - the bounded work queue, carrying fully-qualified URLs to fetch
//! - the edge channel, carrying every (source, dest) link a worker finds
//!
//! Completion is inferred heuristically: when no edge has arrived for a full
//! idle window, the coordinator assumes the crawl is quiescent, closes the
//! work queue, drains trailing edge reports from workers still mid-fetch,
//! and resolves the result. The drain means no reported edge is ever lost,
//! but a single fetch slower than the idle window still truncates the graph.

use crate::graph::Edge;
use crate::{Result, SiteGraphError};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, Mutex};
use tokio::time;

/// Root page identifier pre-seeded into the visited set
const ROOT_PAGE: &str = "/";

/// Edge-report channel capacity; near-synchronous hand-off is fine since the
/// coordinator consumes edges in a tight loop
const EDGE_CHANNEL_CAPACITY: usize = 64;

/// How many newly discovered pages between progress log lines
const PROGRESS_INTERVAL: usize = 50;

/// Channel ends connecting a running coordinator to its worker pool
pub struct CoordinatorHandle {
    /// Work queue the workers pull URLs from
    pub work: Arc<Mutex<mpsc::Receiver<String>>>,

    /// Edge-report channel the workers send discoveries into
    pub edges: mpsc::Sender<Edge>,

    /// Resolves with the full edge list once the crawl terminates
    pub result: oneshot::Receiver<Vec<Edge>>,
}

impl CoordinatorHandle {
    /// Releases this handle's channel ends and waits for the crawl to finish.
    ///
    /// The handle's own edge sender must be dropped here: the coordinator
    /// does not resolve the result until every edge sender is gone.
    pub async fn wait(self) -> Result<Vec<Edge>> {
        let CoordinatorHandle {
            work,
            edges,
            result,
        } = self;
        drop(edges);
        drop(work);
        result.await.map_err(|_| SiteGraphError::CrawlAborted)
    }
}

/// State owned by the coordinator task for the lifetime of one crawl run
pub struct Coordinator {
    base_url: String,
    idle_timeout: Duration,
    visited: HashSet<String>,
    edges: Vec<Edge>,
}

impl Coordinator {
    /// Spawns the coordinator task for a crawl rooted at `base_url`.
    ///
    /// Seeds the visited set with `"/"` and the work queue with the base
    /// URL, then returns the handle workers (and the caller) attach to.
    /// `base_url` must not end in a slash; work items are formed by plain
    /// concatenation with discovered path fragments.
    pub fn spawn(
        base_url: String,
        idle_timeout: Duration,
        queue_capacity: usize,
    ) -> CoordinatorHandle {
        let (work_tx, work_rx) = mpsc::channel(queue_capacity);
        let (edge_tx, edge_rx) = mpsc::channel(EDGE_CHANNEL_CAPACITY);
        let (result_tx, result_rx) = oneshot::channel();

        let coordinator = Coordinator {
            base_url,
            idle_timeout,
            visited: HashSet::from([ROOT_PAGE.to_string()]),
            edges: Vec::new(),
        };

        tokio::spawn(async move {
            let edges = coordinator.run(work_tx, edge_rx).await;
            // The receiver is only gone if the caller stopped waiting.
            let _ = result_tx.send(edges);
        });

        CoordinatorHandle {
            work: Arc::new(Mutex::new(work_rx)),
            edges: edge_tx,
            result: result_rx,
        }
    }

    async fn run(mut self, work_tx: mpsc::Sender<String>, mut edge_rx: mpsc::Receiver<Edge>) -> Vec<Edge> {
        tracing::info!("Mapping {}", self.base_url);

        // Queue capacity is validated to be at least 1, so the seed send
        // completes before any worker attaches.
        if work_tx
            .send(format!("{}{}", self.base_url, ROOT_PAGE))
            .await
            .is_err()
        {
            return self.edges;
        }

        loop {
            match time::timeout(self.idle_timeout, edge_rx.recv()).await {
                Ok(Some(edge)) => self.consume(edge, &work_tx).await,
                // All edge senders dropped: every worker has already exited.
                Ok(None) => break,
                // Idle window elapsed with no report: the crawl is quiescent.
                Err(_) => break,
            }
        }

        // Close the queue so idle workers exit, then drain trailing reports
        // from workers still mid-fetch. Their edges are recorded, but the
        // pages they point at are no longer enqueued.
        drop(work_tx);
        while let Some(edge) = edge_rx.recv().await {
            self.record(edge);
        }

        tracing::info!(
            "Crawl complete: {} edges across {} pages",
            self.edges.len(),
            self.visited.len()
        );

        self.edges
    }

    /// Consumes one edge report: records it and, if the destination has not
    /// been seen before, marks it visited and enqueues it as work.
    ///
    /// The visited-set check here is the crawl's sole deduplication
    /// mechanism; it is what keeps cyclic link graphs from recursing
    /// forever.
    async fn consume(&mut self, edge: Edge, work_tx: &mpsc::Sender<String>) {
        let dest = edge.dest.clone();
        self.record(edge);

        if self.visited.insert(dest.clone()) {
            tracing::debug!("Discovered {}", dest);
            if self.visited.len() % PROGRESS_INTERVAL == 0 {
                tracing::info!("{} pages discovered", self.visited.len());
            }

            // Blocks only when the queue is full; capacity must stay well
            // above the reachable page count (see CrawlConfig).
            if work_tx
                .send(format!("{}{}", self.base_url, dest))
                .await
                .is_err()
            {
                tracing::debug!("Work queue closed, not enqueueing {}", dest);
            }
        }
    }

    /// Appends an edge to the result list with its source rewritten relative
    /// to the base URL.
    fn record(&mut self, edge: Edge) {
        self.edges.push(edge.relative_to(&self.base_url));
    }
}
