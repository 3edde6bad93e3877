//! Fetch worker - the transformation stage between URLs and edges
//!
//! Workers are stateless across iterations: each pulls one URL from the
//! shared work queue, asks the link extractor for that page's outgoing
//! links, and reports one edge per link to the coordinator. A failed fetch
//! is logged and contributes nothing; it never aborts the crawl, and is
//! indistinguishable from a page with no links.

use crate::crawler::LinkExtractor;
use crate::graph::Edge;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

/// Runs one worker until the work queue is closed and fully drained.
pub async fn run_worker(
    id: usize,
    work: Arc<Mutex<mpsc::Receiver<String>>>,
    edges: mpsc::Sender<Edge>,
    extractor: Arc<dyn LinkExtractor>,
) {
    tracing::debug!("Worker {} started", id);

    loop {
        // The lock is held across recv and released once an item has been
        // claimed, so exactly one worker takes each URL.
        let url = work.lock().await.recv().await;
        let Some(url) = url else {
            break;
        };

        match extractor.links(&url).await {
            Ok(links) => {
                for dest in links {
                    // The coordinator drains this channel until every worker
                    // has exited, so a closed channel means the caller gave
                    // up on the whole run.
                    if edges.send(Edge::new(url.clone(), dest)).await.is_err() {
                        tracing::debug!("Worker {} stopping, edge channel closed", id);
                        return;
                    }
                }
            }
            Err(e) => tracing::warn!("Failed to get links from {}: {}", url, e),
        }
    }

    tracing::debug!("Worker {} finished", id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::LinkFuture;
    use crate::FetchError;

    struct FixedLinks(Vec<String>);

    impl LinkExtractor for FixedLinks {
        fn links<'a>(&'a self, _url: &'a str) -> LinkFuture<'a> {
            let links = self.0.clone();
            Box::pin(async move { Ok(links) })
        }
    }

    struct AlwaysFails;

    impl LinkExtractor for AlwaysFails {
        fn links<'a>(&'a self, url: &'a str) -> LinkFuture<'a> {
            Box::pin(async move {
                Err(FetchError::Status {
                    url: url.to_string(),
                    status: 500,
                })
            })
        }
    }

    #[tokio::test]
    async fn test_worker_emits_one_edge_per_link() {
        let (work_tx, work_rx) = mpsc::channel(4);
        let (edge_tx, mut edge_rx) = mpsc::channel(4);

        work_tx.send("https://site.test/".to_string()).await.unwrap();
        drop(work_tx);

        let extractor = Arc::new(FixedLinks(vec!["/a".to_string(), "/b".to_string()]));
        run_worker(0, Arc::new(Mutex::new(work_rx)), edge_tx, extractor).await;

        assert_eq!(
            edge_rx.recv().await,
            Some(Edge::new("https://site.test/", "/a"))
        );
        assert_eq!(
            edge_rx.recv().await,
            Some(Edge::new("https://site.test/", "/b"))
        );
        assert_eq!(edge_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_worker_failure_yields_no_edges() {
        let (work_tx, work_rx) = mpsc::channel(4);
        let (edge_tx, mut edge_rx) = mpsc::channel(4);

        work_tx
            .send("https://site.test/broken".to_string())
            .await
            .unwrap();
        drop(work_tx);

        run_worker(0, Arc::new(Mutex::new(work_rx)), edge_tx, Arc::new(AlwaysFails)).await;

        assert_eq!(edge_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_workers_share_one_queue() {
        let (work_tx, work_rx) = mpsc::channel(4);
        let (edge_tx, mut edge_rx) = mpsc::channel(8);
        let work = Arc::new(Mutex::new(work_rx));

        work_tx.send("https://site.test/x".to_string()).await.unwrap();
        work_tx.send("https://site.test/y".to_string()).await.unwrap();
        drop(work_tx);

        let extractor: Arc<dyn LinkExtractor> = Arc::new(FixedLinks(vec!["/z".to_string()]));
        let a = tokio::spawn(run_worker(
            0,
            Arc::clone(&work),
            edge_tx.clone(),
            Arc::clone(&extractor),
        ));
        let b = tokio::spawn(run_worker(1, work, edge_tx, extractor));
        a.await.unwrap();
        b.await.unwrap();

        let mut sources = Vec::new();
        while let Some(edge) = edge_rx.recv().await {
            sources.push(edge.source);
        }
        sources.sort();
        assert_eq!(sources, vec!["https://site.test/x", "https://site.test/y"]);
    }
}
