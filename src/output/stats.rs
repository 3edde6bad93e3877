//! Aggregate statistics for a finished crawl

use crate::graph::Edge;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Aggregate numbers computed from the final edge list
#[derive(Debug, Clone, Serialize)]
pub struct CrawlStats {
    pub edge_count: usize,
    pub unique_sources: usize,
    pub unique_destinations: usize,
}

impl CrawlStats {
    pub fn from_edges(edges: &[Edge]) -> Self {
        let sources: HashSet<&str> = edges.iter().map(|e| e.source.as_str()).collect();
        let destinations: HashSet<&str> = edges.iter().map(|e| e.dest.as_str()).collect();

        Self {
            edge_count: edges.len(),
            unique_sources: sources.len(),
            unique_destinations: destinations.len(),
        }
    }
}

impl fmt::Display for CrawlStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} edges found ({} source pages, {} link targets)",
            self.edge_count, self.unique_sources, self.unique_destinations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_for_empty_crawl() {
        let stats = CrawlStats::from_edges(&[]);
        assert_eq!(stats.edge_count, 0);
        assert_eq!(stats.unique_sources, 0);
        assert_eq!(stats.unique_destinations, 0);
    }

    #[test]
    fn test_stats_count_unique_endpoints() {
        let edges = vec![
            Edge::new("/", "/a"),
            Edge::new("/", "/b"),
            Edge::new("/a", "/b"),
        ];
        let stats = CrawlStats::from_edges(&edges);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.unique_sources, 2);
        assert_eq!(stats.unique_destinations, 2);
    }

    #[test]
    fn test_display_format() {
        let stats = CrawlStats::from_edges(&[Edge::new("/", "/a")]);
        assert_eq!(
            stats.to_string(),
            "1 edges found (1 source pages, 1 link targets)"
        );
    }
}
