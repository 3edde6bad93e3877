//! Crawl configuration and validation
//!
//! A [`CrawlConfig`] captures everything a single crawl run needs: the base
//! URL, the worker pool size, the idle window used for quiescence detection,
//! and the work queue capacity. Values come from CLI flags and are validated
//! before the crawl starts.

use crate::{Result, SiteGraphError};
use std::time::Duration;
use url::Url;

/// Default number of concurrent fetch workers
pub const DEFAULT_WORKERS: usize = 20;

/// Default idle window after which the crawl is considered quiescent
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default work queue capacity
///
/// Must stay well above the number of reachable pages: a full queue blocks
/// the coordinator until a worker pulls an item.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1000;

/// Configuration for a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Base URL of the site, without a trailing slash
    pub base_url: String,

    /// Number of concurrent fetch workers
    pub workers: usize,

    /// Idle window with no edge report after which the crawl terminates.
    /// A single fetch slower than this window causes premature termination
    /// with a truncated graph, so choose it conservatively relative to
    /// expected fetch latency.
    pub idle_timeout: Duration,

    /// Capacity of the bounded work queue
    pub queue_capacity: usize,

    /// User agent sent with every request
    pub user_agent: String,
}

impl CrawlConfig {
    /// Creates a configuration for `base_url` with default tuning.
    ///
    /// The URL must be an absolute `http` or `https` URL with a host. Any
    /// trailing slash is trimmed so that work items can be formed by plain
    /// concatenation with the discovered path fragments.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();

        let parsed = Url::parse(&base_url)?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(SiteGraphError::Config(format!(
                "unsupported URL scheme '{}', expected http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(SiteGraphError::Config(format!(
                "base URL '{}' has no host",
                base_url
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            workers: DEFAULT_WORKERS,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            user_agent: format!("sitegraph/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Checks the tuning values before a crawl starts.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(SiteGraphError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(SiteGraphError::Config(
                "work queue capacity must be at least 1".to_string(),
            ));
        }
        if self.idle_timeout.is_zero() {
            return Err(SiteGraphError::Config(
                "idle timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        let config = CrawlConfig::new("https://example.com").unwrap();
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.workers, DEFAULT_WORKERS);
    }

    #[test]
    fn test_trims_trailing_slash() {
        let config = CrawlConfig::new("https://example.com/").unwrap();
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(CrawlConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(CrawlConfig::new("/just/a/path").is_err());
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = CrawlConfig::new("https://example.com")
            .unwrap()
            .with_workers(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_idle_timeout() {
        let config = CrawlConfig::new("https://example.com")
            .unwrap()
            .with_idle_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        let config = CrawlConfig::new("http://127.0.0.1:8080").unwrap();
        assert!(config.validate().is_ok());
    }
}
