//! Link extraction - the fetch half of the crawl
//!
//! Extraction is kept behind the [`LinkExtractor`] trait so a richer parser
//! can replace [`HttpExtractor`] without touching the coordinator/worker
//! protocol. The production extractor fetches a page over HTTP and keeps
//! only plain relative link targets; see [`extract_links`] for the pattern.

use crate::FetchError;
use reqwest::Client;
use scraper::{Html, Selector};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Boxed future returned by [`LinkExtractor::links`]
pub type LinkFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<Vec<String>, FetchError>> + Send + 'a>>;

/// A swappable fetch+extract capability: URL in, discovered link targets out
pub trait LinkExtractor: Send + Sync {
    fn links<'a>(&'a self, url: &'a str) -> LinkFuture<'a>;
}

/// Builds the HTTP client used by [`HttpExtractor`]
pub fn build_http_client(user_agent: &str) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP and extracts plain relative link targets
pub struct HttpExtractor {
    client: Client,
}

impl HttpExtractor {
    pub fn new(user_agent: &str) -> std::result::Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(user_agent)?,
        })
    }

    async fn fetch_links(&self, url: &str) -> std::result::Result<Vec<String>, FetchError> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(extract_links(&body))
    }
}

impl LinkExtractor for HttpExtractor {
    fn links<'a>(&'a self, url: &'a str) -> LinkFuture<'a> {
        Box::pin(self.fetch_links(url))
    }
}

/// Extracts every `href` target made of word characters, `/` and `-`.
///
/// Absolute URLs, query strings, dotted file names, same-page anchors and
/// mailto links all contain characters outside that set and are deliberately
/// not recognized. Document order and duplicates are preserved; edges are
/// not deduplicated, only destination pages are.
pub fn extract_links(html: &str) -> Vec<String> {
    // Parsing stays in this synchronous helper; scraper's DOM is not Send
    // and must not live across an await point.
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if is_plain_path(href) {
                    links.push(href.to_string());
                }
            }
        }
    }

    links
}

fn is_plain_path(href: &str) -> bool {
    !href.is_empty()
        && href
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '/' || c == '-')
}
