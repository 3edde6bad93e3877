//! Shared data model for the crawl graph
//!
//! An [`Edge`] records one "destination is linked from source" relationship.
//! Sources are stored relative to the crawl's base URL; destinations are
//! stored exactly as they were discovered in the page markup.

use serde::Serialize;

/// A directed link between two pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Page the link was found on, relative to the crawl's base URL
    pub source: String,

    /// Link target exactly as discovered (a path fragment)
    pub dest: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }

    /// Rewrites the source so it is stored relative to `base_url`.
    ///
    /// Workers report sources as fully-qualified URLs; the coordinator strips
    /// the base prefix before the edge enters the result list. A source that
    /// does not start with the base is kept as-is.
    pub fn relative_to(mut self, base_url: &str) -> Self {
        if let Some(rest) = self.source.strip_prefix(base_url) {
            self.source = rest.to_string();
        }
        self
    }
}
