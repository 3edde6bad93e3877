//! Output module for serializing the crawl graph
//!
//! This module handles:
//! - Graphviz DOT rendering of the edge list (the default)
//! - JSON edge-list export
//! - Aggregate crawl statistics

mod dot;
mod json;
pub mod stats;

pub use dot::{render_dot, write_dot_file};
pub use json::write_json_file;
pub use stats::CrawlStats;

use crate::graph::Edge;
use crate::Result;
use std::path::Path;

/// Serialization formats for the final edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Dot,
    Json,
}

/// Writes the edge list to `path` in the requested format.
pub fn write_output(edges: &[Edge], path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Dot => write_dot_file(edges, path),
        OutputFormat::Json => write_json_file(edges, path),
    }
}
