//! Graphviz DOT rendering of the edge list

use crate::graph::Edge;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders the edge list as a Graphviz `digraph` description.
///
/// One line per edge, in list order, so the same list always yields
/// byte-identical output. Identifiers are quoted verbatim; a page path
/// containing a `"` would produce malformed output, which is accepted
/// because the recognized link pattern cannot produce one.
pub fn render_dot(edges: &[Edge]) -> String {
    let mut out = String::from("digraph Sitemap {\n");

    for edge in edges {
        out.push_str(&format!("\t\"{}\" -> \"{}\";\n", edge.source, edge.dest));
    }

    out.push('}');
    out
}

/// Writes the DOT rendering of `edges` to `path`.
pub fn write_dot_file(edges: &[Edge], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_dot(edges).as_bytes())?;
    writer.flush()?;

    tracing::info!("Wrote {} edges to {}", edges.len(), path.display());
    Ok(())
}
