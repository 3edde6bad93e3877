//! JSON export of the edge list

use crate::graph::Edge;
use crate::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes the edge list to `path` as a pretty-printed JSON array.
pub fn write_json_file(edges: &[Edge], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, edges)?;
    writer.flush()?;

    tracing::info!("Wrote {} edges to {}", edges.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json_round_trips_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sitemap.json");

        let edges = vec![Edge::new("/", "/a"), Edge::new("/a", "/b")];
        write_json_file(&edges, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed[0]["source"], "/");
        assert_eq!(parsed[1]["dest"], "/b");
    }

    #[test]
    fn test_write_empty_list_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");

        write_json_file(&[], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), "[]");
    }
}
