// src/graph/writer.rs
// =============================================================================
// This module writes a CrawlGraph to its output file.
//
// The file is created when the writer is opened, before any crawling
// happens. An unwritable path therefore fails fast instead of after a long
// crawl. The graph itself is written once, at the end.
//
// Rust concepts:
// - tokio::fs / AsyncWriteExt: Async file IO on the tokio runtime
// - fmt::Write: Building the output in a String with writeln!
// =============================================================================

use super::CrawlGraph;
use crate::error::CrawlError;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

// Renders a graph in the output format
//
// Example:
//   3
//   /wiki/S /wiki/A
//   /wiki/S /wiki/B
pub fn render_graph(graph: &CrawlGraph) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", graph.page_count());
    for edge in &graph.edges {
        let _ = writeln!(out, "{} {}", edge.source, edge.target);
    }
    out
}

#[derive(Debug)]
pub struct GraphWriter {
    path: PathBuf,
    file: File,
}

impl GraphWriter {
    // Creates (or truncates) the output file
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, CrawlError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).await.map_err(|source| CrawlError::Sink {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Writes the whole graph and flushes it to disk
    pub async fn write(mut self, graph: &CrawlGraph) -> Result<(), CrawlError> {
        let rendered = render_graph(graph);
        let result = async {
            self.file.write_all(rendered.as_bytes()).await?;
            self.file.flush().await
        }
        .await;

        result.map_err(|source| CrawlError::Sink {
            path: self.path,
            source,
        })
    }
}
