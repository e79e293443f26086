// src/graph/mod.rs
// =============================================================================
// This module holds the crawl result and knows how to persist it.
//
// The output format is line oriented:
//   <number of discovered pages>
//   <source> <target>
//   ...
// one accepted edge per line, in the order the crawl recorded them.
// =============================================================================

mod writer;

pub use writer::{render_graph, GraphWriter};

/// One accepted link traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The induced link graph over the discovered pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlGraph {
    /// Pages in the order they were discovered (seed first)
    pub pages: Vec<String>,
    /// Accepted edges in discovery order
    pub edges: Vec<Edge>,
}

impl CrawlGraph {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
