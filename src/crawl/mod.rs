// src/crawl/mod.rs
// =============================================================================
// This module handles exploring the wiki.
//
// Features:
// - Breadth-first crawling from a seed page
// - Focused crawling that expands the most topic-relevant pages first
// - A hard page budget: at most `max_pages` pages are ever admitted
// - The induced link graph over the admitted pages as the result
//
// Submodules:
// - heap: The max-priority queue behind focused crawling
// - discovered: Insertion-ordered set of admitted pages
// - frontier: The crawler and both traversal algorithms
// =============================================================================

mod discovered;
mod frontier;
pub mod heap;

pub use discovered::DiscoveredSet;
pub use frontier::{CrawlReport, FrontierCrawler, TraversalMode};
pub use heap::PriorityHeap;
