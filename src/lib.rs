//! Crawls a wiki from a seed page and records the link graph over the pages
//! it discovers, either breadth-first or focused on a topic vocabulary.

pub mod config;
pub mod crawl;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod graph;

pub use config::{CrawlerConfig, FetchConfig};
pub use crawl::{CrawlReport, FrontierCrawler, PriorityHeap, TraversalMode};
pub use error::CrawlError;
pub use fetch::{FetchError, Fetcher, HttpFetcher, MemoryFetcher, PacedFetcher};
pub use graph::{CrawlGraph, Edge, GraphWriter};
