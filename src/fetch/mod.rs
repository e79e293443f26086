// src/fetch/mod.rs
// =============================================================================
// This module handles getting page text for the crawler.
//
// Submodules:
// - http: Fetches pages over HTTP from a wiki base address
// - pacing: Wraps any fetcher so it pauses after every N requests
// - memory: Serves pages from an in-memory map (offline runs and tests)
//
// Every fetcher reports failures through FetchError. The crawler decides
// what a failure means (it treats it as an empty page); fetchers never
// swallow errors themselves.
// =============================================================================

mod http;
mod memory;
mod pacing;

pub use http::HttpFetcher;
pub use memory::MemoryFetcher;
pub use pacing::PacedFetcher;

use async_trait::async_trait;
use thiserror::Error;

/// Why a page could not be fetched.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The page id could not be turned into a URL
    #[error("invalid address for page '{page}': {source}")]
    InvalidAddress {
        page: String,
        #[source]
        source: url::ParseError,
    },
    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("request for '{page}' failed: {source}")]
    Request {
        page: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status
    #[error("HTTP {status} for '{page}'")]
    Status { page: String, status: u16 },
    /// The HTTP client itself could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    /// The page does not exist in an offline page source
    #[error("page '{0}' not found")]
    NotFound(String),
}

/// Source of page text, keyed by page id (e.g. "/wiki/Graph_theory").
///
/// Fetchers take `&mut self` so they can own request state such as pacing
/// counters without interior mutability.
#[async_trait]
pub trait Fetcher: Send {
    async fn fetch(&mut self, page: &str) -> Result<String, FetchError>;
}

