// src/config.rs
// =============================================================================
// This module holds the settings a crawl is constructed with.
//
// - CrawlerConfig: what to crawl (seed, page budget, topics, output file)
// - FetchConfig: how to fetch (base address, timeout, user agent, pacing)
//
// The CLI builds both from its arguments; library users build them directly.
// =============================================================================

use crate::error::CrawlError;
use std::path::PathBuf;
use std::time::Duration;

/// Used when the caller does not name a wiki.
pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org";

/// Requests allowed before the pacer pauses.
pub const DEFAULT_REQUESTS_PER_WINDOW: u32 = 20;

/// Length of the pause once a window is used up.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(3500);

/// What a single crawl explores and where it writes the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    /// Page id the crawl starts from, e.g. "/wiki/Complexity_theory"
    pub seed: String,
    /// Maximum number of pages ever admitted (always >= 1)
    pub max_pages: usize,
    /// Topic vocabulary for focused crawling (may be empty)
    pub topics: Vec<String>,
    /// File the graph is written to
    pub output: PathBuf,
}

impl CrawlerConfig {
    // Validates and builds a crawler config
    //
    // Returns: Err(CrawlError::InvalidBudget) if max_pages is 0
    pub fn new(
        seed: impl Into<String>,
        max_pages: usize,
        topics: Vec<String>,
        output: impl Into<PathBuf>,
    ) -> Result<Self, CrawlError> {
        if max_pages == 0 {
            return Err(CrawlError::InvalidBudget(max_pages));
        }
        Ok(Self {
            seed: seed.into(),
            max_pages,
            topics,
            output: output.into(),
        })
    }
}

/// Transport settings for the HTTP fetcher and its pacer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
    pub requests_per_window: u32,
    pub pause: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            requests_per_window: DEFAULT_REQUESTS_PER_WINDOW,
            pause: DEFAULT_PAUSE,
        }
    }
}
