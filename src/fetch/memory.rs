// src/fetch/memory.rs
// In-memory page source. Records every requested page id in order so tests
// can check which pages a crawl fetched and when.

use super::{FetchError, Fetcher};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryFetcher {
    pages: HashMap<String, String>,
    requests: Vec<String>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    // Builder-style helper: adds (or replaces) a page and returns self
    pub fn with_page(mut self, page: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(page, content);
        self
    }

    pub fn insert(&mut self, page: impl Into<String>, content: impl Into<String>) {
        self.pages.insert(page.into(), content.into());
    }

    /// Page ids requested so far, in request order.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

#[async_trait]
impl Fetcher for MemoryFetcher {
    async fn fetch(&mut self, page: &str) -> Result<String, FetchError> {
        self.requests.push(page.to_string());
        self.pages
            .get(page)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(page.to_string()))
    }
}
