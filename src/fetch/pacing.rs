// src/fetch/pacing.rs
// =============================================================================
// This module keeps the crawler polite.
//
// PacedFetcher wraps another fetcher and counts the requests it forwards.
// Once a window of `requests_per_window` requests is used up, the next
// request first sleeps for `pause` and then starts a fresh window.
//
// This is one refill per window, not a general rate limiter: requests inside
// a window go out as fast as the inner fetcher allows.
//
// Rust concepts:
// - Generics: PacedFetcher<F> works with any Fetcher
// - tokio::time: Async sleep, and an Instant that honours a paused test clock
// =============================================================================

use super::{FetchError, Fetcher};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

pub struct PacedFetcher<F> {
    inner: F,
    requests_per_window: u32,
    pause: Duration,
    // Requests issued in the current window
    issued: u32,
    window_started: Instant,
}

impl<F: Fetcher> PacedFetcher<F> {
    pub fn new(inner: F, requests_per_window: u32, pause: Duration) -> Self {
        Self {
            inner,
            requests_per_window: requests_per_window.max(1),
            pause,
            issued: 0,
            window_started: Instant::now(),
        }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }

    // Sleeps if the current window is used up, then counts one request
    async fn wait_for_slot(&mut self) {
        if self.issued >= self.requests_per_window {
            debug!(
                requests = self.issued,
                window = ?self.window_started.elapsed(),
                pause = ?self.pause,
                "request window used up, pausing"
            );
            tokio::time::sleep(self.pause).await;
            self.issued = 0;
            self.window_started = Instant::now();
        }
        self.issued += 1;
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for PacedFetcher<F> {
    async fn fetch(&mut self, page: &str) -> Result<String, FetchError> {
        self.wait_for_slot().await;
        self.inner.fetch(page).await
    }
}
