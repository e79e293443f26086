// src/fetch/http.rs
// =============================================================================
// This module fetches wiki pages over HTTP.
//
// Page ids are site-relative paths ("/wiki/Graph"), so each request joins the
// id onto the configured base address ("https://en.wikipedia.org").
//
// Failure modes are reported, not hidden:
// - the joined address is not a valid URL -> FetchError::InvalidAddress
// - the request itself fails (DNS, timeout, ...) -> FetchError::Request
// - the server answers 4xx/5xx -> FetchError::Status
// =============================================================================

use super::{FetchError, Fetcher};
use crate::config::FetchConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    // Creates a fetcher from transport settings
    //
    // The client is built once and reused for every page (connection pooling).
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let base = Url::parse(&config.base_url).map_err(|source| FetchError::InvalidAddress {
            page: config.base_url.clone(),
            source,
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    // Turns a page id into the absolute URL that is requested
    fn address(&self, page: &str) -> Result<Url, FetchError> {
        self.base.join(page).map_err(|source| FetchError::InvalidAddress {
            page: page.to_string(),
            source,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&mut self, page: &str) -> Result<String, FetchError> {
        let url = self.address(page)?;
        debug!(%url, "GET");

        let request_error = |source| FetchError::Request {
            page: page.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                page: page.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(request_error)
    }
}
