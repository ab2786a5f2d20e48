// src/fetch/http.rs
// =============================================================================
// This module implements the Fetch trait with real HTTP requests.
//
// Key functionality:
// - One reqwest Client shared by every request (connection pooling)
// - A request timeout so a hung server can't stall a worker forever
// - Non-success status codes are treated as errors, so callers can retry
//
// Rust concepts:
// - async/await: For network I/O that doesn't block other workers
// - Result<T, E>: For error handling
// =============================================================================

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::Fetch;

// Fetches pages over HTTP using reqwest
//
// Client is cheap to clone (it's a reference counter internally), but we
// don't even need to - one HttpFetcher is shared by reference everywhere.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a 10 second timeout per request
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        // Wikipedia answers rate-limited requests with an error status,
        // so a non-2xx response is something the caller may want to retry
        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} for {}", response.status(), url));
        }

        let html = response.text().await?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fetcher() {
        // Building the client should never fail with our fixed settings
        assert!(HttpFetcher::new().is_ok());
    }
}
