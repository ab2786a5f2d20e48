// src/fetch/mod.rs
// =============================================================================
// This module handles fetching page content over HTTP.
//
// Submodules:
// - http: The real fetcher built on reqwest
//
// This file (mod.rs) also defines the Fetch trait - the one capability the
// search core needs from the network. The core never talks to reqwest
// directly; it talks to "something that can fetch a URL". That lets our
// tests swap in a fake Wikipedia made of in-memory pages.
//
// Rust concepts:
// - Traits: Shared behavior that multiple types can implement
// - async-trait: Lets trait methods be async (not yet ergonomic in plain Rust)
// =============================================================================

mod http;

// Re-export the production fetcher
pub use http::HttpFetcher;

use anyhow::Result;
use async_trait::async_trait;

// The single capability the race core consumes from the outside world:
// "give me the content of this URL, or fail".
//
// Failures are transient from the core's point of view - the worker decides
// whether to retry, not the fetcher.
#[async_trait]
pub trait Fetch: Sync {
    /// Fetches the raw HTML content of a page
    async fn fetch(&self, url: &str) -> Result<String>;
}
