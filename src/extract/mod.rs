// src/extract/mod.rs
// =============================================================================
// This module pulls structured information out of Wikipedia HTML.
//
// Submodules:
// - links: Finds the article links on a page (for expanding the search)
// - seeds: Finds the terms on the goal page that seed the keyword scoring
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `extract::extract_article_links()` instead of
// `extract::links::extract_article_links()`.
// =============================================================================

mod links;
mod seeds;

// Re-export public items from submodules
pub use links::{extract_article_links, is_explorable};
pub use seeds::{extract_seed_terms, SeedTerms};
