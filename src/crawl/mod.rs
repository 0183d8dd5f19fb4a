// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - Generates the candidate URLs for a host
// - Fetches them with a bounded number of concurrent workers
// - Merges the reachable links of every page into one set
// - Polite crawling with a delay after each worker's requests
//
// Rust concepts:
// - Async programming: For concurrent network requests
// - Shared state: A mutex-guarded set written by many workers
// =============================================================================

mod candidates;
mod coordinator;
mod links;

// Re-export the crawl entry point and what it returns
pub use coordinator::{crawl, CrawlReport, FailedFetch};
