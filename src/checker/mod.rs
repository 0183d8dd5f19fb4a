// src/checker/mod.rs
// =============================================================================
// This module contains all fetching and link checking logic.
//
// Submodules:
// - http: Fetches pages and probes links over the network
// - extract: Finds URL-shaped substrings in a page body
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod http;
mod extract;

#[cfg(test)]
pub mod stub;

// Re-export public items from submodules
// This lets users write `checker::extract_links()` instead of
// `checker::extract::extract_links()`
pub use http::{HttpTransport, Transport};
#[cfg(test)]
pub use http::{FetchOutcome, FetchResult};
pub use extract::extract_links;
