// src/crawl/links.rs
// =============================================================================
// The set of verified links shared by every worker of one crawl.
//
// - Insert-only: links are never removed
// - No duplicates: a link found by several workers is stored once
// - One writer at a time: every insert takes the mutex
//
// The set is only read back (`into_sorted`) after all workers are done.
// =============================================================================

use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
pub struct SharedLinkSet {
    links: Mutex<HashSet<String>>,
}

impl SharedLinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the link was already present
    pub async fn insert(&self, link: String) -> bool {
        self.links.lock().await.insert(link)
    }

    /// Consumes the set, so no worker can still be holding it
    pub fn into_sorted(self) -> Vec<String> {
        let mut links: Vec<String> = self.links.into_inner().into_iter().collect();
        links.sort();
        links
    }
}
