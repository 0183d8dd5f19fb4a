// src/crawl/coordinator.rs
// =============================================================================
// This module runs one crawl.
//
// How it works:
// 1. Build the candidate URLs for the host (http/https x subdomains)
// 2. Start one worker per candidate, at most `max_threads` at a time
// 3. Each worker: fetch the page -> pull out links -> probe each link ->
//    add the reachable ones to the shared set -> wait `delay`
// 4. Wait for every worker, then hand back the merged, sorted links
//
// A candidate that cannot be fetched is logged and reported, but it never
// stops the other workers.
//
// Rust concepts:
// - Streams: buffer_unordered keeps a fixed number of futures in flight
// - Borrowing across futures: every worker borrows the same transport and
//   link set, which outlive the stream
// =============================================================================

use futures::future;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::candidates::generate_candidates;
use super::links::SharedLinkSet;
use crate::checker::{extract_links, Transport};
use crate::config::CrawlConfig;

/// A candidate URL whose page could not be fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFetch {
    pub url: String,
    pub reason: String,
}

/// Everything one crawl produced
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    pub base_host: String,
    pub candidates: Vec<String>,
    /// Verified links, sorted, no duplicates
    pub links: Vec<String>,
    pub failures: Vec<FailedFetch>,
}

// Crawls every candidate URL of `base_host` and collects the reachable links
//
// Parameters:
//   transport: does the actual fetching and probing (borrowed by all workers)
//   base_host: host to explore, already validated by the caller
//   config: concurrency ceiling, delay and friends
//
// A `max_threads` of 0 is treated as 1.
pub async fn crawl<T: Transport>(transport: &T, base_host: &str, config: &CrawlConfig) -> CrawlReport {
    let candidates = generate_candidates(base_host);
    let max_threads = config.max_threads.max(1);
    let found = SharedLinkSet::new();

    info!(
        base_host,
        candidates = candidates.len(),
        max_threads,
        delay_ms = config.delay.as_millis() as u64,
        "starting crawl"
    );

    let workers = candidates
        .iter()
        .map(|candidate| run_worker(transport, candidate, &found, config.delay));

    // buffer_unordered never polls more than `max_threads` workers at once,
    // and collect() only resolves when the last one has finished
    let mut failures: Vec<FailedFetch> = stream::iter(workers)
        .buffer_unordered(max_threads)
        .filter_map(|outcome| future::ready(outcome.err()))
        .collect()
        .await;
    failures.sort_by(|a, b| a.url.cmp(&b.url));

    let links = found.into_sorted();
    info!(links = links.len(), failures = failures.len(), "crawl finished");

    CrawlReport {
        base_host: base_host.to_string(),
        candidates: candidates.into_iter().collect(),
        links,
        failures,
    }
}

// One worker: fetch, extract, check, insert, then sleep
//
// Returns how many new links this worker added, or why the fetch failed.
async fn run_worker<T: Transport>(
    transport: &T,
    candidate: &str,
    found: &SharedLinkSet,
    delay: Duration,
) -> Result<usize, FailedFetch> {
    debug!(url = candidate, "fetching");
    let page = transport.fetch(candidate).await;

    let outcome = match page.failure_reason() {
        Some(reason) => {
            warn!(url = %page.source_url, error = %reason, "Error fetching URL");
            Err(FailedFetch {
                url: page.source_url,
                reason,
            })
        }
        None => {
            // The same link often shows up several times on one page
            let mut seen = HashSet::new();
            let mut added = 0;

            for link in extract_links(&page.body) {
                if !seen.insert(link) {
                    continue;
                }

                if transport.check_link(link).await {
                    if found.insert(link.to_string()).await {
                        added += 1;
                    }
                } else {
                    debug!(url = candidate, link, "dropping unreachable link");
                }
            }

            debug!(url = candidate, status = ?page.status, links = seen.len(), added, "page done");
            Ok(added)
        }
    };

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    outcome
}
