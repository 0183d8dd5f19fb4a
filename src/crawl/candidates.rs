// src/crawl/candidates.rs
// =============================================================================
// Builds the list of URLs to probe for a host.
//
// For "example.com" we try both schemes against the bare host and four
// common subdomains:
//   http(s)://example.com
//   http(s)://www.example.com
//   http(s)://blog.example.com
//   http(s)://shop.example.com
//   http(s)://test.example.com
// =============================================================================

use std::collections::BTreeSet;

const SCHEMES: [&str; 2] = ["http", "https"];

// The empty prefix is the bare host
const SUBDOMAINS: [&str; 5] = ["", "www.", "blog.", "shop.", "test."];

// Returns every scheme/subdomain combination for `base_host`
//
// The host is not validated here. A leading "http://" or "https://" is
// dropped so it is not repeated in front of the new scheme.
//
// BTreeSet gives set semantics (no duplicates) and a stable order, so two
// calls with the same input give identical results.
pub fn generate_candidates(base_host: &str) -> BTreeSet<String> {
    let host = strip_scheme(base_host);

    SCHEMES
        .iter()
        .flat_map(|scheme| {
            SUBDOMAINS
                .iter()
                .map(move |sub| format!("{}://{}{}", scheme, sub, host))
        })
        .collect()
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}
