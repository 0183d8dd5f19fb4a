// src/gate/robots.rs
// =============================================================================
// A deliberately crude robots.txt check.
//
// We fetch `<url>/robots.txt` and refuse to crawl if the text contains
// "Disallow: /" anywhere. User-agent sections and per-path rules are not
// parsed, so any "Disallow: /..." line blocks the whole site.
//
// A robots.txt that cannot be fetched counts as "allowed".
// =============================================================================

use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

use crate::checker::Transport;

const DISALLOW_ALL: &str = "Disallow: /";

// Builds the robots.txt URL for user input like "example.com" or
// "https://example.com/"
//
// A bare host gets "http://" in front; a trailing slash is not doubled.
pub fn robots_url(url: &str) -> Result<Url> {
    let base = url.trim_end_matches('/');
    let base = if base.starts_with("http://") || base.starts_with("https://") {
        base.to_string()
    } else {
        format!("http://{}", base)
    };

    Url::parse(&format!("{}/robots.txt", base))
        .with_context(|| format!("Cannot build robots.txt URL for '{}'", url))
}

// Returns Ok(false) when the site's robots.txt contains "Disallow: /"
pub async fn is_allowed_by_robots<T: Transport>(transport: &T, url: &str) -> Result<bool> {
    let robots = robots_url(url)?;
    let page = transport.fetch(robots.as_str()).await;

    if !page.is_success() {
        debug!(url = robots.as_str(), outcome = ?page.outcome, "robots.txt unavailable, assuming allowed");
    }

    Ok(!page.body.contains(DISALLOW_ALL))
}
