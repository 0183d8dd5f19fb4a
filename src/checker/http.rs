// src/checker/http.rs
// =============================================================================
// This module talks to the network.
//
// Key functionality:
// - Fetches a page with a GET request and keeps the whole body
// - Probes a link with a HEAD request (lightweight, no body download)
// - Turns transport failures (timeout, DNS, refused, TLS) into values
//   instead of errors, so one bad URL never stops the crawl
//
// The crawler only depends on the `Transport` trait, so tests can swap the
// real HTTP client for an in-memory stub.
//
// Rust concepts:
// - Traits: A shared interface with more than one implementation
// - async fn in traits: Each method returns a future
// - Enums: To represent the different ways a request can end
// =============================================================================

use anyhow::{Context, Result};
use reqwest::Client;
use std::error::Error as StdError;
use std::time::Duration;

/// How a single fetch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The server answered and the body was read (any HTTP status)
    Success,
    /// The request did not finish within the configured timeout
    Timeout,
    /// DNS failure, connection refused, TLS error, broken body, ...
    NetworkError(String),
}

/// The result of fetching one candidate URL.
///
/// `body` is only meaningful when `outcome` is `Success`; it is empty
/// otherwise.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub source_url: String,
    pub status: Option<u16>,
    pub body: String,
    pub outcome: FetchOutcome,
}

impl FetchResult {
    pub fn success(source_url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        FetchResult {
            source_url: source_url.into(),
            status: Some(status),
            body: body.into(),
            outcome: FetchOutcome::Success,
        }
    }

    pub fn failed(source_url: impl Into<String>, outcome: FetchOutcome) -> Self {
        FetchResult {
            source_url: source_url.into(),
            status: None,
            body: String::new(),
            outcome,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, FetchOutcome::Success)
    }

    /// Human-readable reason for a failed fetch
    pub fn failure_reason(&self) -> Option<String> {
        match &self.outcome {
            FetchOutcome::Success => None,
            FetchOutcome::Timeout => Some("Request timed out".to_string()),
            FetchOutcome::NetworkError(message) => Some(message.clone()),
        }
    }
}

// The two network operations the crawler needs.
//
// Neither method can fail: every transport problem is folded into the
// returned value.
pub trait Transport {
    /// GET `url` and capture the full body
    async fn fetch(&self, url: &str) -> FetchResult;

    /// HEAD `url`; true iff the request completed at the transport level.
    /// The HTTP status is not inspected, so a 404 still counts as reachable.
    async fn check_link(&self, url: &str) -> bool;
}

// The real transport, backed by a shared reqwest client
//
// Client is cheap to clone and pools connections internally, so every
// worker borrows the same HttpTransport.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(concat!("link-explorer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> FetchResult {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return FetchResult::failed(url, categorize_error(&e)),
        };

        let status = response.status().as_u16();

        // text() consumes the response, so the connection goes back to the
        // pool (or is closed) before we return, on both arms
        match response.text().await {
            Ok(body) => FetchResult::success(url, status, body),
            Err(e) => FetchResult::failed(url, categorize_error(&e)),
        }
    }

    async fn check_link(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                tracing::debug!(url, status = response.status().as_u16(), "link reachable");
                true
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "link unreachable");
                false
            }
        }
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
// - etc.
fn categorize_error(error: &reqwest::Error) -> FetchOutcome {
    if error.is_timeout() {
        return FetchOutcome::Timeout;
    }

    // Convert error to string once, including the source chain where the
    // interesting part (dns, certificate, ...) usually lives
    let detail = full_error_chain(error);
    let lowered = detail.to_lowercase();

    let message = if error.is_redirect() {
        "Too many redirects".to_string()
    } else if error.is_connect() {
        if lowered.contains("dns") || lowered.contains("resolve") {
            format!("Could not resolve hostname: {}", detail)
        } else {
            format!("Connection failed: {}", detail)
        }
    } else if lowered.contains("certificate") || lowered.contains("ssl") || lowered.contains("tls") {
        format!("SSL certificate error: {}", detail)
    } else {
        detail
    };

    FetchOutcome::NetworkError(message)
}

// reqwest's Display only shows the outermost layer; walk the sources so the
// log line names the underlying cause
fn full_error_chain(error: &reqwest::Error) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = StdError::source(error);
    while let Some(inner) = source {
        parts.push(inner.to_string());
        source = inner.source();
    }
    parts.join(": ")
}
