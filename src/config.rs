// src/config.rs
// =============================================================================
// Crawl parameters, built from the command line.
//
// The builder methods (`with_*`) let tests create a config without going
// through clap.
// =============================================================================

use anyhow::{bail, Result};
use std::time::Duration;

use crate::cli::Cli;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Most workers allowed to run at the same time
    pub max_threads: usize,
    /// Pause each worker takes after its requests
    pub delay: Duration,
    /// Accepted for compatibility; the crawl never follows links
    pub depth: usize,
    pub request_timeout: Duration,
}

impl CrawlConfig {
    pub fn new(max_threads: usize) -> Self {
        Self {
            max_threads,
            delay: Duration::ZERO,
            depth: 0,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay = Duration::from_millis(delay_ms);
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl TryFrom<&Cli> for CrawlConfig {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        if cli.max_threads == 0 {
            bail!("maxThreads must be at least 1");
        }
        if cli.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        Ok(CrawlConfig::new(cli.max_threads)
            .with_delay_ms(cli.delay)
            .with_depth(cli.depth)
            .with_request_timeout(Duration::from_secs(cli.timeout)))
    }
}
