// In-memory Transport for tests.
//
// Records how many workers are inside fetch or check_link at the same time
// so tests can check the concurrency ceiling.

use super::{FetchOutcome, FetchResult, Transport};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct StubTransport {
    default_body: Option<String>,
    pages: HashMap<String, String>,
    unreachable: HashSet<String>,
    fetch_delay: Duration,
    check_delay: Duration,
    active: AtomicUsize,
    high_water: AtomicUsize,
    fetches: AtomicUsize,
    checks: AtomicUsize,
}

impl StubTransport {
    /// Every fetch fails and every link is reachable
    pub fn new() -> Self {
        Self::default()
    }

    /// Body served for any URL without a dedicated page
    pub fn with_default_body(mut self, body: &str) -> Self {
        self.default_body = Some(body.to_string());
        self
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_unreachable(mut self, url: &str) -> Self {
        self.unreachable.insert(url.to_string());
        self
    }

    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub fn with_check_delay(mut self, delay: Duration) -> Self {
        self.check_delay = delay;
        self
    }

    pub fn high_water_mark(&self) -> usize {
        self.high_water.load(Ordering::SeqCst)
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn check_count(&self) -> usize {
        self.checks.load(Ordering::SeqCst)
    }
}

impl StubTransport {
    fn enter(&self) {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.high_water.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Transport for StubTransport {
    async fn fetch(&self, url: &str) -> FetchResult {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.enter();

        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }

        let result = match self.pages.get(url).or(self.default_body.as_ref()) {
            Some(body) => FetchResult::success(url, 200, body.clone()),
            None => FetchResult::failed(
                url,
                FetchOutcome::NetworkError("Connection failed: stub has no page".to_string()),
            ),
        };

        self.leave();
        result
    }

    async fn check_link(&self, url: &str) -> bool {
        self.checks.fetch_add(1, Ordering::SeqCst);
        self.enter();

        if !self.check_delay.is_zero() {
            tokio::time::sleep(self.check_delay).await;
        }

        self.leave();
        !self.unreachable.contains(url)
    }
}
