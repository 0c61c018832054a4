//! In-memory fetcher for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use premark_core::{FetchError, Fetched, Fetcher};

/// Serves canned responses and records requested paths.
///
/// Available behind the `mock` feature so downstream crates can exercise
/// import-heavy documents without touching the network or the filesystem.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, Fetched>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create an empty mock; every fetch fails until responses are added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for `path`.
    #[must_use]
    pub fn with_response(mut self, path: impl Into<String>, fetched: Fetched) -> Self {
        self.responses.insert(path.into(), fetched);
        self
    }

    /// Register a successful canned body for `path`.
    #[must_use]
    pub fn with_body(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_response(path, Fetched::ok(body))
    }

    /// Paths requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(path.to_owned());
        }
        self.responses
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::new(path, "no canned response"))
    }
}
