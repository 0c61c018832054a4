//! Blocking HTTP fetcher backed by ureq.

use std::time::Duration;

use premark_core::{FetchError, Fetched, Fetcher};
use tracing::debug;
use ureq::Agent;

/// Default transport timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP retrieval for `import` paths.
///
/// Non-2xx responses are not transport errors: status and body are returned
/// as-is so the engine can apply its own success rule (a non-success status
/// with a non-empty body is still usable).
pub struct HttpFetcher {
    agent: Agent,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom global timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
        debug!(path, "GET");
        let response = self
            .agent
            .get(path)
            .call()
            .map_err(|e| FetchError::new(path, e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::new(path, e.to_string()))?;

        Ok(Fetched { status, body })
    }
}
