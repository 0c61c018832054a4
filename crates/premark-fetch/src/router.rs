//! Scheme-based dispatch between fetchers.

use premark_core::{FetchError, Fetched, Fetcher};

/// Routes `http://` and `https://` paths to one fetcher and everything else
/// to a fallback, so documents can mix network and local imports.
pub struct FetchRouter {
    http: Box<dyn Fetcher>,
    fallback: Box<dyn Fetcher>,
}

impl FetchRouter {
    /// Create a router dispatching network schemes to `http` and all other
    /// paths to `fallback`.
    #[must_use]
    pub fn new<H, F>(http: H, fallback: F) -> Self
    where
        H: Fetcher + 'static,
        F: Fetcher + 'static,
    {
        Self {
            http: Box::new(http),
            fallback: Box::new(fallback),
        }
    }
}

impl Fetcher for FetchRouter {
    fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
        if path.starts_with("http://") || path.starts_with("https://") {
            self.http.fetch(path)
        } else {
            self.fallback.fetch(path)
        }
    }
}
