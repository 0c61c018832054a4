//! Synchronous resource retrieval for the `import` directive.
//!
//! The engine itself never performs I/O; `import` goes through a [`Fetcher`]
//! installed on the engine. The fetch is blocking by design so the result
//! can be spliced inline before the surrounding pass continues.

/// Result of retrieving a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Status indicator; `200` means success. A non-success status with a
    /// non-empty body is still usable: the engine only rejects retrievals
    /// that are non-success *and* empty.
    pub status: u16,
    /// Body text of the resource.
    pub body: String,
}

impl Fetched {
    /// A successful retrieval carrying `body`.
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Transport-level retrieval failure (unreachable host, missing file, read
/// error).
#[derive(Debug, thiserror::Error)]
#[error("fetching {path}: {message}")]
pub struct FetchError {
    /// The path that was being retrieved.
    pub path: String,
    /// Human-readable transport error.
    pub message: String,
}

impl FetchError {
    /// Create a transport error for `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Blocking retrieval capability used by `import`.
pub trait Fetcher: Send {
    /// Retrieve the resource at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the resource cannot be reached at all;
    /// status-level failures are reported through [`Fetched::status`]
    /// instead.
    fn fetch(&self, path: &str) -> Result<Fetched, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_constructor() {
        let fetched = Fetched::ok("body");
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body, "body");
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::new("a.css", "connection refused");
        assert_eq!(err.to_string(), "fetching a.css: connection refused");
    }
}
