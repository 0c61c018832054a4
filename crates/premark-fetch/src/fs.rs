//! Filesystem fetcher for local imports.

use std::path::{Path, PathBuf};

use premark_core::{FetchError, Fetched, Fetcher};
use tracing::debug;

/// Reads import paths from the filesystem.
///
/// Relative paths resolve against the base directory; absolute paths are
/// used as-is. A missing or unreadable file is a transport error.
pub struct FsFetcher {
    base_dir: PathBuf,
}

impl FsFetcher {
    /// Create a fetcher resolving relative paths against `base_dir`.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base_dir.join(candidate)
        }
    }
}

impl Fetcher for FsFetcher {
    fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
        let resolved = self.resolve(path);
        debug!(path, resolved = %resolved.display(), "reading import");
        let body = std::fs::read_to_string(&resolved)
            .map_err(|e| FetchError::new(path, e.to_string()))?;
        Ok(Fetched::ok(body))
    }
}
