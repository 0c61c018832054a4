//! Directive invocation context.
//!
//! Each handler generator receives a context exposing the shared defines
//! store, the token in effect, and the retrieval collaborator. This is
//! explicit dependency injection: built-ins share state through the context
//! rather than through engine-global bindings.

use tracing::debug;

use crate::defines::DefineStore;
use crate::error::EngineError;
use crate::fetch::{Fetched, Fetcher};

/// Context handed to a handler generator for one directive line.
pub struct DirectiveContext<'a> {
    /// Shared identifier store; `define` writes it, `ifdef` reads it.
    pub defines: &'a mut DefineStore,
    /// Directive token in effect (for error reporting and end markers).
    pub token: &'a str,
    /// Retrieval collaborator, if one is installed on the engine.
    pub fetcher: Option<&'a dyn Fetcher>,
}

impl DirectiveContext<'_> {
    /// Retrieve `path` through the engine's collaborator.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnsupportedImport`] when the engine has no fetcher;
    /// [`EngineError::Fetch`] on transport failure.
    pub fn fetch(&self, path: &str) -> Result<Fetched, EngineError> {
        let Some(fetcher) = self.fetcher else {
            return Err(EngineError::UnsupportedImport {
                token: self.token.to_owned(),
            });
        };
        debug!(path, "fetching import");
        fetcher.fetch(path).map_err(|source| EngineError::Fetch {
            token: self.token.to_owned(),
            path: path.to_owned(),
            source,
        })
    }
}
