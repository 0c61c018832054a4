//! Engine error types.
//!
//! Every error is raised from within a handler generator and propagates out
//! of `process` unmodified; there is no local recovery and no partial
//! output.

use crate::fetch::FetchError;

/// Error aborting a processing pass.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum EngineError {
    /// `define` or `ifdef` invoked without an identifier.
    #[error("invalid {token}{directive} syntax: missing identifier")]
    MissingIdentifier {
        /// Directive token in effect.
        token: String,
        /// Name of the failing directive.
        directive: &'static str,
    },

    /// `define` identifier that does not compile as a substitution pattern.
    #[error("invalid {token}define identifier: {identifier}")]
    InvalidIdentifier {
        /// Directive token in effect.
        token: String,
        /// The offending identifier.
        identifier: String,
        /// Pattern compilation failure.
        #[source]
        source: regex::Error,
    },

    /// `import` invoked without a path argument.
    #[error("{token}import: missing file path")]
    MissingImportPath {
        /// Directive token in effect.
        token: String,
    },

    /// `import` path that unwraps to an empty string.
    #[error("{token}import: invalid import url: {path}")]
    InvalidImportPath {
        /// Directive token in effect.
        token: String,
        /// The raw path argument before unwrapping.
        path: String,
    },

    /// Retrieval returned a non-success status and an empty body.
    #[error("{token}import: importing {path} failed with status code {status}")]
    ImportFailed {
        /// Directive token in effect.
        token: String,
        /// The resolved import path.
        path: String,
        /// Status reported by the fetcher.
        status: u16,
    },

    /// Retrieval failed at the transport level.
    #[error("{token}import: retrieving {path} failed")]
    Fetch {
        /// Directive token in effect.
        token: String,
        /// The resolved import path.
        path: String,
        /// Underlying transport error.
        #[source]
        source: FetchError,
    },

    /// `import` used on an engine without a retrieval collaborator.
    #[error("{token}import is not supported without a fetcher")]
    UnsupportedImport {
        /// Directive token in effect.
        token: String,
    },

    /// The configured token does not yield a usable detection pattern.
    #[error("invalid directive token")]
    InvalidToken(#[source] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_names_directive_and_token() {
        let err = EngineError::MissingIdentifier {
            token: "@".to_owned(),
            directive: "define",
        };
        assert_eq!(err.to_string(), "invalid @define syntax: missing identifier");
    }

    #[test]
    fn test_import_failed_reports_path_and_status() {
        let err = EngineError::ImportFailed {
            token: "@".to_owned(),
            path: "style.css".to_owned(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "@import: importing style.css failed with status code 404"
        );
    }
}
