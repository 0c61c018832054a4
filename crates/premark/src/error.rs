//! CLI error types.

use premark_core::EngineError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
