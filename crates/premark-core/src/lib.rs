//! Line-oriented directive preprocessor.
//!
//! This crate provides an [`Engine`] that scans annotated source text line
//! by line, recognizes directive lines marked by a configurable token
//! (default `@`), and rewrites the source: directive lines are removed or
//! replaced, and directives may install stateful line transformers that
//! apply to every subsequent line.
//!
//! # Architecture
//!
//! Processing is a single forward pass:
//!
//! 1. **Line scanning**: each newline-terminated line is matched against the
//!    detection pattern `<token>(\S+)(.*)?` (anywhere in the line, not
//!    anchored).
//! 2. **Dispatch**: a matched name with a registry entry invokes that
//!    directive's handler generator, which returns an [`Invocation`]
//!    describing what replaces the line and which [`LineHandler`], if any,
//!    joins the pipeline.
//! 3. **Pipeline**: ordinary lines run through every active handler in
//!    reverse registration order, so the most recently installed handler has
//!    priority.
//!
//! The registry, the active handlers, and the defines store persist across
//! [`Engine::process`] calls; call [`Engine::reset`] to isolate documents.
//!
//! # Built-in directives
//!
//! - `define IDENT [replacement]`: substitution on all later lines
//! - `ifdef IDENT` ... `endif`: conditional inclusion
//! - `import PATH`: recursive expansion of an external resource through a
//!   [`Fetcher`] collaborator
//!
//! # Example
//!
//! ```
//! use premark_core::Engine;
//!
//! let mut engine = Engine::new();
//! let output = engine
//!     .process("@define GREETING hello\nGREETING world\n")
//!     .unwrap();
//! assert_eq!(output, "hello world\n");
//! ```

mod args;
pub mod builtins;
mod context;
mod defines;
mod directive;
mod engine;
mod error;
mod fetch;
mod handler;
mod scanner;

pub use args::DirectiveArgs;
pub use context::DirectiveContext;
pub use defines::{DefineStore, DefineValue};
pub use directive::{Directive, Invocation};
pub use engine::{DEFAULT_TOKEN, Engine};
pub use error::EngineError;
pub use fetch::{FetchError, Fetched, Fetcher};
pub use handler::{HandlerAction, LineHandler};
