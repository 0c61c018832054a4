//! Retrieval collaborators for the premark engine.
//!
//! The engine's `import` directive goes through the
//! [`Fetcher`](premark_core::Fetcher) trait; this crate provides the
//! implementations:
//!
//! - [`HttpFetcher`]: blocking HTTP retrieval
//! - [`FsFetcher`]: filesystem reads relative to a base directory
//! - [`FetchRouter`]: scheme-based dispatch between the two
//! - `MockFetcher`: canned responses for tests (behind the `mock` feature)
//!
//! # Example
//!
//! ```no_run
//! use premark_core::Engine;
//! use premark_fetch::{FetchRouter, FsFetcher, HttpFetcher};
//!
//! let fetcher = FetchRouter::new(HttpFetcher::new(), FsFetcher::new("docs"));
//! let mut engine = Engine::new().with_fetcher(fetcher);
//! let expanded = engine.process("@import 'header.txt'\nbody\n").unwrap();
//! assert!(expanded.ends_with("body\n"));
//! ```

mod fs;
mod http;
#[cfg(feature = "mock")]
mod mock;
mod router;

pub use fs::FsFetcher;
pub use http::HttpFetcher;
#[cfg(feature = "mock")]
pub use mock::MockFetcher;
pub use router::FetchRouter;
