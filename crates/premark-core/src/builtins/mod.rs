//! Built-in reference directives.
//!
//! Each built-in demonstrates one class of macro behavior: `define`
//! (substitution), `ifdef` (conditional inclusion), and `import` (recursive
//! sub-processing). [`Engine::new`](crate::Engine::new) registers all three.

mod define;
mod ifdef;
mod import;

pub use define::DefineDirective;
pub use ifdef::IfdefDirective;
pub use import::ImportDirective;
