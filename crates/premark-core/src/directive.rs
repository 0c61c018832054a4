//! Directive registration and dispatch protocol.

use std::collections::HashMap;

use crate::args::DirectiveArgs;
use crate::context::DirectiveContext;
use crate::error::EngineError;
use crate::handler::{HandlerAction, LineHandler};

/// Outcome of a handler-generator invocation.
///
/// Decides what replaces the directive line and whether a [`LineHandler`]
/// joins the pipeline.
pub enum Invocation {
    /// No output, no handler; the directive line is dropped.
    Discard,
    /// Append a handler to the pipeline; the directive line is dropped.
    Install(LineHandler),
    /// Replace the directive line with this text, verbatim.
    Replace(String),
    /// Run this text through the full driver and splice the processed
    /// result in place of the directive line. Used by `import`; the
    /// recursion shares the engine's handlers and defines.
    Expand(String),
}

impl Invocation {
    /// Install a closure as a line handler.
    #[must_use]
    pub fn install<F>(handler: F) -> Self
    where
        F: FnMut(&str) -> HandlerAction + Send + 'static,
    {
        Self::Install(Box::new(handler))
    }

    /// Replace the directive line with `text`.
    #[must_use]
    pub fn replace(text: impl Into<String>) -> Self {
        Self::Replace(text.into())
    }

    /// Expand `text` through the driver and splice the result.
    #[must_use]
    pub fn expand(text: impl Into<String>) -> Self {
        Self::Expand(text.into())
    }
}

/// A registered directive: a named handler generator.
///
/// # Example
///
/// ```
/// use premark_core::{
///     Directive, DirectiveArgs, DirectiveContext, Engine, EngineError, Invocation,
/// };
///
/// struct UpcaseDirective;
///
/// impl Directive for UpcaseDirective {
///     fn name(&self) -> &str {
///         "upcase"
///     }
///
///     fn invoke(
///         &mut self,
///         _args: DirectiveArgs<'_>,
///         _ctx: &mut DirectiveContext<'_>,
///     ) -> Result<Invocation, EngineError> {
///         Ok(Invocation::install(|line: &str| {
///             premark_core::HandlerAction::Replace(line.to_uppercase())
///         }))
///     }
/// }
///
/// let mut engine = Engine::new();
/// engine.register(UpcaseDirective);
/// let output = engine.process("@upcase\nshout\n").unwrap();
/// assert_eq!(output, "SHOUT\n");
/// ```
pub trait Directive: Send {
    /// Directive name, matched against `<token><name>` lines.
    fn name(&self) -> &str;

    /// Invoke the handler generator for one directive line.
    ///
    /// # Errors
    ///
    /// Any error aborts the whole processing pass.
    fn invoke(
        &mut self,
        args: DirectiveArgs<'_>,
        ctx: &mut DirectiveContext<'_>,
    ) -> Result<Invocation, EngineError>;
}

/// Name-keyed directive registry. Registering a name again overwrites the
/// previous entry; entries are never removed automatically.
#[derive(Default)]
pub(crate) struct DirectiveRegistry {
    entries: HashMap<String, Box<dyn Directive>>,
}

impl DirectiveRegistry {
    pub fn insert(&mut self, directive: Box<dyn Directive>) {
        self.entries.insert(directive.name().to_owned(), directive);
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Box<dyn Directive>> {
        self.entries.get_mut(name)
    }
}
