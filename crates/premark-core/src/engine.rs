//! Engine configuration and the single-pass process driver.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::builtins::{DefineDirective, IfdefDirective, ImportDirective};
use crate::context::DirectiveContext;
use crate::defines::DefineStore;
use crate::directive::{Directive, DirectiveRegistry, Invocation};
use crate::error::EngineError;
use crate::fetch::Fetcher;
use crate::handler::{LineHandler, apply_handlers};
use crate::scanner::{build_directive_pattern, scan_line, split_expression};

/// Default directive token.
pub const DEFAULT_TOKEN: &str = "@";

static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| build_directive_pattern(DEFAULT_TOKEN).unwrap());

/// Line-oriented directive preprocessor.
///
/// Owns the directive registry, the active handler pipeline, and the shared
/// defines store. All three persist across [`process`](Self::process) calls
/// on one engine instance: handlers and defined identifiers accumulate until
/// [`reset`](Self::reset). Processing is single-threaded and fully
/// synchronous; callers needing isolation between independent documents use
/// `reset` or a fresh engine.
///
/// # Example
///
/// ```
/// use premark_core::Engine;
///
/// let mut engine = Engine::new();
/// let source = "@define DEBUG\n@ifdef DEBUG\nlog();\n@endif\ndone\n";
/// assert_eq!(engine.process(source).unwrap(), "log();\ndone\n");
/// ```
pub struct Engine {
    token: String,
    directive_pattern: Regex,
    expand_newline_escapes: bool,
    registry: DirectiveRegistry,
    handlers: Vec<LineHandler>,
    defines: DefineStore,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Create an engine with the built-in directives registered.
    #[must_use]
    pub fn new() -> Self {
        let mut engine = Self {
            token: DEFAULT_TOKEN.to_owned(),
            directive_pattern: DEFAULT_PATTERN.clone(),
            expand_newline_escapes: true,
            registry: DirectiveRegistry::default(),
            handlers: Vec::new(),
            defines: DefineStore::new(),
            fetcher: None,
        };
        engine.register(DefineDirective);
        engine.register(IfdefDirective);
        engine.register(ImportDirective);
        engine
    }

    /// Install the retrieval collaborator used by `import`.
    #[must_use]
    pub fn with_fetcher<F: Fetcher + 'static>(mut self, fetcher: F) -> Self {
        self.fetcher = Some(Box::new(fetcher));
        self
    }

    /// Register a directive, replacing any existing entry with the same
    /// name.
    pub fn register<D: Directive + 'static>(&mut self, directive: D) {
        self.registry.insert(Box::new(directive));
    }

    /// Directive token currently in effect.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Change the directive token and rebuild the detection pattern.
    ///
    /// The token is interpolated into the pattern verbatim, so token text
    /// carries regex semantics. Process-wide: affects all subsequent
    /// `process` calls.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidToken`] when no detection pattern can be built
    /// from `token`.
    pub fn set_token(&mut self, token: &str) -> Result<(), EngineError> {
        self.directive_pattern =
            build_directive_pattern(token).map_err(EngineError::InvalidToken)?;
        self.token = token.to_owned();
        Ok(())
    }

    /// Enable or disable backslash-newline collapsing (default enabled).
    pub fn set_expand_newline_escapes(&mut self, enabled: bool) {
        self.expand_newline_escapes = enabled;
    }

    /// The shared defines store.
    #[must_use]
    pub fn defines(&self) -> &DefineStore {
        &self.defines
    }

    /// Clear active handlers and defined identifiers.
    ///
    /// Registered directives and configuration (token, escape flag,
    /// fetcher) survive. Use this to isolate independent documents that
    /// share one engine.
    pub fn reset(&mut self) {
        self.handlers.clear();
        self.defines.clear();
    }

    /// Process `source`, returning the rewritten text.
    ///
    /// Backslash-newline pairs are collapsed first (when enabled), then
    /// each newline-terminated line is scanned in order: directive lines
    /// are dispatched through the registry, every other line runs through
    /// the active handlers in reverse registration order.
    ///
    /// # Errors
    ///
    /// Propagates the first handler-generator error; the pass aborts with
    /// no partial output.
    pub fn process(&mut self, source: &str) -> Result<String, EngineError> {
        let source = if self.expand_newline_escapes {
            source.replace("\\\n", "")
        } else {
            source.to_owned()
        };

        let mut output = String::with_capacity(source.len());
        let mut rest = source.as_str();

        // Only newline-terminated segments are scanned; a trailing segment
        // without a terminator passes through untouched.
        while let Some(offset) = rest.find('\n') {
            let (line, tail) = rest.split_at(offset + 1);
            rest = tail;
            output.push_str(&self.process_line(line)?);
        }
        output.push_str(rest);

        Ok(output)
    }

    /// Process `source` and hand the result to `evaluator`.
    ///
    /// The engine only supplies text; what evaluation means is the
    /// caller's concern.
    ///
    /// # Errors
    ///
    /// Propagates processing errors; `evaluator` is not called on failure.
    pub fn evaluate_with<T>(
        &mut self,
        source: &str,
        evaluator: impl FnOnce(&str) -> T,
    ) -> Result<T, EngineError> {
        let processed = self.process(source)?;
        Ok(evaluator(&processed))
    }

    fn process_line(&mut self, line: &str) -> Result<String, EngineError> {
        if let Some(invocation) = self.dispatch_directive(line)? {
            return match invocation {
                Invocation::Discard => Ok(String::new()),
                Invocation::Install(handler) => {
                    self.handlers.push(handler);
                    Ok(String::new())
                }
                Invocation::Replace(text) => Ok(text),
                Invocation::Expand(text) => self.process(&text),
            };
        }
        Ok(apply_handlers(&mut self.handlers, line))
    }

    fn dispatch_directive(&mut self, line: &str) -> Result<Option<Invocation>, EngineError> {
        let Some(found) = scan_line(&self.directive_pattern, line) else {
            return Ok(None);
        };
        // A token lookalike with no registry entry is ordinary text.
        let Some(directive) = self.registry.get_mut(found.name) else {
            return Ok(None);
        };

        debug!(directive = found.name, "dispatching directive");
        let args = split_expression(found.expression);
        let mut ctx = DirectiveContext {
            defines: &mut self.defines,
            token: &self.token,
            fetcher: self.fetcher.as_deref(),
        };
        directive.invoke(args, &mut ctx).map(Some)
    }
}
