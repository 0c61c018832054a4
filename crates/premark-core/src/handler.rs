//! Line handler pipeline.
//!
//! Directives install [`LineHandler`]s that transform every subsequent line.
//! Handlers are applied in reverse registration order, so a later directive
//! can override an earlier, broader one without explicit priorities.

/// Outcome of applying one line handler.
///
/// # Example
///
/// ```
/// use premark_core::HandlerAction;
///
/// // Leave the line as it stood before this handler ran
/// let action = HandlerAction::Keep;
///
/// // Remove the line entirely
/// let action = HandlerAction::Drop;
///
/// // Substitute new content (fed to the next handler in the pipeline)
/// let action = HandlerAction::replace("rewritten line\n");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerAction {
    /// Keep the line as it stood before this handler ran.
    Keep,
    /// Drop the line (later handlers in the traversal still see the empty
    /// line).
    Drop,
    /// Replace the line; the new content becomes the next handler's input.
    Replace(String),
}

impl HandlerAction {
    /// Create a replacement action.
    #[must_use]
    pub fn replace(line: impl Into<String>) -> Self {
        Self::Replace(line.into())
    }
}

/// A per-line transform installed by a directive.
///
/// Receives the current line including its terminator. There is no removal
/// API; a handler that is done must return [`HandlerAction::Keep`] forever,
/// as the `ifdef` filter does after its end marker.
pub type LineHandler = Box<dyn FnMut(&str) -> HandlerAction + Send>;

/// Run `line` through every handler, newest first.
pub(crate) fn apply_handlers(handlers: &mut [LineHandler], line: &str) -> String {
    let mut current = line.to_owned();
    for handler in handlers.iter_mut().rev() {
        match handler(&current) {
            HandlerAction::Keep => {}
            HandlerAction::Drop => current.clear(),
            HandlerAction::Replace(next) => current = next,
        }
    }
    current
}
