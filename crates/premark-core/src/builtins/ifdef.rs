//! `ifdef`: conditionally keep lines until the matching end marker.

use regex::Regex;

use crate::args::DirectiveArgs;
use crate::context::DirectiveContext;
use crate::directive::{Directive, Invocation};
use crate::error::EngineError;
use crate::handler::HandlerAction;

/// `<token>ifdef IDENT` ... `<token>endif`
///
/// Samples the defines store at the moment the directive is encountered; a
/// later `define` does not retroactively affect it. The installed filter
/// has three states: before the end marker it passes lines through when
/// `IDENT` was defined and drops them otherwise; the end-marker line itself
/// is dropped; afterwards the filter passes everything and never alters a
/// line again (it stays in the pipeline as a no-op).
///
/// The end marker is `<token>endif` appearing anywhere in a line. Nesting
/// is not tracked: an inner end marker inside a dropped branch terminates
/// the outer conditional.
pub struct IfdefDirective;

impl Directive for IfdefDirective {
    fn name(&self) -> &str {
        "ifdef"
    }

    fn invoke(
        &mut self,
        args: DirectiveArgs<'_>,
        ctx: &mut DirectiveContext<'_>,
    ) -> Result<Invocation, EngineError> {
        let Some(identifier) = args.primary else {
            return Err(EngineError::MissingIdentifier {
                token: ctx.token.to_owned(),
                directive: "ifdef",
            });
        };

        // The token is interpolated verbatim, matching the detection
        // pattern's regex semantics.
        let end_marker =
            Regex::new(&format!("{}endif", ctx.token)).map_err(EngineError::InvalidToken)?;
        let defined = ctx.defines.is_defined(identifier);
        let mut reached_end = false;

        Ok(Invocation::install(move |line| {
            if reached_end {
                return HandlerAction::Keep;
            }
            if end_marker.is_match(line) {
                reached_end = true;
                return HandlerAction::Drop;
            }
            if defined {
                HandlerAction::Keep
            } else {
                HandlerAction::Drop
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::{DefineStore, DefineValue};
    use crate::handler::LineHandler;

    fn filter_for(identifier: &str, defined: &[&str]) -> LineHandler {
        let mut defines = DefineStore::new();
        for name in defined {
            defines.insert(*name, DefineValue::Flag);
        }
        let mut ctx = DirectiveContext {
            defines: &mut defines,
            token: "@",
            fetcher: None,
        };
        let args = DirectiveArgs {
            primary: Some(identifier),
            rest: None,
            raw: identifier,
        };
        match IfdefDirective.invoke(args, &mut ctx).unwrap() {
            Invocation::Install(handler) => handler,
            _ => panic!("expected installed handler"),
        }
    }

    #[test]
    fn test_missing_identifier() {
        let mut defines = DefineStore::new();
        let mut ctx = DirectiveContext {
            defines: &mut defines,
            token: "@",
            fetcher: None,
        };
        let args = DirectiveArgs {
            primary: None,
            rest: None,
            raw: "",
        };
        let result = IfdefDirective.invoke(args, &mut ctx);
        assert!(matches!(
            result,
            Err(EngineError::MissingIdentifier {
                directive: "ifdef",
                ..
            })
        ));
    }

    #[test]
    fn test_defined_passes_lines_through() {
        let mut filter = filter_for("DEBUG", &["DEBUG"]);
        assert_eq!(filter("log line\n"), HandlerAction::Keep);
    }

    #[test]
    fn test_undefined_drops_lines() {
        let mut filter = filter_for("DEBUG", &[]);
        assert_eq!(filter("log line\n"), HandlerAction::Drop);
    }

    #[test]
    fn test_end_marker_line_is_dropped_then_passthrough() {
        let mut filter = filter_for("DEBUG", &[]);
        assert_eq!(filter("body\n"), HandlerAction::Drop);
        assert_eq!(filter("@endif\n"), HandlerAction::Drop);
        // Permanently passthrough, even though DEBUG was never defined.
        assert_eq!(filter("after\n"), HandlerAction::Keep);
        assert_eq!(filter("@endif\n"), HandlerAction::Keep);
    }

    #[test]
    fn test_end_marker_matches_anywhere_in_line() {
        let mut filter = filter_for("DEBUG", &["DEBUG"]);
        assert_eq!(filter("code(); // @endif\n"), HandlerAction::Drop);
        assert_eq!(filter("anything\n"), HandlerAction::Keep);
    }
}
