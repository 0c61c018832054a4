//! `define`: record an identifier and substitute it on later lines.

use regex::Regex;

use crate::args::DirectiveArgs;
use crate::context::DirectiveContext;
use crate::defines::DefineValue;
use crate::directive::{Directive, Invocation};
use crate::error::EngineError;
use crate::handler::HandlerAction;

/// `<token>define IDENT [replacement...]`
///
/// Records `IDENT` in the shared defines store and installs a handler that
/// substitutes every later occurrence with the replacement text (or the
/// literal `true` for a bare define).
///
/// The identifier is compiled as a substitution pattern verbatim: an
/// identifier containing regex metacharacters keeps its regex meaning, and
/// the replacement text is a regex replacement template (`$1` etc. expand).
pub struct DefineDirective;

impl Directive for DefineDirective {
    fn name(&self) -> &str {
        "define"
    }

    fn invoke(
        &mut self,
        args: DirectiveArgs<'_>,
        ctx: &mut DirectiveContext<'_>,
    ) -> Result<Invocation, EngineError> {
        let Some(identifier) = args.primary else {
            return Err(EngineError::MissingIdentifier {
                token: ctx.token.to_owned(),
                directive: "define",
            });
        };

        let pattern = Regex::new(identifier).map_err(|source| EngineError::InvalidIdentifier {
            token: ctx.token.to_owned(),
            identifier: identifier.to_owned(),
            source,
        })?;

        let value = args
            .rest
            .map_or(DefineValue::Flag, |text| DefineValue::Text(text.to_owned()));
        let replacement = value.replacement().to_owned();
        ctx.defines.insert(identifier, value);

        Ok(Invocation::install(move |line| {
            HandlerAction::Replace(pattern.replace_all(line, replacement.as_str()).into_owned())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defines::DefineStore;

    fn invoke(forms: (Option<&str>, Option<&str>, &str)) -> Result<Invocation, EngineError> {
        let (primary, rest, raw) = forms;
        let mut defines = DefineStore::new();
        let mut ctx = DirectiveContext {
            defines: &mut defines,
            token: "@",
            fetcher: None,
        };
        DefineDirective.invoke(DirectiveArgs { primary, rest, raw }, &mut ctx)
    }

    #[test]
    fn test_missing_identifier() {
        let result = invoke((None, None, ""));
        assert!(matches!(
            result,
            Err(EngineError::MissingIdentifier {
                directive: "define",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_identifier_pattern() {
        let result = invoke((Some("("), None, " ("));
        assert!(matches!(result, Err(EngineError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_records_flag_when_no_replacement() {
        let mut defines = DefineStore::new();
        let mut ctx = DirectiveContext {
            defines: &mut defines,
            token: "@",
            fetcher: None,
        };
        let args = DirectiveArgs {
            primary: Some("DEBUG"),
            rest: None,
            raw: " DEBUG",
        };
        DefineDirective.invoke(args, &mut ctx).unwrap();
        assert_eq!(defines.get("DEBUG"), Some(&DefineValue::Flag));
    }

    #[test]
    fn test_handler_substitutes_replacement() {
        let invocation = invoke((Some("FOO"), Some("bar"), " FOO bar")).unwrap();
        let Invocation::Install(mut handler) = invocation else {
            panic!("expected installed handler");
        };
        assert_eq!(
            handler("FOO and FOO\n"),
            HandlerAction::Replace("bar and bar\n".to_owned())
        );
    }

    #[test]
    fn test_bare_define_substitutes_true() {
        let invocation = invoke((Some("DEBUG"), None, " DEBUG")).unwrap();
        let Invocation::Install(mut handler) = invocation else {
            panic!("expected installed handler");
        };
        assert_eq!(
            handler("if (DEBUG) {\n"),
            HandlerAction::Replace("if (true) {\n".to_owned())
        );
    }

    #[test]
    fn test_identifier_keeps_regex_semantics() {
        // "F.O" is compiled verbatim, so the dot matches any character.
        let invocation = invoke((Some("F.O"), Some("x"), " F.O x")).unwrap();
        let Invocation::Install(mut handler) = invocation else {
            panic!("expected installed handler");
        };
        assert_eq!(
            handler("FAO FBO\n"),
            HandlerAction::Replace("x x\n".to_owned())
        );
    }
}
