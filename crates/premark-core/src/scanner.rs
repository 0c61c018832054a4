//! Directive detection and argument splitting.
//!
//! A line opens a directive when the detection pattern
//! `<token>(\S+)(.*)?` matches anywhere in it: the token may follow other
//! content (e.g. sit inside comment syntax), so the pattern is not anchored
//! to the line start. The first capture is the directive name, the second
//! the remainder of the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::args::DirectiveArgs;

/// Splits an expression into a primary argument and an optional
/// whitespace-separated remainder.
static EXPRESSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S+)(?:[ \t]+(.+))?").unwrap());

/// Build the directive detection pattern for `token`.
///
/// The token is interpolated verbatim, so token text carries regex
/// semantics.
pub(crate) fn build_directive_pattern(token: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"{token}(\S+)(.*)?"))
}

/// A directive invocation found on a line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DirectiveMatch<'a> {
    /// Contiguous non-whitespace run immediately after the token.
    pub name: &'a str,
    /// Everything after the name, up to the line terminator.
    pub expression: &'a str,
}

/// Match `line` against the detection pattern.
pub(crate) fn scan_line<'a>(pattern: &Regex, line: &'a str) -> Option<DirectiveMatch<'a>> {
    let captures = pattern.captures(line)?;
    let name = captures.get(1)?.as_str();
    let expression = captures.get(2).map_or("", |m| m.as_str());
    Some(DirectiveMatch { name, expression })
}

/// Split an expression into the three argument forms.
pub(crate) fn split_expression(expression: &str) -> DirectiveArgs<'_> {
    EXPRESSION_RE.captures(expression).map_or(
        DirectiveArgs {
            primary: None,
            rest: None,
            raw: expression,
        },
        |captures| DirectiveArgs {
            primary: captures.get(1).map(|m| m.as_str()),
            rest: captures.get(2).map(|m| m.as_str()),
            raw: expression,
        },
    )
}
