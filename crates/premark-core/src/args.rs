//! Parsed directive arguments.

/// Argument text of a directive line, in the three forms handler generators
/// consume.
///
/// For a line `@define FOO  bar baz`, the expression is ` FOO  bar baz`,
/// which splits into `primary = Some("FOO")` and `rest = Some("bar baz")`.
/// Different built-ins use different forms: `define` uses primary + rest,
/// `ifdef` and `import` use only the primary argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectiveArgs<'a> {
    /// First non-whitespace run of the expression.
    pub primary: Option<&'a str>,
    /// Whitespace-separated remainder after the primary argument.
    pub rest: Option<&'a str>,
    /// The full raw expression, exactly as it appeared after the directive
    /// name.
    pub raw: &'a str,
}
