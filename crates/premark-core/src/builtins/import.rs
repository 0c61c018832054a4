//! `import`: splice a fully processed external resource in place.

use std::sync::LazyLock;

use regex::Regex;

use crate::args::DirectiveArgs;
use crate::context::DirectiveContext;
use crate::directive::{Directive, Invocation};
use crate::error::EngineError;

static URL_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*url\(\s*'([^']*)'\)").unwrap());
static URL_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*url\(\s*"([^"]*)"\)"#).unwrap());
static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*'([^']*)'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\s*"([^"]*)""#).unwrap());

/// `<token>import PATH`
///
/// `PATH` may be bare, quoted with single or double quotes, or wrapped in
/// `url(...)`. The resource is retrieved synchronously through the engine's
/// [`Fetcher`](crate::Fetcher) and its text is run through the full driver;
/// the processed result replaces the import line, so imported content is
/// expanded in place rather than spliced verbatim.
///
/// A retrieval with a non-success status and an empty body fails the
/// directive. Import chains are not cycle checked: a cyclic import recurses
/// until the host intervenes.
pub struct ImportDirective;

impl Directive for ImportDirective {
    fn name(&self) -> &str {
        "import"
    }

    fn invoke(
        &mut self,
        args: DirectiveArgs<'_>,
        ctx: &mut DirectiveContext<'_>,
    ) -> Result<Invocation, EngineError> {
        let Some(raw_path) = args.primary else {
            return Err(EngineError::MissingImportPath {
                token: ctx.token.to_owned(),
            });
        };

        let path = unwrap_path(raw_path);
        if path.is_empty() {
            return Err(EngineError::InvalidImportPath {
                token: ctx.token.to_owned(),
                path: raw_path.to_owned(),
            });
        }

        let fetched = ctx.fetch(path)?;
        if fetched.status != 200 && fetched.body.is_empty() {
            return Err(EngineError::ImportFailed {
                token: ctx.token.to_owned(),
                path: path.to_owned(),
                status: fetched.status,
            });
        }

        Ok(Invocation::Expand(fetched.body))
    }
}

/// Strip an optional `url(...)` wrapper or bare quotes; patterns are tried
/// in fixed priority order and the first match wins. A path with no quoting
/// is returned as-is.
fn unwrap_path(raw: &str) -> &str {
    for pattern in [&*URL_SINGLE, &*URL_DOUBLE, &*SINGLE_QUOTED, &*DOUBLE_QUOTED] {
        if let Some(captures) = pattern.captures(raw) {
            return captures.get(1).map_or("", |m| m.as_str());
        }
    }
    raw
}
