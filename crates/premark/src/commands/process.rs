//! `process` command: expand directives in a source file.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use premark_core::Engine;
use premark_fetch::{FetchRouter, FsFetcher, HttpFetcher};
use tracing::info;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the `process` command.
#[derive(Args)]
pub(crate) struct ProcessArgs {
    /// Source file to process ("-" for stdin).
    pub input: PathBuf,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directive token.
    #[arg(long, default_value = premark_core::DEFAULT_TOKEN)]
    pub token: String,

    /// Predefine an identifier before processing; repeatable.
    #[arg(short = 'D', long = "define", value_name = "IDENT[=VALUE]")]
    pub defines: Vec<String>,

    /// Base directory for filesystem imports (defaults to the input's
    /// directory).
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Allow http(s) imports.
    #[arg(long)]
    pub allow_http: bool,

    /// Keep backslash-newline pairs instead of collapsing them.
    #[arg(long)]
    pub no_newline_escapes: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ProcessArgs {
    pub(crate) fn execute(&self, output: &Output) -> Result<(), CliError> {
        let source = self.read_source()?;
        let mut engine = self.build_engine()?;

        // Predefines go through the engine itself so they behave exactly
        // like in-source define directives (including installing their
        // substitution handlers).
        for define in &self.defines {
            engine.process(&define_line(&self.token, define))?;
        }

        info!(input = %self.input.display(), "processing");
        let processed = engine.process(&source)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, processed)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => std::io::stdout().write_all(processed.as_bytes())?,
        }
        Ok(())
    }

    fn read_source(&self) -> Result<String, CliError> {
        if self.input == Path::new("-") {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        } else {
            Ok(std::fs::read_to_string(&self.input)?)
        }
    }

    fn build_engine(&self) -> Result<Engine, CliError> {
        let base_dir = self.base_dir.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        });

        let fs = FsFetcher::new(base_dir);
        let mut engine = if self.allow_http {
            Engine::new().with_fetcher(FetchRouter::new(HttpFetcher::new(), fs))
        } else {
            Engine::new().with_fetcher(fs)
        };

        engine.set_token(&self.token)?;
        if self.no_newline_escapes {
            engine.set_expand_newline_escapes(false);
        }
        Ok(engine)
    }
}

/// Build the directive line for a `-D IDENT[=VALUE]` predefine.
fn define_line(token: &str, define: &str) -> String {
    match define.split_once('=') {
        Some((identifier, value)) if !value.is_empty() => {
            format!("{token}define {identifier} {value}\n")
        }
        Some((identifier, _)) => format!("{token}define {identifier}\n"),
        None => format!("{token}define {define}\n"),
    }
}
