//! Ivy CLI - interactive interpreter and script runner.
//!
//! Invocation: `ivy [OPTIONS] [SCRIPT]`. With no script path, enters the
//! REPL (`spec.md` §6); with one, reads it as source, evaluates it, and
//! exits with `0` on success or `1` on any error.

mod error;
mod repl;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser as ClapParser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::{CliError, Result};
use ivy_eval::Evaluator;
use ivy_par::Parser as IvyParser;

/// Ivy - an interactive runtime for a small dynamically-typed scripting
/// language.
#[derive(ClapParser, Debug)]
#[command(name = "ivy")]
#[command(author = "Ivy Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive interpreter and script runner for Ivy", long_about = None)]
struct Cli {
    /// Script file to run. Omit to start an interactive session.
    script: Option<PathBuf>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.no_color) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match &cli.script {
        Some(path) => match read_and_run(path) {
            Ok(()) => ExitCode::SUCCESS,
            Err((source, e)) => {
                eprintln!("{}", render_error(&e, source.as_deref()));
                ExitCode::FAILURE
            }
        },
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            match repl::run(stdin.lock(), stdout.lock(), stderr.lock()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("I/O error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Logging setup has no `spec.md`-mandated presentation format, unlike
/// lex/parse/runtime errors, so it's the one place this crate reaches for
/// `anyhow` instead of a `CliError` variant: there's nothing structured to
/// preserve, just a glue call that either works or doesn't.
fn init_logging(verbose: bool, no_color: bool) -> anyhow::Result<()> {
    let filter = if verbose { EnvFilter::new("debug") } else { EnvFilter::new("info") };

    let subscriber = fmt::layer().with_ansi(!no_color).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")
}

/// Reads `path` as source, evaluates it top to bottom, per `spec.md` §6's
/// script mode (no `=>` printing — that's a REPL-only behavior).
///
/// On failure the source text is handed back alongside the error (when it
/// was read successfully) so the caller can render a caret-annotated
/// snippet, per `spec.md` §7's "desirable but optional" extra.
fn read_and_run(path: &PathBuf) -> std::result::Result<(), (Option<String>, CliError)> {
    let source = fs::read_to_string(path)
        .map_err(|source| CliError::ScriptRead { path: path.display().to_string(), source })
        .map_err(|e| (None, e))?;

    run(&source).map_err(|e| (Some(source), e))
}

fn run(source: &str) -> Result<()> {
    let mut parser = IvyParser::new(source)?;
    let program = parser.parse_program()?;
    let mut evaluator = Evaluator::new();
    evaluator.eval_program(&program)?;
    Ok(())
}

/// Renders a `CliError` the way `spec.md` §7 specifies, with an optional
/// caret-annotated source line appended underneath when both a span and the
/// original source text are available.
fn render_error(e: &CliError, source: Option<&str>) -> String {
    let (rendered, span) = match e {
        CliError::Lang(lang_err) => (lang_err.render(), lang_err.span()),
        other => (other.to_string(), None),
    };

    match (span, source) {
        (Some(span), Some(source)) => match source.lines().nth(span.line.saturating_sub(1) as usize) {
            Some(line) => {
                let snippet = ivy_util::diagnostic::SourceSnippet::new(line, span.line, span.column);
                format!("{}\n{}", rendered, snippet.format())
            }
            None => rendered,
        },
        _ => rendered,
    }
}

impl From<ivy_lex::LexError> for CliError {
    fn from(e: ivy_lex::LexError) -> Self {
        CliError::Lang(e.into())
    }
}

impl From<ivy_par::ParseError> for CliError {
    fn from(e: ivy_par::ParseError) -> Self {
        CliError::Lang(e.into())
    }
}
