//! Execute gq queries against JSON input

use std::io::Write;

use super::{CliError, parse_value};
use crate::{Stream, ast, compile, evaluate, output::render_stream};

/// Crate version, fixed at build time
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options for a query run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The query to execute
    pub query: Option<String>,
    /// JSON input text
    pub input: Option<String>,
    /// Print the syntax tree before the results
    pub debug: bool,
    /// Render each result on a single line
    pub compact: bool,
}

/// Line printed by `gq version`
pub fn version_line() -> String {
    format!("Version: {}", VERSION)
}

/// Run a query and write its results to `out`.
///
/// The whole output stream is evaluated before anything is rendered, so a
/// failing query writes no results (only the syntax tree, in debug mode).
pub fn execute<W: Write>(options: &RunOptions, mut out: W) -> Result<(), CliError> {
    let query = options.query.as_deref().ok_or(CliError::NoProgram)?;
    let node = compile(query)?;

    if options.debug {
        writeln!(out, "Generated AST:")?;
        writeln!(out)?;
        // The dump ends in a newline, leaving a blank line before the results.
        writeln!(out, "{}", ast::dump(&node))?;
    }

    let input = options.input.as_deref().ok_or(CliError::NoInput)?;
    let value = parse_value(input)?;

    let results = evaluate(Stream::single(value), &node)?;
    log::debug!("query produced {} value(s)", results.len());

    out.write_all(render_stream(&results, options.compact).as_bytes())?;
    Ok(())
}
