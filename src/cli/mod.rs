//! CLI support for gq
//!
//! Provides programmatic access to the gq command line: value ingestion and
//! the query run behind `gq <QUERY>`.

mod convert;
mod run;

pub use convert::{json_to_value, parse_value};
pub use run::{RunOptions, VERSION, execute, version_line};

use std::io;

use thiserror::Error;

use crate::{EvalError, LexError, ParseError, QueryError};

/// Errors that can occur during CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Illegal character in the query
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Parser error
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Evaluation error
    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Integer literal outside the i64 range, or a float that is not finite
    #[error("Invalid JSON: number {0} is out of range")]
    NumberOutOfRange(String),

    /// Nothing was piped to stdin
    #[error("no input provided on stdin")]
    NoInput,

    /// No query argument given
    #[error("no program provided")]
    NoProgram,
}

impl From<QueryError> for CliError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Lex(e) => CliError::Lex(e),
            QueryError::Parse(e) => CliError::Parse(e),
            QueryError::Eval(e) => CliError::Eval(e),
        }
    }
}
