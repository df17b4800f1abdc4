pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod stream;
pub mod value;

use thiserror::Error;

pub use ast::{Assign, IndexStep, Node, Token, TokenKind};
pub use cli::parse_value;
pub use evaluator::{EvalError, evaluate};
pub use lexer::{LexError, Lexer, tokenize};
pub use output::{render, render_compact, render_stream};
pub use parser::{ParseError, Parser, parse};
pub use stream::Stream;
pub use value::Value;

/// Any failure between query text and output stream.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

/// Tokenizes and parses a query, failing on illegal tokens or bad syntax.
///
/// ```
/// use gq::{compile, IndexStep, Node};
///
/// let node = compile(".a.b").unwrap();
/// assert_eq!(
///     node,
///     Node::Index(vec![IndexStep::Field("a".into()), IndexStep::Field("b".into())])
/// );
/// ```
pub fn compile(query: &str) -> Result<Node, QueryError> {
    let tokens = tokenize(query);
    lexer::ensure_legal(&tokens)?;
    Ok(parse(tokens)?)
}

/// Compiles `query` and evaluates it against a single input value.
///
/// ```
/// use gq::{run, Value};
///
/// let input = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
/// let output = run("[.[]]", input.clone()).unwrap();
/// assert_eq!(output.into_values(), vec![input]);
/// ```
pub fn run(query: &str, input: Value) -> Result<Stream, QueryError> {
    let node = compile(query)?;
    Ok(evaluate(Stream::single(input), &node)?)
}
