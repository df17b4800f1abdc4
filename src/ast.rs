//! # gq Query Language - Abstract Syntax Tree
//!
//! This module defines the tokens and syntax tree for gq, a small jq-style
//! language for pulling values out of JSON documents and reshaping them.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[nodes]** - Syntax tree nodes (index chains, pipes, constructors)
//! - **[dump]** - Indented textual dump of a tree, shown by `gq --debug`
//!
//! ## Quick Start
//!
//! ```text
//! .[] | {message: .commit.message, parents: [.parents[].sha]}
//! ```
//!
//! This query walks every element of the input array and builds one object
//! per element.
//!
//! ## Core Concepts
//!
//! ### Streams
//!
//! Every expression maps a stream of values to a stream of values. A single
//! input can produce zero, one or many outputs:
//!
//! - `.a.b` - one output per input
//! - `.[]` - one output per element (or object value)
//! - `[ expr ]` - collects the whole stream of `expr` into one array
//! - `{k: expr, ...}` - one object per combination of field values
//!
//! ### Pipes
//!
//! `left | right` runs `right` once for every value `left` produces, and
//! concatenates the results in order.
//!
//! ## Examples
//!
//! ### Field access
//!
//! ```text
//! .user.name
//! .["user"]["name"]
//! ```
//!
//! ### Iteration
//!
//! ```text
//! .items[].id
//! ```
//!
//! ### Cartesian products
//!
//! ```text
//! {a: .[], b: .[]}     // on [1,2]: {a:1,b:1} {a:1,b:2} {a:2,b:1} {a:2,b:2}
//! ```
pub mod dump;
pub mod nodes;
pub mod tokens;

pub use dump::dump;
pub use nodes::{Assign, IndexStep, Node};
pub use tokens::{Token, TokenKind};
