//! Stream evaluation of a parsed query.
//!
//! [`evaluate`] is a pure recursive function of a stream and a node. It keeps
//! no state between calls, and it never mutates its input: every stage
//! allocates a fresh [`Stream`].

use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    ast::{Assign, IndexStep, Node},
    stream::Stream,
    value::Value,
};

/// Errors that can occur during query evaluation.
///
/// Both are fatal for the whole query. A missing object key is not an error;
/// it evaluates to `null`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Index step applied to a value of the wrong type
    #[error("Type error: cannot index {found} with {step}")]
    TypeError { step: String, found: &'static str },

    /// Array element lookup past the end of the array
    #[error("Index out of bounds: index {index} on array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

static NULL: Value = Value::Null;

/// Evaluates `node` against every value of `stream`.
///
/// # Examples
///
/// ```
/// use gq::{evaluate, lexer::tokenize, parser::parse, Stream, Value};
///
/// let query = parse(tokenize(".[] | [.]")).unwrap();
/// let input = Stream::single(Value::Array(vec![Value::Integer(1), Value::Integer(2)]));
///
/// let output = evaluate(input, &query).unwrap();
/// assert_eq!(
///     output.into_values(),
///     vec![
///         Value::Array(vec![Value::Integer(1)]),
///         Value::Array(vec![Value::Integer(2)]),
///     ]
/// );
/// ```
pub fn evaluate(stream: Stream, node: &Node) -> Result<Stream, EvalError> {
    log::trace!("evaluating {} value(s) against {:?}", stream.len(), node);

    match node {
        Node::Index(steps) => index_stream(&stream, steps),
        Node::Pipe { left, right } => {
            let intermediate = evaluate(stream, left)?;
            let mut output = Stream::new();
            // `right` restarts on each upstream value separately.
            for value in intermediate {
                output.append(evaluate(Stream::single(value), right)?);
            }
            Ok(output)
        }
        Node::Array(body) => {
            let collected = evaluate(stream, body)?;
            Ok(Stream::single(collected.into_array()))
        }
        Node::Object(assigns) => construct_objects(stream, assigns),
    }
}

fn index_stream(stream: &Stream, steps: &[IndexStep]) -> Result<Stream, EvalError> {
    let mut output = Stream::new();
    for value in stream {
        for item in index_value(value, steps)? {
            output.push(item.clone());
        }
    }
    Ok(output)
}

/// Runs an index chain against one value. Every step maps each item of the
/// working list to its successors, so an `Iterate` in the middle of a chain
/// makes the remaining steps apply to every branch.
fn index_value<'a>(value: &'a Value, steps: &[IndexStep]) -> Result<Vec<&'a Value>, EvalError> {
    let mut working = vec![value];

    for step in steps {
        let mut next = Vec::with_capacity(working.len());
        for item in working {
            apply_step(item, step, &mut next)?;
        }
        working = next;
    }

    Ok(working)
}

fn apply_step<'a>(
    value: &'a Value,
    step: &IndexStep,
    out: &mut Vec<&'a Value>,
) -> Result<(), EvalError> {
    match (step, value) {
        (IndexStep::Root, _) => out.push(value),

        (IndexStep::Field(name), Value::Object(map)) => {
            out.push(map.get(name).unwrap_or(&NULL));
        }

        (IndexStep::Element(index), Value::Array(items)) => {
            let item = items.get(*index).ok_or(EvalError::IndexOutOfBounds {
                index: *index,
                len: items.len(),
            })?;
            out.push(item);
        }

        (IndexStep::Iterate, Value::Array(items)) => out.extend(items.iter()),
        (IndexStep::Iterate, Value::Object(map)) => out.extend(map.values()),

        _ => {
            return Err(EvalError::TypeError {
                step: step.to_string(),
                found: value.type_name(),
            });
        }
    }
    Ok(())
}

/// Builds one object per combination of field values, per input value.
///
/// The first declared field varies slowest and the last one fastest. A field
/// yielding no values yields no objects for that input.
fn construct_objects(stream: Stream, assigns: &[Assign]) -> Result<Stream, EvalError> {
    let mut output = Stream::new();

    for value in stream {
        let mut partials = vec![IndexMap::new()];

        for assign in assigns {
            let field = evaluate(Stream::single(value.clone()), &assign.value)?;

            let mut next = Vec::with_capacity(partials.len() * field.len());
            for partial in &partials {
                for item in &field {
                    let mut object: IndexMap<String, Value> = partial.clone();
                    object.insert(assign.key.clone(), item.clone());
                    next.push(object);
                }
            }
            partials = next;
        }

        for object in partials {
            output.push(Value::Object(object));
        }
    }

    Ok(output)
}
