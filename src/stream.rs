//! The ordered value sequence threaded between evaluation stages.

use crate::value::Value;

/// An ordered, possibly empty sequence of values.
///
/// Order is significant and duplicates are allowed. Every evaluation step
/// takes a stream and builds a fresh one; streams are never shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stream {
    values: Vec<Value>,
}

impl Stream {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stream holding exactly one value.
    pub fn single(value: Value) -> Self {
        Stream {
            values: vec![value],
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn push(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Appends every value of `other`, keeping its order.
    pub fn append(&mut self, other: Stream) {
        self.values.extend(other.values);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Collapses the stream into a single array value.
    pub fn into_array(self) -> Value {
        Value::Array(self.values)
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl From<Vec<Value>> for Stream {
    fn from(values: Vec<Value>) -> Self {
        Stream { values }
    }
}

impl FromIterator<Value> for Stream {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Stream {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Stream {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Stream {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
