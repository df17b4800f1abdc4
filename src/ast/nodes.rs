use std::fmt;

/// One step of an index chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexStep {
    /// Identity (`.`)
    Root,

    /// Object field lookup
    ///
    /// # Examples
    /// ```text
    /// .name
    /// ."first name"
    /// .["name"]
    /// ```
    Field(String),

    /// Array element lookup
    ///
    /// # Example
    /// ```text
    /// .[2]
    /// ```
    Element(usize),

    /// Fan out over every element of an array or every value of an object
    ///
    /// # Example
    /// ```text
    /// .[]
    /// ```
    Iterate,
}

impl fmt::Display for IndexStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexStep::Root => f.write_str("Root"),
            IndexStep::Field(name) => write!(f, "Field({})", name),
            IndexStep::Element(i) => write!(f, "Element({})", i),
            IndexStep::Iterate => f.write_str("Iterate"),
        }
    }
}

/// A parsed query expression.
///
/// The tree is built once per query and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Index chain; the parser guarantees at least one step
    ///
    /// # Examples
    /// ```text
    /// .            // [Root]
    /// .a.b[0]      // [Field(a), Field(b), Element(0)]
    /// .items[].id  // [Field(items), Iterate, Field(id)]
    /// ```
    Index(Vec<IndexStep>),

    /// `left | right`; `right` runs once per value of `left`
    Pipe { left: Box<Node>, right: Box<Node> },

    /// `[ body ]`, collects the whole stream of `body` into one array
    Array(Box<Node>),

    /// `{k1: e1, k2: e2, ...}` in declared order
    Object(Vec<Assign>),
}

impl Node {
    pub fn pipe(left: Node, right: Node) -> Self {
        Node::Pipe {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A `key: value` pair of an object constructor.
///
/// Only reachable through [`Node::Object`], so it is only ever evaluated by
/// the object constructor itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub key: String,
    pub value: Node,
}

impl Assign {
    pub fn new(key: impl Into<String>, value: Node) -> Self {
        Assign {
            key: key.into(),
            value,
        }
    }
}
