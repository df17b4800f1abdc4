//! Text rendering of gq values.
//!
//! Values render in an indented form by default (two spaces per nesting
//! level) and on a single line in compact mode. Object keys keep their
//! stored order, floats always print with two decimals.
//!
//! # Examples
//!
//! ```
//! use gq::Value;
//! use gq::output::{render, render_compact};
//!
//! let value = Value::Array(vec![Value::Integer(1), Value::Float(2.5)]);
//!
//! assert_eq!(render(&value), "[\n  1,\n  2.50\n]");
//! assert_eq!(render_compact(&value), "[1,2.50]");
//! ```

use indexmap::IndexMap;

use crate::{stream::Stream, value::Value};

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => format!("{:.2}", n),
            Value::String(s) => format!("\"{}\"", self.escape_string(s)),
            Value::Array(arr) => self.print_array(arr, indent),
            Value::Object(obj) => self.print_object(obj, indent),
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let items: Vec<String> = arr
                .iter()
                .map(|v| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), self.indent(indent))
        } else {
            let items: Vec<String> = arr.iter().map(|v| self.print_value(v, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(&self, obj: &IndexMap<String, Value>, indent: usize) -> String {
        if obj.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", items.join(",\n"), self.indent(indent))
        } else {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!(
                        "\"{}\":{}",
                        self.escape_string(k),
                        self.print_value(v, indent)
                    )
                })
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
                c => vec![c],
            })
            .collect()
    }
}

/// Renders a value in the indented form.
///
/// ```
/// use gq::Value;
/// use gq::output::render;
/// use indexmap::IndexMap;
///
/// let mut obj = IndexMap::new();
/// obj.insert("name".to_string(), Value::String("Alice".to_string()));
/// obj.insert("age".to_string(), Value::Integer(30));
///
/// assert_eq!(
///     render(&Value::Object(obj)),
///     "{\n  \"name\": \"Alice\",\n  \"age\": 30\n}"
/// );
/// ```
pub fn render(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}

/// Renders a value on a single line.
pub fn render_compact(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Renders every value of `stream`, each followed by a newline.
pub fn render_stream(stream: &Stream, compact: bool) -> String {
    let printer = JsonPrinter::new(!compact);
    stream
        .iter()
        .map(|v| format!("{}\n", printer.print(v)))
        .collect()
}
