//! Indented dump of a syntax tree, one line per node.

use super::nodes::Node;

const INDENT: usize = 2;

/// Renders `node` as an indented outline.
///
/// ```
/// use gq::ast::{dump, IndexStep, Node};
///
/// let tree = Node::Array(Box::new(Node::Index(vec![IndexStep::Iterate])));
/// assert_eq!(dump(&tree), "Array\n  Index: Iterate\n");
/// ```
pub fn dump(node: &Node) -> String {
    let mut out = String::new();
    dump_node(&mut out, node, 0);
    out
}

fn dump_node(out: &mut String, node: &Node, depth: usize) {
    let pad = " ".repeat(depth * INDENT);
    match node {
        Node::Index(steps) => {
            let steps: Vec<String> = steps.iter().map(|s| s.to_string()).collect();
            out.push_str(&format!("{}Index: {}\n", pad, steps.join(", ")));
        }
        Node::Pipe { left, right } => {
            out.push_str(&format!("{}Pipe\n", pad));
            dump_node(out, left, depth + 1);
            dump_node(out, right, depth + 1);
        }
        Node::Array(body) => {
            out.push_str(&format!("{}Array\n", pad));
            dump_node(out, body, depth + 1);
        }
        Node::Object(assigns) => {
            out.push_str(&format!("{}Dict\n", pad));
            let assign_pad = " ".repeat((depth + 1) * INDENT);
            for assign in assigns {
                out.push_str(&format!("{}Assign: {}\n", assign_pad, assign.key));
                dump_node(out, &assign.value, depth + 2);
            }
        }
    }
}
