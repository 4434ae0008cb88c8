//! Child flattening.

use crate::node::{ElementKind, Node};
use crate::props::Children;

/// Flattens a child tree into a flat sibling list.
///
/// Sequences flatten depth-first and empty nodes disappear. Text leaves
/// survive even when empty; whether they emit is decided later.
pub fn flatten(node: &Node) -> Vec<Node> {
    let mut out = Vec::new();
    flatten_into(node, &mut out);
    out
}

/// Appends the flattened form of `node` onto `out`.
pub fn flatten_into(node: &Node, out: &mut Vec<Node>) {
    match node {
        Node::Empty => {}
        Node::Sequence(children) => {
            for child in children {
                flatten_into(child, out);
            }
        }
        other => out.push(other.clone()),
    }
}

/// Flattens the root of a whole walk.
///
/// A non-element root flattens normally. A fragment root unwraps one
/// level, so a fragment around a single element leaves that element at
/// the top of the walk; any other element stays a single child.
pub fn flatten_top_level(root: &Node) -> Vec<Node> {
    let element = match root {
        Node::Element(element) => element,
        other => return flatten(other),
    };
    if !matches!(element.kind, ElementKind::Fragment) {
        return vec![root.clone()];
    }
    match element.props.children() {
        Children::Node(inner) => match inner {
            Node::Element(_) => vec![inner.clone()],
            other => flatten(other),
        },
        Children::Render(_) => Vec::new(),
    }
}
