//! Element props.
//!
//! Props are an ordered name/value list plus the element's children and an
//! optional raw inner HTML override. Order matters: attributes serialize in
//! insertion order, and setting an existing name replaces the value without
//! moving the entry.

use std::fmt;
use std::rc::Rc;

use compact_str::CompactString;

use crate::node::Node;
use crate::style::Style;

/// Event handler attached to a prop.
///
/// Handlers are never invoked while rendering markup and never serialize
/// to output.
pub type EventHandler = Rc<dyn Fn()>;

/// Children-as-function, rendered with the current shared value.
pub type ChildRender = Rc<dyn Fn(&PropValue) -> Node>;

/// One prop value.
#[derive(Clone)]
pub enum PropValue {
    /// Explicit null; the prop behaves as absent for markup purposes.
    Null,
    Bool(bool),
    Number(f64),
    Text(CompactString),
    /// Stringifies as comma-joined items.
    List(Vec<PropValue>),
    /// Inline style map; only meaningful on the `style` prop.
    Style(Style),
    /// Never emitted to markup.
    Handler(EventHandler),
}

impl PropValue {
    /// False for `Null`, `false`, zero, NaN and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            PropValue::Null => false,
            PropValue::Bool(value) => *value,
            PropValue::Number(value) => *value != 0.0 && !value.is_nan(),
            PropValue::Text(value) => !value.is_empty(),
            PropValue::List(_) | PropValue::Style(_) | PropValue::Handler(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropValue::Null)
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &PropValue) -> bool {
        match (self, other) {
            (PropValue::Null, PropValue::Null) => true,
            (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
            (PropValue::Number(a), PropValue::Number(b)) => a == b,
            (PropValue::Text(a), PropValue::Text(b)) => a == b,
            (PropValue::List(a), PropValue::List(b)) => a == b,
            (PropValue::Style(a), PropValue::Style(b)) => a == b,
            // Handlers are opaque; equal only when they are the same closure.
            (PropValue::Handler(a), PropValue::Handler(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => f.write_str("Null"),
            PropValue::Bool(value) => write!(f, "Bool({value})"),
            PropValue::Number(value) => write!(f, "Number({value})"),
            PropValue::Text(value) => write!(f, "Text({value:?})"),
            PropValue::List(items) => f.debug_tuple("List").field(items).finish(),
            PropValue::Style(style) => f.debug_tuple("Style").field(style).finish(),
            PropValue::Handler(_) => f.write_str("Handler"),
        }
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> PropValue {
        PropValue::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> PropValue {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> PropValue {
        PropValue::Number(value as f64)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> PropValue {
        PropValue::Text(CompactString::from(value))
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> PropValue {
        PropValue::Text(CompactString::from(value))
    }
}

impl From<CompactString> for PropValue {
    fn from(value: CompactString) -> PropValue {
        PropValue::Text(value)
    }
}

impl From<Style> for PropValue {
    fn from(value: Style) -> PropValue {
        PropValue::Style(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> PropValue {
        PropValue::List(value)
    }
}

/// Children attached to an element.
#[derive(Clone)]
pub enum Children {
    /// Ordinary child tree.
    Node(Node),
    /// Children-as-function, used by consumer elements.
    Render(ChildRender),
}

impl Children {
    /// True when no child tree is attached.
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::Node(Node::Empty))
    }
}

impl Default for Children {
    fn default() -> Children {
        Children::Node(Node::Empty)
    }
}

impl fmt::Debug for Children {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Children::Node(node) => f.debug_tuple("Node").field(node).finish(),
            Children::Render(_) => f.write_str("Render"),
        }
    }
}

/// Props of a single element.
///
/// Children are boxed: a child tree contains elements, whose props contain
/// children again, and the cycle needs one indirection to have a size.
#[derive(Debug, Clone, Default)]
pub struct Props {
    attrs: Vec<(CompactString, PropValue)>,
    children: Box<Children>,
    inner_html: Option<CompactString>,
}

impl Props {
    /// Creates empty props.
    pub fn new() -> Props {
        Props::default()
    }

    /// Sets a prop, replacing an existing entry in place.
    pub fn set(&mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Removes a prop, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<PropValue> {
        let index = self.attrs.iter().position(|(existing, _)| existing == name)?;
        Some(self.attrs.remove(index).1)
    }

    /// Builder form of [`set`](Props::set).
    pub fn with(mut self, name: impl Into<CompactString>, value: impl Into<PropValue>) -> Props {
        self.set(name, value);
        self
    }

    /// Looks a prop up by name.
    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Looks a prop up, treating explicit null as absent.
    pub fn get_defined(&self, name: &str) -> Option<&PropValue> {
        self.get(name).filter(|value| !value.is_null())
    }

    /// Whether the prop is present at all, null included.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates props in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, &PropValue)> {
        self.attrs.iter().map(|(name, value)| (name, value))
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The element's children.
    pub fn children(&self) -> &Children {
        &self.children
    }

    pub fn set_children(&mut self, children: Children) {
        self.children = Box::new(children);
    }

    /// Builder that attaches a child tree.
    pub fn with_children(mut self, children: impl Into<Node>) -> Props {
        self.children = Box::new(Children::Node(children.into()));
        self
    }

    /// Builder that attaches children-as-function.
    pub fn with_render_children(
        mut self,
        render: impl Fn(&PropValue) -> Node + 'static,
    ) -> Props {
        self.children = Box::new(Children::Render(Rc::new(render)));
        self
    }

    /// Raw inner HTML override, emitted unescaped instead of children.
    pub fn inner_html(&self) -> Option<&CompactString> {
        self.inner_html.as_ref()
    }

    pub fn set_inner_html(&mut self, html: impl Into<CompactString>) {
        self.inner_html = Some(html.into());
    }

    /// Builder form of [`set_inner_html`](Props::set_inner_html).
    pub fn with_inner_html(mut self, html: impl Into<CompactString>) -> Props {
        self.inner_html = Some(html.into());
        self
    }
}
