//! The declarative element tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use compact_str::CompactString;

use crate::component::{FunctionComponent, StatefulComponent};
use crate::props::{PropValue, Props};
use crate::shared_value::SharedValue;

/// One node of the declarative tree.
#[derive(Debug, Clone, Default)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// Text leaf.
    Text(CompactString),
    /// Numeric leaf, stringified on output.
    Number(f64),
    /// Element with props and children.
    Element(Element),
    /// Ordered run of sibling nodes.
    Sequence(Vec<Node>),
}

impl Node {
    /// Text leaf from anything string-like.
    pub fn text(text: impl Into<CompactString>) -> Node {
        Node::Text(text.into())
    }

    /// Host element shorthand.
    pub fn host(tag: impl Into<CompactString>, props: Props) -> Node {
        Node::Element(Element::host(tag, props))
    }

    /// Fragment shorthand.
    pub fn fragment(children: impl Into<Node>) -> Node {
        Node::Element(Element::fragment(children))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Node {
        Node::Text(CompactString::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Node {
        Node::Text(CompactString::from(value))
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Node {
        Node::Number(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Node {
        Node::Number(value as f64)
    }
}

// Booleans render nothing, true and false alike.
impl From<bool> for Node {
    fn from(_: bool) -> Node {
        Node::Empty
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Node {
        Node::Element(value)
    }
}

impl From<Vec<Node>> for Node {
    fn from(value: Vec<Node>) -> Node {
        Node::Sequence(value)
    }
}

/// Reference slot forwarded to forward-ref renderers.
///
/// Markup rendering never writes to it; it exists so ref-taking components
/// keep their shape on the server.
#[derive(Debug, Clone, Default)]
pub struct NodeRef(Rc<RefCell<Option<PropValue>>>);

impl NodeRef {
    pub fn new() -> NodeRef {
        NodeRef::default()
    }

    /// Stores a value in the slot.
    pub fn set(&self, value: PropValue) {
        *self.0.borrow_mut() = Some(value);
    }

    /// Reads the slot, if anything was stored.
    pub fn get(&self) -> Option<PropValue> {
        self.0.borrow().clone()
    }
}

/// An element node.
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub props: Props,
    pub node_ref: Option<NodeRef>,
}

impl Element {
    /// Element of an arbitrary kind.
    pub fn new(kind: ElementKind, props: Props) -> Element {
        Element {
            kind,
            props,
            node_ref: None,
        }
    }

    /// Host element with a tag name.
    pub fn host(tag: impl Into<CompactString>, props: Props) -> Element {
        Element::new(ElementKind::Host(tag.into()), props)
    }

    /// Transparent fragment around a child tree.
    pub fn fragment(children: impl Into<Node>) -> Element {
        Element::new(
            ElementKind::Fragment,
            Props::new().with_children(children),
        )
    }

    /// Element rendered by a plain function component.
    pub fn function(component: FunctionComponent, props: Props) -> Element {
        Element::new(ElementKind::Function(component), props)
    }

    /// Element rendered by an instance-based component.
    pub fn stateful(component: Rc<dyn StatefulComponent>, props: Props) -> Element {
        Element::new(ElementKind::Stateful(component), props)
    }

    /// Forward-ref wrapper element.
    pub fn forward_ref(render: RefRender, props: Props) -> Element {
        Element::new(ElementKind::ForwardRef(render), props)
    }

    /// Memoized wrapper around another element kind.
    pub fn memo(inner: ElementKind, props: Props) -> Element {
        Element::new(ElementKind::Memo(Rc::new(inner)), props)
    }

    /// Attaches a reference slot.
    pub fn with_ref(mut self, node_ref: NodeRef) -> Element {
        self.node_ref = Some(node_ref);
        self
    }
}

/// What an element's type slot holds.
#[derive(Clone)]
pub enum ElementKind {
    /// Host tag name, written to markup verbatim.
    Host(CompactString),
    /// Plain function component.
    Function(FunctionComponent),
    /// Instance-based component with lifecycle hooks.
    Stateful(Rc<dyn StatefulComponent>),
    /// Transparent grouping wrapper.
    Fragment,
    /// Transparent on the server.
    StrictMode,
    /// Transparent on the server.
    Profiler,
    /// Transparent on the server.
    ConcurrentMode,
    /// Unsupported when rendering markup; fails fast.
    Suspense,
    /// Unsupported when rendering markup; fails fast.
    Lazy,
    /// Unsupported when rendering markup; fails fast.
    Portal,
    /// Provider half of a shared-value definition.
    Provider(SharedValue),
    /// Consumer half of a shared-value definition.
    Consumer(SharedValue),
    /// Wrapper whose render function also receives the element's ref.
    ForwardRef(RefRender),
    /// Memoized wrapper around another kind; transparent on the server.
    Memo(Rc<ElementKind>),
}

impl ElementKind {
    /// Category or component name used in diagnostics.
    pub fn name(&self) -> &str {
        match self {
            ElementKind::Host(tag) => tag,
            ElementKind::Function(component) => component.name(),
            ElementKind::Stateful(component) => component.name(),
            ElementKind::Fragment => "Fragment",
            ElementKind::StrictMode => "StrictMode",
            ElementKind::Profiler => "Profiler",
            ElementKind::ConcurrentMode => "ConcurrentMode",
            ElementKind::Suspense => "Suspense",
            ElementKind::Lazy => "Lazy",
            ElementKind::Portal => "Portal",
            ElementKind::Provider(_) => "Provider",
            ElementKind::Consumer(_) => "Consumer",
            ElementKind::ForwardRef(render) => render.name(),
            ElementKind::Memo(_) => "Memo",
        }
    }
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Host(tag) => write!(f, "Host({tag:?})"),
            ElementKind::Memo(inner) => write!(f, "Memo({inner:?})"),
            other => f.write_str(other.name()),
        }
    }
}

/// Render function behind a forward-ref element.
#[derive(Clone)]
pub struct RefRender {
    name: CompactString,
    render: Rc<dyn Fn(&Props, Option<&NodeRef>) -> Node>,
}

impl RefRender {
    pub fn new(
        name: impl Into<CompactString>,
        render: impl Fn(&Props, Option<&NodeRef>) -> Node + 'static,
    ) -> RefRender {
        RefRender {
            name: name.into(),
            render: Rc::new(render),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the wrapped render function.
    pub fn render(&self, props: &Props, node_ref: Option<&NodeRef>) -> Node {
        (self.render.as_ref())(props, node_ref)
    }
}

impl fmt::Debug for RefRender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RefRender({:?})", self.name)
    }
}
