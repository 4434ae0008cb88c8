//! The pull-driven markup renderer.
//!
//! Rendering walks the element tree with an explicit frame stack instead of
//! recursion. Each frame owns a flat child list, a cursor into it, the
//! inherited context map and the footer to emit when the frame closes.
//! [`MarkupRenderer::pull`] drives the walk just far enough to produce the
//! requested number of bytes, so output can stream without rendering ahead.

use std::mem;
use std::rc::Rc;

use compact_str::{format_compact, CompactString};
use estampe_matrice::{
    flatten, flatten_top_level, Children, ContextMap, Element, ElementKind, Namespace, Node,
    PropValue, Props, SharedValue,
};

use crate::errors::RenderError;
use crate::escape::escape_html;
use crate::markup::{fmt_number, inner_text_markup, open_tag_markup, prop_text};
use crate::options::MarkupOptions;
use crate::resolve::resolve;
use crate::tags::{eats_leading_newline, is_void_tag};
use crate::warnings::{MarkupWarning, WarningCode};

/// What a stack frame is closing over.
#[derive(Debug)]
enum FrameKind {
    /// Transparent list of siblings.
    Plain,
    /// Host element, holding its lowercased tag.
    Host(CompactString),
    /// Provider scope; popping restores the shadowed shared value.
    Provider(SharedValue),
}

/// One frame of the walk.
#[derive(Debug)]
struct Frame {
    kind: FrameKind,
    namespace: Namespace,
    children: Vec<Node>,
    cursor: usize,
    context: Rc<ContextMap>,
    footer: CompactString,
}

/// Pull-driven renderer over one element tree.
///
/// A renderer walks its tree exactly once. Pull as much or as little output
/// as needed; [`destroy`](MarkupRenderer::destroy) abandons an unfinished
/// walk and unwinds any provider scopes still open.
pub struct MarkupRenderer {
    stack: Vec<Frame>,
    exhausted: bool,
    options: MarkupOptions,
    /// Set after a text node emits, cleared by markup boundaries. Drives
    /// the `<!-- -->` separator between adjacent text nodes.
    previous_was_text: bool,
    /// Value of the nearest enclosing select, consulted by options.
    current_select_value: Option<PropValue>,
    /// Provider scopes entered and not yet left, oldest first.
    open_providers: Vec<SharedValue>,
    warnings: Vec<MarkupWarning>,
    warned_option_children: bool,
}

impl MarkupRenderer {
    pub fn new(root: &Node, options: MarkupOptions) -> MarkupRenderer {
        let frame = Frame {
            kind: FrameKind::Plain,
            namespace: Namespace::Html,
            children: flatten_top_level(root),
            cursor: 0,
            context: Rc::new(ContextMap::default()),
            footer: CompactString::default(),
        };
        MarkupRenderer {
            stack: vec![frame],
            exhausted: false,
            options,
            previous_was_text: false,
            current_select_value: None,
            open_providers: Vec::new(),
            warnings: Vec::new(),
            warned_option_children: false,
        }
    }

    /// Whether the walk has finished or been destroyed.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Warnings collected so far, in emission order.
    pub fn warnings(&self) -> &[MarkupWarning] {
        &self.warnings
    }

    /// Takes the collected warnings, leaving the renderer's list empty.
    pub fn take_warnings(&mut self) -> Vec<MarkupWarning> {
        mem::take(&mut self.warnings)
    }

    /// Renders at least `max_bytes` of output, unless the walk ends first.
    ///
    /// Returns `Ok(None)` once exhausted. The final chunk may be shorter
    /// than requested, and any chunk may run longer; a frame's worth of
    /// markup is never split.
    pub fn pull(&mut self, max_bytes: usize) -> Result<Option<String>, RenderError> {
        if self.exhausted {
            return Ok(None);
        }
        let mut out = String::new();
        while out.len() < max_bytes {
            if self.stack.is_empty() {
                self.exhausted = true;
                break;
            }
            let top = self.stack.len() - 1;
            if self.stack[top].cursor >= self.stack[top].children.len() {
                let frame = match self.stack.pop() {
                    Some(frame) => frame,
                    None => break,
                };
                if !frame.footer.is_empty() {
                    self.previous_was_text = false;
                }
                match &frame.kind {
                    FrameKind::Host(tag) if tag.as_str() == "select" => {
                        self.current_select_value = None;
                    }
                    FrameKind::Provider(cell) => self.pop_provider(cell),
                    _ => {}
                }
                out.push_str(&frame.footer);
                continue;
            }
            let namespace = self.stack[top].namespace;
            let context = Rc::clone(&self.stack[top].context);
            let child = {
                let frame = &mut self.stack[top];
                let child = mem::take(&mut frame.children[frame.cursor]);
                frame.cursor += 1;
                child
            };
            let rendered = self.render_node(child, context, namespace)?;
            out.push_str(&rendered);
        }
        Ok(Some(out))
    }

    /// Abandons the walk, restoring every shared value still shadowed by
    /// an open provider scope. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        if self.exhausted {
            return;
        }
        self.exhausted = true;
        while let Some(open) = self.open_providers.pop() {
            open.pop();
        }
    }

    fn warn(&mut self, code: WarningCode, detail: impl Into<CompactString>) {
        self.warnings.push(MarkupWarning::new(code, detail));
    }

    /// Leaves one provider scope. The frame's cell is expected on top of
    /// the open list; a mismatch means scopes were unbalanced somehow.
    fn pop_provider(&mut self, cell: &SharedValue) {
        match self.open_providers.last() {
            Some(open) if open.same_cell(cell) => {}
            _ => self.warn(WarningCode::UnexpectedProviderPop, cell.label()),
        }
        if let Some(open) = self.open_providers.pop() {
            open.pop();
        }
    }

    fn render_text(&mut self, text: &str) -> String {
        if self.options.static_markup {
            return escape_html(text).into_owned();
        }
        if self.previous_was_text {
            let mut out = String::from("<!-- -->");
            out.push_str(&escape_html(text));
            return out;
        }
        self.previous_was_text = true;
        escape_html(text).into_owned()
    }

    /// Renders one child: leaf text directly, anything composite through
    /// resolution and then as a new frame or an open tag.
    fn render_node(
        &mut self,
        child: Node,
        context: Rc<ContextMap>,
        namespace: Namespace,
    ) -> Result<String, RenderError> {
        match &child {
            Node::Text(text) => {
                if text.is_empty() {
                    return Ok(String::new());
                }
                return Ok(self.render_text(text));
            }
            Node::Number(number) => {
                let text = fmt_number(*number);
                return Ok(self.render_text(&text));
            }
            _ => {}
        }
        let (settled, context) = resolve(child, context);
        match settled {
            Node::Empty => Ok(String::new()),
            node @ (Node::Text(_) | Node::Number(_) | Node::Sequence(_)) => {
                let children = flatten(&node);
                self.push_plain(children, context, namespace);
                Ok(String::new())
            }
            Node::Element(element) => self.render_element(element, context, namespace),
        }
    }

    fn render_element(
        &mut self,
        element: Element,
        context: Rc<ContextMap>,
        namespace: Namespace,
    ) -> Result<String, RenderError> {
        let Element {
            kind,
            props,
            node_ref,
        } = element;
        match kind {
            ElementKind::Host(tag) => Ok(self.render_host(tag, props, context, namespace)),
            ElementKind::Fragment
            | ElementKind::StrictMode
            | ElementKind::Profiler
            | ElementKind::ConcurrentMode => {
                let children = child_list(&props);
                self.push_plain(children, context, namespace);
                Ok(String::new())
            }
            ElementKind::Suspense => Err(RenderError::SuspenseUnsupported),
            ElementKind::Lazy => Err(RenderError::LazyUnsupported),
            ElementKind::Portal => Err(RenderError::PortalUnsupported),
            ElementKind::Provider(cell) => {
                let value = props.get("value").cloned().unwrap_or(PropValue::Null);
                cell.push(value);
                self.open_providers.push(cell.clone());
                let children = child_list(&props);
                self.stack.push(Frame {
                    kind: FrameKind::Provider(cell),
                    namespace,
                    children,
                    cursor: 0,
                    context,
                    footer: CompactString::default(),
                });
                Ok(String::new())
            }
            ElementKind::Consumer(cell) => {
                let children = match props.children() {
                    Children::Render(render) => flatten(&(render.as_ref())(&cell.current())),
                    Children::Node(_) => {
                        self.warn(WarningCode::ConsumerChildrenNotFunction, cell.label());
                        Vec::new()
                    }
                };
                self.push_plain(children, context, namespace);
                Ok(String::new())
            }
            ElementKind::ForwardRef(inner) => {
                let rendered = inner.render(&props, node_ref.as_ref());
                let children = flatten(&rendered);
                self.push_plain(children, context, namespace);
                Ok(String::new())
            }
            // A memo wrapper is transparent here; re-wrap the inner kind
            // with the same props and ref as a single unflattened child.
            ElementKind::Memo(inner) => {
                let children = vec![Node::Element(Element {
                    kind: (*inner).clone(),
                    props,
                    node_ref,
                })];
                self.push_plain(children, context, namespace);
                Ok(String::new())
            }
            kind @ (ElementKind::Function(_) | ElementKind::Stateful(_)) => Err(
                RenderError::InvalidElement(CompactString::from(kind.name())),
            ),
        }
    }

    /// Writes a host element's open tag and pushes its frame.
    fn render_host(
        &mut self,
        tag_verbatim: CompactString,
        props: Props,
        context: Rc<ContextMap>,
        parent_namespace: Namespace,
    ) -> String {
        let tag = CompactString::from(tag_verbatim.to_lowercase());
        let namespace = Namespace::of_element(parent_namespace, &tag);
        if namespace == Namespace::Html && tag != tag_verbatim {
            self.warn(WarningCode::TagCasing, tag_verbatim.as_str());
        }

        let props = match tag.as_str() {
            "input" => self.prepare_input(props),
            "textarea" => self.prepare_textarea(props),
            "select" => self.prepare_select(props),
            "option" => self.prepare_option(props),
            _ => props,
        };

        let is_root = self.stack.len() == 1;
        let mut out = open_tag_markup(
            &tag_verbatim,
            &tag,
            &props,
            self.options.static_markup,
            is_root,
        );
        let mut footer = CompactString::default();
        if is_void_tag(&tag) {
            out.push_str("/>");
        } else {
            out.push('>');
            footer = format_compact!("</{}>", tag_verbatim);
        }

        let children = match inner_text_markup(&props) {
            Some(inner) => {
                if eats_leading_newline(&tag) && inner.starts_with('\n') {
                    out.push('\n');
                }
                out.push_str(&inner);
                Vec::new()
            }
            None => child_list(&props),
        };

        let child_namespace = Namespace::for_children(parent_namespace, &tag_verbatim);
        self.stack.push(Frame {
            kind: FrameKind::Host(tag),
            namespace: child_namespace,
            children,
            cursor: 0,
            context,
            footer,
        });
        self.previous_was_text = false;
        out
    }

    fn push_plain(&mut self, children: Vec<Node>, context: Rc<ContextMap>, namespace: Namespace) {
        self.stack.push(Frame {
            kind: FrameKind::Plain,
            namespace,
            children,
            cursor: 0,
            context,
            footer: CompactString::default(),
        });
    }

    /// Collapses controlled and default props into the markup form. The
    /// rebuilt props put `type` first and keep every other attribute in
    /// its given position; a value or checked state fed by its default
    /// counterpart joins at the end.
    fn prepare_input(&mut self, props: Props) -> Props {
        if props.has("checked") && props.has("defaultChecked") {
            self.warn(WarningCode::InputCheckedAndDefault, "");
        }
        if props.has("value") && props.has("defaultValue") {
            self.warn(WarningCode::InputValueAndDefault, "");
        }
        let value = props
            .get_defined("value")
            .or_else(|| props.get_defined("defaultValue"))
            .cloned();
        let checked = props
            .get_defined("checked")
            .or_else(|| props.get_defined("defaultChecked"))
            .cloned();

        let mut rebuilt = Props::new();
        rebuilt.set_children(props.children().clone());
        if let Some(html) = props.inner_html() {
            rebuilt.set_inner_html(html.clone());
        }
        if let Some(kind) = props.get("type") {
            rebuilt.set("type", kind.clone());
        }
        for (name, given) in props.iter() {
            match name.as_str() {
                "type" | "defaultChecked" | "defaultValue" => {}
                "value" => rebuilt.set("value", value.clone().unwrap_or(PropValue::Null)),
                "checked" => rebuilt.set("checked", checked.clone().unwrap_or(PropValue::Null)),
                _ => rebuilt.set(name.clone(), given.clone()),
            }
        }
        if !props.has("value") {
            if let Some(value) = value {
                rebuilt.set("value", value);
            }
        }
        if !props.has("checked") {
            if let Some(checked) = checked {
                rebuilt.set("checked", checked);
            }
        }
        rebuilt
    }

    /// Folds the value, default value or children into the textarea's
    /// text content.
    fn prepare_textarea(&mut self, mut props: Props) -> Props {
        if props.has("value") && props.has("defaultValue") {
            self.warn(WarningCode::TextareaValueAndDefault, "");
        }
        let initial = match props.get_defined("value") {
            Some(value) => prop_text(value),
            None => {
                let mut fallback = props.get_defined("defaultValue").map(prop_text);
                if !props.children().is_empty() {
                    self.warn(WarningCode::TextareaChildrenAsValue, "");
                    // Children only fill in when no default value exists.
                    if fallback.is_none() {
                        let (folded, _) = leaf_text(props.children());
                        fallback = Some(folded.unwrap_or_default());
                    }
                }
                fallback.unwrap_or_default()
            }
        };
        props.remove("value");
        props.set_children(Children::Node(Node::Text(initial)));
        props
    }

    /// Records the select's value for its option children and strips the
    /// controlled prop from the markup.
    fn prepare_select(&mut self, mut props: Props) -> Props {
        let multiple = props.get("multiple").map_or(false, PropValue::is_truthy);
        for name in ["value", "defaultValue"] {
            let Some(value) = props.get_defined(name) else {
                continue;
            };
            let is_list = matches!(value, PropValue::List(_));
            if multiple && !is_list {
                self.warn(WarningCode::SelectValueNotArray, name);
            } else if !multiple && is_list {
                self.warn(WarningCode::SelectValueIsArray, name);
            }
        }
        if props.has("value") && props.has("defaultValue") {
            self.warn(WarningCode::SelectValueAndDefault, "");
        }
        self.current_select_value = props
            .get_defined("value")
            .or_else(|| props.get_defined("defaultValue"))
            .cloned();
        props.remove("value");
        props
    }

    /// Inside a valued select, matches the option against the selection
    /// and rebuilds its props with the selected flag first and the
    /// flattened text as content.
    fn prepare_option(&mut self, props: Props) -> Props {
        let (content, skipped) = leaf_text(props.children());
        if skipped > 0 && !self.warned_option_children {
            self.warned_option_children = true;
            self.warn(WarningCode::OptionChildIgnored, "");
        }
        let Some(select_value) = self.current_select_value.clone() else {
            return props;
        };
        let own_value = props
            .get_defined("value")
            .map(prop_text)
            .or_else(|| content.clone());
        let selected = match own_value {
            Some(own) => match &select_value {
                PropValue::List(items) => items.iter().any(|item| prop_text(item) == own),
                single => prop_text(single) == own,
            },
            None => false,
        };

        let mut rebuilt = Props::new();
        if let Some(html) = props.inner_html() {
            rebuilt.set_inner_html(html.clone());
        }
        rebuilt.set("selected", PropValue::Bool(selected));
        for (name, value) in props.iter() {
            if name.as_str() == "selected" {
                continue;
            }
            rebuilt.set(name.clone(), value.clone());
        }
        rebuilt.set_children(Children::Node(match content {
            Some(text) => Node::Text(text),
            None => Node::Empty,
        }));
        rebuilt
    }
}

impl Drop for MarkupRenderer {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn child_list(props: &Props) -> Vec<Node> {
    match props.children() {
        Children::Node(node) => flatten(node),
        Children::Render(_) => Vec::new(),
    }
}

/// Concatenated text of the leaf children, plus a count of element
/// children that contributed nothing. `None` means no child tree at all.
fn leaf_text(children: &Children) -> (Option<CompactString>, usize) {
    let node = match children {
        Children::Node(Node::Empty) | Children::Render(_) => return (None, 0),
        Children::Node(node) => node,
    };
    let mut text = CompactString::default();
    let mut skipped = 0;
    for child in flatten(node) {
        match child {
            Node::Text(part) => text.push_str(&part),
            Node::Number(number) => text.push_str(&fmt_number(number)),
            Node::Element(_) => skipped += 1,
            Node::Empty | Node::Sequence(_) => {}
        }
    }
    (Some(text), skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use estampe_matrice::{FunctionComponent, RefRender, Style};

    /// Renders to completion with live markup defaults.
    fn render_all(root: &Node) -> String {
        render_with_options(root, MarkupOptions::default())
    }

    /// Renders to completion as static markup.
    fn render_static(root: &Node) -> String {
        render_with_options(root, MarkupOptions::new().with_static_markup(true))
    }

    fn render_with_options(root: &Node, options: MarkupOptions) -> String {
        let mut renderer = MarkupRenderer::new(root, options);
        renderer.pull(usize::MAX).unwrap().unwrap_or_default()
    }

    fn div(props: Props, children: impl Into<Node>) -> Node {
        Node::host("div", props.with_children(children))
    }

    // === Text nodes ===

    #[test]
    fn test_adjacent_text_nodes_get_a_separator() {
        let tree = Node::Sequence(vec![Node::text("a"), Node::text("b")]);
        assert_eq!(render_all(&tree), "a<!-- -->b");
        assert_eq!(render_static(&tree), "ab");
    }

    #[test]
    fn test_empty_text_does_not_reset_adjacency() {
        let tree = Node::Sequence(vec![Node::text("a"), Node::text(""), Node::text("b")]);
        assert_eq!(render_all(&tree), "a<!-- -->b");
    }

    #[test]
    fn test_markup_boundary_resets_adjacency() {
        let tree = Node::Sequence(vec![
            Node::text("a"),
            Node::host("span", Props::new().with_children("s")),
            Node::text("b"),
        ]);
        assert_eq!(render_static(&tree), "a<span>s</span>b");
    }

    #[test]
    fn test_numbers_render_as_text() {
        assert_eq!(render_static(&Node::Number(0.0)), "0");
        assert_eq!(render_static(&Node::Number(-1.5)), "-1.5");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(
            render_static(&Node::text("<script>&\"'</script>")),
            "&lt;script&gt;&amp;&quot;&#x27;&lt;/script&gt;"
        );
    }

    // === Host elements ===

    #[test]
    fn test_root_marker() {
        let tree = div(Props::new().with("className", "box"), "hi");
        assert_eq!(
            render_all(&tree),
            "<div class=\"box\" data-estampe-root=\"\">hi</div>"
        );
        assert_eq!(render_static(&tree), "<div class=\"box\">hi</div>");
    }

    #[test]
    fn test_fragment_root_marks_its_child() {
        let tree = Node::fragment(Node::host("div", Props::new()));
        assert_eq!(render_all(&tree), "<div data-estampe-root=\"\"></div>");
    }

    #[test]
    fn test_every_top_level_host_gets_the_marker() {
        let tree = Node::fragment(Node::Sequence(vec![
            Node::host("div", Props::new()),
            Node::host("span", Props::new()),
        ]));
        assert_eq!(
            render_all(&tree),
            "<div data-estampe-root=\"\"></div><span data-estampe-root=\"\"></span>"
        );
    }

    #[test]
    fn test_void_tags_self_close() {
        assert_eq!(render_static(&Node::host("br", Props::new())), "<br/>");
        assert_eq!(
            render_static(&Node::host("img", Props::new().with("src", "x.png"))),
            "<img src=\"x.png\"/>"
        );
    }

    #[test]
    fn test_nested_elements() {
        let tree = div(
            Props::new(),
            Node::Sequence(vec![
                Node::host("span", Props::new().with_children("a")),
                Node::text("b"),
            ]),
        );
        assert_eq!(render_static(&tree), "<div><span>a</span>b</div>");
    }

    #[test]
    fn test_casing_warning_keeps_verbatim_tag() {
        let tree = Node::host("DIV", Props::new());
        let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::new().with_static_markup(true));
        assert_eq!(renderer.pull(usize::MAX).unwrap().as_deref(), Some("<DIV></DIV>"));
        let warnings = renderer.take_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, WarningCode::TagCasing);
        assert_eq!(warnings[0].detail, "DIV");
    }

    #[test]
    fn test_svg_keeps_camel_case_tags() {
        let blur = Node::host("feGaussianBlur", Props::new());
        let svg = Node::host("svg", Props::new().with_children(blur));
        let mut renderer = MarkupRenderer::new(&svg, MarkupOptions::new().with_static_markup(true));
        assert_eq!(
            renderer.pull(usize::MAX).unwrap().as_deref(),
            Some("<svg><feGaussianBlur></feGaussianBlur></svg>")
        );
        assert!(renderer.warnings().is_empty());
    }

    #[test]
    fn test_raw_inner_html() {
        let tree = div(Props::new().with_inner_html("<b>raw & unescaped</b>"), "ignored");
        assert_eq!(render_static(&tree), "<div><b>raw & unescaped</b></div>");
    }

    #[test]
    fn test_custom_element_attributes_pass_through() {
        let tree = Node::host("my-widget", Props::new().with("className", "x"));
        assert_eq!(render_static(&tree), "<my-widget className=\"x\"></my-widget>");
    }

    #[test]
    fn test_style_attribute() {
        let tree = Node::host(
            "div",
            Props::new().with("style", Style::new().with("opacity", 0.0).with("margin", 10.0)),
        );
        assert_eq!(render_static(&tree), "<div style=\"opacity:0;margin:10px\"></div>");
    }

    // === Newline-eating tags ===

    #[test]
    fn test_leading_newline_doubles_in_pre() {
        let pre = Node::host("pre", Props::new().with_children("\nfirst"));
        assert_eq!(render_static(&pre), "<pre>\n\nfirst</pre>");

        let plain = div(Props::new(), "\nfirst");
        assert_eq!(render_static(&plain), "<div>\nfirst</div>");
    }

    // === Form controls ===

    #[test]
    fn test_input_default_value_becomes_value() {
        let tree = Node::host(
            "input",
            Props::new().with("defaultValue", "d").with("className", "box"),
        );
        assert_eq!(render_static(&tree), "<input class=\"box\" value=\"d\"/>");
    }

    #[test]
    fn test_input_type_serializes_first() {
        let tree = Node::host("input", Props::new().with("value", "v").with("type", "text"));
        assert_eq!(render_static(&tree), "<input type=\"text\" value=\"v\"/>");
    }

    #[test]
    fn test_input_checked_states() {
        let checked = Node::host("input", Props::new().with("defaultChecked", true));
        assert_eq!(render_static(&checked), "<input checked=\"\"/>");

        let unchecked = Node::host("input", Props::new().with("checked", false));
        assert_eq!(render_static(&unchecked), "<input/>");
    }

    #[test]
    fn test_input_controlled_and_default_warns() {
        let tree = Node::host(
            "input",
            Props::new().with("value", "a").with("defaultValue", "b"),
        );
        let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::new().with_static_markup(true));
        assert_eq!(renderer.pull(usize::MAX).unwrap().as_deref(), Some("<input value=\"a\"/>"));
        assert_eq!(renderer.warnings().len(), 1);
        assert_eq!(renderer.warnings()[0].code, WarningCode::InputValueAndDefault);
    }

    #[test]
    fn test_textarea_value_becomes_content() {
        let tree = Node::host("textarea", Props::new().with("value", "line"));
        assert_eq!(render_static(&tree), "<textarea>line</textarea>");

        let with_newline = Node::host("textarea", Props::new().with("value", "\nA"));
        assert_eq!(render_static(&with_newline), "<textarea>\n\nA</textarea>");
    }

    #[test]
    fn test_textarea_children_fold_into_value() {
        let tree = Node::host("textarea", Props::new().with_children("typed"));
        let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::new().with_static_markup(true));
        assert_eq!(
            renderer.pull(usize::MAX).unwrap().as_deref(),
            Some("<textarea>typed</textarea>")
        );
        assert_eq!(renderer.warnings().len(), 1);
        assert_eq!(renderer.warnings()[0].code, WarningCode::TextareaChildrenAsValue);
    }

    #[test]
    fn test_textarea_default_value_fallback() {
        let tree = Node::host("textarea", Props::new().with("defaultValue", "fallback"));
        assert_eq!(render_static(&tree), "<textarea>fallback</textarea>");

        let empty = Node::host("textarea", Props::new());
        assert_eq!(render_static(&empty), "<textarea></textarea>");
    }

    #[test]
    fn test_textarea_default_value_beats_children() {
        let tree = Node::host(
            "textarea",
            Props::new().with("defaultValue", "d").with_children("typed"),
        );
        let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::new().with_static_markup(true));
        assert_eq!(
            renderer.pull(usize::MAX).unwrap().as_deref(),
            Some("<textarea>d</textarea>")
        );
        assert_eq!(renderer.warnings().len(), 1);
        assert_eq!(renderer.warnings()[0].code, WarningCode::TextareaChildrenAsValue);
    }

    #[test]
    fn test_select_marks_matching_option() {
        let options = Node::Sequence(vec![
            Node::host("option", Props::new().with_children("a")),
            Node::host("option", Props::new().with_children("b")),
        ]);
        let tree = Node::host(
            "select",
            Props::new().with("value", "b").with_children(options),
        );
        assert_eq!(
            render_static(&tree),
            "<select><option>a</option><option selected=\"\">b</option></select>"
        );
    }

    #[test]
    fn test_select_multiple_matches_each_value() {
        let options = Node::Sequence(vec![
            Node::host("option", Props::new().with_children("a")),
            Node::host("option", Props::new().with_children("b")),
            Node::host("option", Props::new().with_children("c")),
        ]);
        let tree = Node::host(
            "select",
            Props::new()
                .with("multiple", true)
                .with(
                    "value",
                    vec![PropValue::from("a"), PropValue::from("c")],
                )
                .with_children(options),
        );
        assert_eq!(
            render_static(&tree),
            "<select multiple=\"\"><option selected=\"\">a</option><option>b</option><option selected=\"\">c</option></select>"
        );
    }

    #[test]
    fn test_option_value_prop_beats_content() {
        let option = Node::host(
            "option",
            Props::new().with("value", 2).with_children("two"),
        );
        let tree = Node::host(
            "select",
            Props::new().with("value", "2").with_children(option),
        );
        assert_eq!(
            render_static(&tree),
            "<select><option selected=\"\" value=\"2\">two</option></select>"
        );
    }

    #[test]
    fn test_option_outside_select_is_untouched() {
        let tree = Node::host(
            "option",
            Props::new().with("selected", true).with_children("x"),
        );
        assert_eq!(render_static(&tree), "<option selected=\"\">x</option>");
    }

    #[test]
    fn test_select_shape_warnings() {
        let scalar = Node::host(
            "select",
            Props::new().with("multiple", true).with("value", "a"),
        );
        let mut renderer = MarkupRenderer::new(&scalar, MarkupOptions::default());
        renderer.pull(usize::MAX).unwrap();
        assert_eq!(renderer.warnings().len(), 1);
        assert_eq!(renderer.warnings()[0].code, WarningCode::SelectValueNotArray);
        assert_eq!(renderer.warnings()[0].detail, "value");

        let list = Node::host(
            "select",
            Props::new().with("value", vec![PropValue::from("a")]),
        );
        let mut renderer = MarkupRenderer::new(&list, MarkupOptions::default());
        renderer.pull(usize::MAX).unwrap();
        assert_eq!(renderer.warnings().len(), 1);
        assert_eq!(renderer.warnings()[0].code, WarningCode::SelectValueIsArray);
    }

    // === Shared values ===

    #[test]
    fn test_provider_scopes_nest_and_restore() {
        let theme = SharedValue::new("Theme", PropValue::from("light"));
        let tagged = |cell: &SharedValue, tag: &'static str| {
            Node::Element(cell.consumer(move |value| {
                Node::host(tag, Props::new().with("title", value.clone()))
            }))
        };
        let inner = theme.provider("sepia", tagged(&theme, "i"));
        let outer = theme.provider(
            "dark",
            Node::Sequence(vec![Node::Element(inner), tagged(&theme, "em")]),
        );
        let tree = Node::Sequence(vec![Node::Element(outer), tagged(&theme, "u")]);
        assert_eq!(
            render_static(&tree),
            "<i title=\"sepia\"></i><em title=\"dark\"></em><u title=\"light\"></u>"
        );
        assert_eq!(theme.current(), PropValue::from("light"));
    }

    #[test]
    fn test_destroy_restores_shadowed_values() {
        let theme = SharedValue::new("Theme", PropValue::from("light"));
        let tree = Node::Element(theme.provider(
            "dark",
            Node::host("div", Props::new().with_children("body text")),
        ));
        let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::default());
        let chunk = renderer.pull(5).unwrap().unwrap();
        assert!(!chunk.is_empty());
        assert!(!renderer.is_exhausted());
        assert_eq!(theme.current(), PropValue::from("dark"));

        renderer.destroy();
        assert_eq!(theme.current(), PropValue::from("light"));
        assert_eq!(renderer.pull(usize::MAX).unwrap(), None);
    }

    #[test]
    fn test_consumer_requires_function_children() {
        let theme = SharedValue::new("Theme", PropValue::from("light"));
        let consumer = Element::new(
            ElementKind::Consumer(theme.clone()),
            Props::new().with_children("oops"),
        );
        let mut renderer =
            MarkupRenderer::new(&Node::Element(consumer), MarkupOptions::default());
        assert_eq!(renderer.pull(usize::MAX).unwrap().as_deref(), Some(""));
        assert_eq!(renderer.warnings().len(), 1);
        assert_eq!(
            renderer.warnings()[0].code,
            WarningCode::ConsumerChildrenNotFunction
        );
    }

    // === Composite elements ===

    #[test]
    fn test_function_components_render_through() {
        let badge = FunctionComponent::new("Badge", |props, _context| {
            let label = props.get("label").cloned().unwrap_or(PropValue::Null);
            Node::host("span", Props::new().with("title", label).with_children("*"))
        });
        let tree = Node::Element(Element::function(badge, Props::new().with("label", "new")));
        assert_eq!(render_static(&tree), "<span title=\"new\">*</span>");
    }

    #[test]
    fn test_memo_wrapper_is_transparent() {
        let memo = Element::memo(
            ElementKind::Host("div".into()),
            Props::new().with("id", "m").with_children("inner"),
        );
        assert_eq!(render_static(&Node::Element(memo)), "<div id=\"m\">inner</div>");
    }

    #[test]
    fn test_forward_ref_renders_with_props() {
        let anchor = RefRender::new("Anchor", |props, _node_ref| {
            let href = props.get("href").cloned().unwrap_or(PropValue::Null);
            Node::host("a", Props::new().with("href", href))
        });
        let tree = Node::Element(Element::forward_ref(
            anchor,
            Props::new().with("href", "#top"),
        ));
        assert_eq!(render_static(&tree), "<a href=\"#top\"></a>");
    }

    #[test]
    fn test_unsupported_kinds_fail_fast() {
        for (kind, expected) in [
            (ElementKind::Suspense, RenderError::SuspenseUnsupported),
            (ElementKind::Lazy, RenderError::LazyUnsupported),
            (ElementKind::Portal, RenderError::PortalUnsupported),
        ] {
            let tree = Node::Element(Element::new(kind, Props::new()));
            let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::default());
            assert_eq!(renderer.pull(usize::MAX), Err(expected));
        }
    }

    // === Pull contract ===

    #[test]
    fn test_exhaustion_contract() {
        let mut renderer = MarkupRenderer::new(&Node::text("x"), MarkupOptions::default());
        assert!(!renderer.is_exhausted());
        assert_eq!(renderer.pull(usize::MAX).unwrap().as_deref(), Some("x"));
        assert!(renderer.is_exhausted());
        assert_eq!(renderer.pull(usize::MAX).unwrap(), None);
    }

    #[test]
    fn test_single_byte_pulls_match_one_shot() {
        let theme = SharedValue::new("Theme", PropValue::from("plain"));
        let tree = div(
            Props::new().with("className", "outer"),
            Node::Sequence(vec![
                Node::text("a"),
                Node::text("b"),
                Node::Element(theme.provider(
                    "fancy",
                    Node::Element(
                        theme.consumer(|value| {
                            Node::host("span", Props::new().with("title", value.clone()))
                        }),
                    ),
                )),
                Node::host(
                    "select",
                    Props::new().with("value", "y").with_children(Node::Sequence(vec![
                        Node::host("option", Props::new().with_children("x")),
                        Node::host("option", Props::new().with_children("y")),
                    ])),
                ),
            ]),
        );
        let whole = render_all(&tree);

        let mut renderer = MarkupRenderer::new(&tree, MarkupOptions::default());
        let mut pieced = String::new();
        while let Some(chunk) = renderer.pull(1).unwrap() {
            pieced.push_str(&chunk);
        }
        assert_eq!(pieced, whole);
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let theme = SharedValue::new("Theme", PropValue::from("light"));
        let tree = Node::Element(theme.provider(
            "dark",
            Node::Element(theme.consumer(|value| {
                Node::host("div", Props::new().with("title", value.clone()))
            })),
        ));
        let first = render_all(&tree);
        let second = render_all(&tree);
        assert_eq!(first, second);
    }
}
