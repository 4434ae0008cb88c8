//! Markup writers for open tags, attributes and leaf content.

use compact_str::{format_compact, CompactString};
use estampe_matrice::{Children, Node, PropValue, Props};
use phf::phf_set;

use crate::escape::escape_html;
use crate::property::{property_info, should_ignore, should_remove, ValueClass};
use crate::style_markup::serialize_styles;
use crate::tags::is_custom_element;

/// Attribute stamped onto the outermost host element of a render, used to
/// recognize server-produced markup later.
pub const ROOT_MARKER: &str = "data-estampe-root";

/// Prop names withheld even on the custom element pass-through path.
static CUSTOM_RESERVED: phf::Set<&'static str> = phf_set! {
    "children",
    "dangerouslySetInnerHTML",
    "suppressContentEditableWarning",
    "suppressHydrationWarning",
};

/// Formats a number the way script runtimes print them: integral values
/// without a decimal point, the non-finite values by name.
pub fn fmt_number(value: f64) -> CompactString {
    if value.is_nan() {
        return CompactString::new("NaN");
    }
    if value.is_infinite() {
        return CompactString::new(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return CompactString::new("0");
    }
    if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 {
        return format_compact!("{}", value as i64);
    }
    format_compact!("{}", value)
}

/// Stringifies a prop value for attribute output. Lists join with commas
/// the way script arrays do.
pub fn prop_text(value: &PropValue) -> CompactString {
    match value {
        PropValue::Null => CompactString::default(),
        PropValue::Bool(flag) => CompactString::new(if *flag { "true" } else { "false" }),
        PropValue::Number(number) => fmt_number(*number),
        PropValue::Text(text) => text.clone(),
        PropValue::List(items) => {
            let mut joined = CompactString::default();
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    joined.push(',');
                }
                joined.push_str(&prop_text(item));
            }
            joined
        }
        PropValue::Style(_) | PropValue::Handler(_) => CompactString::default(),
    }
}

/// Renders one prop through the property table. Returns `None` when the
/// prop is ignored or its value disqualifies it.
pub fn property_markup(name: &str, value: &PropValue) -> Option<String> {
    let info = property_info(name);
    if should_ignore(name, info) {
        return None;
    }
    if should_remove(name, value, info) {
        return None;
    }
    match info {
        Some(info) => {
            if info.class == ValueClass::Boolean
                || (info.class == ValueClass::OverloadedBoolean
                    && matches!(value, PropValue::Bool(true)))
            {
                Some(format!("{}=\"\"", info.attribute))
            } else {
                Some(format!("{}=\"{}\"", info.attribute, escape_html(&prop_text(value))))
            }
        }
        None => Some(format!("{}=\"{}\"", name, escape_html(&prop_text(value)))),
    }
}

/// Renders one prop of a custom element. Almost everything passes through
/// under its given name; handlers and style maps never serialize.
fn custom_attribute_markup(name: &str, value: &PropValue) -> Option<String> {
    if CUSTOM_RESERVED.contains(name) {
        return None;
    }
    if matches!(value, PropValue::Handler(_) | PropValue::Style(_)) {
        return None;
    }
    Some(format!("{}=\"{}\"", name, escape_html(&prop_text(value))))
}

/// Writes the open tag for a host element, without the closing `>` so the
/// caller can pick the void or container form.
pub fn open_tag_markup(
    tag_verbatim: &str,
    tag_lower: &str,
    props: &Props,
    static_markup: bool,
    is_root: bool,
) -> String {
    let mut out = String::new();
    out.push('<');
    out.push_str(tag_verbatim);

    let custom = is_custom_element(tag_lower, props);
    for (name, value) in props.iter() {
        if value.is_null() {
            continue;
        }
        if name.as_str() == "style" {
            if let PropValue::Style(style) = value {
                if let Some(serialized) = serialize_styles(style) {
                    out.push_str(" style=\"");
                    out.push_str(&escape_html(&serialized));
                    out.push('"');
                }
            }
            continue;
        }
        let markup = if custom {
            custom_attribute_markup(name, value)
        } else {
            property_markup(name, value)
        };
        if let Some(markup) = markup {
            out.push(' ');
            out.push_str(&markup);
        }
    }

    if static_markup {
        return out;
    }
    if is_root {
        out.push(' ');
        out.push_str(ROOT_MARKER);
        out.push_str("=\"\"");
    }
    out
}

/// Content rendered inside a host element in place of child frames: raw
/// inner HTML when set, otherwise a sole text or number child.
pub fn inner_text_markup(props: &Props) -> Option<String> {
    if let Some(html) = props.inner_html() {
        return Some(html.to_string());
    }
    match props.children() {
        Children::Node(Node::Text(text)) => Some(escape_html(text).into_owned()),
        Children::Node(Node::Number(number)) => Some(fmt_number(*number).into()),
        _ => None,
    }
}
