//! Inline style serialization.

use compact_str::{format_compact, CompactString};
use estampe_matrice::{Style, StyleValue};
use phf::phf_set;

use crate::markup::fmt_number;

/// Style names whose numeric values render without a `px` suffix.
static UNITLESS_NUMBERS: phf::Set<&'static str> = phf_set! {
    "animationIterationCount",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "columns",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridArea",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
};

#[inline]
fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Turns a camelCase style name into its hyphenated CSS form. Vendor names
/// starting with `ms` pick up the leading hyphen they need.
pub fn hyphenate_style_name(name: &str) -> CompactString {
    let mut hyphenated = CompactString::default();
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            hyphenated.push('-');
        }
        hyphenated.extend(ch.to_lowercase());
    }
    if hyphenated.starts_with("ms-") {
        let mut prefixed = CompactString::new("-");
        prefixed.push_str(&hyphenated);
        return prefixed;
    }
    hyphenated
}

/// Formats one style value. Null, booleans and empty strings produce an
/// empty value; bare numbers pick up `px` unless the name is unitless.
pub fn style_value_text(name: &str, value: &StyleValue) -> CompactString {
    match value {
        StyleValue::Null | StyleValue::Bool(_) => CompactString::default(),
        StyleValue::Number(number) => {
            if *number != 0.0 && !is_custom_property(name) && !UNITLESS_NUMBERS.contains(name) {
                format_compact!("{}px", fmt_number(*number))
            } else {
                fmt_number(*number)
            }
        }
        StyleValue::Text(text) => CompactString::new(text.trim()),
    }
}

/// Serializes a style map into declaration-list form, or `None` when no
/// declaration survives.
pub fn serialize_styles(style: &Style) -> Option<String> {
    let mut serialized = String::new();
    for (name, value) in style.iter() {
        if matches!(value, StyleValue::Null) {
            continue;
        }
        if !serialized.is_empty() {
            serialized.push(';');
        }
        serialized.push_str(&hyphenate_style_name(name));
        serialized.push(':');
        serialized.push_str(&style_value_text(name, value));
    }
    if serialized.is_empty() {
        None
    } else {
        Some(serialized)
    }
}
