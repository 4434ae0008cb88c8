//! Static lookup tables for HTML tag behavior.

use estampe_matrice::{PropValue, Props};
use phf::phf_set;

/// Tags that self-close and never take children or a closing tag.
static VOID_TAGS: phf::Set<&'static str> = phf_set! {
    "area",
    "base",
    "br",
    "col",
    "embed",
    "hr",
    "img",
    "input",
    "keygen",
    "link",
    "meta",
    "param",
    "source",
    "track",
    "wbr",
};

/// Tags whose parsers swallow a leading newline in their text content.
static NEWLINE_EATING_TAGS: phf::Set<&'static str> = phf_set! {
    "listing",
    "pre",
    "textarea",
};

/// Hyphenated names reserved by SVG and MathML, excluded from the custom
/// element attribute path.
static RESERVED_HYPHENATED: phf::Set<&'static str> = phf_set! {
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
};

#[inline]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(tag)
}

#[inline]
pub fn eats_leading_newline(tag: &str) -> bool {
    NEWLINE_EATING_TAGS.contains(tag)
}

/// Whether an element renders its attributes verbatim through the custom
/// element path. Hyphenated tags qualify unless reserved; anything else
/// qualifies only when carrying a string `is` prop.
pub fn is_custom_element(tag: &str, props: &Props) -> bool {
    if tag.contains('-') {
        !RESERVED_HYPHENATED.contains(tag)
    } else {
        matches!(props.get("is"), Some(PropValue::Text(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_tags() {
        assert!(is_void_tag("br"));
        assert!(is_void_tag("input"));
        assert!(is_void_tag("keygen"));
        assert!(!is_void_tag("div"));
        assert!(!is_void_tag("textarea"));
    }

    #[test]
    fn test_newline_eating_tags() {
        assert!(eats_leading_newline("pre"));
        assert!(eats_leading_newline("textarea"));
        assert!(eats_leading_newline("listing"));
        assert!(!eats_leading_newline("div"));
    }

    #[test]
    fn test_hyphenated_custom_elements() {
        let props = Props::new();
        assert!(is_custom_element("my-widget", &props));
        assert!(!is_custom_element("font-face", &props));
        assert!(!is_custom_element("annotation-xml", &props));
    }

    #[test]
    fn test_is_prop_custom_elements() {
        let plain = Props::new();
        assert!(!is_custom_element("button", &plain));

        let extended = Props::new().with("is", "fancy-button");
        assert!(is_custom_element("button", &extended));

        let non_string = Props::new().with("is", true);
        assert!(!is_custom_element("button", &non_string));
    }
}
