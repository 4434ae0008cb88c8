//! Document namespaces.
//!
//! Trees are assumed to start in the HTML namespace. An `svg` or `math`
//! element moves its subtree into the matching foreign namespace, and an
//! SVG `foreignObject` re-enters HTML.

/// Document namespace a host element renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    /// `http://www.w3.org/1999/xhtml`
    #[default]
    Html,
    /// `http://www.w3.org/2000/svg`
    Svg,
    /// `http://www.w3.org/1998/Math/MathML`
    MathMl,
}

impl Namespace {
    /// Namespace URI.
    pub const fn uri(self) -> &'static str {
        match self {
            Namespace::Html => "http://www.w3.org/1999/xhtml",
            Namespace::Svg => "http://www.w3.org/2000/svg",
            Namespace::MathMl => "http://www.w3.org/1998/Math/MathML",
        }
    }

    /// Namespace an element introduces when no parent namespace applies.
    pub fn intrinsic(tag: &str) -> Namespace {
        match tag {
            "svg" => Namespace::Svg,
            "math" => Namespace::MathMl,
            _ => Namespace::Html,
        }
    }

    /// Namespace of the element itself, given its parent's namespace.
    pub fn of_element(parent: Namespace, tag_lower: &str) -> Namespace {
        if parent == Namespace::Html {
            Namespace::intrinsic(tag_lower)
        } else {
            parent
        }
    }

    /// Namespace the element's children render in.
    ///
    /// Decided from the verbatim tag name, so only the exact
    /// `foreignObject` spelling re-enters HTML from SVG.
    pub fn for_children(parent: Namespace, tag_verbatim: &str) -> Namespace {
        if parent == Namespace::Html {
            return Namespace::intrinsic(tag_verbatim);
        }
        if parent == Namespace::Svg && tag_verbatim == "foreignObject" {
            return Namespace::Html;
        }
        parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_entry_points() {
        assert_eq!(Namespace::intrinsic("svg"), Namespace::Svg);
        assert_eq!(Namespace::intrinsic("math"), Namespace::MathMl);
        assert_eq!(Namespace::intrinsic("div"), Namespace::Html);
    }

    #[test]
    fn test_element_namespace_uses_lowercase_tag() {
        assert_eq!(
            Namespace::of_element(Namespace::Html, "svg"),
            Namespace::Svg
        );
        assert_eq!(
            Namespace::of_element(Namespace::Svg, "rect"),
            Namespace::Svg
        );
    }

    #[test]
    fn test_foreign_object_reenters_html() {
        assert_eq!(
            Namespace::for_children(Namespace::Svg, "foreignObject"),
            Namespace::Html
        );
        // Other spellings stay inside SVG.
        assert_eq!(
            Namespace::for_children(Namespace::Svg, "foreignobject"),
            Namespace::Svg
        );
    }

    #[test]
    fn test_children_namespace_uses_verbatim_tag() {
        // An uppercase spelling is not an SVG entry point.
        assert_eq!(
            Namespace::for_children(Namespace::Html, "SVG"),
            Namespace::Html
        );
        assert_eq!(
            Namespace::for_children(Namespace::Html, "svg"),
            Namespace::Svg
        );
    }

    #[test]
    fn test_mathml_passes_down() {
        assert_eq!(
            Namespace::for_children(Namespace::MathMl, "mrow"),
            Namespace::MathMl
        );
    }
}
