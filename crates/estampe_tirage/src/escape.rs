//! Text escaping for markup output.

use std::borrow::Cow;

#[inline]
fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '&' | '\'' | '<' | '>')
}

/// Escapes `&`, `<`, `>`, `"` and `'` for text and attribute positions.
///
/// Borrows the input back when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
