//! Renderer options.

use serde::{Deserialize, Serialize};

/// Options controlling markup generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkupOptions {
    /// Produce bare markup: no root marker and no text-adjacency
    /// separators. Meant for output that is never revived on a client.
    pub static_markup: bool,
}

impl MarkupOptions {
    pub fn new() -> MarkupOptions {
        MarkupOptions::default()
    }

    /// Builder toggling static markup.
    pub fn with_static_markup(mut self, static_markup: bool) -> MarkupOptions {
        self.static_markup = static_markup;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!MarkupOptions::default().static_markup);
        assert!(MarkupOptions::new().with_static_markup(true).static_markup);
    }
}
