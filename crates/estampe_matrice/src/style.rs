//! Inline styles.
//!
//! A style is an ordered list of property/value pairs. Order is preserved
//! so serialized declarations come out in author order, and setting an
//! existing property replaces its value in place.

use compact_str::CompactString;

/// One inline style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Absent value; the whole pair is skipped when serializing.
    Null,
    /// Booleans serialize to an empty declaration value.
    Bool(bool),
    /// Numbers may pick up an implicit `px` unit when serialized.
    Number(f64),
    Text(CompactString),
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> StyleValue {
        StyleValue::Bool(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> StyleValue {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> StyleValue {
        StyleValue::Number(value as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> StyleValue {
        StyleValue::Text(CompactString::from(value))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> StyleValue {
        StyleValue::Text(CompactString::from(value))
    }
}

/// Ordered inline style map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: Vec<(CompactString, StyleValue)>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Style {
        Style::default()
    }

    /// Sets a property, replacing an existing entry in place.
    pub fn set(&mut self, name: impl Into<CompactString>, value: impl Into<StyleValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder form of [`set`](Style::set).
    pub fn with(mut self, name: impl Into<CompactString>, value: impl Into<StyleValue>) -> Style {
        self.set(name, value);
        self
    }

    /// Looks a property up by name.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&CompactString, &StyleValue)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
