//! Soft schema violations recorded during a walk.
//!
//! Warnings never stop the walk; rendering continues with the documented
//! fallback. They are collected on the renderer and handed back to the
//! caller instead of being printed.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Warning category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WarningCode {
    /// An input received both `checked` and `defaultChecked`.
    InputCheckedAndDefault = 1,
    /// An input received both `value` and `defaultValue`.
    InputValueAndDefault = 2,
    /// A textarea received both `value` and `defaultValue`.
    TextareaValueAndDefault = 3,
    /// Textarea children were folded into its value.
    TextareaChildrenAsValue = 4,
    /// A multiple select got a scalar `value`/`defaultValue`.
    SelectValueNotArray = 5,
    /// A non-multiple select got an array `value`/`defaultValue`.
    SelectValueIsArray = 6,
    /// A select received both `value` and `defaultValue`.
    SelectValueAndDefault = 7,
    /// Option children other than text and number leaves were dropped.
    OptionChildIgnored = 8,
    /// A host tag used uppercase letters in the HTML namespace.
    TagCasing = 9,
    /// Consumer children were not a render function.
    ConsumerChildrenNotFunction = 10,
    /// A provider frame popped out of order.
    UnexpectedProviderPop = 11,
}

impl WarningCode {
    /// Human-readable message for the code.
    pub fn message(&self) -> &'static str {
        match self {
            WarningCode::InputCheckedAndDefault => {
                "input elements must not receive both checked and defaultChecked"
            }
            WarningCode::InputValueAndDefault => {
                "input elements must not receive both value and defaultValue"
            }
            WarningCode::TextareaValueAndDefault => {
                "textarea elements must be either controlled or uncontrolled"
            }
            WarningCode::TextareaChildrenAsValue => {
                "use the defaultValue or value prop instead of setting children on a textarea"
            }
            WarningCode::SelectValueNotArray => {
                "the value supplied to a multiple select must be an array"
            }
            WarningCode::SelectValueIsArray => {
                "the value supplied to a non-multiple select must be a scalar"
            }
            WarningCode::SelectValueAndDefault => {
                "select elements must be either controlled or uncontrolled"
            }
            WarningCode::OptionChildIgnored => {
                "only text and number leaves are supported as option children"
            }
            WarningCode::TagCasing => "host tags must be lowercase in the HTML namespace",
            WarningCode::ConsumerChildrenNotFunction => {
                "consumer children must be a render function"
            }
            WarningCode::UnexpectedProviderPop => "provider scopes closed out of order",
        }
    }
}

/// One recorded warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupWarning {
    pub code: WarningCode,
    /// Offending tag, prop or label, when one applies.
    pub detail: CompactString,
}

impl MarkupWarning {
    pub fn new(code: WarningCode, detail: impl Into<CompactString>) -> MarkupWarning {
        MarkupWarning {
            code,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for MarkupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.detail.is_empty() {
            f.write_str(self.code.message())
        } else {
            write!(f, "{}: {}", self.code.message(), self.detail)
        }
    }
}
