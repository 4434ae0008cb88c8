//! Render failures.

use compact_str::CompactString;
use thiserror::Error;

/// Fatal render failure.
///
/// The walk stops immediately and no partial output is valid; streaming
/// consumers must surface the failure rather than truncate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Suspense boundaries cannot be awaited while rendering markup.
    #[error("suspense boundaries are not supported when rendering markup")]
    SuspenseUnsupported,
    /// Lazy elements would need to load code mid-walk.
    #[error("lazy elements are not supported when rendering markup")]
    LazyUnsupported,
    /// Portals target a live document that does not exist here.
    #[error("portals are not supported when rendering markup")]
    PortalUnsupported,
    /// The tree held a value no dispatch arm recognizes.
    #[error("element kind is not renderable: {0}")]
    InvalidElement(CompactString),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let errors = [
            RenderError::SuspenseUnsupported,
            RenderError::LazyUnsupported,
            RenderError::PortalUnsupported,
            RenderError::InvalidElement("Gadget".into()),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }

    #[test]
    fn test_invalid_element_names_the_category() {
        let error = RenderError::InvalidElement("Gadget".into());
        assert!(error.to_string().contains("Gadget"));
    }
}
