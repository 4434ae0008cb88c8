//! Tirage - pulling markup prints from a matrice.
//!
//! A tirage is the print run: everything needed to turn an element tree into
//! HTML on the server. The walk is pull-driven and iterative, so callers can
//! stream markup in chunks of roughly the size they ask for:
//!
//! - **Renderer**: [`MarkupRenderer`], the explicit-stack walker
//! - **Resolution**: settling composite components into host trees
//! - **Markup**: open tags, attribute serialization, inline styles, escaping
//! - **Diagnostics**: [`RenderError`] fatals and collected [`MarkupWarning`]s

pub mod errors;
pub mod escape;
pub mod markup;
pub mod options;
pub mod property;
pub mod renderer;
pub mod resolve;
pub mod style_markup;
pub mod tags;
pub mod warnings;

// Re-exports for convenience
pub use errors::RenderError;
pub use options::MarkupOptions;
pub use renderer::MarkupRenderer;
pub use warnings::{MarkupWarning, WarningCode};
