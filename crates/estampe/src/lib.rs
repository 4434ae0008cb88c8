//! # Estampe
//!
//! Server-side HTML rendering for declarative element trees.
//!
//! An estampe is a print pulled from an engraved plate. Build a [`Node`]
//! tree out of host elements, components and shared values, then pull the
//! finished markup from it:
//!
//! ```
//! use estampe::{render_to_string, Node, Props};
//!
//! let tree = Node::host(
//!     "p",
//!     Props::new().with("className", "greeting").with_children("hello"),
//! );
//! assert_eq!(
//!     render_to_string(&tree)?,
//!     "<p class=\"greeting\" data-estampe-root=\"\">hello</p>"
//! );
//! # Ok::<(), estampe::RenderError>(())
//! ```
//!
//! ## Crates
//!
//! - [`matrice`] - the element tree model: nodes, props, components, shared values
//! - [`tirage`] - the pull-driven markup renderer

mod chunks;

/// The element tree model: nodes, props, components, shared values.
pub use estampe_matrice as matrice;

/// The pull-driven markup renderer.
pub use estampe_tirage as tirage;

pub use chunks::MarkupChunks;
pub use estampe_matrice::{
    Children, ComponentContext, ContextMap, DerivedState, Element, ElementKind,
    FunctionComponent, Namespace, Node, NodeRef, PropValue, Props, RefRender, SharedValue, State,
    StatefulComponent, Style, StyleValue, Updater,
};
pub use estampe_tirage::{MarkupOptions, MarkupRenderer, MarkupWarning, RenderError, WarningCode};

/// Crate version, matching the workspace release.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renders a tree to markup that client code can later revive.
///
/// Top-level host elements carry the root marker and adjacent text nodes
/// get separator comments, exactly as the chunked form emits them.
/// Warnings are dropped; use [`render_with`] to inspect them.
pub fn render_to_string(root: &Node) -> Result<String, RenderError> {
    let (markup, _) = render_with(root, MarkupOptions::new())?;
    Ok(markup)
}

/// Renders a tree to bare static markup with no revival annotations.
pub fn render_to_static_markup(root: &Node) -> Result<String, RenderError> {
    let (markup, _) = render_with(root, MarkupOptions::new().with_static_markup(true))?;
    Ok(markup)
}

/// Renders a tree with explicit options, returning the markup together
/// with every warning the walk recorded.
pub fn render_with(
    root: &Node,
    options: MarkupOptions,
) -> Result<(String, Vec<MarkupWarning>), RenderError> {
    let mut renderer = MarkupRenderer::new(root, options);
    let markup = renderer.pull(usize::MAX)?.unwrap_or_default();
    Ok((markup, renderer.take_warnings()))
}

/// Streams live markup in chunks of roughly `chunk_size` bytes.
pub fn render_to_chunks(root: &Node, chunk_size: usize) -> MarkupChunks {
    MarkupChunks::new(root, MarkupOptions::new(), chunk_size)
}

/// Streams static markup in chunks of roughly `chunk_size` bytes.
pub fn render_to_static_chunks(root: &Node, chunk_size: usize) -> MarkupChunks {
    MarkupChunks::new(root, MarkupOptions::new().with_static_markup(true), chunk_size)
}
