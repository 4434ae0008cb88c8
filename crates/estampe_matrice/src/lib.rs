//! Matrice - the declarative element tree model.
//!
//! A matrice is the engraved plate a print is pulled from: an immutable
//! description of elements, composite components, and text leaves that the
//! tirage engine turns into markup. This crate defines the tree itself and
//! the pieces composite resolution operates on:
//!
//! - **Nodes and elements**: [`Node`], [`Element`], [`ElementKind`]
//! - **Props**: ordered attribute lists, children, raw inner HTML
//! - **Components**: [`FunctionComponent`], [`StatefulComponent`] and the
//!   legacy state/context protocol around them
//! - **Shared values**: [`SharedValue`] provider/consumer cells
//! - **Namespaces**: HTML, SVG and MathML resolution rules

pub mod children;
pub mod component;
pub mod namespace;
pub mod node;
pub mod props;
pub mod shared_value;
pub mod style;

// Re-exports for convenience
pub use children::{flatten, flatten_into, flatten_top_level};
pub use component::{
    ComponentContext, ContextMap, DerivedState, FunctionComponent, State, StateUpdate,
    StatefulComponent, Updater,
};
pub use namespace::Namespace;
pub use node::{Element, ElementKind, Node, NodeRef, RefRender};
pub use props::{ChildRender, Children, EventHandler, PropValue, Props};
pub use shared_value::SharedValue;
pub use style::{Style, StyleValue};
