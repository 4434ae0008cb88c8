//! Shared-value definitions (provider/consumer cells).

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::Rc;

use compact_str::CompactString;

use crate::node::{Element, ElementKind, Node};
use crate::props::{PropValue, Props};

struct Cell {
    current: PropValue,
    saved: Vec<PropValue>,
}

/// One shared-value definition.
///
/// All clones address the same underlying cell, so every render in the
/// process reading this definition observes the same current value. Two
/// renders touching the same definition must not interleave; the cell's
/// LIFO history assumes strictly nested provider scopes.
#[derive(Clone)]
pub struct SharedValue {
    label: CompactString,
    cell: Rc<RefCell<Cell>>,
}

impl SharedValue {
    /// Creates a definition holding `default` until a provider shadows it.
    pub fn new(label: impl Into<CompactString>, default: impl Into<PropValue>) -> SharedValue {
        SharedValue {
            label: label.into(),
            cell: Rc::new(RefCell::new(Cell {
                current: default.into(),
                saved: Vec::new(),
            })),
        }
    }

    /// Label used in diagnostics.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Value currently visible to consumers.
    pub fn current(&self) -> PropValue {
        self.cell.borrow().current.clone()
    }

    /// Installs a new value, saving the shadowed one for [`pop`](SharedValue::pop).
    pub fn push(&self, value: PropValue) {
        let mut cell = self.cell.borrow_mut();
        let previous = mem::replace(&mut cell.current, value);
        cell.saved.push(previous);
    }

    /// Restores the most recently shadowed value.
    ///
    /// Returns false when no push is outstanding.
    pub fn pop(&self) -> bool {
        let mut cell = self.cell.borrow_mut();
        match cell.saved.pop() {
            Some(previous) => {
                cell.current = previous;
                true
            }
            None => false,
        }
    }

    /// Number of unmatched pushes.
    pub fn depth(&self) -> usize {
        self.cell.borrow().saved.len()
    }

    /// Whether two handles address the same cell.
    pub fn same_cell(&self, other: &SharedValue) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }

    /// Provider element installing `value` for `children`.
    pub fn provider(&self, value: impl Into<PropValue>, children: impl Into<Node>) -> Element {
        Element::new(
            ElementKind::Provider(self.clone()),
            Props::new().with("value", value).with_children(children),
        )
    }

    /// Consumer element whose children render from the current value.
    pub fn consumer(&self, render: impl Fn(&PropValue) -> Node + 'static) -> Element {
        Element::new(
            ElementKind::Consumer(self.clone()),
            Props::new().with_render_children(render),
        )
    }
}

impl fmt::Debug for SharedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedValue")
            .field("label", &self.label)
            .field("depth", &self.depth())
            .finish()
    }
}
