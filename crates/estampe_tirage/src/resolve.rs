//! Component resolution.
//!
//! Composite elements collapse into renderable output here. The loop keeps
//! invoking components until the child is a host element, a fragment-like
//! wrapper or a leaf, threading the inherited context map through each step.

use std::rc::Rc;

use estampe_matrice::{
    ComponentContext, ContextMap, DerivedState, Element, ElementKind, Node, SharedValue, Updater,
};

/// Resolves one child until it is no longer a composite element. Returns
/// the settled node together with the context map its own children inherit.
pub fn resolve(mut child: Node, mut context: Rc<ContextMap>) -> (Node, Rc<ContextMap>) {
    loop {
        let element = match child {
            Node::Element(element) => element,
            leaf => return (leaf, context),
        };
        match element.kind {
            ElementKind::Function(component) => {
                let visible = visible_context(
                    component.context_keys().iter().map(|key| key.as_str()),
                    component.subscription().cloned(),
                    &context,
                );
                child = component.render(&element.props, &visible);
            }
            ElementKind::Stateful(component) => {
                let visible = visible_context(
                    component.context_keys().iter().copied(),
                    component.subscription(),
                    &context,
                );
                let mut state = component.initial_state(&element.props, &visible);
                match component.derive_state(&element.props, &state) {
                    // No derivation hook: the mount hook runs and may queue
                    // state updates.
                    DerivedState::Absent => {
                        let mut updater = Updater::default();
                        component.will_mount(&element.props, &state, &mut updater);
                        if !updater.is_empty() {
                            state = updater.apply(state, &element.props);
                        }
                    }
                    // A derivation hook, even a silent one, disables the
                    // mount hook entirely.
                    DerivedState::Unchanged => {}
                    DerivedState::Update(partial) => {
                        for (key, value) in partial {
                            state.insert(key, value);
                        }
                    }
                }
                child = component.render(&element.props, &state, &visible);
                if let Some(provided) = component.child_context(&element.props, &state) {
                    let mut merged = (*context).clone();
                    for (key, value) in provided {
                        merged.insert(key, value);
                    }
                    context = Rc::new(merged);
                }
            }
            kind => {
                let settled = Node::Element(Element {
                    kind,
                    props: element.props,
                    node_ref: element.node_ref,
                });
                return (settled, context);
            }
        }
    }
}

/// Builds the context a component may observe: the shared cell's current
/// value when subscribed, otherwise the inherited map masked down to the
/// declared keys.
fn visible_context<'a>(
    keys: impl IntoIterator<Item = &'a str>,
    subscription: Option<SharedValue>,
    context: &Rc<ContextMap>,
) -> ComponentContext {
    if let Some(cell) = subscription {
        return ComponentContext::Shared(cell.current());
    }
    let mut masked = ContextMap::default();
    for key in keys {
        if let Some(value) = context.get(key) {
            masked.insert(key.into(), value.clone());
        }
    }
    ComponentContext::Map(masked)
}
