//! Composite components and the legacy resolution protocol.
//!
//! Two component flavors exist. A [`FunctionComponent`] is a bare render
//! function. A [`StatefulComponent`] carries the legacy instance surface:
//! initial state, an optional derive-state hook, an optional will-mount
//! hook with a state-update queue, and child context.

use std::fmt;
use std::rc::Rc;

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::node::Node;
use crate::props::{PropValue, Props};
use crate::shared_value::SharedValue;

/// Inherited key/value context visible to legacy components.
pub type ContextMap = FxHashMap<CompactString, PropValue>;

/// Component state snapshot.
pub type State = FxHashMap<CompactString, PropValue>;

/// Context handed to a component's render step.
#[derive(Debug, Clone)]
pub enum ComponentContext {
    /// Inherited mapping masked to the keys the component declared.
    Map(ContextMap),
    /// Current value of a subscribed shared-value definition.
    Shared(PropValue),
}

impl ComponentContext {
    /// Empty key/value context.
    pub fn empty() -> ComponentContext {
        ComponentContext::Map(ContextMap::default())
    }

    /// Looks a key up in the masked mapping.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        match self {
            ComponentContext::Map(map) => map.get(key),
            ComponentContext::Shared(_) => None,
        }
    }

    /// The subscribed shared value, when this context carries one.
    pub fn shared(&self) -> Option<&PropValue> {
        match self {
            ComponentContext::Map(_) => None,
            ComponentContext::Shared(value) => Some(value),
        }
    }
}

/// Plain function component.
#[derive(Clone)]
pub struct FunctionComponent {
    name: CompactString,
    context_keys: SmallVec<[CompactString; 4]>,
    subscription: Option<SharedValue>,
    render: Rc<dyn Fn(&Props, &ComponentContext) -> Node>,
}

impl FunctionComponent {
    pub fn new(
        name: impl Into<CompactString>,
        render: impl Fn(&Props, &ComponentContext) -> Node + 'static,
    ) -> FunctionComponent {
        FunctionComponent {
            name: name.into(),
            context_keys: SmallVec::new(),
            subscription: None,
            render: Rc::new(render),
        }
    }

    /// Declares the inherited context keys this component reads.
    pub fn with_context_keys<I>(mut self, keys: I) -> FunctionComponent
    where
        I: IntoIterator,
        I::Item: Into<CompactString>,
    {
        self.context_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Subscribes to a shared-value definition instead of the key mapping.
    pub fn with_subscription(mut self, cell: SharedValue) -> FunctionComponent {
        self.subscription = Some(cell);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn context_keys(&self) -> &[CompactString] {
        &self.context_keys
    }

    pub fn subscription(&self) -> Option<&SharedValue> {
        self.subscription.as_ref()
    }

    /// Invokes the render function.
    pub fn render(&self, props: &Props, context: &ComponentContext) -> Node {
        (self.render.as_ref())(props, context)
    }
}

impl fmt::Debug for FunctionComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionComponent({:?})", self.name)
    }
}

/// Result of the derive-state hook.
#[derive(Debug, Clone, Default)]
pub enum DerivedState {
    /// Hook not implemented; the will-mount path runs instead.
    #[default]
    Absent,
    /// Hook ran and left state unchanged.
    Unchanged,
    /// Hook ran; these keys merge over the current state.
    Update(State),
}

/// One queued state update.
#[derive(Clone)]
pub enum StateUpdate {
    /// Partial state merged over the previous state.
    Partial(State),
    /// Computed from the previous state and props; `None` is skipped.
    Compute(Rc<dyn Fn(&State, &Props) -> Option<State>>),
}

impl fmt::Debug for StateUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateUpdate::Partial(state) => f.debug_tuple("Partial").field(state).finish(),
            StateUpdate::Compute(_) => f.write_str("Compute"),
        }
    }
}

/// State-update queue collected during the will-mount hook.
///
/// A replacement discards everything queued before it; updates queued
/// after a replacement merge on top of it.
#[derive(Debug, Default)]
pub struct Updater {
    replacement: Option<State>,
    queue: Vec<StateUpdate>,
}

impl Updater {
    /// Queues a partial state merge.
    pub fn set_state(&mut self, partial: State) {
        self.queue.push(StateUpdate::Partial(partial));
    }

    /// Queues an update computed from the previous state.
    pub fn set_state_with(&mut self, update: impl Fn(&State, &Props) -> Option<State> + 'static) {
        self.queue.push(StateUpdate::Compute(Rc::new(update)));
    }

    /// Replaces state wholesale, discarding earlier queued updates.
    pub fn replace_state(&mut self, state: State) {
        self.queue.clear();
        self.replacement = Some(state);
    }

    pub fn is_empty(&self) -> bool {
        self.replacement.is_none() && self.queue.is_empty()
    }

    /// Applies the queue over `current`, left to right, last key wins.
    pub fn apply(self, current: State, props: &Props) -> State {
        let mut next = match self.replacement {
            Some(replacement) => replacement,
            None => current,
        };
        for update in self.queue {
            let partial = match update {
                StateUpdate::Partial(partial) => Some(partial),
                StateUpdate::Compute(update) => (update.as_ref())(&next, props),
            };
            if let Some(partial) = partial {
                for (key, value) in partial {
                    next.insert(key, value);
                }
            }
        }
        next
    }
}

/// Instance-based component with the legacy lifecycle surface.
///
/// Every hook has a default so implementations override only what they
/// use. [`derive_state`](StatefulComponent::derive_state) takes priority:
/// when it is implemented, [`will_mount`](StatefulComponent::will_mount)
/// never runs.
pub trait StatefulComponent {
    /// Display name used in diagnostics.
    fn name(&self) -> &str {
        "Component"
    }

    /// Inherited context keys this component reads.
    fn context_keys(&self) -> &[&str] {
        &[]
    }

    /// Shared-value definition read instead of the key mapping.
    fn subscription(&self) -> Option<SharedValue> {
        None
    }

    /// State before any pre-render hook runs.
    fn initial_state(&self, _props: &Props, _context: &ComponentContext) -> State {
        State::default()
    }

    /// Derive-state hook, given props and the current state.
    fn derive_state(&self, _props: &Props, _state: &State) -> DerivedState {
        DerivedState::Absent
    }

    /// Legacy pre-render hook; may queue updates on `updater`.
    fn will_mount(&self, _props: &Props, _state: &State, _updater: &mut Updater) {}

    /// Produces the rendered subtree.
    fn render(&self, props: &Props, state: &State, context: &ComponentContext) -> Node;

    /// Extra context keys merged over the inherited mapping for the
    /// whole subtree, own keys winning.
    fn child_context(&self, _props: &Props, _state: &State) -> Option<ContextMap> {
        None
    }
}
