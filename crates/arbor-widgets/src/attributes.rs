#![forbid(unsafe_code)]

//! Out-of-band widget attributes.
//!
//! Embed configuration, lifecycle handlers, and reactive subscriptions are
//! not stored on the tree node. They live in a thread-local identity map
//! keyed by [`WidgetId`], so a widget only pays for a record once something
//! is actually configured on it.
//!
//! # Invariants
//!
//! 1. [`with_attributes`] creates the record on first access;
//!    [`with_optional_attributes`] never allocates one.
//! 2. A record lives exactly as long as its widget: the node's drop purges
//!    it, releasing every handler and subscription it holds.
//! 3. The store borrow is never held while user code runs. Lifecycle
//!    dispatch takes handler lists out, runs them, and restores them, so a
//!    callback may re-enter the store freely.
//! 4. A custom constraint closure takes precedence over the symbolic
//!    position for every embed that follows.
//!
//! # Failure Modes
//!
//! - Calling [`with_attributes`] from inside another `with_attributes`
//!   closure on the same thread panics on the nested borrow. Configure
//!   attributes from lifecycle callbacks through the taken-out handler
//!   lists instead; that path never nests.

use std::cell::RefCell;
use std::rc::Rc;

use ahash::AHashMap;
use arbor_core::{Insets, WidgetId};
use arbor_layout::{ConstraintSpec, EmbedPosition, Guide};
use arbor_reactive::BindingScope;

use crate::node::Node;

/// Lifecycle callback. Receives the widget whose event fired.
pub type LifecycleHandler = Box<dyn FnMut(&Node)>;

/// Builds a custom constraint set for `(parent, child)` at embed time.
pub type ConstraintBuilder = dyn Fn(&Node, &Node) -> Vec<ConstraintSpec>;

// ---------------------------------------------------------------------------
// AttributeRecord
// ---------------------------------------------------------------------------

/// Everything configured out-of-band for one widget.
#[derive(Default)]
pub struct AttributeRecord {
    pub(crate) position: Option<EmbedPosition>,
    pub(crate) insets: Insets,
    pub(crate) respect_safe_area: bool,
    pub(crate) custom_constraints: Option<Rc<ConstraintBuilder>>,
    pub(crate) appear: Vec<LifecycleHandler>,
    pub(crate) appear_once: Vec<LifecycleHandler>,
    pub(crate) disappear: Vec<LifecycleHandler>,
    pub(crate) bindings: BindingScope,
}

impl AttributeRecord {
    /// Symbolic embed position, if one was set.
    #[must_use]
    pub fn position(&self) -> Option<EmbedPosition> {
        self.position
    }

    pub fn set_position(&mut self, position: EmbedPosition) {
        self.position = Some(position);
    }

    /// Margin insets applied to anchored edges at embed time.
    #[must_use]
    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    /// Whether embeds pin to the window's safe area instead of raw bounds.
    #[must_use]
    pub fn respects_safe_area(&self) -> bool {
        self.respect_safe_area
    }

    pub fn set_respect_safe_area(&mut self, respect: bool) {
        self.respect_safe_area = respect;
    }

    /// Install a closure that builds the constraint set itself. Overrides
    /// the symbolic position for every embed that follows.
    pub fn set_custom_constraints(
        &mut self,
        build: impl Fn(&Node, &Node) -> Vec<ConstraintSpec> + 'static,
    ) {
        self.custom_constraints = Some(Rc::new(build));
    }

    pub fn on_appear(&mut self, handler: impl FnMut(&Node) + 'static) {
        self.appear.push(Box::new(handler));
    }

    pub fn on_appear_once(&mut self, handler: impl FnMut(&Node) + 'static) {
        self.appear_once.push(Box::new(handler));
    }

    pub fn on_disappear(&mut self, handler: impl FnMut(&Node) + 'static) {
        self.disappear.push(Box::new(handler));
    }

    /// Subscriptions tied to this widget's lifetime.
    pub fn bindings(&mut self) -> &mut BindingScope {
        &mut self.bindings
    }

    #[must_use]
    pub fn appear_handler_count(&self) -> usize {
        self.appear.len()
    }

    #[must_use]
    pub fn appear_once_handler_count(&self) -> usize {
        self.appear_once.len()
    }

    #[must_use]
    pub fn disappear_handler_count(&self) -> usize {
        self.disappear.len()
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

thread_local! {
    static STORE: RefCell<AHashMap<WidgetId, AttributeRecord>> =
        RefCell::new(AHashMap::new());
}

/// Run `f` over the widget's record, creating an empty one on first access.
pub fn with_attributes<R>(node: &Node, f: impl FnOnce(&mut AttributeRecord) -> R) -> R {
    with_record(node.id(), f)
}

/// Run `f` over the widget's record if one exists. Never allocates.
pub fn with_optional_attributes<R>(
    node: &Node,
    f: impl FnOnce(Option<&mut AttributeRecord>) -> R,
) -> R {
    STORE.with(|store| f(store.borrow_mut().get_mut(&node.id())))
}

/// Whether a record exists for `id`. Probing never creates one.
#[must_use]
pub fn has_record(id: WidgetId) -> bool {
    STORE.with(|store| store.borrow().contains_key(&id))
}

/// Number of live records on this thread.
#[must_use]
pub fn record_count() -> usize {
    STORE.with(|store| store.borrow().len())
}

pub(crate) fn with_record<R>(id: WidgetId, f: impl FnOnce(&mut AttributeRecord) -> R) -> R {
    STORE.with(|store| f(store.borrow_mut().entry(id).or_default()))
}

/// Drop the record for `id`, releasing handlers and subscriptions.
pub(crate) fn purge(id: WidgetId) {
    let removed = STORE.with(|store| store.borrow_mut().remove(&id));
    if removed.is_some() {
        tracing::trace!(message = "attributes.purge", widget = %id);
    }
}

// ---------------------------------------------------------------------------
// Embed plan: copied out so constraint building runs outside the borrow
// ---------------------------------------------------------------------------

pub(crate) struct EmbedPlan {
    pub(crate) position: EmbedPosition,
    pub(crate) insets: Insets,
    pub(crate) guide: Guide,
    pub(crate) custom: Option<Rc<ConstraintBuilder>>,
}

/// Snapshot the embed configuration for `id`. Unconfigured widgets embed as
/// [`EmbedPosition::Fill`] against raw bounds with zero insets.
pub(crate) fn embed_plan(id: WidgetId) -> EmbedPlan {
    STORE.with(|store| {
        let store = store.borrow();
        let record = store.get(&id);
        let guide = if record.is_some_and(|r| r.respect_safe_area) {
            Guide::SafeArea
        } else {
            Guide::Bounds
        };
        EmbedPlan {
            position: record.and_then(|r| r.position).unwrap_or_default(),
            insets: record.map_or(Insets::ZERO, |r| r.insets),
            guide,
            custom: record.and_then(|r| r.custom_constraints.clone()),
        }
    })
}

// ---------------------------------------------------------------------------
// Handler rotation for lifecycle dispatch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HandlerKind {
    Appear,
    AppearOnce,
    Disappear,
}

fn handler_list(record: &mut AttributeRecord, kind: HandlerKind) -> &mut Vec<LifecycleHandler> {
    match kind {
        HandlerKind::Appear => &mut record.appear,
        HandlerKind::AppearOnce => &mut record.appear_once,
        HandlerKind::Disappear => &mut record.disappear,
    }
}

/// Take a handler list out of the store so it can run without holding the
/// borrow. Returns empty when no record exists.
pub(crate) fn take_handlers(id: WidgetId, kind: HandlerKind) -> Vec<LifecycleHandler> {
    STORE.with(|store| {
        store
            .borrow_mut()
            .get_mut(&id)
            .map(|record| std::mem::take(handler_list(record, kind)))
            .unwrap_or_default()
    })
}

/// Put taken-out handlers back, ahead of any registered while they ran, so
/// registration order stays stable across dispatches.
pub(crate) fn restore_handlers(id: WidgetId, kind: HandlerKind, mut handlers: Vec<LifecycleHandler>) {
    if handlers.is_empty() {
        return;
    }
    STORE.with(|store| {
        let mut store = store.borrow_mut();
        let record = store.entry(id).or_default();
        let list = handler_list(record, kind);
        handlers.append(list);
        *list = handlers;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Widget;
    use crate::widgets::container::Container;

    #[test]
    fn with_attributes_creates_lazily() {
        let c = Container::new();
        let id = c.id();
        assert!(!has_record(id), "no record before first access");
        with_attributes(c.node(), |r| r.set_insets(Insets::uniform(4.0)));
        assert!(has_record(id), "first access allocates the record");
    }

    #[test]
    fn optional_access_never_allocates() {
        let c = Container::new();
        let found = with_optional_attributes(c.node(), |r| r.is_some());
        assert!(!found, "no record reported");
        assert!(!has_record(c.id()), "probe left no record behind");
    }

    #[test]
    fn record_purged_when_widget_drops() {
        let id = {
            let c = Container::new();
            with_attributes(c.node(), |r| r.on_appear(|_| {}));
            assert!(has_record(c.id()));
            c.id()
        };
        assert!(!has_record(id), "dropping the widget drops its record");
    }

    #[test]
    fn embed_plan_defaults_without_record() {
        let c = Container::new();
        let plan = embed_plan(c.id());
        assert_eq!(plan.position, EmbedPosition::Fill);
        assert_eq!(plan.insets, Insets::ZERO);
        assert_eq!(plan.guide, Guide::Bounds);
        assert!(plan.custom.is_none());
        assert!(!has_record(c.id()), "planning allocates nothing");
    }

    #[test]
    fn custom_constraints_take_precedence() {
        let c = Container::new();
        with_attributes(c.node(), |r| {
            r.set_position(EmbedPosition::TopLeft);
            r.set_custom_constraints(|_, _| Vec::new());
        });
        let plan = embed_plan(c.id());
        assert!(
            plan.custom.is_some(),
            "closure wins over the symbolic position"
        );
    }

    #[test]
    fn restored_handlers_precede_new_ones() {
        let c = Container::new();
        let id = c.id();
        with_attributes(c.node(), |r| r.on_appear(|_| {}));
        let taken = take_handlers(id, HandlerKind::Appear);
        assert_eq!(taken.len(), 1);
        // Registered while the original list is out, as dispatch allows.
        with_attributes(c.node(), |r| r.on_appear(|_| {}));
        restore_handlers(id, HandlerKind::Appear, taken);
        with_attributes(c.node(), |r| {
            assert_eq!(r.appear_handler_count(), 2, "both handlers survive");
        });
    }
}
