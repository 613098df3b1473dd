#![forbid(unsafe_code)]

//! Indexable view sources.
//!
//! A container that shows a collection pulls its children through
//! [`IndexableViews`]: a count, a per-index builder, and an optional update
//! signal. Three sources cover the common shapes:
//!
//! - [`StaticViews`]: a fixed list, flattened once, never signalling.
//! - [`DynamicViews`]: one view per item of an observable vector, rebuilt on
//!   every query.
//! - [`SingleViews`]: zero or one view over an observable optional.
//!
//! # Invariants
//!
//! 1. `view_at` past the current length answers `None`, never panics. A
//!    container holding a stale index across an update skips the row.
//! 2. Item-backed sources rebuild the view on every query; the container
//!    owns caching, not the source.
//! 3. The update signal fires after the backing data changed, so a handler
//!    querying the source sees the new contents.

use std::rc::Rc;

use arbor_reactive::{Observable, Subscription};

use crate::attributes;
use crate::node::Node;
use crate::view::{IntoView, View};

/// Count plus per-index view builder, with an optional change signal.
pub trait IndexableViews {
    /// Number of views currently available.
    fn len(&self) -> usize;

    /// Build the view at `index`, or `None` when out of range.
    fn view_at(&self, index: usize) -> Option<View>;

    /// Register for change signals. Sources with fixed contents answer
    /// `None`; the caller then never re-queries.
    fn subscribe_updates(&self, on_update: Box<dyn Fn()>) -> Option<Subscription> {
        let _ = on_update;
        None
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// StaticViews
// ---------------------------------------------------------------------------

/// A fixed list of views, one item per top-level expression.
///
/// `views![a, b, c]` becomes three items; a lone widget becomes one; an
/// empty view becomes none. Contents and identities never change.
pub struct StaticViews {
    items: Vec<View>,
}

impl StaticViews {
    #[must_use]
    pub fn new(content: impl IntoView) -> Self {
        let items = match content.into_view() {
            View::Fragment(children) => children,
            View::Empty => Vec::new(),
            other => vec![other],
        };
        StaticViews { items }
    }
}

impl IndexableViews for StaticViews {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn view_at(&self, index: usize) -> Option<View> {
        self.items.get(index).cloned()
    }
}

// ---------------------------------------------------------------------------
// DynamicViews
// ---------------------------------------------------------------------------

/// One view per item of an observable vector.
///
/// Views are built fresh on every query; nothing is cached here. Whoever
/// consumes the source decides what to keep across updates.
pub struct DynamicViews<T: Clone + PartialEq + 'static> {
    items: Observable<Vec<T>>,
    build: Rc<dyn Fn(&T) -> View>,
}

impl<T: Clone + PartialEq + 'static> DynamicViews<T> {
    #[must_use]
    pub fn new(items: &Observable<Vec<T>>, build: impl Fn(&T) -> View + 'static) -> Self {
        DynamicViews {
            items: items.clone(),
            build: Rc::new(build),
        }
    }

    /// Handle to the backing items, for mutation.
    #[must_use]
    pub fn items(&self) -> Observable<Vec<T>> {
        self.items.clone()
    }
}

impl<T: Clone + PartialEq + 'static> Clone for DynamicViews<T> {
    fn clone(&self) -> Self {
        DynamicViews {
            items: self.items.clone(),
            build: Rc::clone(&self.build),
        }
    }
}

impl<T: Clone + PartialEq + 'static> IndexableViews for DynamicViews<T> {
    fn len(&self) -> usize {
        self.items.with(Vec::len)
    }

    fn view_at(&self, index: usize) -> Option<View> {
        self.items
            .with(|items| items.get(index).map(|item| (self.build)(item)))
    }

    fn subscribe_updates(&self, on_update: Box<dyn Fn()>) -> Option<Subscription> {
        Some(self.items.subscribe(move |_| on_update()))
    }
}

// ---------------------------------------------------------------------------
// SingleViews
// ---------------------------------------------------------------------------

/// Zero or one view over an observable optional.
///
/// Length is zero while the value is `None` and one once it holds a value,
/// so a container shows nothing until the first real emission.
pub struct SingleViews<T: Clone + PartialEq + 'static> {
    value: Observable<Option<T>>,
    build: Rc<dyn Fn(&T) -> View>,
}

impl<T: Clone + PartialEq + 'static> SingleViews<T> {
    #[must_use]
    pub fn new(value: &Observable<Option<T>>, build: impl Fn(&T) -> View + 'static) -> Self {
        SingleViews {
            value: value.clone(),
            build: Rc::new(build),
        }
    }
}

impl<T: Clone + PartialEq + 'static> IndexableViews for SingleViews<T> {
    fn len(&self) -> usize {
        self.value.with(|value| usize::from(value.is_some()))
    }

    fn view_at(&self, index: usize) -> Option<View> {
        if index != 0 {
            return None;
        }
        self.value
            .with(|value| value.as_ref().map(|item| (self.build)(item)))
    }

    fn subscribe_updates(&self, on_update: Box<dyn Fn()>) -> Option<Subscription> {
        Some(self.value.subscribe(move |_| on_update()))
    }
}

// ---------------------------------------------------------------------------
// Container driving
// ---------------------------------------------------------------------------

/// Build `container`'s children from `views` now, and rebuild on every
/// update signal for as long as the container lives.
///
/// The subscription parks in the container's attribute record; the rebuild
/// closure holds the container weakly, so a released container ends the
/// updates instead of leaking.
pub(crate) fn drive_children(container: &Node, views: Rc<dyn IndexableViews>, arranged: bool) {
    rebuild_children(container, views.as_ref(), arranged);
    let weak = container.downgrade();
    let source = Rc::clone(&views);
    let subscription = views.subscribe_updates(Box::new(move || {
        if let Some(container) = weak.upgrade() {
            rebuild_children(&container, source.as_ref(), arranged);
        }
    }));
    if let Some(subscription) = subscription {
        attributes::with_record(container.id(), |record| {
            record.bindings.hold(subscription);
        });
    }
}

/// Tear down every child and rebuild the full set in one pass.
pub(crate) fn rebuild_children(container: &Node, views: &dyn IndexableViews, arranged: bool) {
    container.remove_all_children();
    let count = views.len();
    for index in 0..count {
        // A source shrinking between len and query is answered with None.
        let Some(view) = views.view_at(index) else {
            continue;
        };
        for widget in view.to_widgets() {
            if arranged {
                container.add_arranged(widget);
            } else {
                container.embed_node(widget);
            }
        }
    }
    tracing::debug!(
        message = "container.rebuilt",
        container = %container.id(),
        items = count,
        children = container.child_count(),
    );
}
