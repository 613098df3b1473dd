#![forbid(unsafe_code)]

//! Fluent widget configuration.
//!
//! Every configuration method wraps the widget in a new [`Modifier`] over
//! the same node, so chains like
//! `Label::new("hi").position(EmbedPosition::TopLeft).on_appear(...)` read
//! left to right and cost nothing but the mutation they perform.
//!
//! # Invariants
//!
//! 1. A modifier aliases its widget's node; chaining never copies a widget.
//! 2. Embed configuration methods only write the attribute record. The
//!    record is read when the widget is embedded, so configuring after
//!    embedding has no effect until [`Node::reembed`] runs.
//! 3. Reactive binds capture the node weakly. A released widget makes the
//!    callback a no-op instead of keeping the widget alive.
//!
//! # Example
//!
//! ```ignore
//! let banner = Label::new("saved")
//!     .position(EmbedPosition::TopCenter)
//!     .margins(Insets::uniform(12.0))
//!     .bind_hidden(&saved_is_stale);
//! ```

use arbor_core::Insets;
use arbor_layout::{ConstraintSpec, EmbedPosition};
use arbor_reactive::Observable;
use arbor_style::Color;

use crate::Widget;
use crate::attributes::with_attributes;
use crate::node::Node;
use crate::view::{IntoView, View};

/// A widget wrapped for fluent configuration.
///
/// `Modifier<W>` implements [`Widget`] itself, so typed methods (for
/// example `Modifier<Label>::color`) stay available anywhere in a chain.
#[must_use = "a modifier chain only configures the widget it wraps"]
pub struct Modifier<W: Widget> {
    widget: W,
}

impl<W: Widget> Modifier<W> {
    /// Wrap `widget` and run one initial mutation against its node.
    pub fn new(widget: W, mutation: impl FnOnce(&Node)) -> Self {
        mutation(widget.node());
        Modifier { widget }
    }

    /// Wrap `widget` without touching it.
    pub fn wrap(widget: W) -> Self {
        Modifier { widget }
    }

    /// Run one mutation against the node and keep chaining.
    pub fn apply(self, mutation: impl FnOnce(&Node)) -> Self {
        mutation(self.widget.node());
        self
    }

    /// The wrapped widget handle.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Unwrap the chain back to the bare widget handle.
    pub fn into_widget(self) -> W {
        self.widget
    }

    // -- shared visual properties -----------------------------------------

    pub fn hidden(self, hidden: bool) -> Self {
        self.apply(|node| node.set_hidden(hidden))
    }

    pub fn alpha(self, alpha: f64) -> Self {
        self.apply(|node| node.set_alpha(alpha))
    }

    pub fn background(self, color: Color) -> Self {
        self.apply(|node| node.set_background(Some(color)))
    }

    pub fn corner_radius(self, radius: f64) -> Self {
        self.apply(|node| node.set_corner_radius(radius))
    }

    // -- embed configuration ----------------------------------------------

    /// Symbolic position used the next time this widget is embedded.
    pub fn position(self, position: EmbedPosition) -> Self {
        self.apply(|node| with_attributes(node, |r| r.set_position(position)))
    }

    /// Margin insets applied to anchored edges at embed time.
    pub fn margins(self, insets: Insets) -> Self {
        self.apply(|node| with_attributes(node, |r| r.set_insets(insets)))
    }

    /// Uniform margin on all four edges.
    pub fn margin(self, all: f64) -> Self {
        self.margins(Insets::uniform(all))
    }

    /// Pin against the window's safe area instead of raw bounds.
    pub fn safe_area(self) -> Self {
        self.apply(|node| with_attributes(node, |r| r.set_respect_safe_area(true)))
    }

    /// Build the constraint set yourself at embed time. Overrides the
    /// symbolic position entirely.
    pub fn constrain(
        self,
        build: impl Fn(&Node, &Node) -> Vec<ConstraintSpec> + 'static,
    ) -> Self {
        self.apply(|node| with_attributes(node, |r| r.set_custom_constraints(build)))
    }

    // -- lifecycle ---------------------------------------------------------

    /// Fire every time the widget appears on the visible top screen.
    pub fn on_appear(self, handler: impl FnMut(&Node) + 'static) -> Self {
        self.apply(|node| with_attributes(node, |r| r.on_appear(handler)))
    }

    /// Fire at most once, on the first appearance.
    pub fn on_appear_once(self, handler: impl FnMut(&Node) + 'static) -> Self {
        self.apply(|node| with_attributes(node, |r| r.on_appear_once(handler)))
    }

    /// Fire every time the widget leaves a live window's tree.
    pub fn on_disappear(self, handler: impl FnMut(&Node) + 'static) -> Self {
        self.apply(|node| with_attributes(node, |r| r.on_disappear(handler)))
    }

    // -- reactive binds ----------------------------------------------------

    /// One-way bind: apply `source`'s current value now, then every distinct
    /// value it emits, for as long as the widget lives.
    pub fn bind<T: Clone + PartialEq + 'static>(
        self,
        source: &Observable<T>,
        apply: impl Fn(&Node, &T) + 'static,
    ) -> Self {
        let weak = self.widget.node().downgrade();
        let push = move |value: &T| {
            if let Some(node) = weak.upgrade() {
                apply(&node, value);
            }
        };
        // Initial apply runs before the store borrow is taken, so `apply`
        // may itself configure attributes.
        source.with(|value| push(value));
        with_attributes(self.widget.node(), |record| {
            record.bindings.subscribe(source, push);
        });
        self
    }

    pub fn bind_hidden(self, source: &Observable<bool>) -> Self {
        self.bind(source, |node, hidden| node.set_hidden(*hidden))
    }

    pub fn bind_alpha(self, source: &Observable<f64>) -> Self {
        self.bind(source, |node, alpha| node.set_alpha(*alpha))
    }

    pub fn bind_background(self, source: &Observable<Color>) -> Self {
        self.bind(source, |node, color| node.set_background(Some(*color)))
    }
}

impl<W: Widget> Widget for Modifier<W> {
    fn node(&self) -> &Node {
        self.widget.node()
    }
}

impl<W: Widget> IntoView for Modifier<W> {
    fn into_view(self) -> View {
        View::Widget(self.widget.node().clone())
    }
}
