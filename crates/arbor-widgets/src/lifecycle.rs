#![forbid(unsafe_code)]

//! Lifecycle dispatch.
//!
//! Appear events are gated twice: the widget must have just joined a live
//! window's tree, and the screen owning it must be the visible top of its
//! navigation stack. Disappear events fire on any detachment, ungated.
//!
//! # Invariants
//!
//! 1. A widget with no owning screen never receives appear events.
//! 2. Appear-once handlers are drained before invocation, so one fires at
//!    most once per registration no matter how often the widget reattaches.
//! 3. Appear-once handlers run before recurring appear handlers within one
//!    dispatch.
//! 4. Handler lists are taken out of the attribute store while they run; a
//!    handler registered during dispatch fires on the next dispatch, never
//!    the current one.

use crate::attributes::{self, HandlerKind};
use crate::node::Node;

/// Entry point from the tree walk; `attached` is the node's new state.
pub(crate) fn window_attachment_changed(node: &Node, attached: bool) {
    if attached {
        dispatch_appear(node);
    } else {
        dispatch_disappear(node);
    }
}

fn dispatch_appear(node: &Node) {
    let Some(screen) = node.owning_screen() else {
        tracing::trace!(
            message = "lifecycle.appear.skipped",
            widget = %node.id(),
            reason = "no owning screen",
        );
        return;
    };
    if !screen.is_visible_top() {
        tracing::trace!(
            message = "lifecycle.appear.skipped",
            widget = %node.id(),
            reason = "screen obscured",
        );
        return;
    }

    // Drained for good: each of these fires at most once, ever.
    let once = attributes::take_handlers(node.id(), HandlerKind::AppearOnce);
    let once_fired = once.len();
    for mut handler in once {
        handler(node);
    }

    let mut recurring = attributes::take_handlers(node.id(), HandlerKind::Appear);
    for handler in recurring.iter_mut() {
        handler(node);
    }
    let recurring_fired = recurring.len();
    attributes::restore_handlers(node.id(), HandlerKind::Appear, recurring);

    if once_fired + recurring_fired > 0 {
        tracing::debug!(
            message = "lifecycle.appear",
            widget = %node.id(),
            kind = node.kind_name(),
            once = once_fired,
            recurring = recurring_fired,
        );
    }
}

fn dispatch_disappear(node: &Node) {
    let mut handlers = attributes::take_handlers(node.id(), HandlerKind::Disappear);
    for handler in handlers.iter_mut() {
        handler(node);
    }
    let fired = handlers.len();
    attributes::restore_handlers(node.id(), HandlerKind::Disappear, handlers);

    if fired > 0 {
        tracing::debug!(
            message = "lifecycle.disappear",
            widget = %node.id(),
            kind = node.kind_name(),
            fired,
        );
    }
}
