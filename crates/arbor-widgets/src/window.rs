#![forbid(unsafe_code)]

//! Top-level window.
//!
//! A window owns at most one root view and is what makes a subtree "live":
//! widgets point at their window weakly, and lifecycle dispatch keys off
//! that attachment. Replacing the root detaches the old subtree, firing its
//! disappear handlers, before the new one attaches.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use arbor_core::Insets;

use crate::node::Node;
use crate::view::{IntoView, View};

pub(crate) struct WindowInner {
    safe_area: Cell<Insets>,
    root: RefCell<Option<View>>,
}

/// A host for one widget tree.
///
/// The window holds its root view strongly; nodes hold the window weakly.
/// Dropping the window therefore detaches nothing explicitly, it simply
/// releases the whole tree.
#[derive(Clone)]
pub struct Window {
    inner: Rc<WindowInner>,
}

impl Window {
    #[must_use]
    pub fn new() -> Self {
        Self::with_safe_area(Insets::ZERO)
    }

    /// A window whose safe area is inset from its bounds, as under a status
    /// bar or rounded corners.
    #[must_use]
    pub fn with_safe_area(insets: Insets) -> Self {
        Window {
            inner: Rc::new(WindowInner {
                safe_area: Cell::new(insets),
                root: RefCell::new(None),
            }),
        }
    }

    #[must_use]
    pub fn safe_area(&self) -> Insets {
        self.inner.safe_area.get()
    }

    pub fn set_safe_area(&self, insets: Insets) {
        self.inner.safe_area.set(insets);
    }

    /// Mount `view` as the window's root, replacing any current root.
    ///
    /// The view must flatten to at most one widget; an empty view clears the
    /// window. Flattening to several widgets is a configuration error and
    /// panics: wrap them in a container first.
    pub fn set_root(&self, view: impl IntoView) {
        let view = view.into_view();
        let widgets = view.to_widgets();
        assert!(
            widgets.len() <= 1,
            "window root must flatten to at most one widget, got {}",
            widgets.len()
        );
        self.detach_current();
        match widgets.first() {
            Some(node) => {
                assert!(
                    node.parent().is_none(),
                    "window root {} already has a parent",
                    node.id()
                );
                *self.inner.root.borrow_mut() = Some(view);
                node.set_window(&Rc::downgrade(&self.inner));
                tracing::debug!(
                    message = "window.root_set",
                    root = %node.id(),
                    kind = node.kind_name(),
                );
            }
            None => {
                tracing::debug!(message = "window.root_cleared");
            }
        }
    }

    /// Detach the current root, if any, firing its disappear handlers.
    pub fn clear_root(&self) {
        self.detach_current();
        tracing::debug!(message = "window.root_cleared");
    }

    /// The root widget currently mounted, if any.
    #[must_use]
    pub fn root(&self) -> Option<Node> {
        self.inner
            .root
            .borrow()
            .as_ref()
            .and_then(|view| view.to_widgets().into_iter().next())
    }

    fn detach_current(&self) {
        let old = self.inner.root.borrow_mut().take();
        if let Some(view) = old {
            for node in view.to_widgets() {
                node.set_window(&Weak::new());
            }
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}
