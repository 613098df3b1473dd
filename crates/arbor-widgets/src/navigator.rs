#![forbid(unsafe_code)]

//! Screen stack over a window.
//!
//! The navigator owns the window's root slot. Pushing a screen detaches the
//! covered screen's subtree entirely, so its widgets receive disappear
//! events; popping reattaches the revealed screen, so its widgets receive
//! appear events again. Appear-once handlers stay drained across those
//! cycles.
//!
//! # Invariants
//!
//! 1. At most one screen's subtree is attached at a time: the top.
//! 2. A screen's navigator backref is set before the screen attaches, so
//!    visibility checks during the attach dispatch see the final stack.
//! 3. Within one push or pop, disappear dispatch for the outgoing screen
//!    completes before appear dispatch for the incoming one begins.
//! 4. The root screen cannot be popped; [`Navigator::pop`] at depth one
//!    returns `None` and changes nothing.
//!
//! # Example
//!
//! ```ignore
//! let window = Window::new();
//! let nav = Navigator::new(&window);
//! nav.push(Screen::new(home).with_title("Home"));
//! nav.push(Screen::new(detail).with_title("Detail"));
//! nav.pop(); // back to Home; its appear handlers fire again
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use arbor_core::WidgetId;

use crate::screen::Screen;
use crate::window::Window;

pub(crate) struct NavigatorInner {
    stack: RefCell<Vec<Screen>>,
    window: Window,
}

impl NavigatorInner {
    pub(crate) fn top_id(&self) -> Option<WidgetId> {
        self.stack.borrow().last().map(Screen::id)
    }
}

/// Stack of screens sharing one window.
///
/// The navigator holds its screens strongly. Dropping the navigator
/// releases every covered screen; only the screen mounted in the window
/// survives it.
#[derive(Clone)]
pub struct Navigator {
    pub(crate) inner: Rc<NavigatorInner>,
}

impl Navigator {
    /// A navigator managing `window`'s root slot.
    #[must_use]
    pub fn new(window: &Window) -> Self {
        Navigator {
            inner: Rc::new(NavigatorInner {
                stack: RefCell::new(Vec::new()),
                window: window.clone(),
            }),
        }
    }

    /// Push `screen` on top, covering the current top.
    ///
    /// The covered screen's subtree detaches (disappear events), then the
    /// pushed screen's subtree attaches (appear events).
    pub fn push(&self, screen: Screen) {
        screen.set_navigator(&self.inner);
        self.inner.stack.borrow_mut().push(screen.clone());
        // Swapping the window root detaches the covered screen first.
        self.inner.window.set_root(screen.clone());
        tracing::debug!(
            message = "navigator.push",
            screen = %screen.id(),
            title = %screen.title(),
            depth = self.depth(),
        );
    }

    /// Pop the top screen, revealing the one beneath it.
    ///
    /// Returns `None` without side effects at depth one: the root screen
    /// stays.
    pub fn pop(&self) -> Option<Screen> {
        let (popped, revealed) = {
            let mut stack = self.inner.stack.borrow_mut();
            if stack.len() <= 1 {
                return None;
            }
            let popped = stack.pop()?;
            let revealed = stack
                .last()
                .cloned()
                .expect("depth was at least two before the pop");
            (popped, revealed)
        };
        popped.clear_navigator();
        // Detaches the popped subtree, then reattaches the revealed one.
        self.inner.window.set_root(revealed.clone());
        tracing::debug!(
            message = "navigator.pop",
            popped = %popped.id(),
            revealed = %revealed.id(),
            depth = self.depth(),
        );
        Some(popped)
    }

    /// The screen currently visible, if any.
    #[must_use]
    pub fn top(&self) -> Option<Screen> {
        self.inner.stack.borrow().last().cloned()
    }

    /// The bottom-most screen, if any.
    #[must_use]
    pub fn root(&self) -> Option<Screen> {
        self.inner.stack.borrow().first().cloned()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.inner.stack.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.stack.borrow().is_empty()
    }

    /// Bottom-to-top snapshot of the stack.
    #[must_use]
    pub fn screens(&self) -> Vec<Screen> {
        self.inner.stack.borrow().clone()
    }
}
