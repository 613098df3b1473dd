#![forbid(unsafe_code)]

//! Screens.
//!
//! A screen owns one container subtree and is the unit navigation deals in.
//! Lifecycle dispatch walks up from a widget to its owning screen and asks
//! whether that screen is the visible top of its stack; a screen outside any
//! navigator counts as visible whenever it is attached.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use arbor_core::WidgetId;

use crate::navigator::{Navigator, NavigatorInner};
use crate::node::{Node, NodeKind};
use crate::view::IntoView;

pub(crate) struct ScreenInner {
    root: Node,
    navigator: RefCell<Weak<NavigatorInner>>,
    title: RefCell<String>,
}

/// One navigable unit of interface: a root container plus its content.
#[derive(Clone)]
pub struct Screen {
    pub(crate) inner: Rc<ScreenInner>,
}

impl Screen {
    /// Build a screen over `content`. The content embeds into the screen's
    /// root container with whatever embed configuration each widget carries.
    #[must_use]
    pub fn new(content: impl IntoView) -> Self {
        let root = Node::new(NodeKind::Container);
        let screen = Screen {
            inner: Rc::new(ScreenInner {
                root: root.clone(),
                navigator: RefCell::new(Weak::new()),
                title: RefCell::new(String::new()),
            }),
        };
        root.set_screen_backref(&screen.inner);
        root.embed(content);
        screen
    }

    /// Set the title and keep building.
    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        *self.inner.title.borrow_mut() = title.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.inner.title.borrow().clone()
    }

    /// The root container every piece of content hangs under.
    #[must_use]
    pub fn root(&self) -> Node {
        self.inner.root.clone()
    }

    /// Identity of the screen, taken from its root node.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.inner.root.id()
    }

    /// The navigator currently hosting this screen, if any.
    #[must_use]
    pub fn navigator(&self) -> Option<Navigator> {
        self.inner
            .navigator
            .borrow()
            .upgrade()
            .map(|inner| Navigator { inner })
    }

    /// Whether appear events should reach this screen's widgets right now.
    ///
    /// True when the screen tops its navigation stack, and always true for a
    /// screen outside any navigator.
    #[must_use]
    pub fn is_visible_top(&self) -> bool {
        match self.inner.navigator.borrow().upgrade() {
            Some(nav) => nav.top_id() == Some(self.id()),
            None => true,
        }
    }

    pub(crate) fn set_navigator(&self, navigator: &Rc<NavigatorInner>) {
        *self.inner.navigator.borrow_mut() = Rc::downgrade(navigator);
    }

    pub(crate) fn clear_navigator(&self) {
        *self.inner.navigator.borrow_mut() = Weak::new();
    }
}

impl PartialEq for Screen {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Screen {}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("id", &self.id())
            .field("title", &*self.inner.title.borrow())
            .field("in_navigator", &self.inner.navigator.borrow().upgrade().is_some())
            .finish()
    }
}
