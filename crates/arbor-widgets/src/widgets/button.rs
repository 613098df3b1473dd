//! Tappable button.

use std::cell::{Cell, RefCell};

use arbor_reactive::Observable;
use arbor_style::{Color, Environment};

use crate::Widget;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

pub(crate) struct ButtonState {
    pub(crate) title: RefCell<String>,
    pub(crate) tint: Cell<Color>,
    pub(crate) handlers: RefCell<Vec<Box<dyn FnMut()>>>,
}

/// A titled button firing registered tap handlers.
pub struct Button {
    node: Node,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Modifier<Button> {
        Self::styled(&Environment::default(), title)
    }

    /// A button tinted from `env` instead of the defaults.
    pub fn styled(env: &Environment, title: impl Into<String>) -> Modifier<Button> {
        let state = ButtonState {
            title: RefCell::new(title.into()),
            tint: Cell::new(env.tint),
            handlers: RefCell::new(Vec::new()),
        };
        Modifier::wrap(Button {
            node: Node::new(NodeKind::Button(state)),
        })
    }

    /// Rebuild a typed handle from a tree node. `None` for other kinds.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<Button> {
        match node.kind() {
            NodeKind::Button(_) => Some(Button { node: node.clone() }),
            _ => None,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        state(&self.node).title.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *state(&self.node).title.borrow_mut() = title.into();
    }

    #[must_use]
    pub fn tint(&self) -> Color {
        state(&self.node).tint.get()
    }

    pub fn set_tint(&self, tint: Color) {
        state(&self.node).tint.set(tint);
    }

    /// Fire every tap handler in registration order, as a host backend
    /// would on a pointer release inside the button's bounds.
    ///
    /// Handlers are taken out while they run, so a handler may register
    /// further handlers; those fire from the next tap on.
    pub fn perform_tap(&self) {
        let mut handlers = std::mem::take(&mut *state(&self.node).handlers.borrow_mut());
        for handler in handlers.iter_mut() {
            handler();
        }
        tracing::debug!(
            message = "button.tap",
            widget = %self.node.id(),
            handlers = handlers.len(),
        );
        let slot = &state(&self.node).handlers;
        let mut current = slot.borrow_mut();
        handlers.append(&mut current);
        *current = handlers;
    }

    #[must_use]
    pub fn handler_count(&self) -> usize {
        state(&self.node).handlers.borrow().len()
    }
}

fn state(node: &Node) -> &ButtonState {
    match node.kind() {
        NodeKind::Button(state) => state,
        _ => unreachable!("button handle over a non-button node"),
    }
}

impl Widget for Button {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Button {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

impl Modifier<Button> {
    /// Register a tap handler.
    ///
    /// The handler lives as long as the button; capturing the button's own
    /// handle strongly inside it keeps the button alive forever.
    pub fn on_tap(self, handler: impl FnMut() + 'static) -> Self {
        self.apply(|node| {
            state(node).handlers.borrow_mut().push(Box::new(handler));
        })
    }

    pub fn tint(self, tint: Color) -> Self {
        self.apply(|node| state(node).tint.set(tint))
    }

    /// One-way bind the title to `source`.
    pub fn bind_title(self, source: &Observable<String>) -> Self {
        self.bind(source, |node, title| {
            *state(node).title.borrow_mut() = title.clone();
        })
    }
}
