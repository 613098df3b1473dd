//! Plain composition container.
//!
//! Children embed with whatever configuration each carries, which makes the
//! container the canvas for positioned layouts: banners pinned to edges,
//! centered overlays, custom constraint sets.

use std::rc::Rc;

use crate::Widget;
use crate::builders::{IndexableViews, drive_children};
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

/// A widget whose only job is hosting embedded children.
pub struct Container {
    node: Node,
}

impl Container {
    /// An empty container.
    pub fn new() -> Modifier<Container> {
        Modifier::wrap(Container {
            node: Node::new(NodeKind::Container),
        })
    }

    /// A container embedding `content` up front.
    pub fn with(content: impl IntoView) -> Modifier<Container> {
        Container::new().apply(|node| node.embed(content))
    }

    /// A container whose children follow `views`: built now, torn down and
    /// rebuilt in full on every update signal.
    pub fn dynamic(views: impl IndexableViews + 'static) -> Modifier<Container> {
        Container::new().apply(|node| drive_children(node, Rc::new(views), false))
    }

    /// Embed more content after construction.
    pub fn add(&self, content: impl IntoView) {
        self.node.embed(content);
    }
}

impl Widget for Container {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Container {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}
