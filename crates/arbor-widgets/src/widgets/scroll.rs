//! Scrollable viewport, and the `list` composite built from it.

use crate::Widget;
use crate::builders::IndexableViews;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};
use crate::widgets::stack::VStack;

/// A viewport that scrolls its embedded content.
pub struct Scroll {
    node: Node,
}

impl Scroll {
    pub fn new(content: impl IntoView) -> Modifier<Scroll> {
        let scroll = Scroll {
            node: Node::new(NodeKind::Scroll),
        };
        Modifier::new(scroll, |node| node.embed(content))
    }
}

impl Widget for Scroll {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Scroll {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

/// A vertically scrolling list: a dynamic [`VStack`] filling a [`Scroll`].
///
/// The stack rebuilds on every source update; the scroll hosts it. This is
/// the rebuild-everything list, suited to small collections. Use
/// [`Table`](crate::widgets::table::Table) where a host backend should
/// recycle rows instead.
pub fn list(views: impl IndexableViews + 'static) -> Modifier<Scroll> {
    Scroll::new(VStack::dynamic(views))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_reactive::Observable;
    use crate::builders::DynamicViews;
    use crate::widgets::label::Label;

    #[test]
    fn scroll_embeds_its_content_filled() {
        let scroll = Scroll::new(Label::new("body"));
        let child = scroll.node().child_at(0).expect("content embedded");
        assert_eq!(scroll.node().constraints_on(child.id()).len(), 4);
    }

    #[test]
    fn list_wires_a_dynamic_stack_into_a_scroll() {
        let items = Observable::new(vec!["a".to_string(), "b".to_string()]);
        let rows = DynamicViews::new(&items, |s| Label::new(s.clone()).into_view());
        let list = list(rows);

        let stack = list.node().child_at(0).expect("the stack is the content");
        assert_eq!(stack.kind_name(), "stack");
        assert_eq!(stack.child_count(), 2);

        items.update(|v| v.push("c".to_string()));
        assert_eq!(stack.child_count(), 3, "the stack follows the items");
    }
}
