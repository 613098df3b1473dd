#![forbid(unsafe_code)]

//! Linear stacks.
//!
//! Stacks lay their children out themselves along one axis, so arranged
//! children carry no embed constraints of their own; spacing and cross-axis
//! alignment live on the stack. Everything else about a stack child
//! (lifecycle, bindings, attributes) works exactly as it does elsewhere.

use std::cell::Cell;
use std::rc::Rc;

use arbor_layout::{Axis, StackAlignment};
use arbor_style::Environment;

use crate::Widget;
use crate::builders::{IndexableViews, drive_children};
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

pub(crate) struct StackState {
    pub(crate) axis: Axis,
    pub(crate) spacing: Cell<f64>,
    pub(crate) alignment: Cell<StackAlignment>,
}

fn stack_node(axis: Axis) -> Node {
    let env = Environment::default();
    Node::new(NodeKind::Stack(StackState {
        axis,
        spacing: Cell::new(env.spacing),
        alignment: Cell::new(StackAlignment::default()),
    }))
}

fn state(node: &Node) -> &StackState {
    match node.kind() {
        NodeKind::Stack(state) => state,
        _ => unreachable!("stack handle over a non-stack node"),
    }
}

// ---------------------------------------------------------------------------
// VStack
// ---------------------------------------------------------------------------

/// A top-to-bottom stack.
pub struct VStack {
    node: Node,
}

impl VStack {
    pub fn new(content: impl IntoView) -> Modifier<VStack> {
        let stack = VStack {
            node: stack_node(Axis::Vertical),
        };
        Modifier::new(stack, |node| {
            for child in content.into_view().to_widgets() {
                node.add_arranged(child);
            }
        })
    }

    /// A stack whose arranged children follow `views`, rebuilt in full on
    /// every update signal.
    pub fn dynamic(views: impl IndexableViews + 'static) -> Modifier<VStack> {
        let stack = VStack {
            node: stack_node(Axis::Vertical),
        };
        Modifier::new(stack, |node| drive_children(node, Rc::new(views), true))
    }

    /// Rebuild a typed handle from a tree node. `None` unless the node is a
    /// vertical stack.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<VStack> {
        match node.kind() {
            NodeKind::Stack(state) if state.axis == Axis::Vertical => {
                Some(VStack { node: node.clone() })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        state(&self.node).axis
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        state(&self.node).spacing.get()
    }

    #[must_use]
    pub fn alignment(&self) -> StackAlignment {
        state(&self.node).alignment.get()
    }
}

impl Widget for VStack {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for VStack {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

impl Modifier<VStack> {
    pub fn spacing(self, spacing: f64) -> Self {
        self.apply(|node| state(node).spacing.set(spacing))
    }

    pub fn alignment(self, alignment: StackAlignment) -> Self {
        self.apply(|node| state(node).alignment.set(alignment))
    }
}

// ---------------------------------------------------------------------------
// HStack
// ---------------------------------------------------------------------------

/// A leading-to-trailing stack.
pub struct HStack {
    node: Node,
}

impl HStack {
    pub fn new(content: impl IntoView) -> Modifier<HStack> {
        let stack = HStack {
            node: stack_node(Axis::Horizontal),
        };
        Modifier::new(stack, |node| {
            for child in content.into_view().to_widgets() {
                node.add_arranged(child);
            }
        })
    }

    pub fn dynamic(views: impl IndexableViews + 'static) -> Modifier<HStack> {
        let stack = HStack {
            node: stack_node(Axis::Horizontal),
        };
        Modifier::new(stack, |node| drive_children(node, Rc::new(views), true))
    }

    /// Rebuild a typed handle from a tree node. `None` unless the node is a
    /// horizontal stack.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<HStack> {
        match node.kind() {
            NodeKind::Stack(state) if state.axis == Axis::Horizontal => {
                Some(HStack { node: node.clone() })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        state(&self.node).axis
    }

    #[must_use]
    pub fn spacing(&self) -> f64 {
        state(&self.node).spacing.get()
    }

    #[must_use]
    pub fn alignment(&self) -> StackAlignment {
        state(&self.node).alignment.get()
    }
}

impl Widget for HStack {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for HStack {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

impl Modifier<HStack> {
    pub fn spacing(self, spacing: f64) -> Self {
        self.apply(|node| state(node).spacing.set(spacing))
    }

    pub fn alignment(self, alignment: StackAlignment) -> Self {
        self.apply(|node| state(node).alignment.set(alignment))
    }
}
