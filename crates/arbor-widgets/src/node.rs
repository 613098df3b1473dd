#![forbid(unsafe_code)]

//! Retained widget tree.
//!
//! A [`Node`] is a cheap clonable handle over one reference-counted tree
//! entry. Parents hold children strongly; children point back at parents,
//! windows, and screens weakly, so dropping a window or screen releases its
//! subtree without cycles.
//!
//! # Invariants
//!
//! 1. A node has at most one parent. Embedding an already-parented node is a
//!    programmer error and panics.
//! 2. Window attachment propagates through whole subtrees in one pass, parent
//!    before children, and lifecycle dispatch fires only for nodes whose
//!    attachment state actually changed.
//! 3. Constraints installed on a parent describe that parent's direct
//!    children only; removing a child removes the constraints that named it.
//! 4. Dropping the last handle to a node purges its out-of-band attribute
//!    record, releasing any reactive subscriptions held there.
//!
//! # Failure Modes
//!
//! - Embedding a node under itself, or under a second parent, panics.
//! - Installing constraints for a node that is not a direct child panics.
//!
//! # Example
//!
//! ```ignore
//! let root = Node::new(NodeKind::Container);
//! root.embed(Label::new("ready"));
//! assert_eq!(root.child_count(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use arbor_core::{Insets, WidgetId};
use arbor_layout::{ConstraintSpec, EmbedPosition, Guide, resolve};
use arbor_style::Color;

use crate::attributes;
use crate::lifecycle;
use crate::screen::{Screen, ScreenInner};
use crate::view::IntoView;
use crate::widgets::button::ButtonState;
use crate::widgets::label::LabelState;
use crate::widgets::stack::StackState;
use crate::widgets::table::TableState;
use crate::widgets::text_field::TextFieldState;
use crate::widgets::toggle::ToggleState;
use crate::window::WindowInner;

// ---------------------------------------------------------------------------
// NodeKind: per-widget payload carried by the tree entry
// ---------------------------------------------------------------------------

/// Widget-specific payload stored inline in the tree entry.
///
/// Typed handles (`Label`, `Toggle`, ...) are constructed over a node of the
/// matching kind and reach their state through it.
pub(crate) enum NodeKind {
    Container,
    Label(LabelState),
    Button(ButtonState),
    TextField(TextFieldState),
    Toggle(ToggleState),
    Stack(StackState),
    Scroll,
    Table(TableState),
    Cell,
}

impl NodeKind {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            NodeKind::Container => "container",
            NodeKind::Label(_) => "label",
            NodeKind::Button(_) => "button",
            NodeKind::TextField(_) => "text_field",
            NodeKind::Toggle(_) => "toggle",
            NodeKind::Stack(_) => "stack",
            NodeKind::Scroll => "scroll",
            NodeKind::Table(_) => "table",
            NodeKind::Cell => "cell",
        }
    }
}

// ---------------------------------------------------------------------------
// InstalledConstraint: a resolved spec recorded against a parent
// ---------------------------------------------------------------------------

/// One constraint a parent holds for a direct child.
#[derive(Debug, Clone, PartialEq)]
pub struct InstalledConstraint {
    /// The child the constraint positions.
    pub child: WidgetId,
    /// The resolved spec, identifier included.
    pub spec: ConstraintSpec,
}

// ---------------------------------------------------------------------------
// NodeInner: the shared tree entry
// ---------------------------------------------------------------------------

pub(crate) struct NodeInner {
    id: WidgetId,
    kind: NodeKind,
    parent: RefCell<Weak<NodeInner>>,
    children: RefCell<Vec<Node>>,
    window: RefCell<Weak<WindowInner>>,
    screen: RefCell<Weak<ScreenInner>>,
    hidden: Cell<bool>,
    alpha: Cell<f64>,
    background: Cell<Option<Color>>,
    corner_radius: Cell<f64>,
    constraints: RefCell<Vec<InstalledConstraint>>,
}

impl Drop for NodeInner {
    fn drop(&mut self) {
        // Releases lifecycle handlers and the binding scope for this widget.
        attributes::purge(self.id);
    }
}

// ---------------------------------------------------------------------------
// Node: public handle
// ---------------------------------------------------------------------------

/// Clonable handle over one widget tree entry.
///
/// Equality is identity: two handles are equal when they alias the same
/// entry.
#[derive(Clone)]
pub struct Node {
    pub(crate) inner: Rc<NodeInner>,
}

#[derive(Clone, Default)]
pub(crate) struct WeakNode(Weak<NodeInner>);

impl WeakNode {
    pub(crate) fn upgrade(&self) -> Option<Node> {
        self.0.upgrade().map(|inner| Node { inner })
    }
}

impl Node {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Node {
            inner: Rc::new(NodeInner {
                id: WidgetId::next(),
                kind,
                parent: RefCell::new(Weak::new()),
                children: RefCell::new(Vec::new()),
                window: RefCell::new(Weak::new()),
                screen: RefCell::new(Weak::new()),
                hidden: Cell::new(false),
                alpha: Cell::new(1.0),
                background: Cell::new(None),
                corner_radius: Cell::new(0.0),
                constraints: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Stable identifier, unique for the lifetime of the process.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.inner.id
    }

    /// Widget kind as a short lowercase name, for logs and assertions.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.inner.kind.name()
    }

    pub(crate) fn kind(&self) -> &NodeKind {
        &self.inner.kind
    }

    pub(crate) fn downgrade(&self) -> WeakNode {
        WeakNode(Rc::downgrade(&self.inner))
    }

    // -- hierarchy ---------------------------------------------------------

    /// The parent, if this node is currently embedded somewhere.
    #[must_use]
    pub fn parent(&self) -> Option<Node> {
        self.inner.parent.borrow().upgrade().map(|inner| Node { inner })
    }

    /// Snapshot of the direct children, in installation order.
    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.inner.children.borrow().clone()
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.inner.children.borrow().len()
    }

    #[must_use]
    pub fn child_at(&self, index: usize) -> Option<Node> {
        self.inner.children.borrow().get(index).cloned()
    }

    fn has_child(&self, id: WidgetId) -> bool {
        self.inner.children.borrow().iter().any(|c| c.id() == id)
    }

    /// Whether this node is currently part of a live window's tree.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.window.borrow().strong_count() > 0
    }

    /// Flatten `view` and embed every widget in it under this node,
    /// installing the constraints its embed configuration resolves to.
    pub fn embed(&self, view: impl IntoView) {
        for child in view.into_view().to_widgets() {
            self.embed_node(child);
        }
    }

    /// Embed one child and install its resolved constraints on `self`.
    pub(crate) fn embed_node(&self, child: Node) {
        self.adopt(&child);
        let plan = attributes::embed_plan(child.id());
        let specs = match plan.custom {
            Some(build) => build(self, &child),
            None => resolve(plan.position, plan.insets, plan.guide).into_vec(),
        };
        tracing::trace!(
            message = "node.embed",
            parent = %self.id(),
            child = %child.id(),
            kind = child.kind_name(),
            constraints = specs.len(),
        );
        self.install_constraints(child.id(), specs);
    }

    /// Add a child with no constraints of its own. Stacks use this for
    /// arranged children they position themselves.
    pub(crate) fn add_arranged(&self, child: Node) {
        self.adopt(&child);
    }

    /// Link `child` under `self` and propagate window attachment.
    fn adopt(&self, child: &Node) {
        assert!(
            *self != *child,
            "widget {} cannot contain itself",
            child.id()
        );
        assert!(
            child.parent().is_none(),
            "widget {} already has a parent",
            child.id()
        );
        *child.inner.parent.borrow_mut() = Rc::downgrade(&self.inner);
        self.inner.children.borrow_mut().push(child.clone());
        let window = self.inner.window.borrow().clone();
        child.set_window(&window);
    }

    /// Detach from the parent, dropping the constraints that positioned this
    /// node and firing disappear handlers down the subtree.
    pub fn remove_from_parent(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .inner
            .children
            .borrow_mut()
            .retain(|c| c.id() != self.id());
        parent.clear_constraints_for(self.id());
        *self.inner.parent.borrow_mut() = Weak::new();
        self.set_window(&Weak::new());
    }

    /// Detach every child in one pass. Containers driven by a view builder
    /// call this before rebuilding.
    pub(crate) fn remove_all_children(&self) {
        let children = std::mem::take(&mut *self.inner.children.borrow_mut());
        for child in children {
            self.clear_constraints_for(child.id());
            *child.inner.parent.borrow_mut() = Weak::new();
            child.set_window(&Weak::new());
        }
    }

    /// Point this subtree at `window`, dispatching lifecycle events for every
    /// node whose attachment state flips. Parent first, then children.
    pub(crate) fn set_window(&self, window: &Weak<WindowInner>) {
        let was = self.inner.window.borrow().strong_count() > 0;
        let now = window.strong_count() > 0;
        *self.inner.window.borrow_mut() = window.clone();
        if was != now {
            lifecycle::window_attachment_changed(self, now);
        }
        for child in self.children() {
            child.set_window(window);
        }
    }

    // -- screens -----------------------------------------------------------

    pub(crate) fn set_screen_backref(&self, screen: &Rc<ScreenInner>) {
        *self.inner.screen.borrow_mut() = Rc::downgrade(screen);
    }

    /// Walk up from this node to the screen whose subtree contains it.
    #[must_use]
    pub fn owning_screen(&self) -> Option<Screen> {
        let mut current = self.clone();
        loop {
            if let Some(inner) = current.inner.screen.borrow().upgrade() {
                return Some(Screen { inner });
            }
            current = current.parent()?;
        }
    }

    // -- shared visual properties -----------------------------------------

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.inner.hidden.get()
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.inner.hidden.set(hidden);
    }

    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.inner.alpha.get()
    }

    pub fn set_alpha(&self, alpha: f64) {
        self.inner.alpha.set(alpha);
    }

    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.inner.background.get()
    }

    pub fn set_background(&self, color: Option<Color>) {
        self.inner.background.set(color);
    }

    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.inner.corner_radius.get()
    }

    pub fn set_corner_radius(&self, radius: f64) {
        self.inner.corner_radius.set(radius);
    }

    // -- constraints -------------------------------------------------------

    /// Record constraints this node holds for a direct child.
    ///
    /// Repeated installs append; the caller is responsible for clearing stale
    /// sets first.
    pub(crate) fn install_constraints(&self, child: WidgetId, specs: Vec<ConstraintSpec>) {
        assert!(
            self.has_child(child),
            "no child {child} under {} to constrain",
            self.id()
        );
        let mut installed = self.inner.constraints.borrow_mut();
        installed.extend(
            specs
                .into_iter()
                .map(|spec| InstalledConstraint { child, spec }),
        );
    }

    pub(crate) fn clear_constraints_for(&self, child: WidgetId) {
        self.inner
            .constraints
            .borrow_mut()
            .retain(|c| c.child != child);
    }

    /// Every constraint installed on this node, in installation order.
    #[must_use]
    pub fn installed_constraints(&self) -> Vec<InstalledConstraint> {
        self.inner.constraints.borrow().clone()
    }

    /// Constraints this node holds for one direct child.
    #[must_use]
    pub fn constraints_on(&self, child: WidgetId) -> Vec<InstalledConstraint> {
        self.inner
            .constraints
            .borrow()
            .iter()
            .filter(|c| c.child == child)
            .cloned()
            .collect()
    }

    /// Look up one of a child's constraints by debug identifier
    /// (`"top"`, `"centerX"`, ...).
    #[must_use]
    pub fn constraint_matching(&self, child: WidgetId, identifier: &str) -> Option<ConstraintSpec> {
        self.inner
            .constraints
            .borrow()
            .iter()
            .find(|c| c.child == child && c.spec.identifier == identifier)
            .map(|c| c.spec)
    }

    // -- embed configuration shortcuts ------------------------------------

    /// Re-resolve and reinstall this node's constraints under its current
    /// parent. Used after its embed configuration changes post-embedding.
    pub fn reembed(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent.clear_constraints_for(self.id());
        let plan = attributes::embed_plan(self.id());
        let specs = match plan.custom {
            Some(build) => build(&parent, self),
            None => resolve(plan.position, plan.insets, plan.guide).into_vec(),
        };
        parent.install_constraints(self.id(), specs);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.inner.id)
            .field("kind", &self.kind_name())
            .field("children", &self.child_count())
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Window;

    fn container() -> Node {
        Node::new(NodeKind::Container)
    }

    #[test]
    fn embed_links_parent_and_child() {
        let parent = container();
        let child = container();
        parent.embed_node(child.clone());
        assert_eq!(parent.child_count(), 1, "child joins the parent");
        assert_eq!(
            child.parent(),
            Some(parent.clone()),
            "child points back at its parent"
        );
    }

    #[test]
    fn default_embed_installs_four_fill_constraints() {
        let parent = container();
        let child = container();
        parent.embed_node(child.clone());
        let installed = parent.constraints_on(child.id());
        assert_eq!(installed.len(), 4, "fill resolves to four edge pins");
        for c in &installed {
            assert!(c.spec.priority.is_required(), "fill pins are required");
        }
    }

    #[test]
    fn constraint_lookup_by_identifier() {
        let parent = container();
        let child = container();
        parent.embed_node(child.clone());
        let top = parent.constraint_matching(child.id(), "top");
        assert!(top.is_some(), "fill embeds carry a top constraint");
        assert!(
            parent.constraint_matching(child.id(), "centerX").is_none(),
            "fill embeds have no center constraints"
        );
    }

    #[test]
    #[should_panic(expected = "already has a parent")]
    fn double_embed_panics() {
        let a = container();
        let b = container();
        let child = container();
        a.embed_node(child.clone());
        b.embed_node(child);
    }

    #[test]
    #[should_panic(expected = "cannot contain itself")]
    fn self_embed_panics() {
        let node = container();
        node.embed_node(node.clone());
    }

    #[test]
    fn remove_from_parent_clears_links_and_constraints() {
        let parent = container();
        let child = container();
        parent.embed_node(child.clone());
        child.remove_from_parent();
        assert_eq!(parent.child_count(), 0, "parent forgets the child");
        assert!(child.parent().is_none(), "child forgets the parent");
        assert!(
            parent.constraints_on(child.id()).is_empty(),
            "constraints go with the child"
        );
    }

    #[test]
    fn window_attachment_propagates_to_subtree() {
        let root = container();
        let parent = container();
        let child = container();
        parent.embed_node(child.clone());
        root.embed_node(parent.clone());

        let window = Window::new();
        window.set_root(root.clone());
        assert!(parent.is_attached(), "subtree attaches with the root");
        assert!(child.is_attached(), "descendants attach with it");

        parent.remove_from_parent();
        assert!(!parent.is_attached(), "removed subtree detaches");
        assert!(!child.is_attached(), "descendants detach with their subtree");
    }

    #[test]
    fn late_child_inherits_attachment() {
        let parent = container();
        let window = Window::new();
        window.set_root(parent.clone());

        let child = container();
        assert!(!child.is_attached());
        parent.embed_node(child.clone());
        assert!(child.is_attached(), "embedding under a live tree attaches");
    }

    #[test]
    fn identity_equality_not_structural() {
        let a = container();
        let b = container();
        assert_ne!(a, b, "distinct nodes compare unequal");
        let alias = a.clone();
        assert_eq!(a, alias, "clones alias the same node");
    }
}
