#![forbid(unsafe_code)]

//! Retained widget tree, views, modifiers, and list containers for arbor.
//!
//! Widgets are cheap handles over reference-counted tree nodes. A handle is
//! configured by chaining [`Modifier`] methods, flattened into a [`View`],
//! and mounted under a [`Window`] (usually through a [`Screen`] on a
//! [`Navigator`]). Everything here is single-threaded; handles are neither
//! `Send` nor `Sync`.

pub mod attributes;
pub mod builders;
pub mod lifecycle;
pub mod modifier;
pub mod navigator;
pub mod node;
pub mod screen;
pub mod view;
pub mod widgets;
pub mod window;

pub use attributes::{AttributeRecord, with_attributes, with_optional_attributes};
pub use builders::{DynamicViews, IndexableViews, SingleViews, StaticViews};
pub use modifier::Modifier;
pub use navigator::Navigator;
pub use node::{InstalledConstraint, Node};
pub use screen::Screen;
pub use view::{IntoView, View};
pub use widgets::button::Button;
pub use widgets::container::Container;
pub use widgets::label::Label;
pub use widgets::scroll::{Scroll, list};
pub use widgets::stack::{HStack, VStack};
pub use widgets::table::{Cell, Table};
pub use widgets::text_field::TextField;
pub use widgets::toggle::Toggle;
pub use window::Window;

/// A `Widget` is a typed handle over one tree [`Node`].
///
/// The handle carries widget-specific accessors; the node carries identity,
/// hierarchy, and shared visual properties. Cloning a handle never copies
/// the widget, it aliases the same node.
pub trait Widget {
    /// The tree node this handle aliases.
    fn node(&self) -> &Node;

    /// Stable identifier of the underlying node.
    fn id(&self) -> arbor_core::WidgetId {
        self.node().id()
    }
}
