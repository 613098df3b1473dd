#![forbid(unsafe_code)]

//! arbor public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users:
//! module aliases for each member crate, plus a prelude with flat
//! re-exports of the types nearly every arbor program touches.

pub use arbor_core as core;
pub use arbor_layout as layout;
pub use arbor_reactive as reactive;
pub use arbor_style as style;
pub use arbor_widgets as widgets;

pub mod prelude {
    pub use arbor_core::{Edges, Insets, Point, Rect, Size, WidgetId};
    pub use arbor_layout::{Axis, EmbedPosition, Guide, StackAlignment};
    pub use arbor_reactive::{
        Binding, BindingScope, Computed, Observable, Subscription, TwoWayBinding,
    };
    pub use arbor_style::{Color, Environment, Font, FontWeight, TextAlignment};
    pub use arbor_widgets::views;
    pub use arbor_widgets::{
        Button, Cell, Container, DynamicViews, HStack, IndexableViews, IntoView, Label,
        Modifier, Navigator, Node, Screen, Scroll, SingleViews, StaticViews, Table,
        TextField, Toggle, VStack, View, Widget, Window, list,
    };
}
