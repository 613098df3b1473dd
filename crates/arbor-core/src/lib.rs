#![forbid(unsafe_code)]

//! Core: geometry, edge sets, and widget identity.

pub mod edges;
pub mod geometry;
pub mod id;

pub use edges::Edges;
pub use geometry::{Insets, Point, Rect, Size};
pub use id::WidgetId;
