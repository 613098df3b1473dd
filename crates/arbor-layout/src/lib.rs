#![forbid(unsafe_code)]

//! Layout vocabulary and the embed-constraint resolver.
//!
//! This crate is pure data-in, data-out: a symbolic [`EmbedPosition`]
//! plus [`Insets`](arbor_core::Insets) resolve into a small set of
//! [`ConstraintSpec`]s relating a child widget to a reference rectangle.
//! Installing the specs on a live tree, and solving them, both happen
//! elsewhere.

pub mod arrange;
pub mod constraint;
pub mod embed;
pub mod position;

pub use arrange::{Axis, StackAlignment};
pub use constraint::{Attribute, ConstraintSpec, Guide, Priority, Relation};
pub use embed::resolve;
pub use position::EmbedPosition;
