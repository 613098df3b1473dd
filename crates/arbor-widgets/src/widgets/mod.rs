//! Built-in widgets.
//!
//! Every widget follows the same shape: a handle struct over a [`Node`],
//! a constructor returning a [`Modifier`] chain, typed methods on
//! `Modifier<TheWidget>`, and plain getters on the handle for reading state
//! back (mostly in tests and host integrations).
//!
//! [`Node`]: crate::node::Node
//! [`Modifier`]: crate::modifier::Modifier

pub mod button;
pub mod container;
pub mod label;
pub mod scroll;
pub mod stack;
pub mod table;
pub mod text_field;
pub mod toggle;
