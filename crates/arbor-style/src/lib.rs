#![forbid(unsafe_code)]

//! Style: colors, fonts, and explicitly-passed environment defaults.

pub mod color;
pub mod environment;
pub mod font;

pub use color::Color;
pub use environment::Environment;
pub use font::{Font, FontWeight, TextAlignment};
