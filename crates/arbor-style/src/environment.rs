#![forbid(unsafe_code)]

//! Explicitly-passed styling defaults.
//!
//! An [`Environment`] replaces process-wide mutable defaults: callers
//! construct one, adjust it with the builder methods, and hand it to
//! styled widget constructors. Nothing in the engine reads ambient
//! state.

use crate::color::Color;
use crate::font::Font;

/// Default styling for widgets constructed through an environment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Text color for labels.
    pub label_color: Color,
    /// Font for labels.
    pub label_font: Font,
    /// Font for editable text fields.
    pub field_font: Font,
    /// Accent color for interactive widgets.
    pub tint: Color,
    /// Default gap between stacked siblings.
    pub spacing: f64,
    /// Default corner radius for card-like surfaces.
    pub corner_radius: f64,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn label_font(mut self, font: Font) -> Self {
        self.label_font = font;
        self
    }

    #[must_use]
    pub fn field_font(mut self, font: Font) -> Self {
        self.field_font = font;
        self
    }

    #[must_use]
    pub fn tint(mut self, color: Color) -> Self {
        self.tint = color;
        self
    }

    #[must_use]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    #[must_use]
    pub fn corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            label_color: Color::BLACK,
            label_font: Font::default(),
            field_font: Font::system(15.0),
            tint: Color::BLUE,
            spacing: 8.0,
            corner_radius: 10.0,
        }
    }
}
