#![forbid(unsafe_code)]

//! Static text.

use std::cell::{Cell, RefCell};

use arbor_reactive::Observable;
use arbor_style::{Color, Environment, Font, TextAlignment};
use unicode_width::UnicodeWidthStr;

use crate::Widget;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

pub(crate) struct LabelState {
    pub(crate) text: RefCell<String>,
    pub(crate) color: Cell<Color>,
    pub(crate) font: Cell<Font>,
    pub(crate) alignment: Cell<TextAlignment>,
}

/// A run of styled text.
pub struct Label {
    node: Node,
}

impl Label {
    /// A label showing `text`, styled from the default environment.
    pub fn new(text: impl Into<String>) -> Modifier<Label> {
        Self::styled(&Environment::default(), text)
    }

    /// A label styled from `env` instead of the defaults.
    pub fn styled(env: &Environment, text: impl Into<String>) -> Modifier<Label> {
        let state = LabelState {
            text: RefCell::new(text.into()),
            color: Cell::new(env.label_color),
            font: Cell::new(env.label_font),
            alignment: Cell::new(TextAlignment::default()),
        };
        Modifier::wrap(Label {
            node: Node::new(NodeKind::Label(state)),
        })
    }

    /// Rebuild a typed handle from a tree node, as a host walking children
    /// does. Answers `None` for nodes of another kind.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<Label> {
        match node.kind() {
            NodeKind::Label(_) => Some(Label { node: node.clone() }),
            _ => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        state(&self.node).text.borrow().clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *state(&self.node).text.borrow_mut() = text.into();
    }

    #[must_use]
    pub fn color(&self) -> Color {
        state(&self.node).color.get()
    }

    pub fn set_color(&self, color: Color) {
        state(&self.node).color.set(color);
    }

    #[must_use]
    pub fn font(&self) -> Font {
        state(&self.node).font.get()
    }

    pub fn set_font(&self, font: Font) {
        state(&self.node).font.set(font);
    }

    #[must_use]
    pub fn alignment(&self) -> TextAlignment {
        state(&self.node).alignment.get()
    }

    pub fn set_alignment(&self, alignment: TextAlignment) {
        state(&self.node).alignment.set(alignment);
    }

    /// Display width of the widest line, in terminal-style columns.
    /// East Asian wide characters count two; combining marks count zero.
    #[must_use]
    pub fn intrinsic_columns(&self) -> usize {
        state(&self.node)
            .text
            .borrow()
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
    }
}

fn state(node: &Node) -> &LabelState {
    match node.kind() {
        NodeKind::Label(state) => state,
        _ => unreachable!("label handle over a non-label node"),
    }
}

impl Widget for Label {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Label {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

impl Modifier<Label> {
    pub fn color(self, color: Color) -> Self {
        self.apply(|node| state(node).color.set(color))
    }

    pub fn font(self, font: Font) -> Self {
        self.apply(|node| state(node).font.set(font))
    }

    pub fn align(self, alignment: TextAlignment) -> Self {
        self.apply(|node| state(node).alignment.set(alignment))
    }

    /// One-way bind the text to `source`, applying its current value now.
    pub fn bind_text(self, source: &Observable<String>) -> Self {
        self.bind(source, |node, text| {
            *state(node).text.borrow_mut() = text.clone();
        })
    }

    /// One-way bind the text through a formatting map.
    pub fn bind_text_with<S: Clone + PartialEq + 'static>(
        self,
        source: &Observable<S>,
        format: impl Fn(&S) -> String + 'static,
    ) -> Self {
        self.bind(source, move |node, value| {
            *state(node).text.borrow_mut() = format(value);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_label_carries_environment_styling() {
        let label = Label::new("hello");
        assert_eq!(label.widget().text(), "hello");
        assert_eq!(label.widget().color(), Color::BLACK);
        assert!((label.widget().font().size - 17.0).abs() < f64::EPSILON);
    }

    #[test]
    fn styled_label_takes_the_given_environment() {
        let env = Environment::new()
            .label_color(Color::RED)
            .label_font(Font::system(13.0));
        let label = Label::styled(&env, "small print");
        assert_eq!(label.widget().color(), Color::RED);
        assert!((label.widget().font().size - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bind_text_applies_now_and_on_change() {
        let title = Observable::new("one".to_string());
        let label = Label::new("placeholder").bind_text(&title);
        assert_eq!(label.widget().text(), "one", "current value applies at bind");
        title.set("two".to_string());
        assert_eq!(label.widget().text(), "two");
    }

    #[test]
    fn bind_text_with_formats_each_emission() {
        let count = Observable::new(2_u32);
        let label = Label::new("").bind_text_with(&count, |n| format!("{n} items"));
        assert_eq!(label.widget().text(), "2 items");
        count.set(5);
        assert_eq!(label.widget().text(), "5 items");
    }

    #[test]
    fn intrinsic_columns_counts_display_cells() {
        let ascii = Label::new("hello");
        assert_eq!(ascii.widget().intrinsic_columns(), 5);

        let wide = Label::new("日本語");
        assert_eq!(wide.widget().intrinsic_columns(), 6, "wide glyphs count two");

        let multiline = Label::new("a\nlonger line\nb");
        assert_eq!(multiline.widget().intrinsic_columns(), 11, "widest line wins");

        let empty = Label::new("");
        assert_eq!(empty.widget().intrinsic_columns(), 0);
    }
}
