//! Editable text field.
//!
//! The text itself is an [`Observable`], which is what makes two-way
//! binding symmetrical: host backends write edits into it, bound models
//! write programmatic changes, and the equality guard keeps the two from
//! echoing each other.

use std::cell::{Cell, RefCell};

use arbor_reactive::{Observable, TwoWayBinding};
use arbor_style::{Environment, Font};

use crate::Widget;
use crate::attributes::with_attributes;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

pub(crate) struct TextFieldState {
    pub(crate) text: Observable<String>,
    pub(crate) placeholder: RefCell<String>,
    pub(crate) font: Cell<Font>,
}

/// A single-line editable text field.
pub struct TextField {
    node: Node,
}

impl TextField {
    pub fn new() -> Modifier<TextField> {
        Self::with_text("")
    }

    /// A field pre-filled with `text`.
    pub fn with_text(text: impl Into<String>) -> Modifier<TextField> {
        Self::styled(&Environment::default(), text)
    }

    /// A field styled from `env` instead of the defaults.
    pub fn styled(env: &Environment, text: impl Into<String>) -> Modifier<TextField> {
        let state = TextFieldState {
            text: Observable::new(text.into()),
            placeholder: RefCell::new(String::new()),
            font: Cell::new(env.field_font),
        };
        Modifier::wrap(TextField {
            node: Node::new(NodeKind::TextField(state)),
        })
    }

    /// Rebuild a typed handle from a tree node. `None` for other kinds.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<TextField> {
        match node.kind() {
            NodeKind::TextField(_) => Some(TextField { node: node.clone() }),
            _ => None,
        }
    }

    #[must_use]
    pub fn text(&self) -> String {
        state(&self.node).text.get()
    }

    /// Write the text. Equal values are dropped before any notification,
    /// so echoing a value back never re-triggers observers.
    pub fn set_text(&self, text: impl Into<String>) {
        state(&self.node).text.set(text.into());
    }

    /// The observable backing the text, for wiring beyond the built-in
    /// binding modifiers.
    #[must_use]
    pub fn text_observable(&self) -> Observable<String> {
        state(&self.node).text.clone()
    }

    #[must_use]
    pub fn placeholder(&self) -> String {
        state(&self.node).placeholder.borrow().clone()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        *state(&self.node).placeholder.borrow_mut() = placeholder.into();
    }

    #[must_use]
    pub fn font(&self) -> Font {
        state(&self.node).font.get()
    }
}

fn state(node: &Node) -> &TextFieldState {
    match node.kind() {
        NodeKind::TextField(state) => state,
        _ => unreachable!("text field handle over a non-text-field node"),
    }
}

impl Widget for TextField {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for TextField {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

impl Modifier<TextField> {
    pub fn placeholder(self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.apply(|node| *state(node).placeholder.borrow_mut() = placeholder)
    }

    pub fn font(self, font: Font) -> Self {
        self.apply(|node| state(node).font.set(font))
    }

    /// Two-way bind the text to `source`.
    ///
    /// The field adopts `source`'s current value, then edits flow both
    /// ways for as long as the field lives.
    pub fn bind_text(self, source: &Observable<String>) -> Self {
        let pair = TwoWayBinding::new(source, &state(self.node()).text);
        with_attributes(self.node(), |record| {
            record.bindings.hold_two_way(pair);
        });
        self
    }

    /// Observe every distinct text value, starting from the next change.
    pub fn on_change(self, handler: impl Fn(&String) + 'static) -> Self {
        let text = state(self.node()).text.clone();
        with_attributes(self.node(), |record| {
            record.bindings.subscribe(&text, handler);
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell as StdCell;
    use std::rc::Rc;

    #[test]
    fn bind_text_adopts_the_source_value() {
        let name = Observable::new("ada".to_string());
        let field = TextField::new().bind_text(&name);
        assert_eq!(field.widget().text(), "ada");
    }

    #[test]
    fn edits_flow_both_ways_without_echo() {
        let name = Observable::new(String::new());
        let field = TextField::new().bind_text(&name);

        field.widget().set_text("typed");
        assert_eq!(name.get(), "typed", "edit reached the model");

        let field_versions = field.widget().text_observable().version();
        name.set("model".to_string());
        assert_eq!(field.widget().text(), "model", "model reached the field");
        assert_eq!(
            field.widget().text_observable().version(),
            field_versions + 1,
            "one write settles the pair, no feedback churn"
        );
    }

    #[test]
    fn equal_writes_never_reach_the_field_twice() {
        let source = Observable::new(String::new());
        let field = TextField::new().bind_text(&source);
        let baseline = field.widget().text_observable().version();

        source.set("same".to_string());
        source.set("same".to_string());
        assert_eq!(
            field.widget().text_observable().version(),
            baseline + 1,
            "second identical emission was suppressed at the source"
        );
    }

    #[test]
    fn on_change_sees_each_distinct_value() {
        let changes = Rc::new(StdCell::new(0_u32));
        let probe = Rc::clone(&changes);
        let field = TextField::new().on_change(move |_| probe.set(probe.get() + 1));

        field.widget().set_text("a");
        field.widget().set_text("a");
        field.widget().set_text("b");
        assert_eq!(changes.get(), 2, "the repeated value did not fire");
    }

    #[test]
    fn binding_dies_with_the_field() {
        let source = Observable::new(String::new());
        {
            let _field = TextField::new().bind_text(&source);
            assert_eq!(source.subscriber_count(), 1);
        }
        assert_eq!(
            source.subscriber_count(),
            0,
            "dropping the field released its half of the pair"
        );
    }
}
