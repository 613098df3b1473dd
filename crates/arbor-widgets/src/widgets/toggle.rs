//! Boolean switch.

use std::cell::Cell;

use arbor_reactive::{Observable, TwoWayBinding};
use arbor_style::{Color, Environment};

use crate::Widget;
use crate::attributes::with_attributes;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

pub(crate) struct ToggleState {
    pub(crate) on: Observable<bool>,
    pub(crate) tint: Cell<Color>,
}

/// An on/off switch backed by an observable.
pub struct Toggle {
    node: Node,
}

impl Toggle {
    pub fn new() -> Modifier<Toggle> {
        Self::with_state(false)
    }

    pub fn with_state(on: bool) -> Modifier<Toggle> {
        Self::styled(&Environment::default(), on)
    }

    /// A switch tinted from `env` instead of the defaults.
    pub fn styled(env: &Environment, on: bool) -> Modifier<Toggle> {
        let state = ToggleState {
            on: Observable::new(on),
            tint: Cell::new(env.tint),
        };
        Modifier::wrap(Toggle {
            node: Node::new(NodeKind::Toggle(state)),
        })
    }

    /// Rebuild a typed handle from a tree node. `None` for other kinds.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<Toggle> {
        match node.kind() {
            NodeKind::Toggle(_) => Some(Toggle { node: node.clone() }),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        state(&self.node).on.get()
    }

    pub fn set_on(&self, on: bool) {
        state(&self.node).on.set(on);
    }

    /// Flip the switch, as a host backend does on activation.
    pub fn toggle(&self) {
        let flipped = !self.is_on();
        state(&self.node).on.set(flipped);
    }

    #[must_use]
    pub fn on_observable(&self) -> Observable<bool> {
        state(&self.node).on.clone()
    }

    #[must_use]
    pub fn tint(&self) -> Color {
        state(&self.node).tint.get()
    }
}

fn state(node: &Node) -> &ToggleState {
    match node.kind() {
        NodeKind::Toggle(state) => state,
        _ => unreachable!("toggle handle over a non-toggle node"),
    }
}

impl Widget for Toggle {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Toggle {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

impl Modifier<Toggle> {
    /// Two-way bind the switch state to `source`. The switch adopts
    /// `source`'s current value first.
    pub fn bind_on(self, source: &Observable<bool>) -> Self {
        let pair = TwoWayBinding::new(source, &state(self.node()).on);
        with_attributes(self.node(), |record| {
            record.bindings.hold_two_way(pair);
        });
        self
    }

    pub fn tint(self, tint: Color) -> Self {
        self.apply(|node| state(node).tint.set(tint))
    }

    /// Observe every distinct switch state, starting from the next change.
    pub fn on_change(self, handler: impl Fn(&bool) + 'static) -> Self {
        let on = state(self.node()).on.clone();
        with_attributes(self.node(), |record| {
            record.bindings.subscribe(&on, handler);
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let toggle = Toggle::new();
        assert!(!toggle.widget().is_on());
        toggle.widget().toggle();
        assert!(toggle.widget().is_on());
        toggle.widget().toggle();
        assert!(!toggle.widget().is_on());
    }

    #[test]
    fn bind_on_flows_both_ways() {
        let enabled = Observable::new(true);
        let toggle = Toggle::new().bind_on(&enabled);
        assert!(toggle.widget().is_on(), "adopted the source value");

        toggle.widget().toggle();
        assert!(!enabled.get(), "switch flip reached the model");

        enabled.set(true);
        assert!(toggle.widget().is_on(), "model write reached the switch");
    }

    #[test]
    fn two_toggles_stay_in_step_through_one_source() {
        let shared = Observable::new(false);
        let a = Toggle::new().bind_on(&shared);
        let b = Toggle::new().bind_on(&shared);

        a.widget().toggle();
        assert!(b.widget().is_on(), "peers converge through the shared source");
        assert!(shared.get());
    }
}
