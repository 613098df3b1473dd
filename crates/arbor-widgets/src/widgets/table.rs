#![forbid(unsafe_code)]

//! Table bridge.
//!
//! A table does not own row widgets. It answers a host backend's two
//! questions, how many rows and what goes in row `i`, and bumps a reload
//! version whenever the backing source signals, so the host can requery
//! everything instead of tearing widgets down here.
//!
//! # Invariants
//!
//! 1. Row views are built on demand and wrapped in a [`Cell`] unless the
//!    source already produced one.
//! 2. Source updates bump [`Table::reload_version`] by exactly one; the
//!    table's own children never change.
//! 3. A stale row index answers `None`, mirroring the source contract.

use std::cell::RefCell;
use std::rc::Rc;

use arbor_reactive::Observable;

use crate::Widget;
use crate::attributes::with_attributes;
use crate::builders::IndexableViews;
use crate::modifier::Modifier;
use crate::node::{Node, NodeKind};
use crate::view::{IntoView, View};

pub(crate) struct TableState {
    pub(crate) rows: RefCell<Option<Rc<dyn IndexableViews>>>,
    pub(crate) reload: Observable<u64>,
}

/// Row-count and cell provider over an indexable source.
pub struct Table {
    node: Node,
}

impl Table {
    pub fn new(rows: impl IndexableViews + 'static) -> Modifier<Table> {
        let state = TableState {
            rows: RefCell::new(None),
            reload: Observable::new(0),
        };
        let table = Table {
            node: Node::new(NodeKind::Table(state)),
        };
        let rows: Rc<dyn IndexableViews> = Rc::new(rows);
        let reload = state_of(&table.node).reload.clone();
        let subscription = rows.subscribe_updates(Box::new(move || {
            reload.update(|version| *version += 1);
        }));
        *state_of(&table.node).rows.borrow_mut() = Some(rows);
        if let Some(subscription) = subscription {
            with_attributes(&table.node, |record| {
                record.bindings.hold(subscription);
            });
        }
        Modifier::wrap(table)
    }

    /// Rebuild a typed handle from a tree node. `None` for other kinds.
    #[must_use]
    pub fn from_node(node: &Node) -> Option<Table> {
        match node.kind() {
            NodeKind::Table(_) => Some(Table { node: node.clone() }),
            _ => None,
        }
    }

    /// Number of rows the source currently offers.
    #[must_use]
    pub fn row_count(&self) -> usize {
        state_of(&self.node)
            .rows
            .borrow()
            .as_ref()
            .map_or(0, |rows| rows.len())
    }

    /// Build the view for row `index`, wrapped in a [`Cell`] unless the
    /// source already produced exactly one.
    #[must_use]
    pub fn row_view(&self, index: usize) -> Option<View> {
        let view = {
            let rows = state_of(&self.node).rows.borrow();
            rows.as_ref()?.view_at(index)?
        };
        let widgets = view.to_widgets();
        if widgets.len() == 1 && matches!(widgets[0].kind(), NodeKind::Cell) {
            return Some(view);
        }
        Some(Cell::new(view).into_view())
    }

    /// Bumped once per source update. Hosts subscribe and requery on each
    /// distinct value.
    #[must_use]
    pub fn reload_version(&self) -> Observable<u64> {
        state_of(&self.node).reload.clone()
    }
}

fn state_of(node: &Node) -> &TableState {
    match node.kind() {
        NodeKind::Table(state) => state,
        _ => unreachable!("table handle over a non-table node"),
    }
}

impl Widget for Table {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Table {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A table row's widget container.
pub struct Cell {
    node: Node,
}

impl Cell {
    /// A cell embedding `content`.
    pub fn new(content: impl IntoView) -> Modifier<Cell> {
        let cell = Cell {
            node: Node::new(NodeKind::Cell),
        };
        Modifier::new(cell, |node| node.embed(content))
    }
}

impl Widget for Cell {
    fn node(&self) -> &Node {
        &self.node
    }
}

impl IntoView for Cell {
    fn into_view(self) -> View {
        View::Widget(self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::DynamicViews;
    use crate::widgets::label::Label;

    fn names() -> Observable<Vec<String>> {
        Observable::new(vec!["a".to_string(), "b".to_string()])
    }

    #[test]
    fn row_count_mirrors_the_source() {
        let items = names();
        let rows = DynamicViews::new(&items, |s| Label::new(s.clone()).into_view());
        let table = Table::new(rows);
        assert_eq!(table.widget().row_count(), 2);

        items.update(|v| v.push("c".to_string()));
        assert_eq!(table.widget().row_count(), 3);
    }

    #[test]
    fn plain_rows_get_wrapped_in_cells() {
        let items = names();
        let rows = DynamicViews::new(&items, |s| Label::new(s.clone()).into_view());
        let table = Table::new(rows);

        let row = table.widget().row_view(0).expect("row exists");
        let widgets = row.to_widgets();
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].kind_name(), "cell", "label was wrapped");
        assert_eq!(
            widgets[0].child_count(),
            1,
            "the label sits inside the wrapper"
        );
    }

    #[test]
    fn cell_rows_pass_through_unwrapped() {
        let items = names();
        let rows = DynamicViews::new(&items, |s| Cell::new(Label::new(s.clone())).into_view());
        let table = Table::new(rows);

        let row = table.widget().row_view(0).expect("row exists");
        let widgets = row.to_widgets();
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].kind_name(), "cell");
        assert_eq!(
            widgets[0].child_count(),
            1,
            "no second wrapper around an explicit cell"
        );
    }

    #[test]
    fn updates_bump_reload_not_children() {
        let items = names();
        let rows = DynamicViews::new(&items, |s| Label::new(s.clone()).into_view());
        let table = Table::new(rows);
        assert_eq!(table.widget().reload_version().get(), 0);

        items.update(|v| v.push("c".to_string()));
        items.set(vec!["x".to_string()]);
        assert_eq!(
            table.widget().reload_version().get(),
            2,
            "one bump per source update"
        );
        assert_eq!(
            table.node().child_count(),
            0,
            "the table never owns row widgets"
        );
    }

    #[test]
    fn stale_row_index_answers_none() {
        let items = names();
        let rows = DynamicViews::new(&items, |s| Label::new(s.clone()).into_view());
        let table = Table::new(rows);
        assert!(table.widget().row_view(5).is_none());

        items.set(Vec::new());
        assert!(table.widget().row_view(0).is_none());
    }
}
