#![forbid(unsafe_code)]

//! View values and the conversion protocol.
//!
//! A [`View`] is what widget expressions flatten into before mounting: a
//! single widget, an ordered fragment of nested views, a screen, or nothing.
//! [`IntoView`] is implemented for widgets, modifier chains, screens,
//! options, vectors, and tuples, so container constructors accept any
//! mixture of them.
//!
//! # Invariants
//!
//! 1. Flattening is depth-first and order-preserving.
//! 2. Flattening never copies a widget. The same view flattened twice yields
//!    the same node identities.
//! 3. `Option::None` and [`View::Empty`] contribute no widgets.

use crate::node::Node;
use crate::screen::Screen;

/// A renderable value: the currency container constructors deal in.
#[derive(Clone, Debug)]
pub enum View {
    /// One widget.
    Widget(Node),
    /// An ordered run of nested views.
    Fragment(Vec<View>),
    /// A screen hosted as a view; flattens to its root widget.
    Screen(Screen),
    /// Nothing. Flattens to no widgets at all.
    Empty,
}

impl View {
    /// Flatten into the ordered list of widgets this view contributes.
    #[must_use]
    pub fn to_widgets(&self) -> Vec<Node> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect(&self, out: &mut Vec<Node>) {
        match self {
            View::Widget(node) => out.push(node.clone()),
            View::Fragment(children) => {
                for child in children {
                    child.collect(out);
                }
            }
            View::Screen(screen) => out.push(screen.root()),
            View::Empty => {}
        }
    }

    /// Whether flattening would contribute no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            View::Widget(_) | View::Screen(_) => false,
            View::Fragment(children) => children.iter().all(View::is_empty),
            View::Empty => true,
        }
    }
}

/// Conversion into a [`View`]. The seam every container constructor sits on.
pub trait IntoView {
    fn into_view(self) -> View;
}

impl IntoView for View {
    fn into_view(self) -> View {
        self
    }
}

impl IntoView for Node {
    fn into_view(self) -> View {
        View::Widget(self)
    }
}

impl IntoView for Screen {
    fn into_view(self) -> View {
        View::Screen(self)
    }
}

impl<V: IntoView> IntoView for Option<V> {
    fn into_view(self) -> View {
        match self {
            Some(view) => view.into_view(),
            None => View::Empty,
        }
    }
}

impl<V: IntoView> IntoView for Vec<V> {
    fn into_view(self) -> View {
        View::Fragment(self.into_iter().map(IntoView::into_view).collect())
    }
}

macro_rules! impl_into_view_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: IntoView),+> IntoView for ($($name,)+) {
            fn into_view(self) -> View {
                #[allow(non_snake_case)]
                let ($($name,)+) = self;
                View::Fragment(vec![$($name.into_view()),+])
            }
        }
    };
}

impl_into_view_for_tuple!(A);
impl_into_view_for_tuple!(A, B);
impl_into_view_for_tuple!(A, B, C);
impl_into_view_for_tuple!(A, B, C, D);
impl_into_view_for_tuple!(A, B, C, D, E);
impl_into_view_for_tuple!(A, B, C, D, E, F);
impl_into_view_for_tuple!(A, B, C, D, E, F, G);
impl_into_view_for_tuple!(A, B, C, D, E, F, G, H);

/// Build a [`View::Fragment`] from a comma-separated list of view
/// expressions. `views!()` is [`View::Empty`].
#[macro_export]
macro_rules! views {
    () => { $crate::view::View::Empty };
    ($($child:expr),+ $(,)?) => {
        $crate::view::View::Fragment(vec![
            $($crate::view::IntoView::into_view($child)),+
        ])
    };
}
