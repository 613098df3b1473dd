#![forbid(unsafe_code)]

//! Symbolic placements for a child inside a reference rectangle.

use arbor_core::Edges;

/// The 14 symbolic placements: fill, four corners, four edges, center,
/// and four edge-centers.
///
/// A position determines, per axis, whether the child is pinned to both
/// edges, pinned to one and free on the other, or centered. The
/// resolver in [`embed`](crate::embed) turns that into concrete
/// constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum EmbedPosition {
    /// Pin all four edges.
    #[default]
    Fill,
    /// Pin top, span the full width.
    Top,
    /// Pin bottom, span the full width.
    Bottom,
    /// Pin left, span the full height.
    Left,
    /// Pin right, span the full height.
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Center on both axes.
    Center,
    TopCenter,
    BottomCenter,
    CenterLeft,
    CenterRight,
}

impl EmbedPosition {
    /// Every position, in a stable order.
    pub const ALL: [EmbedPosition; 14] = [
        EmbedPosition::Fill,
        EmbedPosition::Top,
        EmbedPosition::Bottom,
        EmbedPosition::Left,
        EmbedPosition::Right,
        EmbedPosition::TopLeft,
        EmbedPosition::TopRight,
        EmbedPosition::BottomLeft,
        EmbedPosition::BottomRight,
        EmbedPosition::Center,
        EmbedPosition::TopCenter,
        EmbedPosition::BottomCenter,
        EmbedPosition::CenterLeft,
        EmbedPosition::CenterRight,
    ];

    /// The edges this position anchors with an equality constraint.
    ///
    /// Edge positions anchor the two perpendicular edges as well: `Top`
    /// spans the full width, `Left` the full height. Centered axes
    /// anchor neither of their edges.
    #[must_use]
    pub const fn touched_edges(self) -> Edges {
        match self {
            EmbedPosition::Fill => Edges::all(),
            EmbedPosition::Top => Edges::TOP.union(Edges::HORIZONTAL),
            EmbedPosition::Bottom => Edges::BOTTOM.union(Edges::HORIZONTAL),
            EmbedPosition::Left => Edges::LEFT.union(Edges::VERTICAL),
            EmbedPosition::Right => Edges::RIGHT.union(Edges::VERTICAL),
            EmbedPosition::TopLeft => Edges::TOP.union(Edges::LEFT),
            EmbedPosition::TopRight => Edges::TOP.union(Edges::RIGHT),
            EmbedPosition::BottomLeft => Edges::BOTTOM.union(Edges::LEFT),
            EmbedPosition::BottomRight => Edges::BOTTOM.union(Edges::RIGHT),
            EmbedPosition::Center => Edges::empty(),
            EmbedPosition::TopCenter => Edges::TOP,
            EmbedPosition::BottomCenter => Edges::BOTTOM,
            EmbedPosition::CenterLeft => Edges::LEFT,
            EmbedPosition::CenterRight => Edges::RIGHT,
        }
    }

    /// Whether the vertical axis is centered (center-Y equality instead
    /// of top/bottom constraints).
    #[must_use]
    pub const fn centers_vertically(self) -> bool {
        matches!(
            self,
            EmbedPosition::Center | EmbedPosition::CenterLeft | EmbedPosition::CenterRight
        )
    }

    /// Whether the horizontal axis is centered (center-X equality
    /// instead of left/right constraints).
    #[must_use]
    pub const fn centers_horizontally(self) -> bool {
        matches!(
            self,
            EmbedPosition::Center | EmbedPosition::TopCenter | EmbedPosition::BottomCenter
        )
    }
}
