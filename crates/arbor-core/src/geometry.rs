//! Points, sizes, rectangles, and insets.
//!
//! All geometry is `f64` in a y-down coordinate space: the origin sits at
//! the top-left, `y` grows toward the bottom edge. Every type here is
//! `Copy` and arithmetic never mutates in place.

/// A position in the parent's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An origin plus a size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// A rectangle of the given size at the origin.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::ZERO,
            size,
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Whether the point lies inside (top/left inclusive, bottom/right
    /// exclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.y >= self.min_y()
            && point.x < self.max_x()
            && point.y < self.max_y()
    }

    /// Shrink each edge inward by the matching inset. Degenerate results
    /// clamp to zero size rather than going negative.
    #[must_use]
    pub fn inset_by(&self, insets: Insets) -> Rect {
        let width = (self.size.width - insets.horizontal()).max(0.0);
        let height = (self.size.height - insets.vertical()).max(0.0);
        Rect {
            origin: Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: Size::new(width, height),
        }
    }
}

/// Per-edge inward offsets. Positive values always move inward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0.0,
        left: 0.0,
        bottom: 0.0,
        right: 0.0,
    };

    #[must_use]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four edges.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Horizontal and vertical pairs.
    #[must_use]
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Combined left + right inset.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top + bottom inset.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.min_y(), 20.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.max_y(), 70.0);
        assert_eq!(r.center(), Point::new(60.0, 45.0));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::ZERO), "top-left corner is inside");
        assert!(r.contains(Point::new(9.99, 9.99)));
        assert!(!r.contains(Point::new(10.0, 5.0)), "right edge is outside");
        assert!(!r.contains(Point::new(5.0, 10.0)), "bottom edge is outside");
    }

    #[test]
    fn inset_by_moves_inward() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = r.inset_by(Insets::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(inner, Rect::new(20.0, 10.0, 40.0, 60.0));
    }

    #[test]
    fn inset_by_clamps_degenerate_size() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = r.inset_by(Insets::uniform(20.0));
        assert_eq!(inner.size, Size::ZERO, "over-inset clamps to zero size");
    }

    #[test]
    fn insets_totals() {
        let insets = Insets::symmetric(5.0, 8.0);
        assert_eq!(insets.horizontal(), 10.0);
        assert_eq!(insets.vertical(), 16.0);
        assert_eq!(insets.top, 8.0);
        assert_eq!(insets.left, 5.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn insets_serde_round_trip() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&insets).unwrap();
        let back: Insets = serde_json::from_str(&json).unwrap();
        assert_eq!(back, insets);
    }
}
