//! Edge sets for rectangle sides.

bitflags::bitflags! {
    /// A set of rectangle edges.
    ///
    /// Used wherever a subset of the four sides is meaningful: which
    /// edges a symbolic position anchors, which edges respect the
    /// safe area, and so on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP = 1 << 0;
        const LEFT = 1 << 1;
        const BOTTOM = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl Edges {
    pub const HORIZONTAL: Edges = Edges::LEFT.union(Edges::RIGHT);
    pub const VERTICAL: Edges = Edges::TOP.union(Edges::BOTTOM);
}
