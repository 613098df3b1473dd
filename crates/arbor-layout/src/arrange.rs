#![forbid(unsafe_code)]

//! Axis and alignment vocabulary for arranged containers.
//!
//! Stacks own their children's arrangement; none of these values
//! produce embed constraints. They travel with the container so the
//! host toolkit's arranger can honor them.

/// Main-axis direction of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Cross-axis placement of arranged children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum StackAlignment {
    /// Stretch to the stack's full cross-axis extent.
    #[default]
    Fill,
    /// Align to the leading cross-axis edge (top for horizontal stacks,
    /// left for vertical ones).
    Leading,
    Center,
    /// Align to the trailing cross-axis edge.
    Trailing,
}
