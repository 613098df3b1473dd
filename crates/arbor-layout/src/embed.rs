#![forbid(unsafe_code)]

//! Resolution from symbolic position to concrete constraints.
//!
//! [`resolve`] applies the same shape independently on each axis:
//!
//! - Centered axis: one center equality, no edge constraints.
//! - Otherwise two edge constraints. An edge the position touches gets
//!   a required equality; an edge it does not touch gets a relaxed
//!   inequality at [`Priority::HIGH`] that keeps the child inside the
//!   guide while letting intrinsic content push it off that edge.
//!
//! Insets become the constant offsets: added on top/left, subtracted on
//! bottom/right. Center constraints carry no constant.
//!
//! # Invariants
//!
//! 1. Exactly 2, 3, or 4 specs per call: 2 for `Center`, 3 for the four
//!    edge-centers, 4 for everything else.
//! 2. No identifier repeats within one resolved set.
//! 3. Vertical specs come before horizontal specs.
//! 4. Every relaxed inequality is `LessOrEqual` on top/left,
//!    `GreaterOrEqual` on bottom/right, always at `Priority::HIGH`.
//! 5. The guide passed in is stamped on every emitted spec; both axes
//!    resolve against the same guide.
//!
//! # Failure Modes
//!
//! - Calling twice for the same child-parent attachment duplicates
//!   constraints downstream. The resolver is pure and cannot detect
//!   this; it is the installer's contract to call once per attachment.
//! - Degenerate guides (zero size) and conflicting intrinsic sizes are
//!   the solver's concern, surfaced by its own conflict reporting.
//!
//! # Example
//!
//! ```ignore
//! let specs = resolve(EmbedPosition::TopLeft, Insets::uniform(8.0), Guide::Bounds);
//! // top: bounds.top + 8 == child.top
//! // bottom: bounds.bottom - 8 >= child.bottom   (high priority)
//! // left: bounds.left + 8 == child.left
//! // right: bounds.right - 8 >= child.right      (high priority)
//! ```

use arbor_core::{Edges, Insets};
use smallvec::SmallVec;

use crate::constraint::{Attribute, ConstraintSpec, Guide, Priority, Relation};
use crate::position::EmbedPosition;

/// The resolved constraint set for one embedding. At most 4 entries.
pub type ResolvedConstraints = SmallVec<[ConstraintSpec; 4]>;

/// Translate `position` + `insets` into edge/center constraints against
/// `guide`.
#[must_use]
pub fn resolve(position: EmbedPosition, insets: Insets, guide: Guide) -> ResolvedConstraints {
    let mut specs = ResolvedConstraints::new();
    let touched = position.touched_edges();

    if position.centers_vertically() {
        specs.push(ConstraintSpec::equal(guide, Attribute::CenterY, 0.0));
    } else {
        specs.push(edge_spec(
            guide,
            Attribute::Top,
            touched.contains(Edges::TOP),
            insets.top,
        ));
        specs.push(edge_spec(
            guide,
            Attribute::Bottom,
            touched.contains(Edges::BOTTOM),
            -insets.bottom,
        ));
    }

    if position.centers_horizontally() {
        specs.push(ConstraintSpec::equal(guide, Attribute::CenterX, 0.0));
    } else {
        specs.push(edge_spec(
            guide,
            Attribute::Left,
            touched.contains(Edges::LEFT),
            insets.left,
        ));
        specs.push(edge_spec(
            guide,
            Attribute::Right,
            touched.contains(Edges::RIGHT),
            -insets.right,
        ));
    }

    specs
}

/// One edge constraint: a required equality when anchored, otherwise
/// the relaxed containment inequality for that edge.
fn edge_spec(guide: Guide, attribute: Attribute, anchored: bool, constant: f64) -> ConstraintSpec {
    if anchored {
        return ConstraintSpec::equal(guide, attribute, constant);
    }
    let relation = match attribute {
        Attribute::Top | Attribute::Left => Relation::LessOrEqual,
        Attribute::Bottom | Attribute::Right => Relation::GreaterOrEqual,
        Attribute::CenterX | Attribute::CenterY => {
            unreachable!("center attributes never go through edge_spec")
        }
    };
    ConstraintSpec::new(guide, attribute, relation, constant, Priority::HIGH)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
