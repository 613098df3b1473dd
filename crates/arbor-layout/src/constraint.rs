#![forbid(unsafe_code)]

//! Constraint vocabulary: attributes, relations, priorities, guides.
//!
//! A [`ConstraintSpec`] is one resolved layout relation, read as
//!
//! ```text
//! guide.attribute + constant  RELATION  child.attribute
//! ```
//!
//! with the guide always on the left. The engine only emits specs; a
//! downstream solver owns satisfiability, conflict reporting, and the
//! actual geometry.

/// A layout attribute shared by the child and the guide side of a
/// constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Attribute {
    Top,
    Bottom,
    Left,
    Right,
    CenterX,
    CenterY,
}

impl Attribute {
    /// The debug identifier every constraint over this attribute
    /// carries. Stable; tests and tooling match on these strings.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Attribute::Top => "top",
            Attribute::Bottom => "bottom",
            Attribute::Left => "left",
            Attribute::Right => "right",
            Attribute::CenterX => "centerX",
            Attribute::CenterY => "centerY",
        }
    }
}

/// How the guide side relates to the child side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Relation {
    Equal,
    /// Guide side at most the child side: used on relaxed top/left
    /// edges, keeping the child at or inside the leading edge.
    LessOrEqual,
    /// Guide side at least the child side: used on relaxed bottom/right
    /// edges.
    GreaterOrEqual,
}

/// Constraint strength on the conventional 0..=1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Priority(u16);

impl Priority {
    /// Must hold; the solver treats violations as conflicts.
    pub const REQUIRED: Priority = Priority(1000);
    /// Strong preference that intrinsic content size may override.
    pub const HIGH: Priority = Priority(750);

    /// Create a priority.
    ///
    /// # Panics
    ///
    /// Panics if `value` exceeds 1000; that is a configuration mistake,
    /// not a runtime condition.
    #[must_use]
    pub fn new(value: u16) -> Self {
        assert!(value <= 1000, "constraint priority {value} exceeds 1000");
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    #[must_use]
    pub const fn is_required(self) -> bool {
        self.0 == 1000
    }
}

/// The reference rectangle a child is constrained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum Guide {
    /// The parent's own bounding box.
    #[default]
    Bounds,
    /// The parent's safe-content guide, inset from hardware and system
    /// chrome.
    SafeArea,
}

/// One resolved constraint: `guide.attribute + constant RELATION
/// child.attribute`.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ConstraintSpec {
    pub guide: Guide,
    pub attribute: Attribute,
    pub relation: Relation,
    /// Offset applied on the guide side. Positive on leading edges,
    /// negative on trailing edges, zero on centers, so positive insets
    /// always move inward.
    pub constant: f64,
    pub priority: Priority,
    /// Debug tag, derived from the attribute. No behavioral effect.
    pub identifier: &'static str,
}

impl ConstraintSpec {
    #[must_use]
    pub fn new(
        guide: Guide,
        attribute: Attribute,
        relation: Relation,
        constant: f64,
        priority: Priority,
    ) -> Self {
        Self {
            guide,
            attribute,
            relation,
            constant,
            priority,
            identifier: attribute.identifier(),
        }
    }

    /// A required equality against the guide.
    #[must_use]
    pub fn equal(guide: Guide, attribute: Attribute, constant: f64) -> Self {
        Self::new(guide, attribute, Relation::Equal, constant, Priority::REQUIRED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_the_documented_strings() {
        let expected = [
            (Attribute::Top, "top"),
            (Attribute::Bottom, "bottom"),
            (Attribute::Left, "left"),
            (Attribute::Right, "right"),
            (Attribute::CenterX, "centerX"),
            (Attribute::CenterY, "centerY"),
        ];
        for (attribute, identifier) in expected {
            assert_eq!(attribute.identifier(), identifier);
        }
    }

    #[test]
    fn spec_constructor_tags_identifier_from_attribute() {
        let spec = ConstraintSpec::equal(Guide::Bounds, Attribute::CenterX, 0.0);
        assert_eq!(spec.identifier, "centerX");
        assert_eq!(spec.relation, Relation::Equal);
        assert!(spec.priority.is_required());
    }

    #[test]
    fn priority_ordering_and_bounds() {
        assert!(Priority::HIGH < Priority::REQUIRED);
        assert_eq!(Priority::new(750), Priority::HIGH);
        assert_eq!(Priority::REQUIRED.value(), 1000);
    }

    #[test]
    #[should_panic(expected = "exceeds 1000")]
    fn priority_above_scale_panics() {
        let _ = Priority::new(1001);
    }

    #[test]
    fn spec_serializes_with_identifier() {
        let spec = ConstraintSpec::equal(Guide::SafeArea, Attribute::Top, 12.0);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["identifier"], "top");
        assert_eq!(json["guide"], "SafeArea");
        assert_eq!(json["constant"], 12.0);
    }
}
