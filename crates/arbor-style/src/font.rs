#![forbid(unsafe_code)]

//! Font descriptions and text alignment.

/// Weight classes in ascending heaviness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// A point size plus weight. Face selection belongs to the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    #[must_use]
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    /// Regular weight at the given size.
    #[must_use]
    pub const fn system(size: f64) -> Self {
        Self::new(size, FontWeight::Regular)
    }

    /// Bold weight at the given size.
    #[must_use]
    pub const fn bold(size: f64) -> Self {
        Self::new(size, FontWeight::Bold)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(17.0)
    }
}

/// Horizontal text alignment. `Leading` follows the layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_helpers() {
        assert_eq!(Font::system(12.0).weight, FontWeight::Regular);
        assert_eq!(Font::bold(12.0).weight, FontWeight::Bold);
        assert_eq!(Font::default().size, 17.0);
    }

    #[test]
    fn alignment_defaults_to_leading() {
        assert_eq!(TextAlignment::default(), TextAlignment::Leading);
    }
}
