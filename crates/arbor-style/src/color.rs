#![forbid(unsafe_code)]

//! RGBA colors and hex parsing.

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(142, 142, 147);
    pub const RED: Color = Color::rgb(255, 59, 48);
    pub const ORANGE: Color = Color::rgb(255, 149, 0);
    pub const YELLOW: Color = Color::rgb(255, 204, 0);
    pub const GREEN: Color = Color::rgb(52, 199, 89);
    pub const BLUE: Color = Color::rgb(0, 122, 255);

    /// A fully opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB`, or `#RRGGBBAA` (leading `#` optional).
    ///
    /// Returns `None` for any other length or any non-hex digit.
    #[must_use]
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok();
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => {
                let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
                Some(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// The same color with a replacement alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_six_digit() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::from_hex("ff8000"), Some(Color::rgb(255, 128, 0)));
    }

    #[test]
    fn hex_three_digit_duplicates_nibbles() {
        assert_eq!(Color::from_hex("#fa0"), Some(Color::rgb(255, 170, 0)));
    }

    #[test]
    fn hex_eight_digit_carries_alpha() {
        assert_eq!(
            Color::from_hex("#00ff0080"),
            Some(Color::rgba(0, 255, 0, 128))
        );
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert_eq!(Color::from_hex(""), None);
        assert_eq!(Color::from_hex("#ff"), None, "wrong length");
        assert_eq!(Color::from_hex("#ggg"), None, "non-hex digit");
        assert_eq!(Color::from_hex("#ff80001"), None, "seven digits");
        assert_eq!(Color::from_hex("#ff 000"), None, "embedded space");
    }

    #[test]
    fn display_round_trips_through_from_hex() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(Color::from_hex(&c.to_string()), Some(c));
        let opaque = Color::rgb(9, 8, 7);
        assert_eq!(Color::from_hex(&opaque.to_string()), Some(opaque));
    }

    #[test]
    fn with_alpha_replaces_only_alpha() {
        let c = Color::RED.with_alpha(10);
        assert_eq!((c.r, c.g, c.b, c.a), (255, 59, 48, 10));
        assert!(!c.is_opaque());
        assert!(Color::RED.is_opaque());
    }
}
