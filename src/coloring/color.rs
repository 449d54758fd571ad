// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type for conflict-graph vertices and ring positions.
//!
//! A proper 3-coloring of the conflict graph is a Tait edge-coloring of the
//! underlying cubic configuration, so there are exactly three colors.

/// Number of colors in a Tait coloring.
pub const NCOLORS: usize = 3;

/// A color in the range 0..NCOLORS.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// colors with vertex indices or ring positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    /// All colors in ascending order.
    pub const ALL: [Color; NCOLORS] = [Color(0), Color(1), Color(2)];

    /// Create a new color, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NCOLORS`.
    pub fn new(value: u8) -> Self {
        assert!((value as usize) < NCOLORS, "Color out of range: {}", value);
        Self(value)
    }

    /// Try to create a new color, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NCOLORS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The other color of the Kempe pair that excludes `excluded`.
    ///
    /// Swapping along a Kempe chain exchanges the two colors different from
    /// `excluded`, so this is `3 - excluded - self`.
    ///
    /// # Panics
    ///
    /// Panics if `self == excluded`; such a position is not on any chain.
    pub fn kempe_partner(self, excluded: Color) -> Color {
        assert_ne!(
            self, excluded,
            "Color {} is excluded from its own Kempe pair",
            self.0
        );
        Color(3 - excluded.0 - self.0)
    }

    /// Report character: '1' for color 0, '2' for color 1, '3' for color 2.
    pub fn to_char(self) -> char {
        (b'1' + self.0) as char
    }

    /// Inverse of [`Color::to_char`].
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='3' => Some(Self(c as u8 - b'1')),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let c = Color::new(0);
        assert_eq!(c.value(), 0);

        let c = Color::new(2);
        assert_eq!(c.value(), 2);
    }

    #[test]
    #[should_panic(expected = "Color out of range")]
    fn test_color_out_of_range() {
        Color::new(3);
    }

    #[test]
    fn test_color_try_new() {
        assert!(Color::try_new(0).is_some());
        assert!(Color::try_new(2).is_some());
        assert!(Color::try_new(3).is_none());
    }

    #[test]
    fn test_kempe_partner() {
        let (c0, c1, c2) = (Color::new(0), Color::new(1), Color::new(2));
        assert_eq!(c1.kempe_partner(c0), c2);
        assert_eq!(c2.kempe_partner(c0), c1);
        assert_eq!(c0.kempe_partner(c1), c2);
        assert_eq!(c0.kempe_partner(c2), c1);
    }

    #[test]
    #[should_panic(expected = "excluded from its own Kempe pair")]
    fn test_kempe_partner_of_excluded() {
        Color::new(1).kempe_partner(Color::new(1));
    }

    #[test]
    fn test_char_round_trip() {
        for c in Color::ALL {
            assert_eq!(Color::from_char(c.to_char()), Some(c));
        }
        assert_eq!(Color::new(0).to_char(), '1');
        assert_eq!(Color::from_char('4'), None);
        assert_eq!(Color::from_char('0'), None);
    }
}
