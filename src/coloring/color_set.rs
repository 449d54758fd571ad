// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate-color domains as bitsets.
//!
//! # Examples
//!
//! ```
//! use kempe_search::coloring::{Color, ColorSet};
//!
//! let mut domain = ColorSet::full();
//! domain.remove(Color::new(1));
//!
//! assert_eq!(domain.len(), 2);
//! assert_eq!(format!("{}", domain), "|13|");
//! ```

use super::{Color, NCOLORS};
use std::fmt;

/// Candidate colors of a vertex; bit i holds color i.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every color; the domain of an unset vertex.
    pub const fn full() -> Self {
        Self((1 << NCOLORS) - 1)
    }

    pub fn from_colors(colors: &[Color]) -> Self {
        let mut set = Self::empty();
        for &color in colors {
            set.insert(color);
        }
        set
    }

    /// Create a color set from raw bits, as stored on the trail.
    ///
    /// # Panics
    ///
    /// Panics if a bit outside 0..NCOLORS is set.
    pub fn from_bits(bits: u64) -> Self {
        assert!(
            bits < (1 << NCOLORS),
            "ColorSet bits out of range: {:#b}",
            bits
        );
        Self(bits as u8)
    }

    pub fn contains(self, color: Color) -> bool {
        (self.0 >> color.value()) & 1 != 0
    }

    pub fn insert(&mut self, color: Color) {
        self.0 |= 1 << color.value();
    }

    /// No-op if `color` is absent.
    pub fn remove(&mut self, color: Color) {
        self.0 &= !(1 << color.value());
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits widened to a trail word.
    pub fn bits(self) -> u64 {
        self.0 as u64
    }

    /// Colors in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |&c| self.contains(c))
    }
}

impl Default for ColorSet {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for ColorSet {
    /// Format a color set as "|123|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for color in self.iter() {
            write!(f, "{}", color.to_char())?;
        }
        write!(f, "|")
    }
}
