// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ring precolorings and sets of them.
//!
//! A precoloring assigns a color to every ring position. Precolorings are
//! kept in canonical form: colors are numbered by order of first appearance,
//! so the first occurrence of color k follows the first occurrence of every
//! color j < k. This removes color-permutation duplicates.
//!
//! # Examples
//!
//! ```
//! use kempe_search::precoloring::Precoloring;
//!
//! let pc: Precoloring = "332113".parse().unwrap();
//! assert!(!pc.is_canonical());
//! assert_eq!(pc.canonical().to_string(), "112331");
//! ```

pub mod enumerate;

pub use enumerate::{PrecoloringEnumerator, RingClassification};

use crate::coloring::{Color, NCOLORS};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Colors of the ring positions, in position order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Precoloring(Vec<Color>);

/// Error from parsing the `'1'..='3'` report format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePrecoloringError {
    #[error("invalid color character {found:?} at position {position}")]
    InvalidColor { position: usize, found: char },
}

impl Precoloring {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Build from raw color values.
    ///
    /// # Panics
    ///
    /// Panics if any value is outside 0..NCOLORS.
    pub fn from_values(values: &[u8]) -> Self {
        Self(values.iter().map(|&v| Color::new(v)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub fn get(&self, position: usize) -> Color {
        self.0[position]
    }

    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|c| c.value()).collect()
    }

    /// Number of positions of each color.
    pub fn color_counts(&self) -> [usize; NCOLORS] {
        let mut counts = [0; NCOLORS];
        for c in &self.0 {
            counts[c.as_usize()] += 1;
        }
        counts
    }

    /// Parity condition on color classes.
    ///
    /// In a Tait coloring of a cubic planar graph every color class meets the
    /// ring with the same parity as the ring length, so a ring coloring is
    /// rejected unless each of the three counts has that parity.
    pub fn has_bad_parity(&self) -> bool {
        let parity = self.len() % 2;
        self.color_counts().iter().any(|&n| n % 2 != parity)
    }

    /// True if colors are introduced in increasing order.
    pub fn is_canonical(&self) -> bool {
        let mut next = 0;
        for c in &self.0 {
            match c.value() {
                v if v > next => return false,
                v if v == next => next += 1,
                _ => {}
            }
        }
        true
    }

    /// Renumber colors by order of first appearance.
    pub fn canonicalize(&mut self) {
        let mut maps_to: [Option<Color>; NCOLORS] = [None; NCOLORS];
        let mut next = 0;
        for c in &mut self.0 {
            let slot = &mut maps_to[c.as_usize()];
            *c = *slot.get_or_insert_with(|| {
                let fresh = Color::new(next);
                next += 1;
                fresh
            });
        }
    }

    pub fn canonical(&self) -> Self {
        let mut pc = self.clone();
        pc.canonicalize();
        pc
    }

    /// Positions whose color differs from `excluded`, in ring order.
    pub fn positions_without(&self, excluded: Color) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != excluded)
            .map(|(i, _)| i)
            .collect()
    }

    /// Replace the color at `position` by its Kempe partner for `excluded`.
    pub(crate) fn kempe_flip(&mut self, position: usize, excluded: Color) {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(position)
            .unwrap_or_else(|| panic!("Position {} outside ring of length {}", position, len));
        *slot = slot.kempe_partner(excluded);
    }
}

impl fmt::Display for Precoloring {
    /// One character per position, `'1' + color`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Precoloring {
    type Err = ParsePrecoloringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, found)| {
                Color::from_char(found).ok_or(ParsePrecoloringError::InvalidColor { position, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Precoloring)
    }
}

/// A deduplicated, ordered set of precolorings.
///
/// Sets are plain values: search branches clone them rather than share them.
/// Iteration follows the derived `Ord` of [`Precoloring`], which gives the
/// search its deterministic choice order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrecoloringSet(BTreeSet<Precoloring>);

impl PrecoloringSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pc: Precoloring) -> bool {
        self.0.insert(pc)
    }

    pub fn remove(&mut self, pc: &Precoloring) -> bool {
        self.0.remove(pc)
    }

    pub fn contains(&self, pc: &Precoloring) -> bool {
        self.0.contains(pc)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, Precoloring> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&Precoloring> {
        self.0.first()
    }

    pub fn is_subset(&self, other: &PrecoloringSet) -> bool {
        self.0.is_subset(&other.0)
    }
}

impl fmt::Display for PrecoloringSet {
    /// Members on one line, each followed by `;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pc in &self.0 {
            write!(f, "{};", pc)?;
        }
        Ok(())
    }
}

impl FromIterator<Precoloring> for PrecoloringSet {
    fn from_iter<I: IntoIterator<Item = Precoloring>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Precoloring> for PrecoloringSet {
    fn extend<I: IntoIterator<Item = Precoloring>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for PrecoloringSet {
    type Item = Precoloring;
    type IntoIter = btree_set::IntoIter<Precoloring>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PrecoloringSet {
    type Item = &'a Precoloring;
    type IntoIter = btree_set::Iter<'a, Precoloring>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
