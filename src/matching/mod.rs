// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-crossing perfect matchings of ring positions.
//!
//! A Kempe chain joins two ring positions through the interior of the
//! configuration. In a planar embedding two chains of the same color pair
//! cannot cross, so the possible chain topologies for a set of positions are
//! exactly the non-crossing perfect matchings of those positions read in ring
//! order. There are Catalan(n/2) of them for n positions, and none for odd n.
//!
//! # Examples
//!
//! ```
//! use kempe_search::matching::non_crossing_matchings;
//!
//! let ms = non_crossing_matchings(&[0, 2, 3, 5]);
//! assert_eq!(ms.len(), 2);
//! assert_eq!(ms[0].pairs(), &[(0, 2), (3, 5)]);
//! assert_eq!(ms[1].pairs(), &[(0, 5), (2, 3)]);
//! ```

use std::fmt;

/// Disjoint position pairs; the first pair always contains the first position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Matching {
    pairs: Vec<(usize, usize)>,
}

impl Matching {
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// True if some two pairs interleave as `a < c < b < d`.
    pub fn is_crossing(&self) -> bool {
        self.pairs.iter().enumerate().any(|(i, &p)| {
            self.pairs[i + 1..].iter().any(|&q| {
                let (a, b) = ordered(p);
                let (c, d) = ordered(q);
                (a < c && c < b && b < d) || (c < a && a < d && d < b)
            })
        })
    }
}

fn ordered((a, b): (usize, usize)) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl fmt::Display for Matching {
    /// Pairs as `{a,b}` in order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (a, b) in &self.pairs {
            write!(f, "{{{},{}}}", a, b)?;
        }
        Ok(())
    }
}

/// All non-crossing perfect matchings of `positions`, read in slice order.
///
/// The first position is paired with each candidate partner at an odd index;
/// the positions strictly between them and the positions after the partner
/// are matched independently. The empty list has exactly one (empty)
/// matching.
pub fn non_crossing_matchings(positions: &[usize]) -> Vec<Matching> {
    let Some((&front, rest)) = positions.split_first() else {
        return vec![Matching::default()];
    };

    let mut result = Vec::new();
    for partner_index in (0..rest.len()).step_by(2) {
        let partner = rest[partner_index];
        let inside = non_crossing_matchings(&rest[..partner_index]);
        let after = non_crossing_matchings(&rest[partner_index + 1..]);
        for left in &inside {
            for right in &after {
                let mut pairs = Vec::with_capacity(1 + left.len() + right.len());
                pairs.push((front, partner));
                pairs.extend_from_slice(&left.pairs);
                pairs.extend_from_slice(&right.pairs);
                result.push(Matching { pairs });
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalan(n: usize) -> usize {
        (0..n).fold(1, |c, k| c * 2 * (2 * k + 1) / (k + 2))
    }

    #[test]
    fn test_empty() {
        let ms = non_crossing_matchings(&[]);
        assert_eq!(ms, vec![Matching::default()]);
    }

    #[test]
    fn test_pair() {
        let ms = non_crossing_matchings(&[4, 7]);
        assert_eq!(ms.len(), 1);
        assert_eq!(ms[0].pairs(), &[(4, 7)]);
    }

    #[test]
    fn test_four_positions() {
        let ms = non_crossing_matchings(&[10, 11, 12, 13]);
        let pairs: Vec<_> = ms.iter().map(|m| m.pairs().to_vec()).collect();
        assert_eq!(
            pairs,
            vec![vec![(10, 11), (12, 13)], vec![(10, 13), (11, 12)]]
        );
        assert!(!pairs.contains(&vec![(10, 12), (11, 13)]));
    }

    #[test]
    fn test_odd_length_has_no_matching() {
        assert!(non_crossing_matchings(&[0]).is_empty());
        assert!(non_crossing_matchings(&[0, 1, 2]).is_empty());
        assert!(non_crossing_matchings(&[0, 1, 2, 3, 4]).is_empty());
    }

    #[test]
    fn test_catalan_counts_without_crossings() {
        for half in 0..=6 {
            let positions: Vec<usize> = (0..2 * half).collect();
            let ms = non_crossing_matchings(&positions);
            assert_eq!(ms.len(), catalan(half), "n = {}", 2 * half);
            assert!(ms.iter().all(|m| !m.is_crossing()));
            assert!(ms.iter().all(|m| m.len() == half));

            let mut distinct = ms.clone();
            distinct.sort();
            distinct.dedup();
            assert_eq!(distinct.len(), ms.len());
        }
    }

    #[test]
    fn test_is_crossing() {
        let crossing = Matching {
            pairs: vec![(0, 2), (1, 3)],
        };
        assert!(crossing.is_crossing());
        let nested = Matching {
            pairs: vec![(0, 3), (1, 2)],
        };
        assert!(!nested.is_crossing());
    }

    #[test]
    fn test_display() {
        let ms = non_crossing_matchings(&[0, 1, 2, 3]);
        assert_eq!(ms[1].to_string(), "{0,3}{1,2}");
    }
}
