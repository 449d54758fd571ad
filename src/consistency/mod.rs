// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kempe-chain consistency of sets of ring colorings.
//!
//! Fix an excluded color `nonc`. The positions not colored `nonc` are joined
//! in pairs by Kempe chains of the other two colors, and since chains cannot
//! cross, the pairing is a non-crossing matching. Swapping the two colors
//! along any subset of the chains gives another coloring of the same
//! configuration. A member `pc` of a set `P` is *chain-consistent* for `nonc`
//! if some matching keeps every such swap (after canonicalization) inside
//! `P`; it is *consistent* if this holds for all three excluded colors.
//!
//! The closure of `P` repeatedly removes inconsistent members until none are
//! left. It is the largest subset of `P` in which every member is consistent.

use crate::coloring::Color;
use crate::matching::{non_crossing_matchings, Matching};
use crate::precoloring::{Precoloring, PrecoloringSet};

/// The coloring obtained from `pc` by swapping along the pairs of `matching`
/// selected by the bits of `subset`, in canonical form.
///
/// # Panics
///
/// Panics if a pair refers to a position outside `pc`, or if the matching has
/// too many pairs to be indexed by a `u32` subset.
pub fn kempe_swap(pc: &Precoloring, matching: &Matching, subset: u32, excluded: Color) -> Precoloring {
    assert!(
        matching.len() < u32::BITS as usize,
        "Matching with {} pairs is too large for subset enumeration",
        matching.len()
    );
    let mut swapped = pc.clone();
    for (i, &(a, b)) in matching.pairs().iter().enumerate() {
        if (subset >> i) & 1 != 0 {
            swapped.kempe_flip(a, excluded);
            swapped.kempe_flip(b, excluded);
        }
    }
    swapped.canonicalize();
    swapped
}

/// True if every swap of `pc` along subsets of `matching` lies in `with`.
pub fn all_swaps_in_set(
    with: &PrecoloringSet,
    pc: &Precoloring,
    matching: &Matching,
    excluded: Color,
) -> bool {
    (0..1u32 << matching.len()).all(|subset| with.contains(&kempe_swap(pc, matching, subset, excluded)))
}

/// The matchings of `pc` for `excluded` whose every swap stays in `with`.
///
/// Returns None when `pc` has at most two positions outside `excluded`; such
/// a coloring is not constrained by the chain argument.
pub fn consistent_matchings(
    with: &PrecoloringSet,
    pc: &Precoloring,
    excluded: Color,
) -> Option<Vec<Matching>> {
    let positions = pc.positions_without(excluded);
    if positions.len() <= 2 {
        return None;
    }
    let matchings = non_crossing_matchings(&positions)
        .into_iter()
        .filter(|m| all_swaps_in_set(with, pc, m, excluded))
        .collect();
    Some(matchings)
}

/// Chain consistency of `pc` within `with` for one excluded color.
pub fn is_chain_consistent(with: &PrecoloringSet, pc: &Precoloring, excluded: Color) -> bool {
    let positions = pc.positions_without(excluded);
    if positions.len() <= 2 {
        return true;
    }
    non_crossing_matchings(&positions)
        .iter()
        .any(|m| all_swaps_in_set(with, pc, m, excluded))
}

/// Chain consistency of `pc` within `with` for every excluded color.
pub fn is_consistent(with: &PrecoloringSet, pc: &Precoloring) -> bool {
    Color::ALL
        .into_iter()
        .all(|excluded| is_chain_consistent(with, pc, excluded))
}

/// Sizes observed while closing a set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClosureHistory {
    /// Size before the first pass, then after every pass.
    pub sizes: Vec<usize>,
}

impl ClosureHistory {
    /// Number of passes made, including the final pass that removed nothing.
    pub fn passes(&self) -> usize {
        self.sizes.len().saturating_sub(1)
    }

    pub fn removed(&self) -> usize {
        match (self.sizes.first(), self.sizes.last()) {
            (Some(first), Some(last)) => first - last,
            _ => 0,
        }
    }
}

/// Remove inconsistent members of `set` in place until a fixed point.
///
/// Within a pass every member is tested against the current set, so
/// removals earlier in the pass already count against later members.
pub fn close_in_place(set: &mut PrecoloringSet) -> ClosureHistory {
    let mut history = ClosureHistory {
        sizes: vec![set.len()],
    };
    loop {
        let members: Vec<Precoloring> = set.iter().cloned().collect();
        let mut removed_any = false;
        for pc in &members {
            if !is_consistent(set, pc) {
                set.remove(pc);
                removed_any = true;
            }
        }
        history.sizes.push(set.len());
        tracing::debug!(pass = history.passes(), remaining = set.len(), "closure pass");
        if !removed_any {
            return history;
        }
    }
}

/// The closure of `set`, leaving the input untouched.
pub fn closure(set: &PrecoloringSet) -> PrecoloringSet {
    let mut closed = set.clone();
    close_in_place(&mut closed);
    closed
}
