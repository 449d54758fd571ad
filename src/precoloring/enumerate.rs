// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generation of canonical ring colorings.
//!
//! Colorings are generated position by position. With `mx` colors introduced
//! so far, a position may take any existing color `0..mx`, or the new color
//! `mx` while fewer than three colors are in use. This yields every canonical
//! coloring exactly once.

use super::{Precoloring, PrecoloringSet};
use crate::coloring::{Color, NCOLORS};
use crate::solver::ExtensionSolver;
use crate::state::{Counters, Statistics};

/// Enumerator of canonical colorings of a ring of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecoloringEnumerator {
    outer: usize,
}

/// Result of classifying every parity-valid ring coloring of a configuration.
#[derive(Debug, Clone, Default)]
pub struct RingClassification {
    /// Colorings that extend to the whole configuration, in generation order.
    pub extendable: Vec<Precoloring>,
    /// Colorings that do not extend.
    pub non_extendable: PrecoloringSet,
    /// Canonical colorings rejected by the parity condition.
    pub parity_rejected: usize,
}

impl RingClassification {
    /// Number of parity-valid colorings tested.
    pub fn tested(&self) -> usize {
        self.extendable.len() + self.non_extendable.len()
    }
}

impl PrecoloringEnumerator {
    pub fn new(outer: usize) -> Self {
        Self { outer }
    }

    pub fn outer(&self) -> usize {
        self.outer
    }

    /// Call `visit` on every canonical coloring, in generation order.
    pub fn for_each_canonical(&self, mut visit: impl FnMut(&Precoloring)) {
        let mut colors = Vec::with_capacity(self.outer);
        self.generate(&mut colors, 0, &mut visit);
    }

    fn generate(&self, colors: &mut Vec<Color>, mx: u8, visit: &mut impl FnMut(&Precoloring)) {
        if colors.len() == self.outer {
            visit(&Precoloring::new(colors.clone()));
            return;
        }

        for c in 0..mx {
            colors.push(Color::new(c));
            self.generate(colors, mx, visit);
            colors.pop();
        }
        if (mx as usize) < NCOLORS {
            colors.push(Color::new(mx));
            self.generate(colors, mx + 1, visit);
            colors.pop();
        }
    }

    /// Every canonical coloring, parity-valid or not.
    pub fn canonical(&self) -> Vec<Precoloring> {
        let mut all = Vec::new();
        self.for_each_canonical(|pc| all.push(pc.clone()));
        all
    }

    /// Every parity-valid canonical coloring, independent of any configuration.
    pub fn parity_valid(&self) -> PrecoloringSet {
        let mut set = PrecoloringSet::new();
        self.for_each_canonical(|pc| {
            if !pc.has_bad_parity() {
                set.insert(pc.clone());
            }
        });
        set
    }

    /// Split the parity-valid colorings by whether they extend in `solver`.
    pub fn classify(
        &self,
        solver: &mut ExtensionSolver<'_>,
        statistics: &mut Statistics,
    ) -> RingClassification {
        let mut result = RingClassification::default();
        self.for_each_canonical(|pc| {
            if pc.has_bad_parity() {
                statistics.increment(Counters::ParityRejected);
                result.parity_rejected += 1;
            } else if solver.extends(pc) {
                tracing::trace!(precoloring = %pc, "extends");
                result.extendable.push(pc.clone());
            } else {
                result.non_extendable.insert(pc.clone());
            }
        });
        result
    }
}
