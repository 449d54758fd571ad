// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are incremented by the extension solver, the enumerator and the
//! maximal-set search, and logged at the end of a run.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(Debug, EnumCountMacro, EnumIter, AsRefStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Extendability tests run.
    ExtensionTests,
    /// Tests that found a full coloring.
    Extendable,
    /// Tests that proved no extension exists.
    NonExtendable,
    /// Colors tried at a search vertex.
    ColorTrials,
    /// Trials undone by rollback.
    Backtracks,
    /// Canonical ring colorings rejected by the parity condition.
    ParityRejected,
    /// Nodes of the maximal consistent set search.
    SearchNodes,
    /// Branches cut off by the fix limit.
    TruncatedBranches,
    /// Oracle calls on terminal candidates or on a whole core.
    OracleCalls,
    /// Submitted sets the oracle found infeasible.
    InfeasibleSets,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Add every counter of `other` into `self`.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }

    /// Non-zero counters with their names, in declaration order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter()
            .map(|c| (c, self.get(c)))
            .filter(|&(_, n)| n != 0)
    }

    /// Emit every non-zero counter at info level.
    pub fn log(&self) {
        for (counter, value) in self.nonzero() {
            tracing::info!(counter = counter.as_ref(), value, "statistics");
        }
    }
}
