// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Branch-and-bound search over closed subsets of a universe.
//!
//! The search walks pairs `(aset, fix)` where `aset` is closed under the
//! consistency closure and `fix ⊆ aset` holds the members already committed
//! to. At each node the first member `act` of `aset` outside `fix` is either
//! excluded (recurse on the closure of `aset \ {act}`, provided it still
//! contains `fix`) or fixed (recurse with `fix ∪ {act}`). When every member
//! is fixed, `aset` is a terminal candidate and goes to the oracle; an
//! infeasible candidate is a witness.
//!
//! Branches whose `fix` grows beyond [`SearchConfig::fix_limit`] are cut off
//! without consulting the oracle, and the outcome is then flagged incomplete.

use crate::consistency::{close_in_place, closure};
use crate::oracle::{Feasibility, FeasibilityOracle, OracleError};
use crate::precoloring::PrecoloringSet;
use crate::state::{Counters, Statistics};

/// Tuning of [`MaximalConsistentSetSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Largest `fix` explored.
    pub fix_limit: usize,
    /// Log progress every this many terminal candidates; 0 disables it.
    pub progress_every: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fix_limit: 14,
            progress_every: 1000,
        }
    }
}

/// Result of one search run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Terminal candidates the oracle found infeasible, in discovery order.
    pub witnesses: Vec<PrecoloringSet>,
    /// Number of oracle submissions.
    pub terminal_candidates: u64,
    /// Branches cut off by the fix limit.
    pub truncated_branches: u64,
    /// False if any branch was cut off.
    pub complete: bool,
}

pub struct MaximalConsistentSetSearch<'o, O: FeasibilityOracle + ?Sized> {
    oracle: &'o mut O,
    config: SearchConfig,
    statistics: Statistics,
    outcome: SearchOutcome,
}

impl<'o, O: FeasibilityOracle + ?Sized> MaximalConsistentSetSearch<'o, O> {
    pub fn new(oracle: &'o mut O, config: SearchConfig) -> Self {
        Self {
            oracle,
            config,
            statistics: Statistics::new(),
            outcome: SearchOutcome::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Search the closed subsets of `universe`.
    ///
    /// The universe is closed first. An oracle error aborts the search.
    pub fn run(&mut self, universe: &PrecoloringSet) -> Result<SearchOutcome, OracleError> {
        self.outcome = SearchOutcome::default();
        let start = closure(universe);
        tracing::info!(
            universe = universe.len(),
            closed = start.len(),
            fix_limit = self.config.fix_limit,
            oracle = self.oracle.name(),
            "starting maximal consistent set search"
        );

        self.explore(&start, &PrecoloringSet::new())?;

        let mut outcome = std::mem::take(&mut self.outcome);
        outcome.complete = outcome.truncated_branches == 0;
        tracing::info!(
            candidates = outcome.terminal_candidates,
            witnesses = outcome.witnesses.len(),
            truncated = outcome.truncated_branches,
            "search finished"
        );
        Ok(outcome)
    }

    fn explore(&mut self, aset: &PrecoloringSet, fix: &PrecoloringSet) -> Result<(), OracleError> {
        self.statistics.increment(Counters::SearchNodes);
        if fix.len() > self.config.fix_limit {
            self.statistics.increment(Counters::TruncatedBranches);
            self.outcome.truncated_branches += 1;
            return Ok(());
        }

        let Some(act) = aset.iter().find(|pc| !fix.contains(pc)).cloned() else {
            return self.submit(aset);
        };

        let mut naset = aset.clone();
        naset.remove(&act);
        close_in_place(&mut naset);
        if fix.is_subset(&naset) {
            self.explore(&naset, fix)?;
        }

        let mut nfix = fix.clone();
        nfix.insert(act);
        self.explore(aset, &nfix)
    }

    fn submit(&mut self, candidate: &PrecoloringSet) -> Result<(), OracleError> {
        self.statistics.increment(Counters::OracleCalls);
        self.outcome.terminal_candidates += 1;
        let every = self.config.progress_every;
        if every > 0 && self.outcome.terminal_candidates % every == 0 {
            tracing::info!(candidates = self.outcome.terminal_candidates, "search progress");
        }

        match self.oracle.check_feasible(candidate)? {
            Feasibility::Feasible => {
                tracing::trace!(size = candidate.len(), "feasible candidate");
            }
            Feasibility::Infeasible => {
                tracing::debug!(set = %candidate, "infeasible candidate");
                self.statistics.increment(Counters::InfeasibleSets);
                self.outcome.witnesses.push(candidate.clone());
            }
        }
        Ok(())
    }
}
