// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end analysis of a configuration or of a bare ring.
//!
//! A configuration run builds the conflict graph, classifies every
//! parity-valid ring coloring by extendability, and closes the
//! non-extendable ones under consistency. A universal run skips the graph
//! and starts from every parity-valid coloring of the ring. The closed core
//! can then be handed to the oracle as a whole, or searched for maximal
//! consistent sets.

pub mod report;

pub use report::write_report;

use crate::configuration::{Configuration, ConfigurationError};
use crate::consistency::{close_in_place, ClosureHistory};
use crate::graph::ConflictGraph;
use crate::oracle::{Feasibility, FeasibilityOracle, OracleError};
use crate::precoloring::{Precoloring, PrecoloringEnumerator, PrecoloringSet};
use crate::search::{MaximalConsistentSetSearch, SearchConfig, SearchOutcome};
use crate::solver::ExtensionSolver;
use crate::state::{Counters, Statistics};

/// What was analyzed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Configuration {
        name: String,
        outer: usize,
        edges: usize,
    },
    Ring {
        outer: usize,
    },
}

impl Subject {
    pub fn outer(&self) -> usize {
        match *self {
            Subject::Configuration { outer, .. } | Subject::Ring { outer } => outer,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Analysis {
    pub subject: Subject,
    /// Colorings that extend, in generation order. Empty for a bare ring.
    pub extendable: Vec<Precoloring>,
    /// Parity-valid colorings that do not extend.
    pub universe: PrecoloringSet,
    pub parity_rejected: usize,
    pub closure: ClosureHistory,
    /// Closure of the universe.
    pub core: PrecoloringSet,
    pub statistics: Statistics,
    /// Oracle verdict on the whole core, once checked.
    pub core_verdict: Option<Feasibility>,
    pub search: Option<SearchOutcome>,
}

impl Analysis {
    /// Classify the ring colorings of `config` and close the non-extendable ones.
    pub fn of_configuration(config: &Configuration) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let graph = ConflictGraph::from_configuration(config);
        tracing::info!(
            configuration = config.name(),
            ring = config.outer(),
            vertices = graph.vertex_count(),
            conflicts = graph.edge_count(),
            "conflict graph built"
        );

        let mut statistics = Statistics::new();
        let mut solver = ExtensionSolver::new(&graph);
        let classification =
            PrecoloringEnumerator::new(config.outer()).classify(&mut solver, &mut statistics);
        statistics.merge(solver.statistics());
        tracing::info!(
            extendable = classification.extendable.len(),
            non_extendable = classification.non_extendable.len(),
            parity_rejected = classification.parity_rejected,
            "ring colorings classified"
        );

        let subject = Subject::Configuration {
            name: config.name().to_string(),
            outer: config.outer(),
            edges: config.edge_count(),
        };
        Ok(Self::closed(
            subject,
            classification.extendable,
            classification.non_extendable,
            classification.parity_rejected,
            statistics,
        ))
    }

    /// Close every parity-valid coloring of a ring of length `outer`.
    pub fn of_ring(outer: usize) -> Self {
        let mut universe = PrecoloringSet::new();
        let mut parity_rejected = 0;
        PrecoloringEnumerator::new(outer).for_each_canonical(|pc| {
            if pc.has_bad_parity() {
                parity_rejected += 1;
            } else {
                universe.insert(pc.clone());
            }
        });
        tracing::info!(ring = outer, colorings = universe.len(), "universal ring colorings");
        Self::closed(
            Subject::Ring { outer },
            Vec::new(),
            universe,
            parity_rejected,
            Statistics::new(),
        )
    }

    fn closed(
        subject: Subject,
        extendable: Vec<Precoloring>,
        universe: PrecoloringSet,
        parity_rejected: usize,
        statistics: Statistics,
    ) -> Self {
        let mut core = universe.clone();
        let closure = close_in_place(&mut core);
        tracing::info!(
            universe = universe.len(),
            core = core.len(),
            passes = closure.passes(),
            "consistency closure"
        );
        Self {
            subject,
            extendable,
            universe,
            parity_rejected,
            closure,
            core,
            statistics,
            core_verdict: None,
            search: None,
        }
    }

    /// Submit the core to `oracle` once, recording the verdict.
    ///
    /// An infeasible core means the configuration is reducible.
    pub fn check_core<O: FeasibilityOracle + ?Sized>(
        &mut self,
        oracle: &mut O,
    ) -> Result<Feasibility, OracleError> {
        let verdict = oracle.check_feasible(&self.core)?;
        self.statistics.increment(Counters::OracleCalls);
        if !verdict.is_feasible() {
            self.statistics.increment(Counters::InfeasibleSets);
        }
        tracing::info!(oracle = oracle.name(), core = self.core.len(), ?verdict, "core checked");
        self.core_verdict = Some(verdict);
        Ok(verdict)
    }

    /// Search the core for maximal consistent sets, recording the outcome.
    pub fn search<O: FeasibilityOracle + ?Sized>(
        &mut self,
        oracle: &mut O,
        config: SearchConfig,
    ) -> Result<&SearchOutcome, OracleError> {
        let mut search = MaximalConsistentSetSearch::new(oracle, config);
        let outcome = search.run(&self.core)?;
        self.statistics.merge(search.statistics());
        Ok(self.search.insert(outcome))
    }
}
