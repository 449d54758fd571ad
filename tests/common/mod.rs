// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use kempe_search::configuration::{ConfigEdge, Configuration};
use kempe_search::oracle::{Feasibility, FeasibilityOracle, OracleError};
use kempe_search::{Precoloring, PrecoloringSet};

/// Install a test-writer subscriber; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn pc(s: &str) -> Precoloring {
    s.parse().expect("valid precoloring literal")
}

pub fn set(members: &[&str]) -> PrecoloringSet {
    members.iter().map(|s| pc(s)).collect()
}

/// Oracle that records every submission and answers with `verdict`.
#[derive(Debug)]
pub struct RecordingOracle {
    pub verdict: Feasibility,
    pub submissions: Vec<PrecoloringSet>,
}

impl RecordingOracle {
    pub fn new(verdict: Feasibility) -> Self {
        Self {
            verdict,
            submissions: Vec::new(),
        }
    }
}

impl FeasibilityOracle for RecordingOracle {
    fn check_feasible(&mut self, required: &PrecoloringSet) -> Result<Feasibility, OracleError> {
        self.submissions.push(required.clone());
        Ok(self.verdict)
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Oracle whose verdict is infeasible exactly for sets containing `marker`.
#[derive(Debug)]
pub struct MarkerOracle {
    pub marker: Precoloring,
}

impl FeasibilityOracle for MarkerOracle {
    fn check_feasible(&mut self, required: &PrecoloringSet) -> Result<Feasibility, OracleError> {
        Ok(if required.contains(&self.marker) {
            Feasibility::Infeasible
        } else {
            Feasibility::Feasible
        })
    }
}

/// Oracle that fails after answering `remaining` calls as feasible.
#[derive(Debug)]
pub struct FailingOracle {
    pub remaining: usize,
}

impl FeasibilityOracle for FailingOracle {
    fn check_feasible(&mut self, _required: &PrecoloringSet) -> Result<Feasibility, OracleError> {
        if self.remaining == 0 {
            return Err(OracleError::UnexpectedStatus("UNDEFINED".to_string()));
        }
        self.remaining -= 1;
        Ok(Feasibility::Feasible)
    }
}

/// Four legs meeting pairwise: its conflict graph is the complete graph K4.
pub fn four_clique_configuration() -> Configuration {
    let edges = (1..=4).map(|leg| ConfigEdge::new(-leg, 0)).collect();
    Configuration::new("four-clique", 0, edges)
}

/// Three legs meeting at one vertex: its conflict graph is a triangle.
pub fn claw_configuration() -> Configuration {
    let edges = (1..=3).map(|leg| ConfigEdge::new(-leg, 0)).collect();
    Configuration::new("claw", 3, edges)
}
