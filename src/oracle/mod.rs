// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Feasibility oracle for candidate sets of non-extendable colorings.
//!
//! A set that survives the consistency closure is still only a candidate:
//! the chain equations of the set must also admit a non-negative solution
//! in which every member is used. Deciding that is delegated to an external
//! linear-program solver behind [`FeasibilityOracle`].

pub mod equations;
pub mod glpk;

pub use equations::{Chain, ChainEquation, ChainSystem};
pub use glpk::GlpsolOracle;

use crate::precoloring::PrecoloringSet;
use std::io;
use thiserror::Error;

/// Verdict of the oracle on a required set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    Feasible,
    Infeasible,
}

impl Feasibility {
    pub fn is_feasible(self) -> bool {
        self == Feasibility::Feasible
    }
}

/// Failure to obtain a verdict. Never reported as [`Feasibility::Infeasible`].
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("LP solver {solver:?} could not be started")]
    Unavailable {
        solver: String,
        #[source]
        source: io::Error,
    },

    #[error("LP model I/O failed")]
    Io(#[from] io::Error),

    #[error("LP solver exited with {status}: {stderr}")]
    SolverFailed { status: String, stderr: String },

    #[error("unrecognized LP solver status: {0}")]
    UnexpectedStatus(String),
}

/// Black-box feasibility check of the chain equations of a set.
pub trait FeasibilityOracle {
    /// Is there a solution of the chain equations of `required` in which
    /// every member of `required` has weight at least one?
    fn check_feasible(&mut self, required: &PrecoloringSet) -> Result<Feasibility, OracleError>;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
