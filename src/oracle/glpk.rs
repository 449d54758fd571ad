// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Feasibility oracle backed by the GLPK command line solver.
//!
//! The chain system of the required set is written in CPLEX LP format:
//!
//! - one variable `p<i>` per required coloring, bounded below by 1;
//! - one variable `c<j>` per distinct chain name, bounded below by 0;
//! - one equality `p<i> - c<j> - ... = 0` per chain equation;
//! - objective: minimize the sum of the coloring variables.
//!
//! `glpsol --lp model.lp -o report.txt` is run in a fresh temporary directory
//! and the `Status:` line of the report decides the verdict.

use super::{ChainSystem, Feasibility, FeasibilityOracle, OracleError};
use crate::precoloring::PrecoloringSet;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default solver executable, looked up on `PATH`.
pub const DEFAULT_GLPSOL: &str = "glpsol";

/// Terms per line of a constraint or the objective.
const TERMS_PER_LINE: usize = 8;

/// Printed by glpsol when the presolver detects infeasibility.
const NO_PRIMAL_FEASIBLE: &str = "NO PRIMAL FEASIBLE";

#[derive(Debug, Clone)]
pub struct GlpsolOracle {
    program: PathBuf,
}

impl Default for GlpsolOracle {
    fn default() -> Self {
        Self::new(DEFAULT_GLPSOL)
    }
}

impl GlpsolOracle {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn solve(&self, system: &ChainSystem) -> Result<Feasibility, OracleError> {
        let dir = tempfile::tempdir()?;
        let model = dir.path().join("model.lp");
        let report = dir.path().join("report.txt");
        fs::write(&model, lp_model(system))?;

        let output = Command::new(&self.program)
            .arg("--lp")
            .arg(&model)
            .arg("-o")
            .arg(&report)
            .output()
            .map_err(|source| OracleError::Unavailable {
                solver: self.program.display().to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.contains(NO_PRIMAL_FEASIBLE) {
            return Ok(Feasibility::Infeasible);
        }
        if !output.status.success() {
            return Err(OracleError::SolverFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = fs::read_to_string(&report)?;
        let status = report_status(&text)
            .ok_or_else(|| OracleError::UnexpectedStatus("no Status line in report".into()))?;
        classify_status(status)
    }
}

impl FeasibilityOracle for GlpsolOracle {
    fn check_feasible(&mut self, required: &PrecoloringSet) -> Result<Feasibility, OracleError> {
        let system = ChainSystem::build(required);
        if system.is_unconstrained() {
            tracing::trace!(size = required.len(), "no chain equations, feasible");
            return Ok(Feasibility::Feasible);
        }
        let verdict = self.solve(&system)?;
        tracing::debug!(size = required.len(), equations = system.equations().len(), ?verdict, "glpsol");
        Ok(verdict)
    }

    fn name(&self) -> &str {
        "glpsol"
    }
}

/// CPLEX LP text of `system`.
pub fn lp_model(system: &ChainSystem) -> String {
    LpModel(system).to_string()
}

/// [`ChainSystem`] rendered in CPLEX LP format.
struct LpModel<'a>(&'a ChainSystem);

impl fmt::Display for LpModel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let system = self.0;
        let precolorings: BTreeMap<_, _> = system
            .required()
            .iter()
            .enumerate()
            .map(|(i, pc)| (pc, format!("p{}", i)))
            .collect();
        let chains: BTreeMap<_, _> = system
            .chains()
            .into_iter()
            .enumerate()
            .map(|(j, chain)| (chain, format!("c{}", j)))
            .collect();

        writeln!(f, "\\ chain equations of {} colorings", precolorings.len())?;
        writeln!(f, "Minimize")?;
        let objective: Vec<String> = precolorings.values().map(|p| format!("+ {}", p)).collect();
        write_terms(f, " obj:", &objective)?;

        writeln!(f, "Subject To")?;
        for (k, eq) in system.equations().iter().enumerate() {
            let mut terms = vec![format!("+ {}", precolorings[&eq.precoloring])];
            terms.extend(eq.chains.iter().map(|chain| format!("- {}", chains[chain])));
            write_terms(f, &format!(" e{}:", k), &terms)?;
            writeln!(f, "   = 0")?;
        }

        writeln!(f, "Bounds")?;
        for p in precolorings.values() {
            writeln!(f, " {} >= 1", p)?;
        }
        writeln!(f, "End")
    }
}

fn write_terms(f: &mut impl fmt::Write, label: &str, terms: &[String]) -> fmt::Result {
    for (i, chunk) in terms.chunks(TERMS_PER_LINE).enumerate() {
        let lead = if i == 0 { label } else { "   " };
        writeln!(f, "{} {}", lead, chunk.join(" "))?;
    }
    Ok(())
}

/// Text after `Status:` in a glpsol report.
pub fn report_status(report: &str) -> Option<&str> {
    report
        .lines()
        .find_map(|line| line.trim_start().strip_prefix("Status:"))
        .map(str::trim)
}

/// Verdict for a report status such as `OPTIMAL` or `INFEASIBLE (FINAL)`.
pub fn classify_status(status: &str) -> Result<Feasibility, OracleError> {
    let word = status.split_whitespace().next().unwrap_or("");
    match word {
        "OPTIMAL" | "UNBOUNDED" => Ok(Feasibility::Feasible),
        "INFEASIBLE" => Ok(Feasibility::Infeasible),
        _ if status.contains(NO_PRIMAL_FEASIBLE) => Ok(Feasibility::Infeasible),
        _ => Err(OracleError::UnexpectedStatus(status.to_string())),
    }
}
