// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text report of an [`Analysis`].
//!
//! ```text
//! # configuration birkhoff-diamond: ring 6, 21 edges
//! + 111212
//! + 111221
//! ...
//! extendable: 16
//! non-extendable: 15
//! parity rejected: 91
//! closure: 15 -> 0 -> 0
//! core: 0
//! core LP: feasible
//! ```

use super::{Analysis, Subject};
use crate::oracle::ChainSystem;
use std::io::{self, Write};

/// Write `analysis` to `out`; with `equations`, also the chain system of the
/// core.
pub fn write_report(out: &mut impl Write, analysis: &Analysis, equations: bool) -> io::Result<()> {
    match &analysis.subject {
        Subject::Configuration { name, outer, edges } => {
            writeln!(out, "# configuration {}: ring {}, {} edges", name, outer, edges)?;
        }
        Subject::Ring { outer } => {
            writeln!(out, "# universal ring {}", outer)?;
        }
    }

    for pc in &analysis.extendable {
        writeln!(out, "+ {}", pc)?;
    }
    writeln!(out, "extendable: {}", analysis.extendable.len())?;
    writeln!(out, "non-extendable: {}", analysis.universe.len())?;
    writeln!(out, "parity rejected: {}", analysis.parity_rejected)?;

    let sizes: Vec<String> = analysis.closure.sizes.iter().map(|n| n.to_string()).collect();
    writeln!(out, "closure: {}", sizes.join(" -> "))?;
    writeln!(out, "core: {}", analysis.core.len())?;
    if !analysis.core.is_empty() {
        writeln!(out, "{}", analysis.core)?;
    }
    if let Some(verdict) = analysis.core_verdict {
        let word = if verdict.is_feasible() { "feasible" } else { "infeasible" };
        writeln!(out, "core LP: {}", word)?;
    }

    if equations {
        let system = ChainSystem::build(&analysis.core);
        writeln!(out)?;
        writeln!(out, "# chain equations: {}", system.equations().len())?;
        write!(out, "{}", system)?;
    }

    if let Some(search) = &analysis.search {
        writeln!(out)?;
        let status = if search.complete {
            "complete".to_string()
        } else {
            format!("incomplete, {} truncated branches", search.truncated_branches)
        };
        writeln!(
            out,
            "# search: {} candidates, {} witnesses, {}",
            search.terminal_candidates,
            search.witnesses.len(),
            status
        )?;
        for witness in &search.witnesses {
            writeln!(out, "{}", witness)?;
        }
    }
    Ok(())
}
