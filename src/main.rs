// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod cli;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, RunArgs};
use kempe_search::analysis::{write_report, Analysis};
use kempe_search::GlpsolOracle;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let (mut analysis, run, full_search) = match cli.command {
        Command::Configuration(args) => {
            let config = args.entry.configuration();
            let analysis = Analysis::of_configuration(&config)
                .with_context(|| format!("invalid configuration {}", config.name()))?;
            (analysis, args.run, args.full_search)
        }
        Command::Universal(args) => (Analysis::of_ring(usize::from(args.ring)), args.run, true),
    };

    solve(&mut analysis, &run, full_search)?;
    analysis.statistics.log();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &analysis, run.dump_equations).context("failed writing report")?;
    out.flush().context("failed writing report")?;
    Ok(())
}

/// Check the core as a whole, or search it when `full_search` is set.
fn solve(analysis: &mut Analysis, run: &RunArgs, full_search: bool) -> Result<()> {
    if run.skip_search {
        tracing::info!("solver skipped");
        return Ok(());
    }
    let mut oracle = GlpsolOracle::new(&run.solver);
    let context = || format!("feasibility oracle {} failed", run.solver.display());
    if full_search {
        analysis
            .search(&mut oracle, run.search_config())
            .with_context(context)?;
    } else {
        analysis.check_core(&mut oracle).with_context(context)?;
    }
    Ok(())
}
