// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kempe_search::configuration::catalog::CatalogEntry;
use kempe_search::oracle::glpk::DEFAULT_GLPSOL;
use kempe_search::SearchConfig;

/// kempe: ring colorings of planar configurations and their Kempe-chain
/// consistent sets.
///
/// The report goes to stdout; logs go to stderr and follow RUST_LOG.
#[derive(Debug, Parser)]
#[command(name = "kempe", version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a compiled-in configuration.
    Configuration(ConfigurationArgs),

    /// Analyze every parity-valid coloring of a bare ring.
    Universal(UniversalArgs),
}

#[derive(Debug, Args)]
pub struct ConfigurationArgs {
    /// Configuration to analyze.
    #[arg(value_enum)]
    pub entry: CatalogEntry,

    /// Search the core for maximal consistent sets instead of checking it
    /// as a whole.
    #[arg(long)]
    pub full_search: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Args)]
pub struct UniversalArgs {
    /// Ring length.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=14))]
    pub ring: u8,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Largest set of fixed colorings explored by the search.
    #[arg(long, default_value_t = SearchConfig::default().fix_limit)]
    pub fix_limit: usize,

    /// glpsol executable used as the feasibility oracle.
    #[arg(long, default_value = DEFAULT_GLPSOL)]
    pub solver: PathBuf,

    /// Stop after the consistency closure, without calling the solver.
    #[arg(long)]
    pub skip_search: bool,

    /// Print the chain equations of the core.
    #[arg(long)]
    pub dump_equations: bool,
}

impl RunArgs {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            fix_limit: self.fix_limit,
            ..SearchConfig::default()
        }
    }
}
