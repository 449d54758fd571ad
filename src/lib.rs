// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Kempe-chain consistency search for reducible configurations.
//!
//! A configuration is a patch of a cubic planar graph bounded by a ring of
//! `outer` edges. Its Tait colorings are the proper 3-colorings of the
//! conflict graph whose vertices are the configuration edges. This crate
//! decides which colorings of the ring extend into the patch, and then
//! studies the colorings that do not.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`configuration`] and [`graph`]: edge lists and their conflict graphs.
//! - [`trail`], [`state`] and [`context`]: per-vertex colors and candidate
//!   domains with an undo log, so a backtracking search can rewind cheaply.
//! - [`solver`]: most-constrained-first backtracking extension test.
//! - [`precoloring`]: canonical ring colorings, their parity filter, and
//!   ordered sets of them.
//! - [`matching`]: non-crossing pairings of ring positions, the possible
//!   topologies of Kempe chains.
//! - [`consistency`]: Kempe swaps and the closure of a set of colorings.
//! - [`search`]: branch-and-bound over closed subsets.
//! - [`oracle`]: feasibility of the chain equations of a set, by an external
//!   LP solver.
//! - [`analysis`]: the batch pipeline and its report.
//!
//! Everything is single-threaded and deterministic. Sets are ordered by the
//! structural order of colorings, which fixes the order of the search.
//!
//! # References
//!
//! - Birkhoff, G. D. (1913). "The reducibility of maps."
//!   American Journal of Mathematics 35(2), 115-128.

pub mod analysis;
pub mod coloring;
pub mod configuration;
pub mod consistency;
pub mod context;
pub mod graph;
pub mod matching;
pub mod oracle;
pub mod precoloring;
pub mod search;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use analysis::Analysis;
pub use coloring::{Color, ColorSet};
pub use configuration::{Configuration, ConfigurationError};
pub use context::SearchContext;
pub use graph::ConflictGraph;
pub use oracle::{Feasibility, FeasibilityOracle, GlpsolOracle, OracleError};
pub use precoloring::{Precoloring, PrecoloringSet};
pub use search::{MaximalConsistentSetSearch, SearchConfig, SearchOutcome};
pub use solver::ExtensionSolver;
pub use trail::Trail;
