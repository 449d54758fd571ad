// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 2: DYNAMIC state (mutable, tracked on trail).
//!
//! - ColoringState: per-vertex color and domain, restored from the trail
//! - Statistics: counters for the run

pub mod coloring;
pub mod statistics;

pub use coloring::ColoringState;
pub use statistics::{Counters, Statistics};
