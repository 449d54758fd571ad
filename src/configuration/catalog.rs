// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compiled-in configurations.

use super::{ConfigEdge, Configuration};

/// Configurations known to the batch runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogEntry {
    /// Birkhoff diamond: ring 6, four internal vertices of the diamond.
    BirkhoffDiamond,
    /// Block-count reducible configuration: ring 10.
    BlockCountReducible,
}

impl CatalogEntry {
    pub fn configuration(self) -> Configuration {
        match self {
            CatalogEntry::BirkhoffDiamond => birkhoff_diamond(),
            CatalogEntry::BlockCountReducible => block_count_reducible(),
        }
    }
}

const BIRKHOFF_DIAMOND: [(i32, i32); 21] = [
    (-1, 0),
    (-2, 1),
    (-3, 2),
    (-4, 3),
    (-5, 4),
    (-6, 5),
    (0, 7),
    (0, 6),
    (1, 7),
    (1, 2),
    (2, 8),
    (3, 8),
    (3, 9),
    (4, 9),
    (4, 5),
    (5, 6),
    (6, 10),
    (7, 11),
    (8, 11),
    (9, 10),
    (10, 11),
];

const BLOCK_COUNT_REDUCIBLE: [(i32, i32); 32] = [
    (-1, 0),
    (-2, 1),
    (-3, 3),
    (-4, 4),
    (-5, 6),
    (-6, 7),
    (-7, 9),
    (-8, 10),
    (-9, 12),
    (-10, 13),
    (0, 1),
    (0, 14),
    (1, 2),
    (2, 3),
    (2, 16),
    (3, 4),
    (4, 5),
    (5, 6),
    (5, 16),
    (6, 7),
    (7, 8),
    (8, 9),
    (8, 17),
    (9, 10),
    (10, 11),
    (11, 12),
    (11, 17),
    (12, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (15, 17),
];

fn from_table(name: &str, outer: usize, table: &[(i32, i32)]) -> Configuration {
    let edges = table.iter().map(|&(a, b)| ConfigEdge::new(a, b)).collect();
    Configuration::new(name, outer, edges)
}

pub fn birkhoff_diamond() -> Configuration {
    from_table("birkhoff-diamond", 6, &BIRKHOFF_DIAMOND)
}

pub fn block_count_reducible() -> Configuration {
    from_table("block-count-reducible", 10, &BLOCK_COUNT_REDUCIBLE)
}
