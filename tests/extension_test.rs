// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Extension solver on small conflict graphs and on the Birkhoff diamond.

mod common;

use common::{claw_configuration, four_clique_configuration};
use kempe_search::configuration::catalog::birkhoff_diamond;
use kempe_search::precoloring::PrecoloringEnumerator;
use kempe_search::state::{Counters, Statistics};
use kempe_search::{Color, ConflictGraph, ExtensionSolver};

fn is_proper(graph: &ConflictGraph, coloring: &[Color]) -> bool {
    (0..graph.vertex_count()).all(|v| graph.neighbors(v).iter().all(|&u| coloring[u] != coloring[v]))
}

#[test]
fn test_isolated_triangle_extends() {
    let config = claw_configuration();
    config.validate().unwrap();
    let graph = ConflictGraph::from_configuration(&config);
    assert_eq!(graph.edge_count(), 3);

    let mut solver = ExtensionSolver::new(&graph);
    assert!(solver.extends_colors(&[]));
    assert!(solver.extends(&"123".parse().unwrap()));
    assert!(!solver.extends(&"112".parse().unwrap()));
}

#[test]
fn test_four_clique_does_not_extend() {
    let graph = ConflictGraph::from_configuration(&four_clique_configuration());
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.max_degree(), 3);

    let mut solver = ExtensionSolver::new(&graph);
    assert!(!solver.extends_colors(&[]));
    assert!(solver.coloring().is_none());
}

#[test]
fn test_birkhoff_extensions_are_proper() {
    common::init_test_tracing();
    let config = birkhoff_diamond();
    let graph = ConflictGraph::from_configuration(&config);
    assert!(graph.max_degree() <= 4);

    let mut solver = ExtensionSolver::new(&graph);
    let mut statistics = Statistics::new();
    let classification =
        PrecoloringEnumerator::new(config.outer()).classify(&mut solver, &mut statistics);
    assert_eq!(classification.tested(), 31);
    assert_eq!(statistics.get(Counters::ParityRejected), 91);

    for pc in &classification.extendable {
        assert!(solver.extends(pc), "{}", pc);
        let coloring = solver.coloring().unwrap();
        assert_eq!(&coloring[..pc.len()], pc.colors());
        assert!(is_proper(&graph, &coloring), "{}", pc);
    }
    for pc in &classification.non_extendable {
        assert!(!solver.extends(pc), "{}", pc);
    }
}
