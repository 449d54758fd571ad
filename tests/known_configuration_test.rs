// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end runs over the compiled-in configurations.

mod common;

use common::{claw_configuration, RecordingOracle};
use kempe_search::analysis::{write_report, Analysis, Subject};
use kempe_search::configuration::catalog::CatalogEntry;
use kempe_search::consistency::is_consistent;
use kempe_search::oracle::Feasibility;
use kempe_search::precoloring::PrecoloringEnumerator;
use kempe_search::state::Counters;
use kempe_search::{ConflictGraph, SearchConfig};

fn report(analysis: &Analysis, equations: bool) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, analysis, equations).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_catalog_graphs() {
    for (entry, outer, edges) in [
        (CatalogEntry::BirkhoffDiamond, 6, 21),
        (CatalogEntry::BlockCountReducible, 10, 32),
    ] {
        let config = entry.configuration();
        config.validate().unwrap();
        assert_eq!(config.outer(), outer);
        let graph = ConflictGraph::from_configuration(&config);
        assert_eq!(graph.vertex_count(), edges);
        assert!(graph.max_degree() <= 4);
        for v in 0..outer {
            assert_eq!(graph.degree(v), 2, "ring edge {} of {}", v, config.name());
        }
    }
}

#[test]
fn test_birkhoff_diamond_pipeline() {
    common::init_test_tracing();
    let mut analysis = Analysis::of_configuration(&CatalogEntry::BirkhoffDiamond.configuration()).unwrap();
    assert_eq!(analysis.extendable.len() + analysis.universe.len(), 31);
    assert_eq!(analysis.parity_rejected, 91);
    assert!(analysis.core.is_subset(&analysis.universe));
    assert!(analysis.core.iter().all(|pc| is_consistent(&analysis.core, pc)));

    let mut oracle = RecordingOracle::new(Feasibility::Infeasible);
    let outcome = analysis.search(&mut oracle, SearchConfig::default()).unwrap().clone();
    assert!(outcome.complete);
    assert_eq!(outcome.terminal_candidates as usize, oracle.submissions.len());
    assert_eq!(outcome.witnesses, oracle.submissions);
    assert!(oracle.submissions.iter().all(|s| s.is_subset(&analysis.core)));
    assert_eq!(
        analysis.statistics.get(Counters::OracleCalls),
        outcome.terminal_candidates
    );

    let text = report(&analysis, false);
    assert!(text.starts_with("# configuration birkhoff-diamond: ring 6, 21 edges\n"));
    assert_eq!(
        text.lines().filter(|l| l.starts_with("+ ")).count(),
        analysis.extendable.len()
    );
    assert!(text.contains(&format!("non-extendable: {}\n", analysis.universe.len())));
    assert!(text.contains("# search: "));
}

#[test]
fn test_block_count_reducible_classification() {
    let mut analysis =
        Analysis::of_configuration(&CatalogEntry::BlockCountReducible.configuration()).unwrap();
    let parity_valid = PrecoloringEnumerator::new(10).parity_valid();
    assert_eq!(
        analysis.extendable.len() + analysis.universe.len(),
        parity_valid.len()
    );
    assert!(analysis.universe.is_subset(&parity_valid));
    assert!(analysis.core.is_subset(&analysis.universe));
    assert!(matches!(
        analysis.subject,
        Subject::Configuration { outer: 10, edges: 32, .. }
    ));
    assert!(!analysis.core.is_empty());

    let mut oracle = RecordingOracle::new(Feasibility::Infeasible);
    assert_eq!(analysis.check_core(&mut oracle).unwrap(), Feasibility::Infeasible);
    assert_eq!(oracle.submissions, vec![analysis.core.clone()]);
    assert_eq!(analysis.statistics.get(Counters::OracleCalls), 1);
    assert!(analysis.search.is_none());

    let text = report(&analysis, true);
    assert!(text.contains("\ncore LP: infeasible\n"));
    assert!(text.contains("\n# chain equations: "));
    // every member of a closed core has at least one admissible arrangement
    assert!(text.lines().all(|line| !line.ends_with(" =")));
}

#[test]
fn test_claw_has_nothing_to_search() {
    let mut analysis = Analysis::of_configuration(&claw_configuration()).unwrap();
    assert_eq!(analysis.extendable.len(), 1);
    assert!(analysis.universe.is_empty());

    let mut oracle = RecordingOracle::new(Feasibility::Feasible);
    let outcome = analysis.search(&mut oracle, SearchConfig::default()).unwrap();
    assert_eq!(outcome.terminal_candidates, 1);
    assert!(outcome.witnesses.is_empty());

    let text = report(&analysis, true);
    assert!(text.contains("+ 123\nextendable: 1\nnon-extendable: 0\nparity rejected: 4\n"));
    assert!(text.contains("# chain equations: 0\n"));
}

#[test]
fn test_universal_ring_of_six() {
    let analysis = Analysis::of_ring(6);
    assert_eq!(analysis.universe.len(), 31);
    assert_eq!(analysis.parity_rejected, 91);
    assert!(analysis.core.iter().all(|pc| is_consistent(&analysis.core, pc)));
    assert!(report(&analysis, false).starts_with("# universal ring 6\nextendable: 0\n"));
}
