// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests drive SearchContext the way the extension solver does and
//! check that rollback restores colors, domains and domain sizes exactly.

mod common;

use kempe_search::configuration::catalog::birkhoff_diamond;
use kempe_search::{Color, ConflictGraph, SearchContext};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

type Snapshot = Vec<(Option<Color>, u64, usize)>;

fn snapshot(ctx: &SearchContext<'_>) -> Snapshot {
    (0..ctx.state.vertex_count())
        .map(|v| {
            (
                ctx.state.color(v),
                ctx.state.domain(v).bits(),
                ctx.state.domain_size(v),
            )
        })
        .collect()
}

#[test]
fn test_search_context_simple_backtracking() {
    let graph = ConflictGraph::from_edges(3, &[(0, 1), (1, 2)]);
    let mut ctx = SearchContext::new(&graph);
    let initial = snapshot(&ctx);

    let checkpoint = ctx.checkpoint();
    ctx.set_color(1, Color::new(2));
    assert_eq!(ctx.state.color(1), Some(Color::new(2)));
    assert_eq!(ctx.state.domain_size(0), 2);
    assert_eq!(ctx.state.domain_size(2), 2);
    // color plus domain and size of two neighbors
    assert_eq!(ctx.trail.len(), 5);

    ctx.rollback(checkpoint);
    assert_eq!(snapshot(&ctx), initial);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_nested_checkpoints() {
    let graph = ConflictGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
    let mut ctx = SearchContext::new(&graph);

    let cp1 = ctx.checkpoint();
    ctx.set_color(0, Color::new(0));
    let after_first = snapshot(&ctx);

    let cp2 = ctx.checkpoint();
    ctx.set_color(1, Color::new(1));
    assert_eq!(ctx.state.domain(2).len(), 1);

    ctx.rollback(cp2);
    assert_eq!(snapshot(&ctx), after_first);

    // Rolling back twice to the same point changes nothing
    ctx.rollback(cp2);
    assert_eq!(snapshot(&ctx), after_first);

    ctx.rollback(cp1);
    assert_eq!(ctx.state.color(0), None);
    assert_eq!(ctx.state.domain_size(1), 3);
}

#[test]
fn test_restrict_on_colored_vertex_is_not_recorded() {
    let graph = ConflictGraph::from_edges(2, &[(0, 1)]);
    let mut ctx = SearchContext::new(&graph);
    ctx.assign(0, Color::new(0));
    let len = ctx.trail.len();
    ctx.restrict_domain(0, Color::new(1));
    assert_eq!(ctx.trail.len(), len);
    assert_eq!(ctx.state.domain_size(0), 3);
}

#[test]
fn test_independent_search_contexts() {
    let graph = ConflictGraph::from_edges(2, &[(0, 1)]);
    let mut ctx1 = SearchContext::new(&graph);
    let mut ctx2 = SearchContext::new(&graph);

    ctx1.set_color(0, Color::new(0));
    ctx2.set_color(0, Color::new(2));

    assert!(!ctx1.state.domain(1).contains(Color::new(0)));
    assert!(ctx2.state.domain(1).contains(Color::new(0)));
    assert!(!ctx2.state.domain(1).contains(Color::new(2)));
}

#[test]
fn test_large_graph_does_not_overflow() {
    // A path long enough that coloring all of it records over 16384 entries
    let n = 6000;
    let edges: Vec<(usize, usize)> = (1..n).map(|v| (v - 1, v)).collect();
    let graph = ConflictGraph::from_edges(n, &edges);
    let mut ctx = SearchContext::new(&graph);
    assert!(ctx.trail.limit() >= 7 * n);

    let checkpoint = ctx.checkpoint();
    for v in 0..n {
        ctx.set_color(v, Color::new((v % 2) as u8));
    }
    assert!(ctx.trail.len() > 16384);
    assert!(ctx.state.complete_coloring().is_some());

    ctx.rollback(checkpoint);
    assert!((0..n).all(|v| ctx.state.color(v).is_none() && ctx.state.domain_size(v) == 3));
}

#[test]
#[should_panic(expected = "Trail rewind past end")]
fn test_rollback_past_end_panics() {
    let graph = ConflictGraph::from_edges(1, &[]);
    let mut ctx = SearchContext::new(&graph);
    ctx.rollback(1);
}

#[test]
fn test_random_interleavings_restore_exactly() {
    common::init_test_tracing();
    let graph = ConflictGraph::from_configuration(&birkhoff_diamond());
    let n = graph.vertex_count();
    let mut rng = StdRng::seed_from_u64(0x4b45_4d50);

    for _ in 0..200 {
        let mut ctx = SearchContext::new(&graph);
        let mut stack: Vec<(usize, Snapshot)> = Vec::new();

        for _ in 0..40 {
            match rng.gen_range(0..4) {
                0 => stack.push((ctx.checkpoint(), snapshot(&ctx))),
                1 => {
                    if let Some((cp, expected)) = stack.pop() {
                        ctx.rollback(cp);
                        assert_eq!(snapshot(&ctx), expected);
                    }
                }
                2 => {
                    let v = rng.gen_range(0..n);
                    let c = Color::new(rng.gen_range(0..3));
                    ctx.restrict_domain(v, c);
                }
                _ => {
                    let v = rng.gen_range(0..n);
                    if ctx.state.color(v).is_none() {
                        let c = Color::new(rng.gen_range(0..3));
                        ctx.set_color(v, c);
                    }
                }
            }
        }

        while let Some((cp, expected)) = stack.pop() {
            ctx.rollback(cp);
            assert_eq!(snapshot(&ctx), expected);
        }
    }
}
