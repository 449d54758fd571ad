// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for a proper 3-coloring that extends a ring precoloring.
//!
//! # Algorithm
//!
//! 1. Reset the context: every vertex unset with domain {0,1,2}.
//! 2. Color the ring vertices in position order. A prescribed color that has
//!    already been pruned from the vertex's domain fails the test at once.
//! 3. Repeatedly pick the unset vertex with the smallest domain (lowest index
//!    on ties) and try each remaining color under a trail checkpoint,
//!    rolling back before the next color.
//!
//! Failure to extend is an ordinary outcome, reported as `false`.

use crate::coloring::Color;
use crate::context::SearchContext;
use crate::graph::{ConflictGraph, VertexId};
use crate::precoloring::Precoloring;
use crate::state::{Counters, Statistics};

/// Extendability tester bound to one conflict graph.
///
/// The solver owns its [`SearchContext`]; each call to
/// [`ExtensionSolver::extends`] reinitializes it, so the solver can be reused
/// for any number of independent tests.
#[derive(Debug)]
pub struct ExtensionSolver<'g> {
    ctx: SearchContext<'g>,
    statistics: Statistics,
}

impl<'g> ExtensionSolver<'g> {
    pub fn new(graph: &'g ConflictGraph) -> Self {
        Self {
            ctx: SearchContext::new(graph),
            statistics: Statistics::new(),
        }
    }

    pub fn graph(&self) -> &'g ConflictGraph {
        self.ctx.graph
    }

    /// Does `precoloring` of the ring prefix extend to the whole graph?
    pub fn extends(&mut self, precoloring: &Precoloring) -> bool {
        self.extends_colors(precoloring.colors())
    }

    /// Does coloring vertex `i` with `ring[i]` extend to the whole graph?
    ///
    /// # Panics
    ///
    /// Panics if `ring` is longer than the graph has vertices.
    pub fn extends_colors(&mut self, ring: &[Color]) -> bool {
        assert!(
            ring.len() <= self.ctx.graph.vertex_count(),
            "Ring of length {} exceeds graph with {} vertices",
            ring.len(),
            self.ctx.graph.vertex_count()
        );
        self.statistics.increment(Counters::ExtensionTests);
        self.ctx.reset();

        let extendable = self.apply_ring(ring) && self.try_extend();
        if extendable {
            self.statistics.increment(Counters::Extendable);
        } else {
            self.statistics.increment(Counters::NonExtendable);
        }
        extendable
    }

    fn apply_ring(&mut self, ring: &[Color]) -> bool {
        for (v, &c) in ring.iter().enumerate() {
            if !self.ctx.state.domain(v).contains(c) {
                return false;
            }
            self.ctx.set_color(v, c);
        }
        true
    }

    fn try_extend(&mut self) -> bool {
        let Some(v) = self.most_constrained_vertex() else {
            return true;
        };

        let checkpoint = self.ctx.checkpoint();
        for c in self.ctx.state.domain(v).iter() {
            self.statistics.increment(Counters::ColorTrials);
            self.ctx.set_color(v, c);
            if self.try_extend() {
                return true;
            }
            self.statistics.increment(Counters::Backtracks);
            self.ctx.rollback(checkpoint);
        }
        false
    }

    /// Unset vertex with the fewest candidate colors, lowest index on ties.
    fn most_constrained_vertex(&self) -> Option<VertexId> {
        let state = &self.ctx.state;
        let mut best: Option<(VertexId, usize)> = None;
        for v in 0..state.vertex_count() {
            if state.color(v).is_some() {
                continue;
            }
            let size = state.domain_size(v);
            if best.map_or(true, |(_, best_size)| size < best_size) {
                best = Some((v, size));
            }
        }
        best.map(|(v, _)| v)
    }

    /// The full coloring found by the last successful test.
    pub fn coloring(&self) -> Option<Vec<Color>> {
        self.ctx.state.complete_coloring()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}
