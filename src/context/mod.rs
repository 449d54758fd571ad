// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the per-invocation object passed by reference through
//! the extension search:
//! - Tier 1 (MEMO): the immutable conflict graph, borrowed
//! - Tier 2 (DYNAMIC): coloring state and the trail that undoes it
//!
//! Nothing here is process-wide; two contexts over the same graph are fully
//! independent.

use crate::coloring::{Color, NCOLORS};
use crate::graph::{ConflictGraph, VertexId};
use crate::state::ColoringState;
use crate::trail::Trail;

/// Search context for extendability tests over one conflict graph.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     graph: &ConflictGraph,    // Tier 1: Immutable, shared
///     trail: Trail,             // Tier 2: Mutable, owned
///     state: ColoringState,     // Tier 2: Mutable, owned
/// }
/// ```
///
/// # Example
///
/// ```
/// use kempe_search::coloring::Color;
/// use kempe_search::context::SearchContext;
/// use kempe_search::graph::ConflictGraph;
///
/// let graph = ConflictGraph::from_edges(2, &[(0, 1)]);
/// let mut ctx = SearchContext::new(&graph);
///
/// let checkpoint = ctx.checkpoint();
/// ctx.set_color(0, Color::new(0));
/// assert_eq!(ctx.state.domain_size(1), 2);
///
/// ctx.rollback(checkpoint);
/// assert_eq!(ctx.state.color(0), None);
/// assert_eq!(ctx.state.domain_size(1), 3);
/// ```
#[derive(Debug)]
pub struct SearchContext<'g> {
    /// Immutable conflict graph (Tier 1)
    pub graph: &'g ConflictGraph,
    /// Trail for O(1) backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable coloring state (Tier 2)
    pub state: ColoringState,
}

impl<'g> SearchContext<'g> {
    pub fn new(graph: &'g ConflictGraph) -> Self {
        Self {
            graph,
            trail: Trail::with_limit(Self::trail_limit(graph)),
            state: ColoringState::new(graph.vertex_count()),
        }
    }

    /// Most live trail entries: each vertex is colored at most once, and its
    /// domain can lose each color at most once.
    fn trail_limit(graph: &ConflictGraph) -> usize {
        graph.vertex_count() * (1 + 2 * NCOLORS)
    }

    /// Start an independent test: everything unset, full domains, empty trail.
    pub fn reset(&mut self) {
        self.trail.clear();
        self.state.reset();
    }

    /// Trail-tracked `color[v] = c`.
    pub fn assign(&mut self, v: VertexId, c: Color) {
        self.state.assign(&mut self.trail, v, c);
    }

    /// Trail-tracked removal of `c` from the domain of `v`.
    pub fn restrict_domain(&mut self, v: VertexId, c: Color) {
        self.state.restrict_domain(&mut self.trail, v, c);
    }

    /// Color `v` and remove `c` from the domain of every neighbor.
    pub fn set_color(&mut self, v: VertexId, c: Color) {
        self.assign(v, c);
        let graph = self.graph;
        for &u in graph.neighbors(v) {
            self.restrict_domain(u, c);
        }
    }

    pub fn checkpoint(&self) -> usize {
        self.trail.checkpoint()
    }

    /// Undo every mutation made since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: usize) {
        self.trail.rewind_to(checkpoint, &mut self.state);
    }
}
