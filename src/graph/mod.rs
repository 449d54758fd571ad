// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Conflict graph of a configuration.
//!
//! The vertices of the conflict graph are the edges of the configuration; two
//! vertices are adjacent iff the configuration edges share an endpoint. A
//! proper 3-coloring of this graph is a Tait edge-coloring of the configuration.
//!
//! The graph is built once per configuration and is immutable afterwards
//! (Tier 1 data in the search context).

use crate::configuration::Configuration;

/// Vertex index in a conflict graph.
pub type VertexId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGraph {
    adjacency: Vec<Vec<VertexId>>,
}

impl ConflictGraph {
    /// Build the conflict graph by comparing every unordered pair of edges.
    pub fn from_configuration(config: &Configuration) -> Self {
        let edges = config.edges();
        let mut graph = Self::with_vertices(edges.len());
        for (e1, first) in edges.iter().enumerate() {
            for (e2, second) in edges.iter().enumerate().skip(e1 + 1) {
                if first.touches(second) {
                    graph.add_edge(e1, e2);
                }
            }
        }
        graph
    }

    /// Build a graph directly from an edge list over `n` vertices.
    ///
    /// # Panics
    ///
    /// Panics on a self-loop or an endpoint outside 0..n.
    pub fn from_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Self {
        let mut graph = Self::with_vertices(n);
        for &(u, v) in edges {
            assert!(u < n && v < n, "Edge ({}, {}) outside 0..{}", u, v, n);
            assert_ne!(u, v, "Self-loop on vertex {}", u);
            graph.add_edge(u, v);
        }
        graph
    }

    fn with_vertices(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
        }
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) {
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.adjacency[v].len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn are_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency[u].contains(&v)
    }
}
