// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planar configurations: a patch of a cubic planar graph bounded by a ring.
//!
//! A configuration is given as its ring size and an ordered list of edges.
//! Every edge joins two endpoint identifiers. Non-negative identifiers name
//! internal vertices shared between edges; negative identifiers are external
//! legs, each used by exactly one edge. The first `outer` edges are the ring
//! edges, so ring position `i` is conflict vertex `i`.

pub mod catalog;

use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// An endpoint identifier. Negative values are external legs.
pub type EndpointId = i32;

/// An edge of a configuration, given by its two endpoint identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigEdge {
    pub ends: [EndpointId; 2],
}

impl ConfigEdge {
    pub const fn new(a: EndpointId, b: EndpointId) -> Self {
        Self { ends: [a, b] }
    }

    /// True if this edge and `other` share an endpoint identifier.
    pub fn touches(&self, other: &ConfigEdge) -> bool {
        self.ends.iter().any(|e| other.ends.contains(e))
    }

    /// Number of external-leg endpoints on this edge.
    fn leg_count(&self) -> usize {
        self.ends.iter().filter(|&&e| e < 0).count()
    }
}

/// Structural defects detected by [`Configuration::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("ring size {outer} exceeds edge count {edges}")]
    RingLargerThanEdgeList { outer: usize, edges: usize },

    #[error("ring edge {edge} must have exactly one external leg")]
    RingEdgeWithoutLeg { edge: usize },

    #[error("edge {edge} has an external leg but is not a ring edge")]
    LegOutsideRing { edge: usize },

    #[error("external leg {leg} is used by more than one edge")]
    DuplicateLeg { leg: EndpointId },

    #[error("internal vertex {vertex} has degree {degree} (max 3)")]
    DegreeTooHigh { vertex: EndpointId, degree: usize },
}

/// A configuration: ring size plus ordered edge list. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    name: String,
    outer: usize,
    edges: Vec<ConfigEdge>,
}

impl Configuration {
    pub fn new(name: impl Into<String>, outer: usize, edges: Vec<ConfigEdge>) -> Self {
        Self {
            name: name.into(),
            outer,
            edges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ring length.
    pub fn outer(&self) -> usize {
        self.outer
    }

    /// Number of edges (the conflict graph's vertex count).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[ConfigEdge] {
        &self.edges
    }

    /// Check the ring-prefix and cubic-degree conventions.
    ///
    /// Building the conflict graph does not require a valid configuration;
    /// this is a separate sanity check for compiled-in data.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.outer > self.edges.len() {
            return Err(ConfigurationError::RingLargerThanEdgeList {
                outer: self.outer,
                edges: self.edges.len(),
            });
        }

        let mut legs = HashSet::new();
        let mut degree: HashMap<EndpointId, usize> = HashMap::new();
        for (i, edge) in self.edges.iter().enumerate() {
            let is_ring = i < self.outer;
            match (is_ring, edge.leg_count()) {
                (true, 1) | (false, 0) => {}
                (true, _) => return Err(ConfigurationError::RingEdgeWithoutLeg { edge: i }),
                (false, _) => return Err(ConfigurationError::LegOutsideRing { edge: i }),
            }
            for &end in &edge.ends {
                if end < 0 {
                    if !legs.insert(end) {
                        return Err(ConfigurationError::DuplicateLeg { leg: end });
                    }
                } else {
                    *degree.entry(end).or_default() += 1;
                }
            }
        }

        let mut vertices: Vec<_> = degree.into_iter().collect();
        vertices.sort_unstable();
        if let Some(&(vertex, degree)) = vertices.iter().find(|&&(_, d)| d > 3) {
            return Err(ConfigurationError::DegreeTooHigh { vertex, degree });
        }
        Ok(())
    }
}
