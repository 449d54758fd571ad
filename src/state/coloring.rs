// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-vertex coloring state: assigned color and candidate domain.
//!
//! Every mutation goes through [`ColoringState::assign`] or
//! [`ColoringState::restrict_domain`], which record the previous value on the
//! trail before changing anything. The trail restores slots through the
//! [`TrailRestore`] implementation below.

use crate::coloring::{Color, ColorSet};
use crate::graph::VertexId;
use crate::trail::trailed::{decode_option, encode_option};
use crate::trail::{Trail, TrailRestore};

/// Which field of a vertex a trail entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
enum Slot {
    Color = 0,
    Domain = 1,
    DomainSize = 2,
}

impl Slot {
    fn from_index(index: usize) -> Self {
        match index {
            0 => Slot::Color,
            1 => Slot::Domain,
            _ => Slot::DomainSize,
        }
    }
}

const SLOTS_PER_VERTEX: usize = 3;

fn slot_id(v: VertexId, slot: Slot) -> usize {
    v * SLOTS_PER_VERTEX + slot as usize
}

/// Coloring state for every conflict vertex (Tier 2: DYNAMIC).
///
/// Invariant: `domain_sizes[v] == domains[v].len()` for every vertex. Once a
/// vertex has a color its domain is no longer consulted or restricted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoringState {
    colors: Vec<Option<Color>>,
    domains: Vec<ColorSet>,
    domain_sizes: Vec<usize>,
}

impl ColoringState {
    /// All `n` vertices unset with the full domain.
    pub fn new(n: usize) -> Self {
        Self {
            colors: vec![None; n],
            domains: vec![ColorSet::full(); n],
            domain_sizes: vec![ColorSet::full().len(); n],
        }
    }

    /// Reinitialize in place without reallocating.
    pub fn reset(&mut self) {
        self.colors.fill(None);
        self.domains.fill(ColorSet::full());
        self.domain_sizes.fill(ColorSet::full().len());
    }

    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    pub fn color(&self, v: VertexId) -> Option<Color> {
        self.colors[v]
    }

    pub fn domain(&self, v: VertexId) -> ColorSet {
        self.domains[v]
    }

    pub fn domain_size(&self, v: VertexId) -> usize {
        self.domain_sizes[v]
    }

    /// All assigned colors, or None while any vertex is unset.
    pub fn complete_coloring(&self) -> Option<Vec<Color>> {
        self.colors.iter().copied().collect()
    }

    /// Set `color[v] = c`, recording the previous color.
    pub fn assign(&mut self, trail: &mut Trail, v: VertexId, c: Color) {
        let old_value = encode_option(self.colors[v].map(Color::value));
        trail.record_change(slot_id(v, Slot::Color), old_value);
        self.colors[v] = Some(c);
    }

    /// Remove `c` from the domain of an unset vertex.
    ///
    /// No-op if `v` already has a color or `c` is not in its domain.
    pub fn restrict_domain(&mut self, trail: &mut Trail, v: VertexId, c: Color) {
        if self.colors[v].is_some() || !self.domains[v].contains(c) {
            return;
        }
        trail.record_change(slot_id(v, Slot::Domain), self.domains[v].bits());
        trail.record_change(slot_id(v, Slot::DomainSize), self.domain_sizes[v] as u64);
        self.domains[v].remove(c);
        self.domain_sizes[v] -= 1;
    }
}

impl TrailRestore for ColoringState {
    fn restore(&mut self, id: usize, old_value: u64) {
        let v = id / SLOTS_PER_VERTEX;
        match Slot::from_index(id % SLOTS_PER_VERTEX) {
            Slot::Color => self.colors[v] = decode_option(old_value).map(Color::new),
            Slot::Domain => self.domains[v] = ColorSet::from_bits(old_value),
            Slot::DomainSize => self.domain_sizes[v] = old_value as usize,
        }
    }
}
