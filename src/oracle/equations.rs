// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chain equations of a set of ring colorings.
//!
//! For a member `pc` and an excluded color, each matching whose swaps all
//! stay inside the set is a possible arrangement of Kempe chains. Weighting
//! colorings and chain arrangements, the weight of `pc` must equal the total
//! weight of its admissible arrangements:
//!
//! ```text
//! 1111 = 0o12o3 + 0o31o2
//! ```
//!
//! A chain is named by its pairs, each written `a`, then `o` if both ends have
//! the same color and `e` otherwise, then `b`. The name does not mention the
//! excluded color, so arrangements shared between colorings become the same
//! variable.

use crate::coloring::Color;
use crate::consistency::consistent_matchings;
use crate::matching::Matching;
use crate::precoloring::{Precoloring, PrecoloringSet};
use std::collections::BTreeSet;
use std::fmt;

/// Name of a chain arrangement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chain(String);

impl Chain {
    pub fn new(pc: &Precoloring, matching: &Matching) -> Self {
        let name = matching
            .pairs()
            .iter()
            .map(|&(a, b)| {
                let parity = if pc.get(a) == pc.get(b) { 'o' } else { 'e' };
                format!("{}{}{}", a, parity, b)
            })
            .collect();
        Chain(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `precoloring = chain + chain + ...` for one excluded color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEquation {
    pub precoloring: Precoloring,
    pub excluded: Color,
    pub chains: Vec<Chain>,
}

impl fmt::Display for ChainEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =", self.precoloring)?;
        for (i, chain) in self.chains.iter().enumerate() {
            let sep = if i == 0 { " " } else { " + " };
            write!(f, "{}{}", sep, chain)?;
        }
        Ok(())
    }
}

/// All chain equations of a required set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainSystem {
    required: PrecoloringSet,
    equations: Vec<ChainEquation>,
}

impl ChainSystem {
    /// Equations for every member and excluded color, in set order.
    ///
    /// A member with at most two positions outside the excluded color yields
    /// no equation for that color.
    pub fn build(required: &PrecoloringSet) -> Self {
        let mut equations = Vec::new();
        for pc in required {
            for excluded in Color::ALL {
                let Some(matchings) = consistent_matchings(required, pc, excluded) else {
                    continue;
                };
                equations.push(ChainEquation {
                    precoloring: pc.clone(),
                    excluded,
                    chains: matchings.iter().map(|m| Chain::new(pc, m)).collect(),
                });
            }
        }
        Self {
            required: required.clone(),
            equations,
        }
    }

    pub fn required(&self) -> &PrecoloringSet {
        &self.required
    }

    pub fn equations(&self) -> &[ChainEquation] {
        &self.equations
    }

    /// Distinct chain names, in first-appearance order.
    pub fn chains(&self) -> Vec<&Chain> {
        let mut seen = BTreeSet::new();
        self.equations
            .iter()
            .flat_map(|eq| eq.chains.iter())
            .filter(|chain| seen.insert(*chain))
            .collect()
    }

    /// No equations: any positive weighting of the members is a solution.
    pub fn is_unconstrained(&self) -> bool {
        self.equations.is_empty()
    }
}

impl fmt::Display for ChainSystem {
    /// One equation per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for eq in &self.equations {
            writeln!(f, "{}", eq)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::non_crossing_matchings;
    use crate::precoloring::PrecoloringEnumerator;

    fn pc(s: &str) -> Precoloring {
        s.parse().unwrap()
    }

    #[test]
    fn test_chain_name() {
        let ms = non_crossing_matchings(&[0, 1, 2, 3]);
        assert_eq!(Chain::new(&pc("1122"), &ms[0]).as_str(), "0o12o3");
        assert_eq!(Chain::new(&pc("1122"), &ms[1]).as_str(), "0e31e2");
    }

    #[test]
    fn test_ring_of_four_system() {
        let all = PrecoloringEnumerator::new(4).parity_valid();
        let system = ChainSystem::build(&all);
        let lines: Vec<String> = system.equations().iter().map(|eq| eq.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "1111 = 0o12o3 + 0o31o2",
                "1111 = 0o12o3 + 0o31o2",
                "1122 = 0o12o3 + 0e31e2",
                "1212 = 0e12e3 + 0e31e2",
                "1221 = 0e12e3 + 0o31o2",
            ]
        );
        assert_eq!(system.chains().len(), 4);
        assert!(!system.is_unconstrained());
    }

    #[test]
    fn test_missing_partner_gives_empty_equation() {
        let only: PrecoloringSet = [pc("1111")].into_iter().collect();
        let system = ChainSystem::build(&only);
        assert_eq!(system.equations().len(), 2);
        assert!(system.equations().iter().all(|eq| eq.chains.is_empty()));
        assert_eq!(system.to_string(), "1111 =\n1111 =\n");
    }

    #[test]
    fn test_empty_set() {
        let system = ChainSystem::build(&PrecoloringSet::new());
        assert!(system.is_unconstrained());
        assert_eq!(system.to_string(), "");
    }
}
