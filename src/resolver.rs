// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Solver Path Resolution

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::graph::DelegationGraph;
use crate::types::UserId;

/// Outcome of following a delegation chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainResolution {
    /// The chain reached a correct solver after `distance` hops.
    Resolved { solver: UserId, distance: u32 },
    /// The chain ended at a user who did not solve correctly.
    DeadEnd,
    /// The chain looped back on itself before reaching a solver.
    Cyclic,
}

impl ChainResolution {
    pub fn distance(&self) -> Option<u32> {
        match self {
            Self::Resolved { distance, .. } => Some(*distance),
            _ => None,
        }
    }

    pub fn solver(&self) -> Option<&UserId> {
        match self {
            Self::Resolved { solver, .. } => Some(solver),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}

/// Follow `start`'s delegation chain to the nearest correct solver.
///
/// The walk is bounded by the number of delegators: a repeated node ends it
/// as `Cyclic`. A start node with no outgoing edge is checked against the
/// solver set at distance 0.
pub fn resolve_solver_path(
    start: &UserId,
    graph: &DelegationGraph,
    solvers: &BTreeSet<UserId>,
) -> ChainResolution {
    let mut visited: HashSet<&UserId> = HashSet::new();
    visited.insert(start);
    let mut current = start;
    let mut distance: u32 = 0;

    while let Some(next) = graph.target(current) {
        if !visited.insert(next) {
            return ChainResolution::Cyclic;
        }
        current = next;
        distance += 1;
        if solvers.contains(current) {
            return ChainResolution::Resolved { solver: current.clone(), distance };
        }
    }

    if solvers.contains(current) {
        ChainResolution::Resolved { solver: current.clone(), distance }
    } else {
        ChainResolution::DeadEnd
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &str)]) -> DelegationGraph {
        edges
            .iter()
            .map(|&(a, b)| (UserId::from(a), UserId::from(b)))
            .collect()
    }

    fn solvers(names: &[&str]) -> BTreeSet<UserId> {
        names.iter().map(|&n| UserId::from(n)).collect()
    }

    #[test]
    fn test_resolves_with_hop_count() {
        let g = graph(&[("c", "b"), ("b", "a")]);
        let s = solvers(&["a"]);

        assert_eq!(
            resolve_solver_path(&UserId::from("b"), &g, &s),
            ChainResolution::Resolved { solver: UserId::from("a"), distance: 1 }
        );
        assert_eq!(
            resolve_solver_path(&UserId::from("c"), &g, &s),
            ChainResolution::Resolved { solver: UserId::from("a"), distance: 2 }
        );
    }

    #[test]
    fn test_dead_end_at_non_solver() {
        // "a" passed or answered wrong.
        let g = graph(&[("b", "a")]);
        assert_eq!(
            resolve_solver_path(&UserId::from("b"), &g, &solvers(&[])),
            ChainResolution::DeadEnd
        );
    }

    #[test]
    fn test_cycle_is_unresolved() {
        let g = graph(&[("a", "b"), ("b", "a")]);
        let res = resolve_solver_path(&UserId::from("a"), &g, &solvers(&["z"]));
        assert_eq!(res, ChainResolution::Cyclic);
        assert_eq!(res.distance(), None);
    }

    #[test]
    fn test_self_delegation_is_cyclic() {
        let g = graph(&[("a", "a")]);
        assert_eq!(
            resolve_solver_path(&UserId::from("a"), &g, &solvers(&[])),
            ChainResolution::Cyclic
        );
    }

    #[test]
    fn test_tail_into_cycle_is_cyclic() {
        let g = graph(&[("x", "a"), ("a", "b"), ("b", "a")]);
        assert_eq!(
            resolve_solver_path(&UserId::from("x"), &g, &solvers(&[])),
            ChainResolution::Cyclic
        );
    }

    #[test]
    fn test_direct_solver_without_edge_is_distance_zero() {
        let res = resolve_solver_path(&UserId::from("a"), &DelegationGraph::default(), &solvers(&["a"]));
        assert_eq!(res.distance(), Some(0));
        assert_eq!(res.solver(), Some(&UserId::from("a")));
    }

    #[test]
    fn test_deterministic() {
        let g = graph(&[("d", "c"), ("c", "b"), ("b", "a"), ("x", "y"), ("y", "x")]);
        let s = solvers(&["a"]);
        for start in ["d", "c", "x", "q"] {
            let first = resolve_solver_path(&UserId::from(start), &g, &s);
            for _ in 0..10 {
                assert_eq!(resolve_solver_path(&UserId::from(start), &g, &s), first);
            }
        }
    }
}
