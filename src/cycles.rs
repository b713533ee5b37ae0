// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Cycle Detection
//
// Depth-first search over a functional graph, written as an explicit walk.
// Out-degree ≤ 1 means each start node follows a single chain, so the
// recursion stack of the classic algorithm reduces to the current path plus
// an index of where each node sits on it.

use std::collections::{HashMap, HashSet};

use crate::graph::DelegationGraph;
use crate::types::{Cycle, UserId};

/// Find every simple cycle in `graph`.
///
/// Each cycle starts at the node where the walk first closed it. A
/// self-delegation is a cycle of length one. Nodes already consumed by an
/// earlier walk are never re-examined, so every cycle is reported once.
pub fn detect_cycles(graph: &DelegationGraph) -> Vec<Cycle> {
    let mut cycles = Vec::new();
    let mut visited: HashSet<&UserId> = HashSet::new();

    for start in graph.delegators() {
        if visited.contains(start) {
            continue;
        }

        let mut path: Vec<&UserId> = Vec::new();
        let mut on_path: HashMap<&UserId, usize> = HashMap::new();
        let mut node = start;

        loop {
            if let Some(&pos) = on_path.get(node) {
                cycles.push(path[pos..].iter().map(|&n| n.clone()).collect());
                break;
            }
            if !visited.insert(node) {
                break;
            }
            on_path.insert(node, path.len());
            path.push(node);

            match graph.target(node) {
                Some(next) => node = next,
                None => break,
            }
        }
    }

    cycles
}

/// Flattened membership of all cycles.
pub fn cycle_members(cycles: &[Cycle]) -> HashSet<UserId> {
    cycles.iter().flatten().cloned().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
