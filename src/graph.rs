// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Delegation Graph

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{Submission, UserId};

/// Per-round functional graph: delegator -> delegate target.
///
/// Every node has at most one outgoing edge, which holds because a user
/// submits at most once per round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DelegationGraph {
    edges: BTreeMap<UserId, UserId>,
}

impl DelegationGraph {
    /// Build the graph from one round's submissions.
    ///
    /// Only `DELEGATE` submissions with a target contribute. `SOLVE`, `PASS`
    /// and target-less delegations are skipped without error.
    pub fn from_submissions(submissions: &[Submission]) -> Self {
        let mut edges = BTreeMap::new();
        for sub in submissions {
            if let Some(target) = sub.delegation_target() {
                edges.insert(sub.user_id.clone(), target.clone());
            }
        }
        Self { edges }
    }

    pub fn target(&self, delegator: &UserId) -> Option<&UserId> {
        self.edges.get(delegator)
    }

    pub fn contains(&self, delegator: &UserId) -> bool {
        self.edges.contains_key(delegator)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Delegators in ascending id order.
    pub fn delegators(&self) -> impl Iterator<Item = &UserId> {
        self.edges.keys()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&UserId, &UserId)> {
        self.edges.iter()
    }

    /// Number of delegators pointing at each target.
    pub fn in_degrees(&self) -> BTreeMap<UserId, u32> {
        let mut counts: BTreeMap<UserId, u32> = BTreeMap::new();
        for target in self.edges.values() {
            *counts.entry(target.clone()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<(UserId, UserId)> for DelegationGraph {
    fn from_iter<I: IntoIterator<Item = (UserId, UserId)>>(iter: I) -> Self {
        Self { edges: iter.into_iter().collect() }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
