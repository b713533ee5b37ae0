// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Round Scoring
//
//   Score(u) = λ^d · I(reaches solver) + β · |delegators(u)| − γ · I(u in cycle)
//
// d = 0 for a direct correct solve, otherwise the hop count of u's chain.

use std::collections::{BTreeMap, BTreeSet};

use crate::cycles::cycle_members;
use crate::graph::DelegationGraph;
use crate::resolver::resolve_solver_path;
use crate::types::{Action, Cycle, GameParams, ScoreBreakdown, Submission, UserId};

/// Stateless scorer holding the game constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEngine {
    pub params: GameParams,
}

impl ScoreEngine {
    pub fn new(params: GameParams) -> Self {
        Self { params }
    }

    /// Credit for reaching a solver `distance` hops away. `λ^0 = 1` for any λ.
    pub fn chain_credit(&self, distance: u32) -> f64 {
        if distance == 0 {
            1.0
        } else {
            self.params.lambda.powi(distance as i32)
        }
    }

    /// Score every submitting user of one round.
    ///
    /// Never fails: passes, dead ends and cycles all map to zero terms.
    pub fn score_round(
        &self,
        submissions: &[Submission],
        graph: &DelegationGraph,
        solvers: &BTreeSet<UserId>,
        cycles: &[Cycle],
    ) -> BTreeMap<UserId, ScoreBreakdown> {
        let in_cycle = cycle_members(cycles);
        let delegators = graph.in_degrees();
        let mut scores = BTreeMap::new();

        for sub in submissions {
            let user = &sub.user_id;

            let (solve_score, distance_from_solver) = if sub.solved_correctly() {
                (1.0, Some(0))
            } else if sub.action == Action::Delegate {
                match resolve_solver_path(user, graph, solvers).distance() {
                    Some(d) => (self.chain_credit(d), Some(d)),
                    None => (0.0, None),
                }
            } else {
                (0.0, None)
            };

            let delegators_count = delegators.get(user).copied().unwrap_or(0);
            let delegate_score = self.params.beta * delegators_count as f64;

            let member = in_cycle.contains(user);
            let trust_score = if member { -self.params.gamma } else { 0.0 };

            scores.insert(
                user.clone(),
                ScoreBreakdown {
                    solve_score,
                    delegate_score,
                    trust_score,
                    total_score: solve_score + delegate_score + trust_score,
                    in_cycle: member,
                    distance_from_solver,
                    delegators_count,
                    action: sub.action,
                },
            );
        }

        scores
    }
}

/// Users who answered their own `SOLVE` correctly.
pub fn correct_solvers(submissions: &[Submission]) -> BTreeSet<UserId> {
    submissions
        .iter()
        .filter(|s| s.solved_correctly())
        .map(|s| s.user_id.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
