// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Trust Network Aggregation
//
// Cross-round fold over round results. Accumulation is commutative, so
// aggregators built from disjoint sets of rounds can be merged in any order.

use std::collections::BTreeMap;

use crate::types::{LeaderboardEntry, RoundResult, TrustEdge, UserId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkAggregator {
    /// (from, to) -> delegation count.
    trust_edges: BTreeMap<(UserId, UserId), u32>,
    /// user -> round number -> total score.
    ledger: BTreeMap<UserId, BTreeMap<u32, f64>>,
}

impl NetworkAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate of a single round.
    pub fn from_round(round: &RoundResult) -> Self {
        let mut agg = Self::new();
        agg.record_round(round);
        agg
    }

    /// Fold one round's delegation edges and totals into the running state.
    pub fn record_round(&mut self, round: &RoundResult) {
        for (from, to) in round.delegation_graph.edges() {
            *self
                .trust_edges
                .entry((from.clone(), to.clone()))
                .or_insert(0) += 1;
        }
        for (user, breakdown) in &round.scores {
            self.ledger
                .entry(user.clone())
                .or_default()
                .insert(round.round_number, breakdown.total_score);
        }
    }

    /// Combine with an aggregate built from other rounds.
    pub fn merge(&mut self, other: NetworkAggregator) {
        for (pair, count) in other.trust_edges {
            *self.trust_edges.entry(pair).or_insert(0) += count;
        }
        for (user, rounds) in other.ledger {
            self.ledger.entry(user).or_default().extend(rounds);
        }
    }

    pub fn edge_count(&self, from: &UserId, to: &UserId) -> u32 {
        self.trust_edges
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(0)
    }

    pub fn trust_edges(&self) -> Vec<TrustEdge> {
        self.trust_edges
            .iter()
            .map(|((from, to), &count)| TrustEdge { from: from.clone(), to: to.clone(), count })
            .collect()
    }

    /// Users ranked by delegations received.
    pub fn trust_received(&self) -> Vec<(UserId, u32)> {
        rank_counts(self.trust_edges.iter().map(|((_, to), &c)| (to, c)))
    }

    /// Users ranked by delegations given.
    pub fn trust_given(&self) -> Vec<(UserId, u32)> {
        rank_counts(self.trust_edges.iter().map(|((from, _), &c)| (from, c)))
    }

    /// Directed pairs ranked by count.
    pub fn strongest_pairs(&self) -> Vec<TrustEdge> {
        let mut pairs = self.trust_edges();
        // Stable sort keeps (from, to) order among equal counts.
        pairs.sort_by(|a, b| b.count.cmp(&a.count));
        pairs
    }

    pub fn user_scores(&self, user: &UserId) -> Option<&BTreeMap<u32, f64>> {
        self.ledger.get(user)
    }

    pub fn user_total(&self, user: &UserId) -> f64 {
        self.ledger
            .get(user)
            .map(|rounds| rounds.values().sum())
            .unwrap_or(0.0)
    }

    pub fn rounds_played(&self, user: &UserId) -> u32 {
        self.ledger.get(user).map_or(0, |rounds| rounds.len() as u32)
    }

    /// Users ranked by summed total score; only users with at least one round.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .ledger
            .iter()
            .filter(|(_, rounds)| !rounds.is_empty())
            .map(|(user, rounds)| {
                let total_score: f64 = rounds.values().sum();
                let rounds_played = rounds.len() as u32;
                LeaderboardEntry {
                    user_id: user.clone(),
                    total_score,
                    rounds_played,
                    average_score: total_score / rounds_played as f64,
                }
            })
            .collect();
        entries.sort_by(|a, b| {
            b.total_score
                .total_cmp(&a.total_score)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        entries
    }
}

fn rank_counts<'a>(counts: impl Iterator<Item = (&'a UserId, u32)>) -> Vec<(UserId, u32)> {
    let mut totals: BTreeMap<&UserId, u32> = BTreeMap::new();
    for (user, c) in counts {
        *totals.entry(user).or_insert(0) += c;
    }
    let mut ranked: Vec<(UserId, u32)> = totals
        .into_iter()
        .map(|(u, c)| (u.clone(), c))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::analyze_round;
    use crate::types::{GameParams, Round, Submission};

    const PARAMS: GameParams = GameParams { lambda: 0.5, beta: 1.0, gamma: 2.0 };

    fn round(id: &str, number: u32, subs: &[Submission]) -> RoundResult {
        let r = Round {
            id: id.to_string(),
            round_number: number,
            stage: 1,
            domain: None,
        };
        analyze_round(PARAMS, &r, subs)
    }

    fn u(s: &str) -> UserId {
        UserId::from(s)
    }

    fn sample_rounds() -> Vec<RoundResult> {
        vec![
            round("r1", 1, &[
                Submission::solve("r1", "a", true),
                Submission::delegate("r1", "b", "a"),
                Submission::delegate("r1", "c", "a"),
            ]),
            round("r2", 2, &[
                Submission::solve("r2", "c", true),
                Submission::delegate("r2", "b", "a"),
                Submission::delegate("r2", "a", "b"),
            ]),
            round("r3", 3, &[Submission::pass("r3", "d")]),
        ]
    }

    #[test]
    fn test_edges_counted_per_delegation() {
        let mut agg = NetworkAggregator::new();
        for r in sample_rounds() {
            agg.record_round(&r);
        }
        assert_eq!(agg.edge_count(&u("b"), &u("a")), 2);
        assert_eq!(agg.edge_count(&u("c"), &u("a")), 1);
        assert_eq!(agg.edge_count(&u("a"), &u("b")), 1);
        assert_eq!(agg.edge_count(&u("a"), &u("c")), 0);

        let received = agg.trust_received();
        assert_eq!(received[0], (u("a"), 3));
        assert_eq!(received[1], (u("b"), 1));

        let given = agg.trust_given();
        assert_eq!(given[0], (u("b"), 2));

        let pairs = agg.strongest_pairs();
        assert_eq!(pairs[0], TrustEdge { from: u("b"), to: u("a"), count: 2 });
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_leaderboard_sums_ledger() {
        let rounds = sample_rounds();
        let mut agg = NetworkAggregator::new();
        for r in &rounds {
            agg.record_round(r);
        }

        let board = agg.leaderboard();
        assert_eq!(board.len(), 4);
        for entry in &board {
            let expected: f64 = rounds
                .iter()
                .filter_map(|r| r.scores.get(&entry.user_id))
                .map(|s| s.total_score)
                .sum();
            assert_eq!(entry.total_score, expected);
            assert_eq!(entry.total_score, agg.user_total(&entry.user_id));
        }

        let a = board.iter().find(|e| e.user_id == u("a")).unwrap();
        // r1: 1 + 2β; r2: 0 + β − γ
        assert_eq!(a.total_score, 3.0 + -1.0);
        assert_eq!(a.rounds_played, 2);
        assert_eq!(a.average_score, 1.0);

        assert!(board.iter().all(|e| e.user_id != u("ghost")));
        assert_eq!(agg.rounds_played(&u("ghost")), 0);
    }

    #[test]
    fn test_leaderboard_ordering() {
        let mut agg = NetworkAggregator::new();
        for r in sample_rounds() {
            agg.record_round(&r);
        }
        let board = agg.leaderboard();
        for pair in board.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
        }
    }

    #[test]
    fn test_merge_matches_sequential_fold() {
        let rounds = sample_rounds();
        let mut sequential = NetworkAggregator::new();
        for r in &rounds {
            sequential.record_round(r);
        }

        let mut merged = NetworkAggregator::from_round(&rounds[2]);
        merged.merge(NetworkAggregator::from_round(&rounds[0]));
        merged.merge(NetworkAggregator::from_round(&rounds[1]));

        assert_eq!(merged, sequential);
    }

    #[test]
    fn test_empty_round_adds_nothing() {
        let empty = RoundResult::empty(&Round {
            id: "r9".into(),
            round_number: 9,
            stage: 2,
            domain: None,
        });
        let agg = NetworkAggregator::from_round(&empty);
        assert!(agg.leaderboard().is_empty());
        assert!(agg.trust_edges().is_empty());
    }
}
