// Per-Run Metric Trackers - chain resolution, cycle load, engine invariants
// Every replayed game is re-checked against the scoring identities.

use std::collections::HashSet;
use trust_gambit_engine::*;

const EPS: f64 = 1e-9;

/// Aggregate shape of one replayed game.
#[derive(Debug, Clone, Default)]
pub struct GameMetrics {
    pub rounds: u32,
    pub submissions: u32,
    pub delegations: u32,
    pub resolved_chains: u32,
    pub cycles: u32,
    pub cycle_members: u32,
    pub max_chain_distance: u32,
    pub mean_total_score: f64,
}

impl GameMetrics {
    pub fn from_simulation(sim: &TrustSimulation) -> Self {
        let mut m = GameMetrics::default();
        let mut score_sum = 0.0;
        let mut scored = 0u32;

        for round in sim.round_results().values() {
            m.rounds += 1;
            m.submissions += round.submissions;
            m.delegations += round.delegations;
            m.cycles += round.cycles;
            m.cycle_members += round.cycle_members.iter().map(|c| c.len() as u32).sum::<u32>();
            for s in round.scores.values() {
                if s.action == Action::Delegate {
                    if let Some(d) = s.distance_from_solver {
                        m.resolved_chains += 1;
                        m.max_chain_distance = m.max_chain_distance.max(d);
                    }
                }
                score_sum += s.total_score;
                scored += 1;
            }
        }
        m.mean_total_score = if scored > 0 { score_sum / scored as f64 } else { 0.0 };
        m
    }

    /// Fraction of delegations whose chain reached a correct solver.
    pub fn resolved_ratio(&self) -> f64 {
        if self.delegations == 0 { return 0.0; }
        self.resolved_chains as f64 / self.delegations as f64
    }

    pub fn cycles_per_round(&self) -> f64 {
        if self.rounds == 0 { return 0.0; }
        self.cycles as f64 / self.rounds as f64
    }
}

/// Count of identity violations found in one replay.
#[derive(Debug, Clone, Default)]
pub struct InvariantReport {
    pub overlapping_cycles: u32,
    pub formula_mismatches: u32,
    pub leaderboard_mismatches: u32,
}

impl InvariantReport {
    pub fn holds(&self) -> bool {
        self.overlapping_cycles == 0
            && self.formula_mismatches == 0
            && self.leaderboard_mismatches == 0
    }
}

pub fn check_invariants(sim: &TrustSimulation) -> InvariantReport {
    let params = sim.params();
    let mut report = InvariantReport::default();

    for round in sim.round_results().values() {
        let mut members = HashSet::new();
        for cycle in &round.cycle_members {
            for u in cycle {
                if !members.insert(u) {
                    report.overlapping_cycles += 1;
                }
            }
        }

        let in_degrees = round.delegation_graph.in_degrees();
        for (user, s) in &round.scores {
            let expected_delegate = params.beta * in_degrees.get(user).copied().unwrap_or(0) as f64;
            let expected_trust = if members.contains(user) { -params.gamma } else { 0.0 };
            let expected_total = s.solve_score + s.delegate_score + s.trust_score;
            if (s.delegate_score - expected_delegate).abs() > EPS
                || (s.trust_score - expected_trust).abs() > EPS
                || (s.total_score - expected_total).abs() > EPS
                || s.in_cycle != members.contains(user)
            {
                report.formula_mismatches += 1;
            }
        }
    }

    for entry in sim.network().leaderboard() {
        let ledger_sum: f64 = sim
            .round_results()
            .values()
            .filter_map(|r| r.scores.get(&entry.user_id))
            .map(|s| s.total_score)
            .sum();
        if (entry.total_score - ledger_sum).abs() > EPS {
            report.leaderboard_mismatches += 1;
        }
    }

    report
}
