// Monte Carlo Infrastructure - N synthetic games per scenario
// Each run uses seed base+i, so any failing run can be replayed exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;
use trust_gambit_engine::*;

use crate::metrics::{check_invariants, GameMetrics};
use crate::report::*;
use crate::scenarios::Scenario;
use crate::synthetic::GameGenerator;

/// Generate and replay one synthetic game.
pub fn run_single(scenario: &Scenario, seed: u64) -> BenchResult {
    let mut generator = GameGenerator::new(ChaCha8Rng::seed_from_u64(seed));
    let dataset = generator.generate(&scenario.profile, scenario.params);

    let start = Instant::now();
    let mut sim = TrustSimulation::from_dataset(dataset);
    sim.simulate_all_rounds();
    let elapsed = start.elapsed();

    let metrics = GameMetrics::from_simulation(&sim);
    let invariants = check_invariants(&sim);
    let elapsed_secs = elapsed.as_secs_f64().max(1e-6);

    BenchResult {
        scenario: scenario.name.to_string(),
        seed,
        pass: invariants.holds(),
        users: scenario.profile.users,
        rounds: metrics.rounds,
        submissions: generator.submission_count,
        delegations: metrics.delegations,
        cycles: metrics.cycles,
        cycles_per_round: metrics.cycles_per_round(),
        cycle_members: metrics.cycle_members,
        resolved_ratio: metrics.resolved_ratio(),
        max_chain_distance: metrics.max_chain_distance,
        mean_total_score: metrics.mean_total_score,
        overlapping_cycles: invariants.overlapping_cycles,
        formula_mismatches: invariants.formula_mismatches,
        leaderboard_mismatches: invariants.leaderboard_mismatches,
        elapsed_us: elapsed.as_micros(),
        submissions_per_sec: metrics.submissions as f64 / elapsed_secs,
    }
}

/// Run Monte Carlo: N runs of a scenario, aggregate stats.
pub fn run_monte_carlo(scenario: &Scenario, n_runs: usize, base_seed: u64) -> MonteCarloReport {
    let results: Vec<BenchResult> = (0..n_runs)
        .map(|i| run_single(scenario, base_seed + i as u64))
        .collect();
    aggregate(scenario, results)
}

fn aggregate(scenario: &Scenario, results: Vec<BenchResult>) -> MonteCarloReport {
    let n = results.len();
    let passed = results.iter().filter(|r| r.pass).count();
    let sample = |f: fn(&BenchResult) -> f64| -> Stats {
        Stats::from_samples(&results.iter().map(f).collect::<Vec<_>>())
    };

    MonteCarloReport {
        scenario_name: scenario.name.to_string(),
        label: scenario.label.to_string(),
        category: scenario.category.to_string(),
        n_runs: n,
        pass_rate: if n > 0 { passed as f64 / n as f64 } else { 0.0 },
        elapsed_ms: sample(|r| r.elapsed_us as f64 / 1000.0),
        submissions_per_sec: sample(|r| r.submissions_per_sec),
        cycles_per_round: sample(|r| r.cycles_per_round),
        resolved_ratio: sample(|r| r.resolved_ratio),
        mean_total_score: sample(|r| r.mean_total_score),
        individual_runs: results,
    }
}
