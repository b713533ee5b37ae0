// Replay Report - human-readable console output
// Round summaries, trust network rankings, final leaderboard

use trust_gambit_engine::*;

const TOP_ROUND_SCORERS: usize = 5;
const TOP_NETWORK_ENTRIES: usize = 10;
const TOP_LEADERBOARD: usize = 20;
const MAX_CYCLES_SHOWN: usize = 3;

fn rule(ch: char) -> String {
    ch.to_string().repeat(80)
}

pub fn print_header(sim: &TrustSimulation) {
    let game = &sim.dataset().game;
    let params = sim.params();
    println!("\n{}", rule('='));
    println!("  TRUST GAMBIT SIMULATION");
    println!("{}", rule('='));
    println!("  Game: {}", game.name);
    println!("  Status: {}", game.status);
    if let Some(stage) = game.current_stage {
        println!("  Current Stage: {}", stage);
    }
    println!("  Parameters: λ={}, β={}, γ={}", params.lambda, params.beta, params.gamma);
    if let Some(stage) = sim.stage_filter() {
        println!("  Filtering to Stage {} rounds only", stage);
    }
    println!("{}\n", rule('='));
}

pub fn print_round(sim: &TrustSimulation, round: &RoundResult) {
    let ds = sim.dataset();
    println!("\n{}", rule('─'));
    println!("  Round {} (Stage {}) - {}",
        round.round_number, round.stage, round.domain.as_deref().unwrap_or("-"));
    println!("{}", rule('─'));

    if round.is_empty() {
        println!("  No submissions found for round {}", round.round_number);
        return;
    }

    println!("  Total Submissions: {}", round.submissions);
    println!("    SOLVE: {}, DELEGATE: {}, PASS: {}", round.solves, round.delegations, round.passes);
    println!("  Correct Solvers: {}", round.solvers);

    if round.cycles > 0 {
        println!("  Delegation Cycles Detected: {}", round.cycles);
        for (i, cycle) in round.cycle_members.iter().take(MAX_CYCLES_SHOWN).enumerate() {
            let names: Vec<String> = cycle.iter().map(|u| ds.user_name(u)).collect();
            let first = names.first().cloned().unwrap_or_default();
            println!("    Cycle {}: {} → {}", i + 1, names.join(" → "), first);
        }
    }

    println!("\n  Top {} Scorers:", TOP_ROUND_SCORERS);
    for (i, (user, s)) in round.ranked_scores().into_iter().take(TOP_ROUND_SCORERS).enumerate() {
        println!("    {}. {}: {:.2} (solve: {:.2}, delegate: {:.2}, trust: {:.2})",
            i + 1, ds.user_name(user), s.total_score, s.solve_score, s.delegate_score, s.trust_score);
    }
}

pub fn print_network(sim: &TrustSimulation) {
    let ds = sim.dataset();
    let network = sim.network();

    println!("\n{}", rule('='));
    println!("  TRUST NETWORK ANALYSIS");
    println!("{}\n", rule('='));

    println!("  Most Trusted Users (received most delegations):");
    for (i, (user, count)) in network.trust_received().iter().take(TOP_NETWORK_ENTRIES).enumerate() {
        println!("    {}. {}: {} delegations received", i + 1, ds.user_name(user), count);
    }

    println!("\n  Most Trusting Users (gave most delegations):");
    for (i, (user, count)) in network.trust_given().iter().take(TOP_NETWORK_ENTRIES).enumerate() {
        println!("    {}. {}: {} delegations given", i + 1, ds.user_name(user), count);
    }

    println!("\n  Strongest Trust Pairs:");
    for (i, edge) in network.strongest_pairs().iter().take(TOP_NETWORK_ENTRIES).enumerate() {
        println!("    {}. {} → {}: {} times",
            i + 1, ds.user_name(&edge.from), ds.user_name(&edge.to), edge.count);
    }
}

pub fn print_leaderboard(sim: &TrustSimulation) {
    let ds = sim.dataset();

    println!("\n{}", rule('='));
    println!("  FINAL LEADERBOARD");
    println!("{}\n", rule('='));

    println!("  {:<6} {:<30} {:<15} {:<10} {}", "Rank", "Name", "Total Score", "Rounds", "Avg/Round");
    println!("  {} {} {} {} {}", "─".repeat(6), "─".repeat(30), "─".repeat(15), "─".repeat(10), "─".repeat(10));

    for (i, entry) in sim.network().leaderboard().iter().take(TOP_LEADERBOARD).enumerate() {
        println!("  {:<6} {:<30} {:<15.2} {:<10} {:.2}",
            i + 1, ds.user_name(&entry.user_id), entry.total_score, entry.rounds_played, entry.average_score);
    }
}
