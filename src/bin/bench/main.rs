// Trust Gambit Benchmark Runner - synthetic games through the replay engine
// Monte Carlo (N=30), seedable PRNG, scoring invariants re-checked per run
//
// Usage:
//   cargo run --release --bin bench                     # Run all scenarios (30 runs each)
//   cargo run --release --bin bench -- --runs 5         # Quick mode (5 runs each)
//   cargo run --release --bin bench -- CYCLE_STORM      # Filter by name
//   cargo run --release --bin bench -- --seed 42        # Custom base seed
//   cargo run --release --bin bench -- --users 5000     # Scale every scenario

mod metrics;
mod monte_carlo;
mod report;
mod scenarios;
mod synthetic;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

use report::*;
use scenarios::*;

#[derive(Parser)]
#[command(name = "bench", about = "Replay synthetic Trust Gambit games and check scoring invariants")]
struct Cli {
    /// Runs per scenario
    #[arg(long, default_value_t = 30)]
    runs: usize,

    /// Base seed; run i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Override the player count of every scenario
    #[arg(long)]
    users: Option<u32>,

    /// Override the round count of every scenario
    #[arg(long)]
    rounds: Option<u32>,

    /// Only run scenarios whose name, label or category contains this
    filter: Option<String>,
}

fn main() -> Result<()> {
    // Per-round engine logs would swamp the table; keep them at warn unless asked.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("trust_gambit_engine=warn".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut all_scenarios = scenarios();
    for s in &mut all_scenarios {
        if let Some(users) = cli.users {
            s.profile.users = users.max(1);
        }
        if let Some(rounds) = cli.rounds {
            s.profile.rounds = rounds;
        }
    }

    let to_run: Vec<&Scenario> = match &cli.filter {
        Some(f) => {
            let f_lower = f.to_lowercase();
            all_scenarios.iter()
                .filter(|s| s.name.to_lowercase().contains(&f_lower)
                          || s.label.to_lowercase().contains(&f_lower)
                          || s.category.to_lowercase().contains(&f_lower))
                .collect()
        }
        None => all_scenarios.iter().collect(),
    };

    if to_run.is_empty() {
        bail!("no scenarios match filter: {:?}", cli.filter);
    }

    println!("\n  Trust Gambit Benchmark Runner v{}", env!("CARGO_PKG_VERSION"));
    println!("  PRNG: ChaCha8Rng | Runs/scenario: {} | Base seed: {}", cli.runs, cli.seed);
    println!("  Running {} scenario(s)...\n", to_run.len());
    println!("  {:<36} {:>5} {:>10} {:>11} {:>10} {:>10}",
        "Scenario", "Pass%", "Cyc/Rnd", "Resolved%", "MeanScore", "Time");
    println!("  {}", "-".repeat(88));

    let suite_start = Instant::now();
    let mut mc_reports = Vec::new();

    for scenario in &to_run {
        info!(scenario = scenario.name, runs = cli.runs, "running scenario");
        let report = monte_carlo::run_monte_carlo(scenario, cli.runs, cli.seed);

        let pass_pct = report.pass_rate * 100.0;
        let status = if report.pass_rate == 1.0 { "PASS" } else { "FAIL" };

        println!("  {:<36} {:>4}% {:>5.2}±{:<4.2} {:>10.1}% {:>10.3} {:>7.1}ms  {}",
            report.label,
            pass_pct as u32,
            report.cycles_per_round.mean, report.cycles_per_round.half_width(),
            report.resolved_ratio.mean * 100.0,
            report.mean_total_score.mean,
            report.elapsed_ms.mean,
            status,
        );

        mc_reports.push(report);
    }

    let suite_elapsed = suite_start.elapsed();

    // ─── Summary ────────────────────────────────────────────────────────

    let total = mc_reports.len();
    let passed = mc_reports.iter().filter(|r| r.pass_rate == 1.0).count();
    let failed = total - passed;

    println!("  {}", "-".repeat(88));
    println!("  Total: {}  Passed: {}  Failed: {}  Suite time: {:.1}s\n",
        total, passed, failed, suite_elapsed.as_secs_f64());

    // ─── Write JSON Report ──────────────────────────────────────────────

    let ts = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let timestamp = format!("{}", ts);

    let report = BenchReport {
        timestamp: timestamp.clone(),
        version: env!("CARGO_PKG_VERSION"),
        prng: "ChaCha8Rng",
        n_runs_per_scenario: cli.runs,
        summary: Summary {
            total,
            passed,
            failed,
            pass_rate: passed as f64 / total as f64,
        },
        scenarios: mc_reports,
    };

    let dir = std::path::Path::new("benchmark-results");
    std::fs::create_dir_all(dir).context("creating benchmark-results/")?;
    let path = dir.join(format!("bench-{}.json", timestamp));
    let json = serde_json::to_string_pretty(&report).context("serializing benchmark report")?;
    std::fs::write(&path, &json)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("  Results saved to: {}\n", path.display());

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
