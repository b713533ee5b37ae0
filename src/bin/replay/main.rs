// Trust Gambit Replay - score every round of an exported game
//
// Usage:
//   cargo run --release --bin replay -- export.json
//   cargo run --release --bin replay -- export.json --stage 1
//   cargo run --release --bin replay -- export.json --visualize --output net.json
//   cargo run --release --bin replay -- export.json --lambda 0.8   # what-if replay

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trust_gambit_engine::export::VisualizationExport;
use trust_gambit_engine::{DatasetError, GameDataset, SimulationConfig, TrustSimulation};

#[derive(Parser)]
#[command(name = "replay", about = "Simulate Trust Gambit trust dynamics from a game export")]
struct Cli {
    /// Path to exported game JSON file
    json_file: PathBuf,

    /// Only replay rounds of this stage
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=2))]
    stage: Option<u32>,

    /// Export visualization data
    #[arg(long)]
    visualize: bool,

    /// Output file for visualization data
    #[arg(long, default_value = "trust-network.json")]
    output: PathBuf,

    /// Override chain propagation λ
    #[arg(long)]
    lambda: Option<f64>,

    /// Override trust bonus β
    #[arg(long)]
    beta: Option<f64>,

    /// Override cycle penalty γ
    #[arg(long)]
    gamma: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("trust_gambit_engine=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(path = %cli.json_file.display(), "Loading game data");
    let dataset = match GameDataset::from_path(&cli.json_file) {
        Ok(ds) => ds,
        Err(e @ DatasetError::Io { .. }) => {
            eprintln!("Error: file not found or unreadable: {e}");
            std::process::exit(1);
        }
        Err(e @ DatasetError::Parse(_)) => {
            eprintln!("Error: invalid JSON file: {e}");
            std::process::exit(2);
        }
    };

    let config = SimulationConfig {
        stage: cli.stage,
        lambda: cli.lambda,
        beta: cli.beta,
        gamma: cli.gamma,
    };
    let mut sim = TrustSimulation::with_config(dataset, config);

    report::print_header(&sim);
    sim.simulate_all_rounds();
    for round in sim.round_results().values() {
        report::print_round(&sim, round);
    }

    report::print_network(&sim);
    report::print_leaderboard(&sim);

    if cli.visualize {
        let viz = VisualizationExport::from_simulation(&sim);
        viz.write_to_path(&cli.output)
            .with_context(|| format!("writing visualization data to {}", cli.output.display()))?;
        println!("\n  Visualization data exported to: {}", cli.output.display());
        println!("    Nodes: {}, Edges: {}", viz.nodes.len(), viz.edges.len());
    }

    println!("\n{}", "=".repeat(80));
    println!("  Simulation Complete!");
    println!("{}\n", "=".repeat(80));

    Ok(())
}
