// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Simulation Core

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;

use crate::cycles::detect_cycles;
use crate::dataset::GameDataset;
use crate::graph::DelegationGraph;
use crate::network::NetworkAggregator;
use crate::scoring::{correct_solvers, ScoreEngine};
use crate::types::*;

// ─── SimulationConfig ────────────────────────────────────────────────────────

/// Replay options. Parameter overrides replace the game's own constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Only replay rounds of this stage.
    #[serde(default)]
    pub stage: Option<u32>,
    #[serde(default)]
    pub lambda: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub gamma: Option<f64>,
}

impl SimulationConfig {
    pub fn resolve_params(&self, base: GameParams) -> GameParams {
        GameParams {
            lambda: self.lambda.unwrap_or(base.lambda),
            beta: self.beta.unwrap_or(base.beta),
            gamma: self.gamma.unwrap_or(base.gamma),
        }
    }
}

// ─── TrustSimulation struct ──────────────────────────────────────────────────

#[wasm_bindgen]
pub struct TrustSimulation {
    pub(crate) dataset: GameDataset,
    pub(crate) params: GameParams,
    pub(crate) stage_filter: Option<u32>,
    pub(crate) round_results: BTreeMap<u32, RoundResult>,
    pub(crate) network: NetworkAggregator,
}

// ─── Internal Logic (Testable, pure Rust) ────────────────────────────────────

impl TrustSimulation {
    pub fn from_dataset(dataset: GameDataset) -> Self {
        Self::with_config(dataset, SimulationConfig::default())
    }

    pub fn with_config(dataset: GameDataset, config: SimulationConfig) -> Self {
        let params = config.resolve_params(dataset.game.params());
        Self {
            dataset,
            params,
            stage_filter: config.stage,
            round_results: BTreeMap::new(),
            network: NetworkAggregator::new(),
        }
    }

    /// Replay every round in scope, in ascending round-number order.
    ///
    /// Earlier results are discarded, so calling this twice is idempotent.
    pub fn simulate_all_rounds(&mut self) -> &BTreeMap<u32, RoundResult> {
        self.round_results.clear();
        self.network = NetworkAggregator::new();

        let rounds = self.rounds_in_scope();
        info!(
            game = %self.dataset.game.name,
            rounds = rounds.len(),
            stage = ?self.stage_filter,
            lambda = self.params.lambda,
            beta = self.params.beta,
            gamma = self.params.gamma,
            "Replaying trust game"
        );

        for round in &rounds {
            self.simulate_round(round);
        }

        info!(
            rounds = self.round_results.len(),
            trust_pairs = self.network.trust_edges().len(),
            "Replay complete"
        );
        &self.round_results
    }

    /// Score one round and fold it into the network state.
    pub fn simulate_round(&mut self, round: &Round) -> &RoundResult {
        let submissions = self.dataset.submissions_for_round(&round.id);
        let result = analyze_round(self.params, round, &submissions);
        self.network.record_round(&result);
        self.round_results.insert(round.round_number, result);
        &self.round_results[&round.round_number]
    }

    /// Rounds passing the stage filter, sorted by round number.
    pub fn rounds_in_scope(&self) -> Vec<Round> {
        let mut rounds: Vec<Round> = self
            .dataset
            .rounds
            .iter()
            .filter(|r| self.stage_filter.map_or(true, |s| r.stage == s))
            .cloned()
            .collect();
        rounds.sort_by_key(|r| r.round_number);
        rounds
    }

    pub fn round_results(&self) -> &BTreeMap<u32, RoundResult> {
        &self.round_results
    }

    pub fn network(&self) -> &NetworkAggregator {
        &self.network
    }

    pub fn params(&self) -> GameParams {
        self.params
    }

    pub fn stage_filter(&self) -> Option<u32> {
        self.stage_filter
    }

    pub fn dataset(&self) -> &GameDataset {
        &self.dataset
    }
}

// ─── Per-round analysis ──────────────────────────────────────────────────────

/// Score a single round from its submissions alone.
///
/// Touches no shared state; results from independent calls can be folded
/// into a [`NetworkAggregator`] in any order.
pub fn analyze_round(params: GameParams, round: &Round, submissions: &[Submission]) -> RoundResult {
    if submissions.is_empty() {
        warn!(round = round.round_number, "No submissions found for round");
        return RoundResult::empty(round);
    }

    let graph = DelegationGraph::from_submissions(submissions);
    let solvers = correct_solvers(submissions);
    let cycles = detect_cycles(&graph);
    let scores = ScoreEngine::new(params).score_round(submissions, &graph, &solvers, &cycles);

    let count = |action: Action| submissions.iter().filter(|s| s.action == action).count() as u32;
    let result = RoundResult {
        round_id: round.id.clone(),
        round_number: round.round_number,
        stage: round.stage,
        domain: round.domain.clone(),
        submissions: submissions.len() as u32,
        solves: count(Action::Solve),
        solvers: solvers.len() as u32,
        delegations: count(Action::Delegate),
        passes: count(Action::Pass),
        cycles: cycles.len() as u32,
        cycle_members: cycles,
        delegation_graph: graph,
        scores,
    };

    debug!(
        round = result.round_number,
        stage = result.stage,
        submissions = result.submissions,
        solvers = result.solvers,
        delegations = result.delegations,
        passes = result.passes,
        cycles = result.cycles,
        "Round scored"
    );
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
