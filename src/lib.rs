// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine

pub mod types;
pub mod graph;
pub mod cycles;
pub mod resolver;
pub mod scoring;
pub mod network;
pub mod dataset;
pub mod simulation;
pub mod export;

pub use types::*;
pub use dataset::{DatasetError, GameDataset};
pub use graph::DelegationGraph;
pub use network::NetworkAggregator;
pub use simulation::{analyze_round, SimulationConfig, TrustSimulation};

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

#[wasm_bindgen]
impl TrustSimulation {
    /// Load an admin export. `config` is an optional `SimulationConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(export_json: &str, config: JsValue) -> Result<TrustSimulation, JsValue> {
        #[cfg(target_arch = "wasm32")]
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));

        let dataset = GameDataset::from_json_str(export_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config: SimulationConfig = if config.is_undefined() || config.is_null() {
            SimulationConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(TrustSimulation::with_config(dataset, config))
    }

    /// Replay all rounds in scope; returns round results keyed by round number.
    pub fn run(&mut self) -> JsValue {
        let results = self.simulate_all_rounds();
        serde_wasm_bindgen::to_value(results).unwrap_or(JsValue::NULL)
    }

    pub fn leaderboard(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.network.leaderboard()).unwrap_or(JsValue::NULL)
    }

    pub fn trust_edges(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.network.strongest_pairs()).unwrap_or(JsValue::NULL)
    }

    pub fn visualization(&self) -> JsValue {
        let viz = export::VisualizationExport::from_simulation(self);
        serde_wasm_bindgen::to_value(&viz).unwrap_or(JsValue::NULL)
    }

    pub fn round_count(&self) -> u32 {
        self.round_results.len() as u32
    }
}
