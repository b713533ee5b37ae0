// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Visualization Export
//
// Node/edge document consumed by the delegation graph visualization.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::simulation::TrustSimulation;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot serialize visualization data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VizNode {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_score: f64,
    pub rounds_played: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VizGameInfo {
    pub name: String,
    pub status: String,
    pub lambda: f64,
    pub beta: f64,
    pub gamma: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualizationExport {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
    pub game_info: VizGameInfo,
}

impl VisualizationExport {
    /// One node per known user, one edge per trust pair.
    pub fn from_simulation(sim: &TrustSimulation) -> Self {
        let network = sim.network();
        let dataset = sim.dataset();
        let params = sim.params();

        let nodes = dataset
            .users
            .iter()
            .map(|u| VizNode {
                id: u.id.to_string(),
                name: u.name.clone(),
                email: u.email.clone(),
                total_score: network.user_total(&u.id),
                rounds_played: network.rounds_played(&u.id),
            })
            .collect();

        let edges = network
            .trust_edges()
            .into_iter()
            .map(|e| VizEdge {
                source: e.from.0,
                target: e.to.0,
                weight: e.count,
            })
            .collect();

        Self {
            nodes,
            edges,
            game_info: VizGameInfo {
                name: dataset.game.name.clone(),
                status: dataset.game.status.clone(),
                lambda: params.lambda,
                beta: params.beta,
                gamma: params.gamma,
            },
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let path = path.as_ref();
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::GameDataset;

    const EXPORT: &str = r#"{
        "game": { "name": "Demo", "status": "ENDED", "lambda": 0.5, "beta": 0.1, "gamma": 0.2 },
        "users": [
            { "id": "a", "name": "Ana", "email": "ana@example.com" },
            { "id": "b", "name": "Ben", "email": "ben@example.com" },
            { "id": "idle", "name": "Idle", "email": null }
        ],
        "rounds": [ { "id": "r1", "roundNumber": 1, "stage": 1, "domain": "Math" } ],
        "submissions": [
            { "roundId": "r1", "userId": "a", "action": "SOLVE", "isCorrect": true },
            { "roundId": "r1", "userId": "b", "action": "DELEGATE", "delegateToId": "a" }
        ]
    }"#;

    fn simulated() -> TrustSimulation {
        let mut sim = TrustSimulation::from_dataset(GameDataset::from_json_str(EXPORT).unwrap());
        sim.simulate_all_rounds();
        sim
    }

    #[test]
    fn test_nodes_and_edges() {
        let viz = VisualizationExport::from_simulation(&simulated());
        assert_eq!(viz.nodes.len(), 3);
        assert_eq!(viz.edges, vec![VizEdge { source: "b".into(), target: "a".into(), weight: 1 }]);

        let a = viz.nodes.iter().find(|n| n.id == "a").unwrap();
        assert!((a.total_score - 1.1).abs() < 1e-12);
        assert_eq!(a.rounds_played, 1);

        let idle = viz.nodes.iter().find(|n| n.id == "idle").unwrap();
        assert_eq!(idle.total_score, 0.0);
        assert_eq!(idle.rounds_played, 0);
    }

    #[test]
    fn test_json_field_names() {
        let json = VisualizationExport::from_simulation(&simulated()).to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["gameInfo"]["lambda"].is_number());
        assert!(value["nodes"][0]["totalScore"].is_number());
        assert!(value["nodes"][0]["roundsPlayed"].is_number());
        assert_eq!(value["edges"][0]["weight"], 1);
    }
}
