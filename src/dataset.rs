// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Game Export Loader
//
// Reads the admin export document. Only the fields the replay needs are
// declared; everything else in the export is ignored by serde.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::types::{GameParams, Round, Submission, User, UserId};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid game export: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Export document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub current_stage: Option<u32>,
    pub lambda: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl GameInfo {
    pub fn params(&self) -> GameParams {
        GameParams { lambda: self.lambda, beta: self.beta, gamma: self.gamma }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDataset {
    pub game: GameInfo,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub rounds: Vec<Round>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl GameDataset {
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Submissions of one round, in export order.
    pub fn submissions_for_round(&self, round_id: &str) -> Vec<Submission> {
        self.submissions
            .iter()
            .filter(|s| s.round_id == round_id)
            .cloned()
            .collect()
    }

    /// Submissions grouped by round id, preserving export order per round.
    pub fn submissions_by_round(&self) -> HashMap<&str, Vec<&Submission>> {
        let mut grouped: HashMap<&str, Vec<&Submission>> = HashMap::new();
        for sub in &self.submissions {
            grouped.entry(sub.round_id.as_str()).or_default().push(sub);
        }
        grouped
    }

    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.iter().find(|u| &u.id == id)
    }

    /// Display name, falling back to the raw id.
    pub fn user_name(&self, id: &UserId) -> String {
        self.user(id)
            .and_then(|u| u.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Action;

    const EXPORT: &str = r#"{
        "exportedAt": "2025-10-01T12:00:00.000Z",
        "game": {
            "id": "g1", "name": "Trust Gambit Competition", "status": "ENDED",
            "currentStage": 2, "currentRound": 4, "allowProfileEdits": false,
            "lambda": 0.5, "beta": 0.1, "gamma": 0.2
        },
        "statistics": { "totalUsers": 2 },
        "lobbies": [],
        "users": [
            { "id": "u1", "name": "Asha", "email": "asha@example.com", "hostelName": null },
            { "id": "u2", "name": null, "email": null }
        ],
        "rounds": [
            { "id": "r1", "roundNumber": 1, "stage": 1, "domain": "Algorithms", "question": "?" }
        ],
        "submissions": [
            { "id": "s1", "roundId": "r1", "roundNumber": 1, "userId": "u1",
              "action": "SOLVE", "answer": "42", "isCorrect": true, "delegateToId": null },
            { "id": "s2", "roundId": "r1", "roundNumber": 1, "userId": "u2",
              "action": "DELEGATE", "answer": null, "isCorrect": null, "delegateToId": "u1" }
        ]
    }"#;

    #[test]
    fn test_parses_export() {
        let ds = GameDataset::from_json_str(EXPORT).unwrap();
        assert_eq!(ds.game.params(), GameParams { lambda: 0.5, beta: 0.1, gamma: 0.2 });
        assert_eq!(ds.game.current_stage, Some(2));
        assert_eq!(ds.rounds[0].domain_label(), "Algorithms");
        assert_eq!(ds.submissions.len(), 2);
        assert!(ds.submissions[0].solved_correctly());
        assert_eq!(ds.submissions[1].action, Action::Delegate);
        assert_eq!(ds.submissions[1].is_correct, None);
        assert_eq!(ds.submissions[1].delegation_target(), Some(&UserId::from("u1")));
    }

    #[test]
    fn test_user_name_fallback() {
        let ds = GameDataset::from_json_str(EXPORT).unwrap();
        assert_eq!(ds.user_name(&UserId::from("u1")), "Asha");
        assert_eq!(ds.user_name(&UserId::from("u2")), "u2");
        assert_eq!(ds.user_name(&UserId::from("missing")), "missing");
    }

    #[test]
    fn test_submissions_for_round() {
        let ds = GameDataset::from_json_str(EXPORT).unwrap();
        assert_eq!(ds.submissions_for_round("r1").len(), 2);
        assert!(ds.submissions_for_round("r2").is_empty());
        assert_eq!(ds.submissions_by_round()["r1"].len(), 2);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameDataset::from_json_str("{ \"game\": ").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_missing_parameters_is_parse_error() {
        let err = GameDataset::from_json_str(r#"{ "game": { "name": "x", "status": "y" } }"#)
            .unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn test_unknown_action_is_parse_error() {
        let json = r#"{
            "game": { "name": "x", "status": "y", "lambda": 0.5, "beta": 0.1, "gamma": 0.2 },
            "submissions": [ { "roundId": "r1", "userId": "u1", "action": "BRIBE" } ]
        }"#;
        assert!(GameDataset::from_json_str(json).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameDataset::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
