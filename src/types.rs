// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Trust Gambit Replay Engine - Type Definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::graph::DelegationGraph;

// ─── UserId ──────────────────────────────────────────────────────────────────

/// Opaque participant identifier as issued by the game server.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self { UserId(s) }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self { UserId(s.to_string()) }
}

// ─── Action ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Solve,
    Delegate,
    Pass,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solve => "SOLVE",
            Self::Delegate => "DELEGATE",
            Self::Pass => "PASS",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── GameParams ──────────────────────────────────────────────────────────────

/// The three scoring constants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    /// Chain propagation decay (λ ≥ 0).
    pub lambda: f64,
    /// Trust bonus per delegator received (β).
    pub beta: f64,
    /// Flat cycle penalty (γ).
    pub gamma: f64,
}

impl Default for GameParams {
    /// Values a freshly created game starts with.
    fn default() -> Self {
        Self { lambda: 0.5, beta: 0.1, gamma: 0.2 }
    }
}

// ─── User / Round / Submission ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: String,
    pub round_number: u32,
    pub stage: u32,
    #[serde(default)]
    pub domain: Option<String>,
}

impl Round {
    pub fn domain_label(&self) -> &str {
        self.domain.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub id: Option<String>,
    pub round_id: String,
    #[serde(default)]
    pub round_number: Option<u32>,
    pub user_id: UserId,
    pub action: Action,
    /// Only meaningful for `SOLVE`; the export leaves it null otherwise.
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default, rename = "delegateToId")]
    pub delegate_to: Option<UserId>,
}

impl Submission {
    pub fn solve(round_id: &str, user: &str, correct: bool) -> Self {
        Self::new(round_id, user, Action::Solve, Some(correct), None)
    }

    pub fn delegate(round_id: &str, user: &str, target: &str) -> Self {
        Self::new(round_id, user, Action::Delegate, None, Some(UserId::from(target)))
    }

    pub fn pass(round_id: &str, user: &str) -> Self {
        Self::new(round_id, user, Action::Pass, None, None)
    }

    fn new(
        round_id: &str,
        user: &str,
        action: Action,
        is_correct: Option<bool>,
        delegate_to: Option<UserId>,
    ) -> Self {
        Self {
            id: None,
            round_id: round_id.to_string(),
            round_number: None,
            user_id: UserId::from(user),
            action,
            is_correct,
            delegate_to,
        }
    }

    /// `SOLVE` with a correct answer.
    pub fn solved_correctly(&self) -> bool {
        self.action == Action::Solve && self.is_correct == Some(true)
    }

    /// Target of a `DELEGATE` submission. Empty ids count as absent.
    pub fn delegation_target(&self) -> Option<&UserId> {
        match self.action {
            Action::Delegate => self.delegate_to.as_ref().filter(|t| !t.0.is_empty()),
            _ => None,
        }
    }
}

// ─── Cycle ───────────────────────────────────────────────────────────────────

/// Closed delegation loop; the last member delegates back to the first.
pub type Cycle = Vec<UserId>;

// ─── ScoreBreakdown ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub solve_score: f64,
    pub delegate_score: f64,
    pub trust_score: f64,
    pub total_score: f64,
    pub in_cycle: bool,
    pub distance_from_solver: Option<u32>,
    pub delegators_count: u32,
    pub action: Action,
}

// ─── RoundResult ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round_id: String,
    pub round_number: u32,
    pub stage: u32,
    pub domain: Option<String>,
    pub submissions: u32,
    /// `SOLVE` submissions, correct or not.
    pub solves: u32,
    /// Correct solvers only.
    pub solvers: u32,
    pub delegations: u32,
    pub passes: u32,
    pub cycles: u32,
    pub cycle_members: Vec<Cycle>,
    pub delegation_graph: DelegationGraph,
    pub scores: BTreeMap<UserId, ScoreBreakdown>,
}

impl RoundResult {
    /// Result recorded for a round nobody submitted to.
    pub fn empty(round: &Round) -> Self {
        Self {
            round_id: round.id.clone(),
            round_number: round.round_number,
            stage: round.stage,
            domain: round.domain.clone(),
            submissions: 0,
            solves: 0,
            solvers: 0,
            delegations: 0,
            passes: 0,
            cycles: 0,
            cycle_members: Vec::new(),
            delegation_graph: DelegationGraph::default(),
            scores: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.submissions == 0
    }

    /// Scores ordered by total, highest first; ties by user id.
    pub fn ranked_scores(&self) -> Vec<(&UserId, &ScoreBreakdown)> {
        let mut ranked: Vec<(&UserId, &ScoreBreakdown)> = self.scores.iter().collect();
        ranked.sort_by(|a, b| {
            b.1.total_score
                .total_cmp(&a.1.total_score)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked
    }
}

// ─── Network outputs ─────────────────────────────────────────────────────────

/// Cumulative delegation count from one user to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustEdge {
    pub from: UserId,
    pub to: UserId,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub total_score: f64,
    pub rounds_played: u32,
    pub average_score: f64,
}
