// Scenario Definitions - synthetic game shapes for the replay engine
// Each scenario fixes a behavioural profile and the game constants.

use trust_gambit_engine::GameParams;

use crate::synthetic::GameProfile;

pub struct Scenario {
    pub name: &'static str,
    pub label: &'static str,
    pub category: &'static str,
    pub profile: GameProfile,
    pub params: GameParams,
}

const DEFAULT_PARAMS: GameParams = GameParams { lambda: 0.5, beta: 0.1, gamma: 0.2 };

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "BASELINE",
            label: "Baseline lobby (40 players)",
            category: "Shape",
            profile: GameProfile {
                users: 40,
                rounds: 20,
                participation: 0.9,
                action_cdf: [0.45, 0.85],
                accuracy: 0.6,
                self_delegation: 0.01,
            },
            params: DEFAULT_PARAMS,
        },
        Scenario {
            name: "HIGH_TRUST",
            label: "Delegation-heavy lobby",
            category: "Shape",
            profile: GameProfile {
                users: 40,
                rounds: 20,
                participation: 0.95,
                action_cdf: [0.15, 0.95],
                accuracy: 0.7,
                self_delegation: 0.0,
            },
            params: DEFAULT_PARAMS,
        },
        Scenario {
            name: "CYCLE_STORM",
            label: "Everyone delegates",
            category: "Stress",
            profile: GameProfile {
                users: 60,
                rounds: 20,
                participation: 1.0,
                action_cdf: [0.0, 1.0],
                accuracy: 0.0,
                self_delegation: 0.05,
            },
            params: DEFAULT_PARAMS,
        },
        Scenario {
            name: "SOLO_PLAY",
            label: "No delegation at all",
            category: "Shape",
            profile: GameProfile {
                users: 40,
                rounds: 20,
                participation: 0.9,
                action_cdf: [0.8, 0.8],
                accuracy: 0.5,
                self_delegation: 0.0,
            },
            params: DEFAULT_PARAMS,
        },
        Scenario {
            name: "LARGE_EVENT",
            label: "Campus-scale event (1000 players)",
            category: "Scale",
            profile: GameProfile {
                users: 1000,
                rounds: 40,
                participation: 0.8,
                action_cdf: [0.4, 0.85],
                accuracy: 0.55,
                self_delegation: 0.005,
            },
            params: DEFAULT_PARAMS,
        },
        Scenario {
            name: "ZERO_LAMBDA",
            label: "Chain propagation disabled",
            category: "Params",
            profile: GameProfile {
                users: 40,
                rounds: 20,
                participation: 0.9,
                action_cdf: [0.45, 0.85],
                accuracy: 0.6,
                self_delegation: 0.01,
            },
            params: GameParams { lambda: 0.0, ..DEFAULT_PARAMS },
        },
    ]
}
