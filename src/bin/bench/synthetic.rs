// Synthetic Game Generator - seedable stand-in for real game exports
// Each round every participating user picks SOLVE / DELEGATE / PASS from a
// fixed action mix; delegation targets are uniform over the other players.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use trust_gambit_engine::dataset::GameInfo;
use trust_gambit_engine::*;

/// Behavioural mix for one synthetic game.
#[derive(Debug, Clone, Copy)]
pub struct GameProfile {
    pub users: u32,
    pub rounds: u32,
    /// Probability a user submits at all in a given round.
    pub participation: f64,
    /// Cumulative action mix: P(SOLVE), P(SOLVE or DELEGATE).
    pub action_cdf: [f64; 2],
    /// P(correct | SOLVE).
    pub accuracy: f64,
    /// P(target = self | DELEGATE).
    pub self_delegation: f64,
}

pub struct GameGenerator {
    rng: ChaCha8Rng,
    pub submission_count: u32,
}

impl GameGenerator {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self { rng, submission_count: 0 }
    }

    pub fn generate(&mut self, profile: &GameProfile, params: GameParams) -> GameDataset {
        let users: Vec<User> = (0..profile.users)
            .map(|i| User {
                id: UserId(format!("user-{i:04}")),
                name: Some(format!("Player {i}")),
                email: None,
            })
            .collect();

        let mut rounds = Vec::with_capacity(profile.rounds as usize);
        let mut submissions = Vec::new();

        for n in 1..=profile.rounds {
            let round_id = format!("round-{n:03}");
            // First half of the game is stage 1, second half stage 2.
            let stage = if n * 2 <= profile.rounds { 1 } else { 2 };
            rounds.push(Round {
                id: round_id.clone(),
                round_number: n,
                stage,
                domain: Some("synthetic".to_string()),
            });

            for (i, user) in users.iter().enumerate() {
                if !self.rng.gen_bool(profile.participation) {
                    continue;
                }
                let sub = self.pick_action(profile, &round_id, &users, i, user);
                submissions.push(sub);
                self.submission_count += 1;
            }
        }

        GameDataset {
            game: GameInfo {
                id: None,
                name: "Synthetic Trust Gambit".to_string(),
                status: "ENDED".to_string(),
                current_stage: Some(2),
                lambda: params.lambda,
                beta: params.beta,
                gamma: params.gamma,
            },
            users,
            rounds,
            submissions,
        }
    }

    fn pick_action(
        &mut self,
        profile: &GameProfile,
        round_id: &str,
        users: &[User],
        index: usize,
        user: &User,
    ) -> Submission {
        let r: f64 = self.rng.gen();
        if r < profile.action_cdf[0] {
            let correct = self.rng.gen_bool(profile.accuracy);
            Submission::solve(round_id, user.id.as_str(), correct)
        } else if r < profile.action_cdf[1] {
            let target = if users.len() == 1 || self.rng.gen_bool(profile.self_delegation) {
                index
            } else {
                // Uniform over everyone except `index`.
                let pick = self.rng.gen_range(0..users.len() - 1);
                if pick >= index { pick + 1 } else { pick }
            };
            Submission::delegate(round_id, user.id.as_str(), users[target].id.as_str())
        } else {
            Submission::pass(round_id, user.id.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const PROFILE: GameProfile = GameProfile {
        users: 50,
        rounds: 10,
        participation: 1.0,
        action_cdf: [0.4, 0.8],
        accuracy: 0.5,
        self_delegation: 0.0,
    };

    #[test]
    fn test_same_seed_same_game() {
        let a = GameGenerator::new(ChaCha8Rng::seed_from_u64(9)).generate(&PROFILE, GameParams::default());
        let b = GameGenerator::new(ChaCha8Rng::seed_from_u64(9)).generate(&PROFILE, GameParams::default());
        assert_eq!(
            serde_json::to_string(&a.submissions).unwrap(),
            serde_json::to_string(&b.submissions).unwrap()
        );
    }

    #[test]
    fn test_one_submission_per_user_per_round() {
        let ds = GameGenerator::new(ChaCha8Rng::seed_from_u64(1)).generate(&PROFILE, GameParams::default());
        assert_eq!(ds.submissions.len(), 500);
        for round in &ds.rounds {
            let mut seen = std::collections::HashSet::new();
            for s in ds.submissions_for_round(&round.id) {
                assert!(seen.insert(s.user_id));
            }
        }
    }

    #[test]
    fn test_no_self_delegation_when_disabled() {
        let ds = GameGenerator::new(ChaCha8Rng::seed_from_u64(3)).generate(&PROFILE, GameParams::default());
        assert!(ds
            .submissions
            .iter()
            .filter_map(|s| s.delegation_target().map(|t| (t, &s.user_id)))
            .all(|(t, u)| t != u));
    }
}
