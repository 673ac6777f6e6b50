//! Mock decision source - weighted random policy
//!
//! Stands in for a real decision service in the demo binary and in tests:
//! 30% drop, 20% rotate, 50% horizontal move, biased toward drops so games
//! finish. Seeded for reproducible runs.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::ai::protocol::DecisionError;
use crate::ai::source::DecisionSource;
use crate::core::snapshot::DecisionRequest;
use crate::types::Action;

pub struct MockSource {
    rng: ChaCha8Rng,
    policy: String,
}

impl MockSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            policy: "play random moves with a bias toward dropping".to_string(),
        }
    }

    pub fn with_policy(seed: u64, policy: impl Into<String>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            policy: policy.into(),
        }
    }
}

impl DecisionSource for MockSource {
    fn is_ready(&self) -> bool {
        true
    }

    fn policy(&self) -> &str {
        &self.policy
    }

    fn decide(&mut self, _request: &DecisionRequest) -> Result<Action, DecisionError> {
        let roll: f64 = self.rng.gen();
        let action = if roll < 0.3 {
            Action::Drop
        } else if roll < 0.5 {
            let degrees = *[90u16, 180, 270]
                .choose(&mut self.rng)
                .unwrap_or(&90);
            Action::Rotate { degrees }
        } else {
            let steps = self.rng.gen_range(1..=2);
            if self.rng.gen() {
                Action::MoveLeft { steps }
            } else {
                Action::MoveRight { steps }
            }
        };
        Ok(action)
    }
}
