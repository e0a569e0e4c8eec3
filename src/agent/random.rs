//! Uniform random baseline agent.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::agent::Agent;
use crate::board::{Action, GameState};
use crate::movegen::random_action;

pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new() -> RandomAgent {
        RandomAgent {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> RandomAgent {
        RandomAgent {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        RandomAgent::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, actions: &[Action], _state: &GameState) -> Action {
        random_action(actions, &mut self.rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
