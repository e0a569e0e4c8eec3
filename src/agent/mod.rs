//! Move-selecting agents.
//!
//! An agent owns whatever it needs to pick moves -- strategy, line
//! catalog, RNG -- and is handed the legal action list together with the
//! state once per turn.

pub(crate) mod heuristic;
pub(crate) mod random;

pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;

use crate::board::{Action, GameState};

/// Interface shared by all move selectors.
pub trait Agent {
    /// Picks the action to play for the current turn.
    fn select_action(&mut self, actions: &[Action], state: &GameState) -> Action;

    /// Display name for logs and summaries.
    fn name(&self) -> &'static str;
}
