//! Heuristic position evaluation.
//!
//! A line is scored for one player by walking its cells in axis order with
//! a running multiplier: the player's marker adds the multiplier, their
//! ring adds half of it, and either doubles it for the next cell. Empty
//! cells keep the streak alive, an opponent piece resets the multiplier to
//! one, and the multiplier never grows past [`FACTOR_CAP`]. Summing over
//! the whole catalog gives a player's line potential.
//!
//! Strategies turn potentials into a single cost where LOWER is better for
//! the evaluated player: `balanced` trades own potential against the
//! opponent's, `offensive` chases own potential only, `defensive` only
//! suppresses the opponent's.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::{Board, Cell, Coord, GameState, Player};
use crate::eval::lines::LineCatalog;

/// Ceiling for the streak multiplier; runs longer than five cells score no
/// faster.
pub const FACTOR_CAP: f32 = 16.0;

/// Evaluation profile selectable at the protocol level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Balanced,
    Offensive,
    Defensive,
}

pub const ALL_STRATEGIES: [Strategy; 3] =
    [Strategy::Balanced, Strategy::Offensive, Strategy::Defensive];

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::Offensive => "offensive",
            Strategy::Defensive => "defensive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy: {0}")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balanced" => Ok(Strategy::Balanced),
            "offensive" => Ok(Strategy::Offensive),
            "defensive" => Ok(Strategy::Defensive),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}

/// Scores one line for `player`, walking cells in the order given.
///
/// The walk is direction-sensitive: a ring ahead of a marker run scores
/// differently from one behind it, so catalog lines are always walked in
/// their axis positive sense.
pub fn score_line(board: &Board, line: &[Coord], player: Player) -> f32 {
    let own_ring = Cell::ring(player);
    let own_marker = Cell::marker(player);
    let mut score = 0.0f32;
    let mut factor = 1.0f32;

    for &at in line {
        match board.get(at) {
            Cell::Empty | Cell::Void => {}
            cell if cell == own_ring => {
                score += 0.5 * factor;
                factor = (factor * 2.0).min(FACTOR_CAP);
            }
            cell if cell == own_marker => {
                score += factor;
                factor = (factor * 2.0).min(FACTOR_CAP);
            }
            _ => factor = 1.0,
        }
    }
    score
}

/// Sums `score_line` over the whole catalog for one player.
pub fn potential(player: Player, state: &GameState, lines: &LineCatalog) -> f32 {
    lines
        .lines()
        .iter()
        .map(|line| score_line(&state.board, line, player))
        .sum()
}

/// Own and opponent potential traded off against each other.
pub fn balanced(player: Player, state: &GameState, lines: &LineCatalog) -> f32 {
    potential(player.opponent(), state, lines) - potential(player, state, lines)
}

/// Own potential only; the opponent's position is ignored.
pub fn offensive(player: Player, state: &GameState, lines: &LineCatalog) -> f32 {
    -potential(player, state, lines)
}

/// Opponent potential only; good moves starve the opponent of lines.
pub fn defensive(player: Player, state: &GameState, lines: &LineCatalog) -> f32 {
    potential(player.opponent(), state, lines)
}

/// Evaluates a position for `player` under the chosen strategy.
/// Lower values are better for `player`.
pub fn evaluate(strategy: Strategy, player: Player, state: &GameState, lines: &LineCatalog) -> f32 {
    match strategy {
        Strategy::Balanced => balanced(player, state, lines),
        Strategy::Offensive => offensive(player, state, lines),
        Strategy::Defensive => defensive(player, state, lines),
    }
}
