//! Position evaluation.
//!
//! Walks a fixed catalog of board lines, scores each line for a player,
//! and folds the results into a single cost under the selected strategy.

pub(crate) mod heuristic;
pub(crate) mod lines;

pub use heuristic::{
    balanced, defensive, evaluate, offensive, potential, score_line, ParseStrategyError, Strategy,
    ALL_STRATEGIES, FACTOR_CAP,
};
pub use lines::{LineCatalog, LINE_COUNT};
