//! Board representation and game-state types.
//!
//! Contains the core data structures for coordinates, hex geometry, pieces,
//! actions, and the overall game state.

pub mod action;
pub mod coord;
pub mod grid;
pub mod piece;
pub mod state;

pub use action::{Action, ParseActionError};
pub use coord::{Coord, ParseCoordError, CELL_COUNT, GRID_SIZE};
pub use grid::{
    is_corner, is_playable, playable_coords, positions_on_line, Axis, ALL_AXES, CORNERS,
    DIRECTIONS, PLAYABLE_CELL_COUNT,
};
pub use piece::{Cell, Player, ALL_PLAYERS};
pub use state::{Board, GameState, MARKER_POOL, RINGS_PER_PLAYER, WINNING_SCORE};
