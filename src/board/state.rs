//! Game state representation.
//!
//! Holds the complete snapshot of a Yinsh game: the occupancy of every grid
//! slot, both players' scores, and whose turn it is. Ring and marker supply
//! are derived from the board rather than stored, since removed markers go
//! back to the shared pool and a removed ring is counted by the score.

use super::coord::{Coord, CELL_COUNT, GRID_SIZE};
use super::grid::is_playable;
use super::piece::{Cell, Player};

/// Rings each player places during the opening phase.
pub const RINGS_PER_PLAYER: u8 = 5;

/// Markers in the shared pool. Removed markers return to it.
pub const MARKER_POOL: usize = 51;

/// Scored sequences needed to win.
pub const WINNING_SCORE: u8 = 3;

/// The occupancy of every grid slot.
///
/// A flat fixed-size array indexed by `Coord::index()` for O(1) lookup with
/// no heap allocation. Unplayable slots hold `Cell::Void` permanently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board with every playable intersection empty.
    pub fn empty() -> Board {
        let mut cells = [Cell::Void; CELL_COUNT];
        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                let c = Coord::new(row, col);
                if is_playable(c) {
                    cells[c.index()] = Cell::Empty;
                }
            }
        }
        Board { cells }
    }

    /// Returns the occupancy of a grid slot.
    #[inline]
    pub fn get(&self, c: Coord) -> Cell {
        self.cells[c.index()]
    }

    /// Sets the occupancy of a playable slot.
    #[inline]
    pub fn set(&mut self, c: Coord, cell: Cell) {
        debug_assert!(is_playable(c), "set on unplayable slot {}", c);
        self.cells[c.index()] = cell;
    }

    /// Counts slots holding the given occupancy.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Complete game state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    /// Scored sequences per player, indexed by `Player as usize`.
    pub scores: [u8; 2],
    /// The player to move.
    pub turn: Player,
}

impl GameState {
    /// Creates the starting state: empty board, White to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::empty(),
            scores: [0, 0],
            turn: Player::White,
        }
    }

    /// Returns a player's score.
    #[inline]
    pub fn score(&self, player: Player) -> u8 {
        self.scores[player as usize]
    }

    /// Counts a player's rings currently on the board.
    pub fn rings_on_board(&self, player: Player) -> usize {
        self.board.count(Cell::ring(player))
    }

    /// Counts markers of both colours currently on the board.
    pub fn markers_on_board(&self) -> usize {
        self.board.count(Cell::WhiteMarker) + self.board.count(Cell::BlackMarker)
    }

    /// Counts how many rings a player has placed in total.
    /// Each scored sequence removed one ring, so those count as placed.
    pub fn rings_placed(&self, player: Player) -> usize {
        self.rings_on_board(player) + self.score(player) as usize
    }

    /// Returns true while the player still has rings to place.
    pub fn in_placement(&self, player: Player) -> bool {
        self.rings_placed(player) < RINGS_PER_PLAYER as usize
    }

    /// Returns how many markers are left in the shared pool.
    pub fn markers_remaining(&self) -> usize {
        MARKER_POOL - self.markers_on_board()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
