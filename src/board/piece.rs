//! Players and cell occupancy codes.
//!
//! A Yinsh piece is either a ring or a marker, owned by White or Black.
//! Cell codes follow the numeric convention `player * 2 + 1` for a ring and
//! `player * 2 + 2` for a marker, with 0 for an empty intersection and 5 for
//! a grid slot outside the hexagonal board.

/// One of the two players. White places and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [Player; 2] = [Player::White, Player::Black];

impl Player {
    /// Returns the other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the lowercase full name of this player.
    pub const fn name(self) -> &'static str {
        match self {
            Player::White => "white",
            Player::Black => "black",
        }
    }

    /// Returns the single-character YFEN side-to-move abbreviation.
    pub const fn yfen_char(self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }

    /// Parses a player from its lowercase full name.
    pub fn from_name(name: &str) -> Option<Player> {
        match name {
            "white" => Some(Player::White),
            "black" => Some(Player::Black),
            _ => None,
        }
    }

    /// Parses a player from its single-character YFEN abbreviation.
    pub fn from_yfen_char(c: char) -> Option<Player> {
        match c {
            'w' => Some(Player::White),
            'b' => Some(Player::Black),
            _ => None,
        }
    }
}

/// Occupancy of a single grid slot.
///
/// Discriminants are the wire encoding shared with the board contract, so a
/// `Cell` can index scoring tables directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    WhiteRing = 1,
    WhiteMarker = 2,
    BlackRing = 3,
    BlackMarker = 4,
    /// Grid slot outside the hexagonal playing area.
    Void = 5,
}

impl Cell {
    /// Returns the ring cell for a player.
    pub const fn ring(player: Player) -> Cell {
        match player {
            Player::White => Cell::WhiteRing,
            Player::Black => Cell::BlackRing,
        }
    }

    /// Returns the marker cell for a player.
    pub const fn marker(player: Player) -> Cell {
        match player {
            Player::White => Cell::WhiteMarker,
            Player::Black => Cell::BlackMarker,
        }
    }

    /// Returns the owning player, or None for empty and void slots.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::WhiteRing | Cell::WhiteMarker => Some(Player::White),
            Cell::BlackRing | Cell::BlackMarker => Some(Player::Black),
            Cell::Empty | Cell::Void => None,
        }
    }

    /// Returns true for an empty playable intersection.
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if the slot holds a ring of either colour.
    pub const fn is_ring(self) -> bool {
        matches!(self, Cell::WhiteRing | Cell::BlackRing)
    }

    /// Returns true if the slot holds a marker of either colour.
    pub const fn is_marker(self) -> bool {
        matches!(self, Cell::WhiteMarker | Cell::BlackMarker)
    }

    /// Returns the single-character YFEN abbreviation for a piece.
    /// Empty and void slots have no character (YFEN encodes them as runs).
    pub const fn yfen_char(self) -> Option<char> {
        match self {
            Cell::WhiteRing => Some('R'),
            Cell::WhiteMarker => Some('M'),
            Cell::BlackRing => Some('r'),
            Cell::BlackMarker => Some('m'),
            Cell::Empty | Cell::Void => None,
        }
    }

    /// Parses a piece cell from its single-character YFEN abbreviation.
    pub fn from_yfen_char(c: char) -> Option<Cell> {
        match c {
            'R' => Some(Cell::WhiteRing),
            'M' => Some(Cell::WhiteMarker),
            'r' => Some(Cell::BlackRing),
            'm' => Some(Cell::BlackMarker),
            _ => None,
        }
    }
}
