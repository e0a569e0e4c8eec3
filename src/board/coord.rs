//! Grid coordinates and algebraic notation.
//!
//! The hexagonal Yinsh board is embedded in an 11x11 grid. A coordinate
//! names a grid slot by row and column; whether the slot is actually part
//! of the playing area is decided by the geometry in [`super::grid`].
//!
//! Notation is algebraic: column letter `a`..`k` followed by row number
//! `1`..`11`, so `(row 5, col 5)` prints as `f6`.

use std::fmt;
use std::str::FromStr;

/// Side length of the square grid the board is embedded in.
pub const GRID_SIZE: usize = 11;

/// Total grid slots, playable or not.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A grid coordinate. Row 0 is the top edge, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Creates a coordinate. Both components must be below [`GRID_SIZE`].
    pub const fn new(row: u8, col: u8) -> Coord {
        Coord { row, col }
    }

    /// Returns the flat index into a `[_; CELL_COUNT]` array.
    pub const fn index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    /// Steps one cell in the given direction, or None when leaving the grid.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || row >= GRID_SIZE as i16 || col < 0 || col >= GRID_SIZE as i16 {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col_char = (b'a' + self.col) as char;
        write!(f, "{}{}", col_char, self.row + 1)
    }
}

/// Errors from parsing algebraic coordinate notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseCoordError {
    #[error("empty coordinate")]
    Empty,

    #[error("invalid column letter: '{0}'")]
    InvalidColumn(char),

    #[error("invalid row number: '{0}'")]
    InvalidRow(String),
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseCoordError::Empty)?;
        if !('a'..='k').contains(&col_char) {
            return Err(ParseCoordError::InvalidColumn(col_char));
        }
        let col = col_char as u8 - b'a';

        let row_str = chars.as_str();
        let row: u8 = row_str
            .parse()
            .map_err(|_| ParseCoordError::InvalidRow(row_str.to_string()))?;
        if row < 1 || row > GRID_SIZE as u8 {
            return Err(ParseCoordError::InvalidRow(row_str.to_string()));
        }

        Ok(Coord::new(row - 1, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        assert_eq!(Coord::new(0, 0).index(), 0);
        assert_eq!(Coord::new(0, 10).index(), 10);
        assert_eq!(Coord::new(1, 0).index(), 11);
        assert_eq!(Coord::new(10, 10).index(), CELL_COUNT - 1);
    }

    #[test]
    fn offset_stays_on_grid() {
        let c = Coord::new(5, 5);
        assert_eq!(c.offset(1, 1), Some(Coord::new(6, 6)));
        assert_eq!(c.offset(-1, 0), Some(Coord::new(4, 5)));
    }

    #[test]
    fn offset_rejects_grid_exit() {
        assert_eq!(Coord::new(0, 0).offset(-1, 0), None);
        assert_eq!(Coord::new(0, 0).offset(0, -1), None);
        assert_eq!(Coord::new(10, 10).offset(1, 0), None);
        assert_eq!(Coord::new(10, 10).offset(0, 1), None);
    }

    #[test]
    fn display_notation() {
        assert_eq!(Coord::new(5, 5).to_string(), "f6");
        assert_eq!(Coord::new(0, 0).to_string(), "a1");
        assert_eq!(Coord::new(10, 10).to_string(), "k11");
    }

    #[test]
    fn parse_notation_roundtrip() {
        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                let c = Coord::new(row, col);
                let parsed: Coord = c.to_string().parse().unwrap();
                assert_eq!(parsed, c);
            }
        }
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("".parse::<Coord>(), Err(ParseCoordError::Empty));
        assert_eq!(
            "z5".parse::<Coord>(),
            Err(ParseCoordError::InvalidColumn('z'))
        );
        assert_eq!(
            "a0".parse::<Coord>(),
            Err(ParseCoordError::InvalidRow("0".to_string()))
        );
        assert_eq!(
            "a12".parse::<Coord>(),
            Err(ParseCoordError::InvalidRow("12".to_string()))
        );
        assert!("f".parse::<Coord>().is_err());
        assert!("f6x".parse::<Coord>().is_err());
    }
}
