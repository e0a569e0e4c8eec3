//! Hexagonal board geometry.
//!
//! The playing area is a radius-5 hexagon embedded in the 11x11 grid: a slot
//! is inside the hexagon when `|(row-5) - (col-5)| <= 5`, and the six hexagon
//! vertices are additionally cut off, leaving the 85 intersections of the
//! physical board. Straight lines run along three axes only; the `(+1,-1)`
//! grid diagonal does not correspond to a board line.

use super::coord::Coord;

/// Number of playable intersections on the board.
pub const PLAYABLE_CELL_COUNT: usize = 85;

/// The six hexagon vertices excluded from the playing area.
pub const CORNERS: [Coord; 6] = [
    Coord::new(0, 0),
    Coord::new(0, 5),
    Coord::new(5, 0),
    Coord::new(5, 10),
    Coord::new(10, 5),
    Coord::new(10, 10),
];

/// Returns true if the coordinate is one of the six cut-off vertices.
pub const fn is_corner(c: Coord) -> bool {
    matches!(
        (c.row, c.col),
        (0, 0) | (0, 5) | (5, 0) | (5, 10) | (10, 5) | (10, 10)
    )
}

/// Returns true if the coordinate is a playable board intersection.
pub const fn is_playable(c: Coord) -> bool {
    if c.row > 10 || c.col > 10 {
        return false;
    }
    let diff = (c.row as i8 - 5) - (c.col as i8 - 5);
    if diff < -5 || diff > 5 {
        return false;
    }
    !is_corner(c)
}

/// One of the three line directions of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Constant row, increasing column.
    Row,
    /// Constant column, increasing row.
    Column,
    /// Constant `row - col`, increasing both.
    Diagonal,
}

/// All three axes in catalog order.
pub const ALL_AXES: [Axis; 3] = [Axis::Row, Axis::Column, Axis::Diagonal];

impl Axis {
    /// Returns the unit step of this axis in the positive sense.
    pub const fn unit(self) -> (i8, i8) {
        match self {
            Axis::Row => (0, 1),
            Axis::Column => (1, 0),
            Axis::Diagonal => (1, 1),
        }
    }
}

/// The six ring-movement directions: both senses of each axis.
pub const DIRECTIONS: [(i8, i8); 6] = [(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (-1, -1)];

/// Iterates every playable intersection in row-major order.
///
/// This order is the canonical scan order: move generation and sequence
/// detection both rely on it for reproducible tie-breaking.
pub fn playable_coords() -> impl Iterator<Item = Coord> {
    (0..super::coord::GRID_SIZE as u8)
        .flat_map(|row| (0..super::coord::GRID_SIZE as u8).map(move |col| Coord::new(row, col)))
        .filter(|&c| is_playable(c))
}

/// Returns every playable intersection on the line through `anchor` along
/// `axis`, ordered in the axis's positive sense.
///
/// An unplayable anchor yields an empty line. Playable cells along an axis
/// are always contiguous (the cut vertices sit at line ends), so a single
/// backward scan followed by a forward sweep covers the whole line.
pub fn positions_on_line(anchor: Coord, axis: Axis) -> Vec<Coord> {
    if !is_playable(anchor) {
        return Vec::new();
    }

    let (dr, dc) = axis.unit();

    let mut start = anchor;
    while let Some(prev) = start.offset(-dr, -dc) {
        if !is_playable(prev) {
            break;
        }
        start = prev;
    }

    let mut line = vec![start];
    let mut cur = start;
    while let Some(next) = cur.offset(dr, dc) {
        if !is_playable(next) {
            break;
        }
        line.push(next);
        cur = next;
    }
    line
}
