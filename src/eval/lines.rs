//! The catalog of board lines scanned by the evaluator.
//!
//! Every maximal straight line of the hexagon that can hold five markers
//! is enumerated once: rows, then diagonals, then columns. Each family is
//! anchored on the nine cells of the central column or row, so the two
//! short edge lines of each family (4 playable cells, too short to ever
//! score) are deliberately left out.

use crate::board::{positions_on_line, Axis, Coord};

/// Number of lines the evaluator walks: nine per family.
pub const LINE_COUNT: usize = 27;

/// All evaluator lines, each an ordered run of playable cells.
///
/// Built once at startup and shared by reference; the cell order within a
/// line follows the axis positive sense, which the evaluator relies on.
pub struct LineCatalog {
    lines: Vec<Vec<Coord>>,
}

impl LineCatalog {
    pub fn new() -> LineCatalog {
        let mut lines = Vec::with_capacity(LINE_COUNT);
        for row in 1..=9 {
            lines.push(positions_on_line(Coord::new(row, 5), Axis::Row));
        }
        for row in 1..=9 {
            lines.push(positions_on_line(Coord::new(row, 5), Axis::Diagonal));
        }
        for col in 1..=9 {
            lines.push(positions_on_line(Coord::new(5, col), Axis::Column));
        }
        debug_assert_eq!(lines.len(), LINE_COUNT);
        LineCatalog { lines }
    }

    #[inline]
    pub fn lines(&self) -> &[Vec<Coord>] {
        &self.lines
    }
}

impl Default for LineCatalog {
    fn default() -> Self {
        LineCatalog::new()
    }
}
