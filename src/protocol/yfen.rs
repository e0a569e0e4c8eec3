//! YFEN position encoding and decoding.
//!
//! YFEN is a compact single-line notation for a full Yinsh position,
//! modelled on chess FEN. The board section lists the eleven grid rows
//! top to bottom, separated by `/`; each row names only its playable
//! cells, in column order, as piece letters (`R`/`M` white ring and
//! marker, `r`/`m` black) with decimal runs of consecutive empty cells
//! between them. The side to move and both scores follow as separate
//! fields.
//!
//! The starting position is `4/7/8/9/10/9/10/9/8/7/4 w 0 0`.

use crate::board::{
    is_playable, Board, Cell, Coord, GameState, Player, GRID_SIZE, MARKER_POOL, WINNING_SCORE,
};

/// Errors that can occur during YFEN parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum YfenError {
    #[error("expected 4 fields separated by spaces, got {0}")]
    WrongFieldCount(usize),

    #[error("expected 11 rows separated by '/', got {0}")]
    WrongRowCount(usize),

    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),

    #[error("row {row} describes {got} cells, the board has {expected}")]
    WrongRowLength {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid player field: '{0}'")]
    InvalidPlayer(String),

    #[error("invalid score field: '{0}'")]
    InvalidScore(String),

    #[error("score {0} exceeds the winning score")]
    ScoreOutOfRange(u8),

    #[error("board holds {0} markers, the pool has only {pool}", pool = MARKER_POOL)]
    TooManyMarkers(usize),
}

/// The playable cells of one grid row, in column order.
fn row_cells(row: u8) -> Vec<Coord> {
    (0..GRID_SIZE as u8)
        .map(|col| Coord::new(row, col))
        .filter(|&c| is_playable(c))
        .collect()
}

/// Parses one row section onto the board.
fn parse_row(row: u8, text: &str, board: &mut Board) -> Result<(), YfenError> {
    let cells = row_cells(row);
    let mut at = 0usize;
    let mut run = 0usize;

    for c in text.chars() {
        if let Some(d) = c.to_digit(10) {
            run = run * 10 + d as usize;
            continue;
        }
        at += run;
        run = 0;
        let cell = Cell::from_yfen_char(c).ok_or(YfenError::InvalidPiece(c))?;
        if at >= cells.len() {
            return Err(YfenError::WrongRowLength {
                row: row as usize,
                got: at + 1,
                expected: cells.len(),
            });
        }
        board.set(cells[at], cell);
        at += 1;
    }

    at += run;
    if at != cells.len() {
        return Err(YfenError::WrongRowLength {
            row: row as usize,
            got: at,
            expected: cells.len(),
        });
    }
    Ok(())
}

fn parse_score(field: &str) -> Result<u8, YfenError> {
    let score: u8 = field
        .parse()
        .map_err(|_| YfenError::InvalidScore(field.to_string()))?;
    if score > WINNING_SCORE {
        return Err(YfenError::ScoreOutOfRange(score));
    }
    Ok(score)
}

/// Parses a YFEN string into a game state.
pub fn parse_yfen(s: &str) -> Result<GameState, YfenError> {
    let fields: Vec<&str> = s.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(YfenError::WrongFieldCount(fields.len()));
    }

    let rows: Vec<&str> = fields[0].split('/').collect();
    if rows.len() != GRID_SIZE {
        return Err(YfenError::WrongRowCount(rows.len()));
    }

    let mut state = GameState::new();
    for (row, text) in rows.iter().enumerate() {
        parse_row(row as u8, text, &mut state.board)?;
    }

    let markers = state.markers_on_board();
    if markers > MARKER_POOL {
        return Err(YfenError::TooManyMarkers(markers));
    }

    let mut turn_chars = fields[1].chars();
    state.turn = match (turn_chars.next(), turn_chars.next()) {
        (Some(c), None) => {
            Player::from_yfen_char(c).ok_or_else(|| YfenError::InvalidPlayer(fields[1].to_string()))?
        }
        _ => return Err(YfenError::InvalidPlayer(fields[1].to_string())),
    };

    state.scores[Player::White as usize] = parse_score(fields[2])?;
    state.scores[Player::Black as usize] = parse_score(fields[3])?;

    Ok(state)
}

/// Encodes a game state into a canonical YFEN string.
pub fn encode_yfen(state: &GameState) -> String {
    let mut out = String::with_capacity(64);

    for row in 0..GRID_SIZE as u8 {
        if row > 0 {
            out.push('/');
        }
        let mut run = 0usize;
        for cell in row_cells(row).into_iter().map(|c| state.board.get(c)) {
            match cell.yfen_char() {
                Some(ch) => {
                    if run > 0 {
                        out.push_str(&run.to_string());
                        run = 0;
                    }
                    out.push(ch);
                }
                None => run += 1,
            }
        }
        if run > 0 {
            out.push_str(&run.to_string());
        }
    }

    out.push(' ');
    out.push(state.turn.yfen_char());
    out.push_str(&format!(
        " {} {}",
        state.score(Player::White),
        state.score(Player::Black)
    ));
    out
}
