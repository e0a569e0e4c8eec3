//! Rule engine: successor computation and game termination.
//!
//! `play` applies one action for the player to move and returns the
//! resulting state, leaving its input untouched. Moving a ring deposits a
//! marker on the origin and flips every marker jumped; any 5-in-a-row of
//! same-colour markers that results is resolved immediately, removing the
//! five markers plus one ring of that colour and scoring a point. Flips can
//! hand the opponent a row, so a move may score for either side.

use crate::board::{
    playable_coords, Action, Board, Cell, Coord, GameState, Player, ALL_AXES, ALL_PLAYERS,
    WINNING_SCORE,
};

/// Applies an action for the player to move, returning the successor state.
///
/// The action must be legal for `state.turn` (movegen output); the input
/// state is never mutated.
pub fn play(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    let mover = state.turn;

    match action {
        Action::PlaceRing { at } => {
            debug_assert!(next.board.get(*at).is_empty(), "placement on {}", at);
            next.board.set(*at, Cell::ring(mover));
        }
        Action::MoveRing { from, to } => {
            debug_assert_eq!(next.board.get(*from), Cell::ring(mover));
            next.board.set(*from, Cell::marker(mover));
            flip_jumped_markers(&mut next.board, *from, *to);
            next.board.set(*to, Cell::ring(mover));
            resolve_sequences(&mut next, mover);
        }
        Action::Pass => {}
    }

    next.turn = mover.opponent();
    next
}

/// Flips every marker strictly between `from` and `to`.
fn flip_jumped_markers(board: &mut Board, from: Coord, to: Coord) {
    let dr = (to.row as i16 - from.row as i16).signum() as i8;
    let dc = (to.col as i16 - from.col as i16).signum() as i8;
    debug_assert!(dr != 0 || dc != 0, "degenerate ring move at {}", from);

    let mut cur = from;
    loop {
        cur = match cur.offset(dr, dc) {
            Some(c) => c,
            None => break,
        };
        if cur == to {
            break;
        }
        match board.get(cur) {
            Cell::WhiteMarker => board.set(cur, Cell::BlackMarker),
            Cell::BlackMarker => board.set(cur, Cell::WhiteMarker),
            _ => {}
        }
    }
}

/// Resolves all marker rows on the board, mover's colour first.
///
/// Rows are resolved one at a time with a rescan after each removal, since
/// removing five markers can break up other rows. Resolution stops once a
/// player reaches the winning score.
fn resolve_sequences(state: &mut GameState, mover: Player) {
    let opponent = mover.opponent();
    while state.score(mover) < WINNING_SCORE && state.score(opponent) < WINNING_SCORE {
        if let Some(cells) = find_sequence(&state.board, mover) {
            score_sequence(state, mover, &cells);
        } else if let Some(cells) = find_sequence(&state.board, opponent) {
            score_sequence(state, opponent, &cells);
        } else {
            break;
        }
    }
}

/// Finds the first 5-window of a player's markers in scan order:
/// row-major over start cells, then row/column/diagonal axes.
fn find_sequence(board: &Board, player: Player) -> Option<[Coord; 5]> {
    let marker = Cell::marker(player);
    for start in playable_coords() {
        if board.get(start) != marker {
            continue;
        }
        for axis in ALL_AXES {
            let (dr, dc) = axis.unit();
            let mut cells = [start; 5];
            let mut len = 1;
            let mut cur = start;
            while len < 5 {
                match cur.offset(dr, dc) {
                    Some(next) if board.get(next) == marker => {
                        cells[len] = next;
                        cur = next;
                        len += 1;
                    }
                    _ => break,
                }
            }
            if len == 5 {
                return Some(cells);
            }
        }
    }
    None
}

/// Removes a scored row and one ring of the owner, and bumps their score.
/// The five markers return to the shared pool; the ring removed is the
/// owner's first in row-major order.
fn score_sequence(state: &mut GameState, owner: Player, cells: &[Coord; 5]) {
    for &c in cells {
        state.board.set(c, Cell::Empty);
    }
    let ring = Cell::ring(owner);
    if let Some(at) = playable_coords().find(|&c| state.board.get(c) == ring) {
        state.board.set(at, Cell::Empty);
    }
    state.scores[owner as usize] += 1;
}

/// Returns true when the game has ended: a player reached the winning
/// score, or the marker pool ran dry.
pub fn is_game_over(state: &GameState) -> bool {
    ALL_PLAYERS.iter().any(|&p| state.score(p) >= WINNING_SCORE)
        || state.markers_remaining() == 0
}

/// Returns the winner, or None while the game runs or for a drawn pool
/// exhaustion.
pub fn winner(state: &GameState) -> Option<Player> {
    for p in ALL_PLAYERS {
        if state.score(p) >= WINNING_SCORE {
            return Some(p);
        }
    }
    if state.markers_remaining() == 0 {
        let white = state.score(Player::White);
        let black = state.score(Player::Black);
        if white > black {
            return Some(Player::White);
        }
        if black > white {
            return Some(Player::Black);
        }
    }
    None
}
