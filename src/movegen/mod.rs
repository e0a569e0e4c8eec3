//! Legal action generation.
//!
//! Enumerates every legal action for a player in the current state. While
//! a player still has rings in hand, every empty cell is a placement.
//! Afterwards each ring may slide along the six board directions over
//! empty cells, or jump exactly one contiguous group of markers and land
//! on the first empty cell behind it. Rings and the board edge block.
//! A player with no legal ring move passes.
//!
//! Actions come out in a fixed order: origins in row-major scan order,
//! directions in [`DIRECTIONS`] order, destinations nearest first. Callers
//! that break evaluation ties by list position rely on this.

use rand::Rng;

use crate::board::{playable_coords, Action, Board, Cell, Coord, GameState, Player, DIRECTIONS};
use crate::rules;

/// Enumerates all legal actions for `player`. Empty when the game is over.
pub fn legal_actions(state: &GameState, player: Player) -> Vec<Action> {
    if rules::is_game_over(state) {
        return Vec::new();
    }
    if state.in_placement(player) {
        return placements(&state.board);
    }
    let moves = ring_moves(&state.board, player);
    if moves.is_empty() {
        return vec![Action::Pass];
    }
    moves
}

/// One placement per empty cell, in scan order.
fn placements(board: &Board) -> Vec<Action> {
    playable_coords()
        .filter(|&c| board.get(c).is_empty())
        .map(|at| Action::PlaceRing { at })
        .collect()
}

/// All ring moves for `player`, grouped by origin then direction.
fn ring_moves(board: &Board, player: Player) -> Vec<Action> {
    let ring = Cell::ring(player);
    let mut moves = Vec::new();
    for from in playable_coords() {
        if board.get(from) != ring {
            continue;
        }
        for &(dr, dc) in DIRECTIONS.iter() {
            push_ray_moves(board, from, dr, dc, &mut moves);
        }
    }
    moves
}

/// Walks one ray from `from`, pushing every legal destination.
///
/// Before any marker is crossed, each empty cell is a destination. Once
/// the ray enters a marker group the ring is committed to the jump and the
/// first empty cell is the only landing; rings, void cells, and the grid
/// edge end the ray.
fn push_ray_moves(board: &Board, from: Coord, dr: i8, dc: i8, moves: &mut Vec<Action>) {
    let mut cur = from;
    let mut jumped = false;
    loop {
        cur = match cur.offset(dr, dc) {
            Some(c) => c,
            None => return,
        };
        match board.get(cur) {
            Cell::Empty => {
                moves.push(Action::MoveRing { from, to: cur });
                if jumped {
                    return;
                }
            }
            Cell::WhiteMarker | Cell::BlackMarker => jumped = true,
            _ => return,
        }
    }
}

/// Picks a uniformly random action from a pre-computed list.
/// An empty list yields a pass.
pub fn random_action(actions: &[Action], rng: &mut impl Rng) -> Action {
    if actions.is_empty() {
        return Action::Pass;
    }
    actions[rng.gen_range(0..actions.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PLAYABLE_CELL_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn set(state: &mut GameState, cells: &[(u8, u8)], cell: Cell) {
        for &(row, col) in cells {
            state.board.set(Coord::new(row, col), cell);
        }
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Action {
        Action::MoveRing {
            from: Coord::new(from.0, from.1),
            to: Coord::new(to.0, to.1),
        }
    }

    #[test]
    fn opening_offers_one_placement_per_empty_cell() {
        let state = GameState::new();
        let actions = legal_actions(&state, Player::White);
        assert_eq!(actions.len(), PLAYABLE_CELL_COUNT);
        assert!(actions
            .iter()
            .all(|a| matches!(a, Action::PlaceRing { .. })));
        assert_eq!(
            actions[0],
            Action::PlaceRing {
                at: Coord::new(0, 1)
            },
            "placements start at the first playable cell"
        );
    }

    #[test]
    fn occupied_cells_are_not_placement_targets() {
        let mut state = GameState::new();
        set(&mut state, &[(5, 5)], Cell::WhiteRing);
        let actions = legal_actions(&state, Player::Black);
        assert_eq!(actions.len(), PLAYABLE_CELL_COUNT - 1);
        assert!(!actions.contains(&Action::PlaceRing {
            at: Coord::new(5, 5)
        }));
    }

    #[test]
    fn placement_ends_after_five_rings() {
        let mut state = GameState::new();
        set(
            &mut state,
            &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 1)],
            Cell::WhiteRing,
        );
        let actions = legal_actions(&state, Player::White);
        assert!(!actions.is_empty());
        assert!(actions
            .iter()
            .all(|a| matches!(a, Action::MoveRing { .. })));
    }

    #[test]
    fn central_ring_reaches_24_cells_on_an_open_board() {
        let mut state = GameState::new();
        set(&mut state, &[(5, 5)], Cell::WhiteRing);
        set(&mut state, &[(0, 1), (0, 2), (0, 3), (0, 4)], Cell::WhiteRing);
        let actions = legal_actions(&state, Player::White);
        let from_center = actions
            .iter()
            .filter(|a| matches!(a, Action::MoveRing { from, .. } if *from == Coord::new(5, 5)))
            .count();
        assert_eq!(from_center, 24);
    }

    #[test]
    fn rings_block_the_ray() {
        let mut state = GameState::new();
        set(&mut state, &[(5, 5), (0, 1), (0, 2), (0, 3)], Cell::WhiteRing);
        set(&mut state, &[(5, 7)], Cell::WhiteRing);
        let actions = legal_actions(&state, Player::White);
        assert!(actions.contains(&mv((5, 5), (5, 6))));
        assert!(!actions.contains(&mv((5, 5), (5, 7))));
        assert!(!actions.contains(&mv((5, 5), (5, 8))), "no jumping rings");
    }

    #[test]
    fn jump_lands_on_first_empty_after_the_group() {
        let mut state = GameState::new();
        set(
            &mut state,
            &[(5, 1), (0, 1), (0, 2), (0, 3), (0, 4)],
            Cell::WhiteRing,
        );
        set(&mut state, &[(5, 2), (5, 3)], Cell::BlackMarker);
        let actions = legal_actions(&state, Player::White);
        assert!(actions.contains(&mv((5, 1), (5, 4))));
        assert!(
            !actions.contains(&mv((5, 1), (5, 5))),
            "ring must stop on the first empty cell after a jump"
        );
    }

    #[test]
    fn slide_destinations_before_a_jump_are_kept() {
        let mut state = GameState::new();
        set(
            &mut state,
            &[(5, 1), (0, 1), (0, 2), (0, 3), (0, 4)],
            Cell::WhiteRing,
        );
        set(&mut state, &[(5, 3)], Cell::WhiteMarker);
        let actions = legal_actions(&state, Player::White);
        assert!(actions.contains(&mv((5, 1), (5, 2))));
        assert!(actions.contains(&mv((5, 1), (5, 4))));
        assert!(!actions.contains(&mv((5, 1), (5, 3))), "cannot land on a marker");
    }

    #[test]
    fn only_one_marker_group_may_be_jumped() {
        let mut state = GameState::new();
        set(
            &mut state,
            &[(5, 1), (0, 1), (0, 2), (0, 3), (0, 4)],
            Cell::WhiteRing,
        );
        set(&mut state, &[(5, 2), (5, 4)], Cell::BlackMarker);
        let actions = legal_actions(&state, Player::White);
        assert!(actions.contains(&mv((5, 1), (5, 3))));
        assert!(
            !actions.contains(&mv((5, 1), (5, 5))),
            "a second marker group ends the ray"
        );
    }

    #[test]
    fn pass_is_the_only_action_when_every_ring_is_boxed_in() {
        let mut state = GameState::new();
        // Two of white's rings already came off through scoring; the three
        // on the board are walled in by black's rings and the board edge.
        state.scores = [2, 0];
        set(&mut state, &[(0, 1), (0, 2), (0, 3)], Cell::WhiteRing);
        set(
            &mut state,
            &[(0, 4), (1, 1), (1, 2), (1, 3), (1, 4)],
            Cell::BlackRing,
        );
        let actions = legal_actions(&state, Player::White);
        assert_eq!(actions, vec![Action::Pass]);
    }

    #[test]
    fn finished_game_has_no_actions() {
        let mut state = GameState::new();
        state.scores = [3, 0];
        assert!(legal_actions(&state, Player::White).is_empty());
        assert!(legal_actions(&state, Player::Black).is_empty());
    }

    #[test]
    fn move_origins_come_out_in_scan_order() {
        let mut state = GameState::new();
        set(
            &mut state,
            &[(2, 2), (4, 4), (6, 6), (0, 1), (0, 2)],
            Cell::WhiteRing,
        );
        let actions = legal_actions(&state, Player::White);
        let origins: Vec<Coord> = actions
            .iter()
            .filter_map(|a| match a {
                Action::MoveRing { from, .. } => Some(*from),
                _ => None,
            })
            .collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
    }

    #[test]
    fn random_action_is_deterministic_for_a_seed() {
        let state = GameState::new();
        let actions = legal_actions(&state, Player::White);
        let a = random_action(&actions, &mut StdRng::seed_from_u64(7));
        let b = random_action(&actions, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn random_action_on_empty_list_passes() {
        let mut rng = seeded_rng();
        assert_eq!(random_action(&[], &mut rng), Action::Pass);
    }

    #[test]
    fn random_action_stays_in_the_list() {
        let state = GameState::new();
        let actions = legal_actions(&state, Player::White);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = random_action(&actions, &mut rng);
            assert!(actions.contains(&picked), "picked {:?} outside the list", picked);
        }
    }
}
