use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ringmaster::agent::{Agent, HeuristicAgent};
use ringmaster::board::{Action, Coord, Player};
use ringmaster::eval::{evaluate, potential, score_line, LineCatalog, Strategy};
use ringmaster::movegen::legal_actions;
use ringmaster::protocol::yfen::parse_yfen;
use ringmaster::rules::play;

const START_YFEN: &str = "4/7/8/9/10/9/10/9/8/7/4 w 0 0";

/// Midgame position: all ten rings placed, seven markers on the board.
const MIDGAME_YFEN: &str = "4/2R4/2R2R2/3MM1m2/4r2R2/2m1Mm3/2r4r2/2m2R3/2r3r1/7/4 w 0 0";

fn bench_line_catalog_build(c: &mut Criterion) {
    c.bench_function("line_catalog_build", |b| b.iter(LineCatalog::new));
}

fn bench_score_line(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    let catalog = LineCatalog::new();
    let line = &catalog.lines()[4];
    c.bench_function("score_line_middle_row", |b| {
        b.iter(|| score_line(black_box(&state.board), black_box(line), Player::White))
    });
}

fn bench_potential(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    let catalog = LineCatalog::new();
    c.bench_function("potential_27_lines", |b| {
        b.iter(|| potential(Player::White, black_box(&state), &catalog))
    });
}

fn bench_evaluate_balanced(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    let catalog = LineCatalog::new();
    c.bench_function("evaluate_balanced", |b| {
        b.iter(|| {
            evaluate(
                Strategy::Balanced,
                Player::White,
                black_box(&state),
                &catalog,
            )
        })
    });
}

fn bench_movegen_placement(c: &mut Criterion) {
    let state = parse_yfen(START_YFEN).unwrap();
    c.bench_function("movegen_placement_85_cells", |b| {
        b.iter(|| legal_actions(black_box(&state), Player::White))
    });
}

fn bench_movegen_movement(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    c.bench_function("movegen_movement_5_rings", |b| {
        b.iter(|| legal_actions(black_box(&state), Player::White))
    });
}

fn bench_play_jump_flip(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    // h8-d8 jumps the black marker at e8 and flips it.
    let action = Action::MoveRing {
        from: Coord::new(7, 7),
        to: Coord::new(7, 3),
    };
    c.bench_function("play_jump_flip", |b| {
        b.iter(|| play(black_box(&state), black_box(&action)))
    });
}

fn bench_select_action_midgame(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    let actions = legal_actions(&state, Player::White);
    c.bench_function("select_action_midgame", |b| {
        let mut agent = HeuristicAgent::seeded(Player::White, Strategy::Balanced, 1);
        b.iter(|| agent.select_action(black_box(&actions), black_box(&state)))
    });
}

fn bench_game_state_clone(c: &mut Criterion) {
    let state = parse_yfen(MIDGAME_YFEN).unwrap();
    c.bench_function("game_state_clone", |b| b.iter(|| black_box(&state).clone()));
}

criterion_group!(
    benches,
    bench_line_catalog_build,
    bench_score_line,
    bench_potential,
    bench_evaluate_balanced,
    bench_movegen_placement,
    bench_movegen_movement,
    bench_play_jump_flip,
    bench_select_action_midgame,
    bench_game_state_clone,
);
criterion_main!(benches);
