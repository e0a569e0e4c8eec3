//! Self-play game generation for agent evaluation.
//!
//! Plays full YINSH games between two configured agents, recording the YFEN
//! state and chosen action at every ply. Records serialize to JSONL for
//! offline analysis of strategy matchups.

use std::io::Write;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::agent::{Agent, HeuristicAgent, RandomAgent};
use crate::board::{GameState, Player, ALL_PLAYERS, WINNING_SCORE};
use crate::eval::Strategy;
use crate::movegen::legal_actions;
use crate::protocol::yfen::encode_yfen;
use crate::rules::{is_game_over, play, winner};

/// Which agent plays one side of a self-play game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSpec {
    /// One-ply heuristic agent with the given strategy.
    Heuristic(Strategy),
    /// Uniform random agent, as a baseline opponent.
    Random,
}

impl AgentSpec {
    pub fn name(&self) -> &'static str {
        match self {
            AgentSpec::Heuristic(strategy) => strategy.name(),
            AgentSpec::Random => "random",
        }
    }

    /// Builds the agent for one side. `seed` fixes the fallback RNG;
    /// `None` seeds from entropy.
    pub fn build(&self, player: Player, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            AgentSpec::Heuristic(strategy) => match seed {
                Some(s) => Box::new(HeuristicAgent::seeded(player, *strategy, s)),
                None => Box::new(HeuristicAgent::new(player, *strategy)),
            },
            AgentSpec::Random => match seed {
                Some(s) => Box::new(RandomAgent::seeded(s)),
                None => Box::new(RandomAgent::new()),
            },
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown agent spec: {0}")]
pub struct ParseAgentSpecError(pub String);

impl FromStr for AgentSpec {
    type Err = ParseAgentSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "random" {
            return Ok(AgentSpec::Random);
        }
        s.parse::<Strategy>()
            .map(AgentSpec::Heuristic)
            .map_err(|_| ParseAgentSpecError(s.to_string()))
    }
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Maximum plies per game before forced termination.
    pub max_plies: usize,
    /// Agent playing white.
    pub white: AgentSpec,
    /// Agent playing black.
    pub black: AgentSpec,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 10,
            max_plies: 500,
            white: AgentSpec::Heuristic(Strategy::Balanced),
            black: AgentSpec::Heuristic(Strategy::Balanced),
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A player reached the winning score.
    Points,
    /// The marker pool ran out before anyone won.
    PoolExhausted,
    /// The ply limit was hit with the game still running.
    PlyCap,
}

/// A single recorded ply from a self-play game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlyRecord {
    /// YFEN of the position before the action.
    pub yfen: String,
    /// The player to move ("white" or "black").
    pub player: String,
    /// The chosen action in move notation.
    pub action: String,
}

/// A complete self-play game record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID.
    pub game_id: usize,
    /// Base RNG seed for this game, absent for entropy-seeded runs.
    pub seed: Option<u64>,
    /// The winning player's name, if any.
    pub winner: Option<String>,
    /// Final scores indexed white, black.
    pub final_scores: [u8; 2],
    /// How the game ended.
    pub termination: Termination,
    /// All plies in order.
    pub plies: Vec<PlyRecord>,
}

/// Derives the per-side RNG seeds for one game. Zero means entropy.
fn game_seeds(config: &SelfPlayConfig, game_id: usize) -> (Option<u64>, Option<u64>) {
    if config.seed == 0 {
        return (None, None);
    }
    let base = config.seed.wrapping_add((game_id as u64).wrapping_mul(2));
    (Some(base), Some(base.wrapping_add(1)))
}

/// Plays a single self-play game and returns the game record.
pub fn play_game(config: &SelfPlayConfig, game_id: usize) -> GameRecord {
    let (white_seed, black_seed) = game_seeds(config, game_id);
    let mut white = config.white.build(Player::White, white_seed);
    let mut black = config.black.build(Player::Black, black_seed);

    let mut state = GameState::new();
    let mut plies: Vec<PlyRecord> = Vec::new();

    while plies.len() < config.max_plies && !is_game_over(&state) {
        let player = state.turn;
        let actions = legal_actions(&state, player);
        let agent = match player {
            Player::White => &mut white,
            Player::Black => &mut black,
        };
        let action = agent.select_action(&actions, &state);

        plies.push(PlyRecord {
            yfen: encode_yfen(&state),
            player: player.name().to_string(),
            action: action.to_string(),
        });

        state = play(&state, &action);
    }

    let termination = if ALL_PLAYERS.iter().any(|&p| state.score(p) >= WINNING_SCORE) {
        Termination::Points
    } else if state.markers_remaining() == 0 {
        Termination::PoolExhausted
    } else {
        Termination::PlyCap
    };

    GameRecord {
        game_id,
        seed: white_seed,
        winner: winner(&state).map(|p| p.name().to_string()),
        final_scores: state.scores,
        termination,
        plies,
    }
}

/// Runs self-play generation, producing multiple game records.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(config.num_games);
    run_self_play_with_callback(config, |game| {
        games.push(game);
    });
    games
}

/// Runs self-play generation, calling `on_game` with each completed game record.
///
/// This allows the caller to process games incrementally (e.g. write to disk)
/// rather than waiting for all games to finish.
pub fn run_self_play_with_callback<F>(config: &SelfPlayConfig, on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    if config.threads > 1 {
        run_self_play_parallel(config, on_game);
    } else {
        run_self_play_sequential(config, on_game);
    }
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord),
{
    for i in 0..config.num_games {
        let game_start = Instant::now();
        let game = play_game(config, i);
        if !config.quiet {
            report_game(&game, i + 1, config.num_games, game_start);
        }
        on_game(game);
    }
}

/// Parallel self-play: plays games concurrently using rayon.
/// Uses a channel to deliver completed games to the callback from worker threads.
fn run_self_play_parallel<F>(config: &SelfPlayConfig, mut on_game: F)
where
    F: FnMut(GameRecord) + Send,
{
    use rayon::prelude::*;
    use std::sync::mpsc;

    let completed = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<GameRecord>();

    // Build thread pool with configured thread count.
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .expect("failed to build rayon thread pool");

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        pool.install(|| {
            (0..config_clone.num_games)
                .into_par_iter()
                .for_each_with(tx, |tx, i| {
                    let game_start = Instant::now();
                    let game = play_game(&config_clone, i);
                    if !config_clone.quiet {
                        let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        report_game(&game, n, config_clone.num_games, game_start);
                    }
                    let _ = tx.send(game);
                });
        });
    });

    // Receive completed games on the main thread and pass to callback.
    for game in rx {
        on_game(game);
    }

    handle.join().expect("selfplay worker thread panicked");
}

/// Prints a one-line progress report for a finished game.
fn report_game(game: &GameRecord, n: usize, total: usize, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    let outcome = match &game.winner {
        Some(w) => format!("{} wins", w),
        None => "draw".to_string(),
    };
    eprintln!(
        "Game {}/{}: {} in {} plies ({:.1}s)",
        n,
        total,
        outcome,
        game.plies.len(),
        elapsed,
    );
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let total = games.len();
    let mut win_counts = [0usize; 2];
    let mut draw_count = 0usize;
    let mut capped_count = 0usize;
    let mut total_plies = 0usize;

    for game in games {
        total_plies += game.plies.len();
        match game.winner.as_deref().and_then(Player::from_name) {
            Some(p) => win_counts[p as usize] += 1,
            None => draw_count += 1,
        }
        if game.termination == Termination::PlyCap {
            capped_count += 1;
        }
    }

    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", total);
    eprintln!(
        "Avg plies/game: {:.1}",
        total_plies as f64 / total.max(1) as f64
    );
    eprintln!("Draws: {}", draw_count);
    eprintln!("Hit ply cap: {}", capped_count);
    eprintln!("Win distribution:");
    for player in ALL_PLAYERS {
        let pct = 100.0 * win_counts[player as usize] as f64 / total.max(1) as f64;
        eprintln!(
            "  {:>5}: {} ({:.1}%)",
            player.name(),
            win_counts[player as usize],
            pct
        );
    }
}
