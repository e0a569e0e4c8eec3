//! Engine state management.
//!
//! Holds the current board position, the side the engine plays, and engine
//! options, and runs one-ply move selection for the `go` command.

use std::collections::HashMap;
use std::io::Write;

use crate::agent::{Agent, HeuristicAgent};
use crate::board::{GameState, Player};
use crate::eval::Strategy;
use crate::movegen::legal_actions;
use crate::protocol::yfen::parse_yfen;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<GameState>,
    pub player: Option<Player>,
    pub options: HashMap<String, String>,
}

impl Engine {
    /// Creates a new engine with no position or player.
    pub fn new() -> Self {
        Engine {
            position: None,
            player: None,
            options: HashMap::new(),
        }
    }

    /// Resets all engine state for a new game.
    pub fn new_game(&mut self) {
        self.position = None;
        self.player = None;
    }

    /// Sets the current board position from a YFEN string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, yfen: &str) -> Result<(), String> {
        match parse_yfen(yfen) {
            Ok(state) => {
                self.position = Some(state);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse YFEN: {}", e)),
        }
    }

    /// Sets the side the engine plays.
    pub fn set_player(&mut self, player: Player) {
        self.player = Some(player);
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        match value {
            Some(v) => {
                self.options.insert(name, v);
            }
            None => {
                self.options.insert(name, String::new());
            }
        }
    }

    /// Returns the configured strategy from options (default balanced).
    fn strategy(&self) -> Strategy {
        self.options
            .get("Strategy")
            .and_then(|v| v.parse::<Strategy>().ok())
            .unwrap_or_default()
    }

    /// Returns the configured fallback seed from options. Zero (the
    /// default) means seed from entropy.
    fn seed(&self) -> Option<u64> {
        self.options
            .get("Seed")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&s| s != 0)
    }

    /// Handles the YUI handshake: writes id, options, protocol_version, and yuiok.
    pub fn handle_yui<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name ringmaster").unwrap();
        writeln!(out, "id author five-rings").unwrap();
        writeln!(
            out,
            "option name Strategy type combo default balanced var balanced var offensive var defensive"
        )
        .unwrap();
        writeln!(out, "option name Seed type spin default 0 min 0 max 2147483647").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "yuiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `go` command: runs one-ply selection for the active
    /// player and reports the chosen action. Selection is effectively
    /// instantaneous, so any movetime constraint is ignored. A `go` whose
    /// configured side is not the side to move is refused with a stderr
    /// note, like a missing position.
    pub fn handle_go<W: Write>(&self, out: &mut W) {
        let state = match &self.position {
            Some(s) => s,
            None => {
                eprintln!("go: no position set");
                return;
            }
        };

        let player = match self.player {
            Some(p) => p,
            None => {
                eprintln!("go: no player set");
                return;
            }
        };

        if player != state.turn {
            eprintln!(
                "go: engine plays {} but {} is to move",
                player.name(),
                state.turn.name()
            );
            return;
        }

        let strategy = self.strategy();
        let mut agent = match self.seed() {
            Some(seed) => HeuristicAgent::seeded(player, strategy, seed),
            None => HeuristicAgent::new(player, strategy),
        };

        let actions = legal_actions(state, player);
        let action = agent.select_action(&actions, state);

        writeln!(
            out,
            "info strategy {} candidates {}",
            strategy.name(),
            actions.len()
        )
        .unwrap();
        writeln!(out, "bestmove {}", action).unwrap();
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
