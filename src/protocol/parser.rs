//! YUI command parser.
//!
//! Parses incoming YUI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

use crate::board::Player;

/// Search constraints passed with the `go` command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoParams {
    pub movetime: Option<u64>,
}

/// A parsed server-to-engine YUI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the YUI protocol handshake.
    Yui,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position from a YFEN string.
    Position { yfen: String },

    /// Set the side the engine plays in the current position.
    SetPlayer { player: Player },

    /// Begin calculating a move with optional constraints.
    Go(GoParams),

    /// Interrupt the current calculation immediately.
    Stop,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "yui" => Some(Command::Yui),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "stop" => Some(Command::Stop),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens, trimmed),
        "setplayer" => parse_setplayer(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                eprintln!("malformed setoption: empty name");
                return None;
            }
            let name = name_parts.join(" ");
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name, value)
        }
        None => {
            let name = tokens[2..].join(" ");
            (name, None)
        }
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <yfen>` -- the YFEN spans multiple tokens.
fn parse_position(tokens: &[&str], full_line: &str) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed position: expected 'position <yfen>'");
        return None;
    }
    let yfen = full_line
        .strip_prefix("position")
        .unwrap_or("")
        .trim()
        .to_string();
    Some(Command::Position { yfen })
}

/// Parses `setplayer <white|black>`.
fn parse_setplayer(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed setplayer: expected 'setplayer <white|black>'");
        return None;
    }
    match Player::from_name(tokens[1]) {
        Some(player) => Some(Command::SetPlayer { player }),
        None => {
            eprintln!("unknown player: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `go [movetime <ms>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let mut params = GoParams::default();
    let mut i = 1;

    while i < tokens.len() {
        match tokens[i] {
            "movetime" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u64>() {
                        Ok(v) => params.movetime = Some(v),
                        Err(_) => {
                            eprintln!("invalid movetime value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}
