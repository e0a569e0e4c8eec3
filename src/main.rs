//! Ringmaster -- a YINSH engine implementing the YUI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the YUI (Yinsh Universal Interface) convention.

use std::io::{self, BufRead};

use ringmaster::engine::Engine;
use ringmaster::protocol::parser::{parse_command, Command};

/// Runs the main YUI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Yui => {
                engine.handle_yui(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { yfen } => {
                if let Err(e) = engine.set_position(&yfen) {
                    eprintln!("{}", e);
                }
            }
            Command::SetPlayer { player } => {
                engine.set_player(player);
            }
            Command::Go(_params) => {
                engine.handle_go(&mut out);
            }
            Command::Stop => {
                // Selection completes synchronously; nothing to interrupt
            }
            Command::Quit => {
                break;
            }
        }
    }
}
