//! Ringmaster engine library.
//!
//! Exposes the board representation, rules, move generation, evaluation,
//! agent, and protocol modules for use by integration tests and the binary
//! entry points.

pub mod agent;
pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod rules;
pub mod selfplay;
