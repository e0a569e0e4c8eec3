//! Action types and move notation.
//!
//! The three things a player can do on their turn: place a ring during the
//! opening, move a ring afterwards, or pass when no ring can move. Notation
//! is the algebraic coordinate form from [`super::coord`]: a placement is
//! the bare target (`f6`), a ring move joins origin and target with a dash
//! (`f6-f9`), and a pass is the literal `pass`.

use std::fmt;
use std::str::FromStr;

use super::coord::{Coord, ParseCoordError};

/// A single turn's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Place a ring on an empty intersection: `f6`
    PlaceRing { at: Coord },

    /// Move a ring from one intersection to another: `f6-f9`
    MoveRing { from: Coord, to: Coord },

    /// Forfeit the turn (only legal when no ring can move): `pass`
    Pass,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlaceRing { at } => write!(f, "{}", at),
            Action::MoveRing { from, to } => write!(f, "{}-{}", from, to),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// Errors from parsing move notation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty action")]
    Empty,

    #[error("invalid coordinate: {0}")]
    Coord(#[from] ParseCoordError),

    #[error("expected 'from-to', got '{0}'")]
    MalformedMove(String),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseActionError::Empty);
        }
        if s == "pass" {
            return Ok(Action::Pass);
        }

        match s.split_once('-') {
            Some((from_str, to_str)) => {
                if from_str.is_empty() || to_str.is_empty() {
                    return Err(ParseActionError::MalformedMove(s.to_string()));
                }
                let from = from_str.parse()?;
                let to = to_str.parse()?;
                Ok(Action::MoveRing { from, to })
            }
            None => {
                let at = s.parse()?;
                Ok(Action::PlaceRing { at })
            }
        }
    }
}
