//! YUI protocol handling.
//!
//! This module implements parsing and serialization for the YUI (Yinsh
//! Universal Interface) protocol, including YFEN position encoding and the
//! command parser for the main loop.

pub mod parser;
pub mod yfen;

pub use parser::{parse_command, Command, GoParams};
pub use yfen::{encode_yfen, parse_yfen, YfenError};
