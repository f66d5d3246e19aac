//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::Command`]s. The mapping
//! is the only thing this crate knows; what a command does is up to the
//! session it is delivered to.

pub mod map;

pub use tetrominoes_types as types;

pub use map::{handle_key_event, should_quit};
