//! Tetrominoes (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the runner
//! configuration shared by the binary and the integration tests.

pub mod config;
pub mod headless;

pub use tetrominoes_core as core;
pub use tetrominoes_engine as engine;
pub use tetrominoes_input as input;
pub use tetrominoes_term as term;
pub use tetrominoes_types as types;
