//! Core game logic - pure, deterministic given a seed, and testable
//!
//! This crate owns the playfield rules: piece geometry, move/rotate
//! validation, line clearing and scoring. It has no dependencies on
//! rendering, input, timing or I/O.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shapes and their compile-time rotation tables
//! - [`piece`]: one live falling piece (origin, orientation, previous footprint)
//! - [`board`]: the settled grid with validate-then-commit moves and line clears
//! - [`scoring`]: the soft-drop and settle score tables
//! - [`rng`]: uniform random piece selection
//!
//! # Rules
//!
//! - **Validation is all-or-nothing**: a move either lands all four cells or
//!   leaves the board and piece untouched.
//! - **Soft drop**: every successful downward step scores 1 point.
//! - **Settle**: clearing 0/1/2/3/4 rows scores 1/50/100/200/500.
//! - **No kicks**: a rotation that collides is simply rejected.
//!
//! # Example
//!
//! ```
//! use tetrominoes_core::{Board, Piece};
//! use tetrominoes_types::{MovementDirection, PieceId, PieceKind, RotationDirection};
//!
//! let mut board = Board::new();
//! let mut piece = Piece::spawn(PieceId(1), PieceKind::I, board.spawn_point());
//!
//! while board
//!     .try_move(&mut piece, MovementDirection::Down, RotationDirection::NoRotation)
//!     .unwrap()
//! {}
//! assert_eq!(piece.cells().iter().map(|c| c.y).min(), Some(0));
//! assert_eq!(board.clear_full_lines(&piece), 0);
//! ```

pub mod board;
pub mod error;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use tetrominoes_types as types;

pub use board::Board;
pub use error::{Conflict, CoreError};
pub use piece::Piece;
pub use pieces::{get_shape, initial_top_offset, PieceShape};
pub use rng::UniformKinds;
pub use scoring::{drop_score, settle_score};
