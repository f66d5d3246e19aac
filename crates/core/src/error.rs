//! Error types for the core crate.
//!
//! Rejected moves are not errors; they are reported as `Ok(false)`.

use std::fmt;

use crate::types::{Coordinate, PieceId};

/// Why a committed cell failed the write-time re-check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    OutOfBounds,
    Occupied { by: PieceId },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conflict::OutOfBounds => write!(f, "cell is outside the board"),
            Conflict::Occupied { by } => write!(f, "cell is occupied by piece {}", by),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A board needs at least one column and one row, and at most
    /// `MAX_BOARD_DIMENSION` of each.
    InvalidDimensions { width: u16, height: u16 },
    /// Validation accepted a move whose committed footprint cannot be written.
    ///
    /// This is a programming error in the engine, never a game event.
    Inconsistent {
        piece: PieceId,
        cell: Coordinate,
        conflict: Conflict,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidDimensions { width, height } => {
                write!(f, "invalid board dimensions {}x{}", width, height)
            }
            CoreError::Inconsistent {
                piece,
                cell,
                conflict,
            } => write!(
                f,
                "board consistency violation: piece {} at {}: {}",
                piece, cell, conflict
            ),
        }
    }
}

impl std::error::Error for CoreError {}
