//! Read-only view of a session for renderers, status lines and JSON output.

use serde::Serialize;

use crate::core::Piece;
use crate::types::{
    Coordinate, PieceId, PieceKind, RotationDegree, SessionState, BOARD_HEIGHT, BOARD_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub id: PieceId,
    pub kind: PieceKind,
    pub origin: Coordinate,
    pub orientation: RotationDegree,
    pub cells: [Coordinate; 4],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            id: value.id(),
            kind: value.kind(),
            origin: value.origin(),
            orientation: value.orientation(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, bottom row first. The active piece's cells are included.
    pub cells: Vec<Option<PieceKind>>,
    pub score: u32,
    pub lines_cleared: u32,
    pub state: SessionState,
    pub pieces_settled: u32,
    pub active: Option<ActiveSnapshot>,
}

impl Snapshot {
    /// Kind occupying (x, y); `None` when empty or out of bounds
    pub fn kind_at(&self, x: i32, y: i32) -> Option<PieceKind> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .flatten()
    }

    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
            score: 0,
            lines_cleared: 0,
            state: SessionState::Idle,
            pieces_settled: 0,
            active: None,
        }
    }
}
