//! Piece module - one live, falling tetromino
//!
//! A piece only knows its own geometry. It computes candidate positions for
//! the board to validate and commits them once the board has accepted.

use arrayvec::ArrayVec;

use crate::pieces::{get_shape, initial_top_offset, PieceShape};
use crate::types::{Coordinate, MovementDirection, PieceId, PieceKind, RotationDegree, RotationDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    origin: Coordinate,
    previous_origin: Coordinate,
    orientation: RotationDegree,
    previous_footprint: PieceShape,
}

impl Piece {
    /// Create a piece at `origin` in the given orientation.
    ///
    /// The previous position equals the current one, so committing a
    /// `NoMovement` step writes the piece where it stands.
    pub fn new(id: PieceId, kind: PieceKind, origin: Coordinate, orientation: RotationDegree) -> Self {
        Self {
            id,
            kind,
            origin,
            previous_origin: origin,
            orientation,
            previous_footprint: *get_shape(kind, orientation),
        }
    }

    /// Create a freshly spawned piece whose topmost cell sits on the spawn row.
    pub fn spawn(id: PieceId, kind: PieceKind, spawn_point: Coordinate) -> Self {
        let origin = spawn_point.translate(0, -initial_top_offset(kind));
        Self::new(id, kind, origin, RotationDegree::Degree0)
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn previous_origin(&self) -> Coordinate {
        self.previous_origin
    }

    pub fn orientation(&self) -> RotationDegree {
        self.orientation
    }

    /// Offsets for the current orientation
    pub fn offsets(&self) -> &'static PieceShape {
        get_shape(self.kind, self.orientation)
    }

    pub fn previous_footprint(&self) -> &PieceShape {
        &self.previous_footprint
    }

    /// Origin after `movement`, without mutating the piece.
    pub fn candidate_origin(&self, movement: MovementDirection) -> Coordinate {
        let (dx, dy) = movement.delta();
        self.origin.translate(dx, dy)
    }

    /// Offsets after `rotation`, without mutating the piece.
    pub fn candidate_footprint(&self, rotation: RotationDirection) -> &'static PieceShape {
        match rotation {
            RotationDirection::NoRotation => self.offsets(),
            _ => get_shape(self.kind, self.orientation.rotate(rotation)),
        }
    }

    /// Apply a move the board has already validated.
    pub fn commit(&mut self, movement: MovementDirection, rotation: RotationDirection) {
        self.previous_origin = self.origin;
        self.previous_footprint = *self.offsets();

        let (dx, dy) = movement.delta();
        self.origin = self.origin.translate(dx, dy);

        if rotation != RotationDirection::NoRotation {
            self.orientation = self.orientation.rotate(rotation);
        }
    }

    /// The 4 absolute cells the piece occupies
    pub fn cells(&self) -> [Coordinate; 4] {
        (*self.offsets()).map(|v| self.origin + v)
    }

    /// The 4 absolute cells the piece occupied before the last commit
    pub fn previous_cells(&self) -> [Coordinate; 4] {
        self.previous_footprint.map(|v| self.previous_origin + v)
    }

    /// Distinct rows covered by the piece, highest first.
    pub fn touched_rows(&self) -> ArrayVec<i32, 4> {
        let mut rows: ArrayVec<i32, 4> = ArrayVec::new();
        for cell in self.cells() {
            if !rows.contains(&cell.y) {
                rows.push(cell.y);
            }
        }
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows
    }
}
