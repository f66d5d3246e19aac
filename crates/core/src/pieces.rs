//! Pieces module - tetromino shapes and their rotation tables
//!
//! Each kind is defined by its four 0° vertex offsets. The 90°, 180° and 270°
//! tables are derived from those by repeated quarter turns `(x, y) -> (y, -x)`.
//! All tables are evaluated at compile time into one read-only static, so every
//! piece of a kind shares the same geometry.

use crate::types::{Coordinate, PieceKind, RotationDegree};

/// Shape of a piece - 4 vertex offsets from the piece origin
pub type PieceShape = [Coordinate; 4];

/// One shape per orientation, indexed by [`RotationDegree::index`]
pub type RotationTable = [PieceShape; 4];

const fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// 0° offsets for each kind.
const fn base_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::Z => [c(0, -1), c(0, 0), c(-1, 0), c(-1, 1)],
        PieceKind::S => [c(0, -1), c(0, 0), c(1, 0), c(1, 1)],
        PieceKind::I => [c(0, -1), c(0, 0), c(0, 1), c(0, 2)],
        PieceKind::T => [c(-1, 0), c(0, 0), c(1, 0), c(0, 1)],
        PieceKind::O => [c(0, 0), c(1, 0), c(0, 1), c(1, 1)],
        PieceKind::J => [c(-1, -1), c(0, -1), c(0, 0), c(0, 1)],
        PieceKind::L => [c(1, -1), c(0, -1), c(0, 0), c(0, 1)],
    }
}

const fn quarter_turn(shape: PieceShape) -> PieceShape {
    let mut out = shape;
    let mut i = 0;
    while i < 4 {
        out[i] = shape[i].rotate_quarter();
        i += 1;
    }
    out
}

const fn rotation_table(kind: PieceKind) -> RotationTable {
    let d0 = base_shape(kind);
    let d90 = quarter_turn(d0);
    let d180 = quarter_turn(d90);
    let d270 = quarter_turn(d180);
    [d0, d90, d180, d270]
}

const fn build_tables() -> [RotationTable; 7] {
    let mut tables = [[[c(0, 0); 4]; 4]; 7];
    let mut k = 0;
    while k < 7 {
        tables[k] = rotation_table(PieceKind::ALL[k]);
        k += 1;
    }
    tables
}

static ROTATION_TABLES: [RotationTable; 7] = build_tables();

/// Get the rotation table for a piece kind
pub fn rotation_table_of(kind: PieceKind) -> &'static RotationTable {
    &ROTATION_TABLES[kind.index()]
}

/// Get the shape (vertex offsets) for a piece kind and orientation
pub fn get_shape(kind: PieceKind, degree: RotationDegree) -> &'static PieceShape {
    &ROTATION_TABLES[kind.index()][degree.index()]
}

/// Highest y offset among the 0° vertices.
///
/// A freshly spawned piece is lowered by this amount so its top cell sits on
/// the spawn row.
pub fn initial_top_offset(kind: PieceKind) -> i32 {
    get_shape(kind, RotationDegree::Degree0)
        .iter()
        .map(|v| v.y)
        .max()
        .unwrap_or(0)
}
