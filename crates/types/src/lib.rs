//! Shared types module - pure data structures and constants
//!
//! Everything here is plain data with no behavior beyond small pure helpers,
//! so the same types can flow through the engine, the terminal front-end and
//! the JSON snapshot without conversion layers.
//!
//! # Coordinates
//!
//! The playfield uses a y-up coordinate system:
//!
//! - **x**: columns, `0..width`, left to right
//! - **y**: rows, `0..height`, row 0 is the **bottom** row
//! - **Spawn point**: `(width / 2, height - 1)`
//!
//! # Examples
//!
//! ```
//! use tetrominoes_types::{Coordinate, PieceKind, RotationDegree, RotationDirection};
//!
//! let origin = Coordinate::new(5, 10);
//! assert_eq!(origin.translate(-1, 0), Coordinate::new(4, 10));
//!
//! let degree = RotationDegree::Degree0.rotate(RotationDirection::Left);
//! assert_eq!(degree, RotationDegree::Degree90);
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! ```

use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells (22 rows)
pub const BOARD_HEIGHT: u16 = 22;

/// Largest accepted board width or height
pub const MAX_BOARD_DIMENSION: u16 = 512;

/// Default interval between gravity ticks (400ms)
pub const DEFAULT_TICK_MS: u64 = 400;

/// Points awarded for one settle, indexed by the number of rows it cleared.
///
/// A settle that clears nothing still awards one point.
pub const SETTLE_SCORES: [u32; 5] = [1, 50, 100, 200, 500];

/// Points awarded for every successful downward step.
pub const SOFT_DROP_SCORE: u32 = 1;

/// A 2D integer point, used both as an absolute cell address and as an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`.
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Rotate a quarter turn about the origin: `(x, y) -> (y, -x)`.
    pub const fn rotate_quarter(self) -> Self {
        Self {
            x: self.y,
            y: -self.x,
        }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        self.translate(rhs.x, rhs.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Requested translation for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MovementDirection {
    Left,
    Right,
    Down,
    NoMovement,
}

impl MovementDirection {
    /// Origin displacement `(dx, dy)` for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            MovementDirection::Left => (-1, 0),
            MovementDirection::Right => (1, 0),
            MovementDirection::Down => (0, -1),
            MovementDirection::NoMovement => (0, 0),
        }
    }

    /// Exact translation inverse (`Down` has no upward counterpart and maps to itself).
    pub const fn inverse(self) -> Self {
        match self {
            MovementDirection::Left => MovementDirection::Right,
            MovementDirection::Right => MovementDirection::Left,
            other => other,
        }
    }
}

/// Requested rotation for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RotationDirection {
    Left,
    Right,
    NoRotation,
}

/// Piece orientation. Exactly one of four values, forming a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RotationDegree {
    #[default]
    Degree0,
    Degree90,
    Degree180,
    Degree270,
}

impl RotationDegree {
    /// All orientations in increasing order.
    pub const ALL: [RotationDegree; 4] = [
        RotationDegree::Degree0,
        RotationDegree::Degree90,
        RotationDegree::Degree180,
        RotationDegree::Degree270,
    ];

    /// Step the orientation.
    ///
    /// `Left` advances (270 wraps to 0), `Right` goes back (0 wraps to 270).
    pub const fn rotate(self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Left => self.step_left(),
            RotationDirection::Right => self.step_right(),
            RotationDirection::NoRotation => self,
        }
    }

    const fn step_left(self) -> Self {
        match self {
            RotationDegree::Degree0 => RotationDegree::Degree90,
            RotationDegree::Degree90 => RotationDegree::Degree180,
            RotationDegree::Degree180 => RotationDegree::Degree270,
            RotationDegree::Degree270 => RotationDegree::Degree0,
        }
    }

    const fn step_right(self) -> Self {
        match self {
            RotationDegree::Degree0 => RotationDegree::Degree270,
            RotationDegree::Degree270 => RotationDegree::Degree180,
            RotationDegree::Degree180 => RotationDegree::Degree90,
            RotationDegree::Degree90 => RotationDegree::Degree0,
        }
    }

    /// Table index (0..4).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            RotationDegree::Degree0 => 0,
            RotationDegree::Degree90 => 90,
            RotationDegree::Degree180 => 180,
            RotationDegree::Degree270 => 270,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven tetromino kinds
///
/// - **Z**: red, skewed
/// - **S**: green, skewed (mirror of Z)
/// - **I**: blue, straight line of four
/// - **T**: yellow, T-shaped
/// - **O**: magenta, 2x2 square
/// - **J**: cyan, the "L" with its foot to the left
/// - **L**: amber, the mirrored L
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Z,
    S,
    I,
    T,
    O,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Index into per-kind tables (0..7).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Display color of this kind.
    pub const fn color(self) -> Rgb {
        match self {
            PieceKind::Z => Rgb::new(204, 102, 102),
            PieceKind::S => Rgb::new(102, 204, 102),
            PieceKind::I => Rgb::new(102, 102, 204),
            PieceKind::T => Rgb::new(204, 204, 102),
            PieceKind::O => Rgb::new(204, 102, 204),
            PieceKind::J => Rgb::new(102, 204, 204),
            PieceKind::L => Rgb::new(218, 170, 0),
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use tetrominoes_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::I => "i",
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Identity of one spawned piece. Board cells are attributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct PieceId(pub u32);

impl PieceId {
    pub const fn next(self) -> Self {
        PieceId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which piece owns an occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Occupant {
    pub piece: PieceId,
    pub kind: PieceKind,
}

/// Cell on the board (None = empty)
pub type Cell = Option<Occupant>;

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::GameOver => "gameOver",
        }
    }
}

/// Commands delivered to a session by the tick source and the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter Running from Idle or GameOver.
    Start,
    /// Spawn the next piece.
    SpawnNext,
    /// Gravity step.
    Tick,
    Move(MovementDirection),
    Rotate(RotationDirection),
    /// Drop until the piece settles.
    HardDrop,
    Pause,
    Resume,
    TogglePause,
    Reset,
}
