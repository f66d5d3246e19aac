//! Board module - the grid of settled cells and the move/clear rules
//!
//! The board is a `width x height` grid stored as a flat row-major vector.
//! Coordinates: (x, y) with x in `0..width` (left to right) and y in
//! `0..height` (bottom to top). Every occupied cell records which piece owns
//! it, which is what lets a moving piece overlap its own previous footprint.
//!
//! New pieces spawn at `(width / 2, height - 1)`.

use tracing::{debug, trace};

use crate::error::{Conflict, CoreError};
use crate::piece::Piece;
use crate::scoring::{drop_score, settle_score};
use crate::types::{
    Cell, Coordinate, MovementDirection, Occupant, PieceId, Rgb, RotationDirection, BOARD_HEIGHT,
    BOARD_WIDTH, MAX_BOARD_DIMENSION,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x), row 0 at the bottom
    cells: Vec<Cell>,
    score: u32,
    lines_cleared: u32,
}

impl Board {
    /// Create an empty 10x22 board
    pub fn new() -> Self {
        Self::empty(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board with custom dimensions, each in
    /// `1..=MAX_BOARD_DIMENSION`
    pub fn with_size(width: u16, height: u16) -> Result<Self, CoreError> {
        if width == 0 || height == 0 || width > MAX_BOARD_DIMENSION || height > MAX_BOARD_DIMENSION {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            score: 0,
            lines_cleared: 0,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Where new pieces appear
    pub fn spawn_point(&self) -> Coordinate {
        Coordinate::new(self.width as i32 / 2, self.height as i32 - 1)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Color of the piece occupying (x, y), if any
    pub fn color_at(&self, x: i32, y: i32) -> Option<Rgb> {
        self.get(x, y).flatten().map(|o| o.kind.color())
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.index(cell.x, cell.y).is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i32) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// One row of cells, left to right
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        let start = self.index(0, y)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// All cells, row-major from the bottom row
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `cell` may hold a piece with identity `piece`.
    ///
    /// Validation and the write-time re-check both go through here, so they
    /// always agree on bounds and occupancy.
    fn check_cell(&self, cell: Coordinate, piece: PieceId) -> Result<usize, Conflict> {
        let idx = self.index(cell.x, cell.y).ok_or(Conflict::OutOfBounds)?;
        match self.cells[idx] {
            Some(occupant) if occupant.piece != piece => Err(Conflict::Occupied {
                by: occupant.piece,
            }),
            _ => Ok(idx),
        }
    }

    /// Validate a move/rotation of `piece` and commit it if every target cell is free.
    ///
    /// Returns `Ok(false)` without touching the board or the piece when any
    /// target cell is out of bounds or owned by another piece. A successful
    /// downward step scores one point.
    pub fn try_move(
        &mut self,
        piece: &mut Piece,
        movement: MovementDirection,
        rotation: RotationDirection,
    ) -> Result<bool, CoreError> {
        let origin = piece.candidate_origin(movement);
        let offsets = piece.candidate_footprint(rotation);

        for &offset in offsets {
            let cell = origin + offset;
            if let Err(conflict) = self.check_cell(cell, piece.id()) {
                trace!(
                    piece = %piece.id(),
                    ?movement,
                    ?rotation,
                    %cell,
                    %conflict,
                    "move rejected"
                );
                return Ok(false);
            }
        }

        let before = *piece;
        piece.commit(movement, rotation);

        // Re-check the committed footprint before writing anything.
        let mut targets = [0usize; 4];
        for (slot, cell) in targets.iter_mut().zip(piece.cells()) {
            match self.check_cell(cell, piece.id()) {
                Ok(idx) => *slot = idx,
                Err(conflict) => {
                    *piece = before;
                    return Err(CoreError::Inconsistent {
                        piece: piece.id(),
                        cell,
                        conflict,
                    });
                }
            }
        }

        for cell in piece.previous_cells() {
            if let Some(idx) = self.index(cell.x, cell.y) {
                if matches!(self.cells[idx], Some(o) if o.piece == piece.id()) {
                    self.cells[idx] = None;
                }
            }
        }

        let occupant = Occupant {
            piece: piece.id(),
            kind: piece.kind(),
        };
        for idx in targets {
            self.cells[idx] = Some(occupant);
        }

        if movement == MovementDirection::Down {
            self.score = self.score.saturating_add(drop_score(1));
        }

        trace!(
            piece = %piece.id(),
            from = %piece.previous_origin(),
            to = %piece.origin(),
            degree = piece.orientation().degrees(),
            "move committed"
        );
        Ok(true)
    }

    /// Clear every full row touched by `piece` and score the settle.
    ///
    /// Rows are processed from the highest down, so shifting the rows above a
    /// cleared row never moves a touched row that is still to be checked.
    /// Returns the number of rows cleared.
    pub fn clear_full_lines(&mut self, piece: &Piece) -> u32 {
        let mut cleared = 0u32;
        for y in piece.touched_rows() {
            if self.is_row_full(y) {
                self.remove_row(y as usize);
                cleared += 1;
            }
        }

        let points = settle_score(cleared);
        self.lines_cleared = self.lines_cleared.saturating_add(cleared);
        self.score = self.score.saturating_add(points);

        debug!(
            piece = %piece.id(),
            cleared,
            points,
            score = self.score,
            lines = self.lines_cleared,
            "piece settled"
        );
        cleared
    }

    /// Empty row `y` and shift every row above it down by one.
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;
        let height = self.height as usize;

        // copy_within handles the overlapping ranges
        self.cells
            .copy_within((y + 1) * width..height * width, y * width);

        let top = (height - 1) * width;
        for cell in &mut self.cells[top..] {
            *cell = None;
        }
    }

    /// Clear the entire board and reset both counters
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
        self.score = 0;
        self.lines_cleared = 0;
    }

    /// Fill a row directly (for testing)
    #[cfg(test)]
    fn fill_row(&mut self, y: i32, occupant: Occupant) {
        for x in 0..self.width as i32 {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(occupant);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
