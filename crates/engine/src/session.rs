//! Session module - one game: a board, the active piece and the lifecycle
//!
//! The session sequences spawn → move/rotate/drop → settle → clear → respawn.
//! It knows nothing about timers, keys or drawing; those arrive as
//! [`Command`]s through [`Session::apply`].

use tracing::{debug, info};

use crate::core::{Board, CoreError, Piece, UniformKinds};
use crate::snapshot::{ActiveSnapshot, Snapshot};
use crate::types::{
    Command, MovementDirection, PieceId, PieceKind, RotationDirection, SessionState,
};

/// Result of one session operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The command does not apply in the current state.
    Ignored,
    /// The active piece moved, rotated, or a new piece entered the board.
    Moved,
    /// The move was blocked. Nothing changed.
    Rejected,
    /// The active piece settled and a new piece spawned.
    Settled { cleared: u32 },
    /// The active piece settled (or a spawn was attempted) and the next piece
    /// could not be placed. The session is over.
    ToppedOut { cleared: u32 },
    /// Pause/resume.
    StateChanged(SessionState),
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<Piece>,
    state: SessionState,
    kinds: UniformKinds,
    next_id: PieceId,
    pieces_settled: u32,
}

impl Session {
    /// New idle session on a default board with an entropy-seeded piece source
    pub fn new() -> Self {
        Self::with_board(Board::new(), UniformKinds::from_entropy())
    }

    /// New idle session with a deterministic piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::with_board(Board::new(), UniformKinds::from_seed(seed))
    }

    pub fn with_board(board: Board, kinds: UniformKinds) -> Self {
        Self {
            board,
            active: None,
            state: SessionState::Idle,
            kinds,
            next_id: PieceId(1),
            pieces_settled: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.board.lines_cleared()
    }

    pub fn pieces_settled(&self) -> u32 {
        self.pieces_settled
    }

    pub fn seed(&self) -> Option<u64> {
        self.kinds.seed()
    }

    /// Apply one command. This is the session's single mutating entry point.
    pub fn apply(&mut self, command: Command) -> Result<StepOutcome, CoreError> {
        match command {
            Command::Start => self.start(),
            Command::SpawnNext => self.spawn(),
            Command::Tick => self.tick(),
            Command::Move(direction) => self.move_piece(direction),
            Command::Rotate(direction) => self.rotate(direction),
            Command::HardDrop => self.hard_drop(),
            Command::Pause => Ok(self.pause()),
            Command::Resume => Ok(self.resume()),
            Command::TogglePause => Ok(self.toggle_pause()),
            Command::Reset => self.reset(),
        }
    }

    /// Begin a game from Idle or after a game over.
    pub fn start(&mut self) -> Result<StepOutcome, CoreError> {
        match self.state {
            SessionState::Idle | SessionState::GameOver => self.reset(),
            SessionState::Running | SessionState::Paused => Ok(StepOutcome::Ignored),
        }
    }

    /// Empty the board, zero the counters and start over with a fresh piece.
    ///
    /// Returns the outcome of the first spawn.
    pub fn reset(&mut self) -> Result<StepOutcome, CoreError> {
        info!(score = self.board.score(), lines = self.board.lines_cleared(), "session reset");
        self.board.clear();
        self.active = None;
        self.pieces_settled = 0;
        self.state = SessionState::Running;
        self.spawn()
    }

    /// Spawn a piece of a random kind. Ignored while a piece is falling.
    pub fn spawn(&mut self) -> Result<StepOutcome, CoreError> {
        if !self.can_spawn() {
            return Ok(StepOutcome::Ignored);
        }
        let kind = self.kinds.next_kind();
        self.spawn_kind(kind)
    }

    /// Spawn a piece of the given kind at the spawn point.
    ///
    /// The piece enters the board through an initial downward step. If that
    /// step is blocked nothing is written and the session is over.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> Result<StepOutcome, CoreError> {
        if !self.can_spawn() {
            return Ok(StepOutcome::Ignored);
        }

        let id = self.next_id;
        self.next_id = id.next();
        let mut piece = Piece::spawn(id, kind, self.board.spawn_point());

        if self
            .board
            .try_move(&mut piece, MovementDirection::Down, RotationDirection::NoRotation)?
        {
            debug!(piece = %id, kind = kind.as_str(), origin = %piece.origin(), "piece spawned");
            self.active = Some(piece);
            self.state = SessionState::Running;
            Ok(StepOutcome::Moved)
        } else {
            info!(
                piece = %id,
                kind = kind.as_str(),
                score = self.board.score(),
                lines = self.board.lines_cleared(),
                "game over"
            );
            self.active = None;
            self.state = SessionState::GameOver;
            Ok(StepOutcome::ToppedOut { cleared: 0 })
        }
    }

    /// Spawning needs a live game with no piece still falling.
    fn can_spawn(&self) -> bool {
        self.active.is_none() && matches!(self.state, SessionState::Idle | SessionState::Running)
    }

    /// Gravity step. A blocked step settles the piece.
    pub fn tick(&mut self) -> Result<StepOutcome, CoreError> {
        self.command(MovementDirection::Down, RotationDirection::NoRotation)
    }

    pub fn move_piece(&mut self, direction: MovementDirection) -> Result<StepOutcome, CoreError> {
        self.command(direction, RotationDirection::NoRotation)
    }

    pub fn rotate(&mut self, direction: RotationDirection) -> Result<StepOutcome, CoreError> {
        self.command(MovementDirection::NoMovement, direction)
    }

    /// Forward a move/rotation of the active piece to the board.
    ///
    /// Only a blocked downward step settles; blocked sideways moves and
    /// rotations are plain rejections.
    pub fn command(
        &mut self,
        movement: MovementDirection,
        rotation: RotationDirection,
    ) -> Result<StepOutcome, CoreError> {
        if self.state != SessionState::Running {
            return Ok(StepOutcome::Ignored);
        }
        let Some(piece) = self.active.as_mut() else {
            return Ok(StepOutcome::Ignored);
        };

        if self.board.try_move(piece, movement, rotation)? {
            return Ok(StepOutcome::Moved);
        }

        if movement == MovementDirection::Down {
            self.settle()
        } else {
            Ok(StepOutcome::Rejected)
        }
    }

    /// Drop the active piece until it settles.
    pub fn hard_drop(&mut self) -> Result<StepOutcome, CoreError> {
        loop {
            match self.command(MovementDirection::Down, RotationDirection::NoRotation)? {
                StepOutcome::Moved => continue,
                other => return Ok(other),
            }
        }
    }

    fn settle(&mut self) -> Result<StepOutcome, CoreError> {
        let Some(piece) = self.active.take() else {
            return Ok(StepOutcome::Ignored);
        };

        let cleared = self.board.clear_full_lines(&piece);
        self.pieces_settled = self.pieces_settled.saturating_add(1);

        match self.spawn()? {
            StepOutcome::ToppedOut { .. } => Ok(StepOutcome::ToppedOut { cleared }),
            _ => Ok(StepOutcome::Settled { cleared }),
        }
    }

    pub fn pause(&mut self) -> StepOutcome {
        if self.state != SessionState::Running {
            return StepOutcome::Ignored;
        }
        self.state = SessionState::Paused;
        StepOutcome::StateChanged(self.state)
    }

    pub fn resume(&mut self) -> StepOutcome {
        if self.state != SessionState::Paused {
            return StepOutcome::Ignored;
        }
        self.state = SessionState::Running;
        StepOutcome::StateChanged(self.state)
    }

    pub fn toggle_pause(&mut self) -> StepOutcome {
        match self.state {
            SessionState::Running => self.pause(),
            SessionState::Paused => self.resume(),
            _ => StepOutcome::Ignored,
        }
    }

    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.cells.clear();
        out.cells
            .extend(self.board.cells().iter().map(|cell| cell.map(|o| o.kind)));
        out.score = self.board.score();
        out.lines_cleared = self.board.lines_cleared();
        out.state = self.state;
        out.pieces_settled = self.pieces_settled;
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
