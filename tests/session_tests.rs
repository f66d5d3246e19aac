//! Session tests - lifecycle, settling, game over

use tetrominoes::core::{Board, UniformKinds};
use tetrominoes::engine::{Session, StepOutcome};
use tetrominoes::types::{
    Command, Coordinate, MovementDirection, PieceKind, RotationDegree, RotationDirection,
    SessionState,
};

fn occupied(session: &Session) -> usize {
    session.board().cells().iter().filter(|c| c.is_some()).count()
}

#[test]
fn test_i_piece_falls_to_floor_under_gravity() {
    let mut session = Session::with_seed(1);
    assert_eq!(session.spawn_kind(PieceKind::I), Ok(StepOutcome::Moved));
    assert_eq!(session.state(), SessionState::Running);
    let first = session.active().unwrap().id();

    let mut ticks = 0;
    let outcome = loop {
        match session.tick().unwrap() {
            StepOutcome::Moved => ticks += 1,
            other => break other,
        }
    };
    assert_eq!(outcome, StepOutcome::Settled { cleared: 0 });
    // Origin went from y = 18 to y = 1.
    assert_eq!(ticks, 17);
    for y in 0..4 {
        assert!(session.board().is_occupied(5, y));
    }
    assert_eq!(session.pieces_settled(), 1);
    assert_ne!(session.active().unwrap().id(), first);
    // Entry step, 17 drops, settle bonus, and the next piece's entry step.
    assert_eq!(session.score(), 1 + 17 + 1 + 1);
}

#[test]
fn test_blocked_sideways_and_rotation_do_not_settle() {
    let mut session = Session::with_seed(2);
    session.spawn_kind(PieceKind::I).unwrap();
    let id = session.active().unwrap().id();

    while session.move_piece(MovementDirection::Left).unwrap() == StepOutcome::Moved {}
    assert_eq!(session.active().unwrap().origin().x, 0);
    assert_eq!(
        session.move_piece(MovementDirection::Left),
        Ok(StepOutcome::Rejected)
    );
    assert_eq!(
        session.rotate(RotationDirection::Left),
        Ok(StepOutcome::Rejected)
    );
    assert_eq!(
        session.rotate(RotationDirection::Right),
        Ok(StepOutcome::Rejected)
    );

    assert_eq!(session.active().unwrap().id(), id);
    assert_eq!(session.pieces_settled(), 0);
    assert_eq!(session.active().unwrap().orientation(), RotationDegree::Degree0);
}

#[test]
fn test_move_and_inverse_restore_origin() {
    let mut session = Session::with_seed(3);
    session.spawn_kind(PieceKind::T).unwrap();
    let start = session.active().unwrap().origin();
    let cells = session.active().unwrap().cells();

    for direction in [MovementDirection::Left, MovementDirection::Right] {
        assert_eq!(session.move_piece(direction), Ok(StepOutcome::Moved));
        assert_eq!(session.move_piece(direction.inverse()), Ok(StepOutcome::Moved));
        assert_eq!(session.active().unwrap().origin(), start);
    }

    assert_eq!(session.rotate(RotationDirection::Left), Ok(StepOutcome::Moved));
    assert_eq!(session.rotate(RotationDirection::Right), Ok(StepOutcome::Moved));
    assert_eq!(session.active().unwrap().cells(), cells);
    assert_eq!(occupied(&session), 4);
}

#[test]
fn test_blocked_spawn_is_game_over_and_writes_nothing() {
    // On a 4x4 board the I piece cannot take its entry step.
    let board = Board::with_size(4, 4).unwrap();
    let mut session = Session::with_board(board, UniformKinds::from_seed(4));

    assert_eq!(
        session.spawn_kind(PieceKind::I),
        Ok(StepOutcome::ToppedOut { cleared: 0 })
    );
    assert_eq!(session.state(), SessionState::GameOver);
    assert!(session.active().is_none());
    assert_eq!(occupied(&session), 0);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_stacking_in_center_tops_out() {
    let mut session = Session::with_seed(5);
    session.start().unwrap();

    let mut drops = 0;
    loop {
        match session.hard_drop().unwrap() {
            StepOutcome::Settled { .. } => drops += 1,
            StepOutcome::ToppedOut { .. } => break,
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(drops < 100, "never topped out");
    }

    assert_eq!(session.state(), SessionState::GameOver);
    assert!(session.active().is_none());
    // Only settled pieces own cells; the piece that failed to enter wrote none.
    assert_eq!(session.lines_cleared(), 0);
    assert_eq!(occupied(&session), 4 * session.pieces_settled() as usize);

    let before = session.snapshot();
    for command in [
        Command::Tick,
        Command::HardDrop,
        Command::Move(MovementDirection::Left),
        Command::TogglePause,
        Command::SpawnNext,
    ] {
        assert_eq!(session.apply(command), Ok(StepOutcome::Ignored));
    }
    assert_eq!(session.snapshot(), before);

    assert_eq!(session.apply(Command::Start), Ok(StepOutcome::Moved));
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(occupied(&session), 4);
}

#[test]
fn test_reset_clears_everything() {
    let mut session = Session::with_seed(6);
    session.start().unwrap();
    for _ in 0..3 {
        session.hard_drop().unwrap();
    }
    assert!(session.score() > 0);

    assert_eq!(session.apply(Command::Reset), Ok(StepOutcome::Moved));
    assert_eq!(session.state(), SessionState::Running);
    assert_eq!(session.pieces_settled(), 0);
    assert_eq!(session.lines_cleared(), 0);
    assert_eq!(session.score(), 1);
    assert_eq!(occupied(&session), 4);
}

#[test]
fn test_pause_freezes_the_session() {
    let mut session = Session::with_seed(7);
    session.start().unwrap();
    assert_eq!(
        session.apply(Command::Pause),
        Ok(StepOutcome::StateChanged(SessionState::Paused))
    );
    let before = session.snapshot();
    for command in [
        Command::Tick,
        Command::HardDrop,
        Command::Rotate(RotationDirection::Left),
        Command::Pause,
    ] {
        assert_eq!(session.apply(command), Ok(StepOutcome::Ignored));
    }
    assert_eq!(session.snapshot(), before);

    assert_eq!(
        session.apply(Command::Resume),
        Ok(StepOutcome::StateChanged(SessionState::Running))
    );
    assert_eq!(session.apply(Command::Tick), Ok(StepOutcome::Moved));
}

#[test]
fn test_commands_before_start_are_ignored() {
    let mut session = Session::with_seed(8);
    assert_eq!(session.apply(Command::Tick), Ok(StepOutcome::Ignored));
    assert_eq!(session.apply(Command::TogglePause), Ok(StepOutcome::Ignored));
    assert_eq!(session.state(), SessionState::Idle);
}

#[test]
fn test_seeded_sessions_repeat() {
    let run = |seed| {
        let mut session = Session::with_seed(seed);
        session.start().unwrap();
        let mut kinds = Vec::new();
        for _ in 0..10 {
            kinds.push(session.active().map(|p| p.kind()));
            session.hard_drop().unwrap();
        }
        kinds
    };
    assert_eq!(run(99), run(99));
}

#[test]
fn test_snapshot_includes_active_piece() {
    let mut session = Session::with_seed(9);
    session.spawn_kind(PieceKind::O).unwrap();
    let snap = session.snapshot();
    let active = snap.active.unwrap();
    assert_eq!(active.kind, PieceKind::O);
    assert_eq!(active.origin, Coordinate::new(5, 19));
    for cell in active.cells {
        assert_eq!(snap.kind_at(cell.x, cell.y), Some(PieceKind::O));
    }
    assert!(snap.playable());
}
