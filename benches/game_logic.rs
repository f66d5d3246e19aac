use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrominoes::core::{Board, Piece};
use tetrominoes::engine::{Session, Snapshot, StepOutcome};
use tetrominoes::types::{
    Command, Coordinate, MovementDirection, PieceId, PieceKind, RotationDegree, RotationDirection,
};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.start().unwrap();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.apply(black_box(Command::Tick)).is_err() || session.active().is_none() {
                session.reset().unwrap();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut last = None;
            for x in 0..10 {
                let mut piece = Piece::new(
                    PieceId(x as u32 + 1),
                    PieceKind::I,
                    Coordinate::new(x, 1),
                    RotationDegree::Degree0,
                );
                board
                    .try_move(&mut piece, MovementDirection::NoMovement, RotationDirection::NoRotation)
                    .unwrap();
                last = Some(piece);
            }
            if let Some(piece) = last {
                black_box(board.clear_full_lines(&piece));
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = Board::new();
    let mut piece = Piece::new(PieceId(1), PieceKind::T, Coordinate::new(5, 10), RotationDegree::Degree0);

    c.bench_function("try_move_rotate_left", |b| {
        b.iter(|| {
            board
                .try_move(
                    &mut piece,
                    MovementDirection::NoMovement,
                    black_box(RotationDirection::Left),
                )
                .unwrap()
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.start().unwrap();

    c.bench_function("hard_drop_and_spawn", |b| {
        b.iter(|| {
            if !matches!(session.hard_drop(), Ok(StepOutcome::Settled { .. })) {
                session.reset().unwrap();
            }
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = Session::with_seed(12345);
    session.start().unwrap();
    let mut snap = Snapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_try_move,
    bench_spawn,
    bench_snapshot
);
criterion_main!(benches);
