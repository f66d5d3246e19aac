use tetrominoes::engine::{Session, Snapshot};
use tetrominoes::term::{status_line, FrameBuffer, GameView, Viewport};
use tetrominoes::types::{PieceKind, SessionState};

// With cell_w = 2 the default 10x22 board is 20x22 inside a border: 22x24.
const VP: Viewport = Viewport {
    width: 22,
    height: 25,
};

#[test]
fn term_view_renders_border_corners() {
    let fb = GameView::default().render(&Snapshot::default(), VP);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 23).unwrap().ch, '└');
    assert_eq!(fb.get(21, 23).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_bottom_row_at_bottom_of_screen() {
    let mut snap = Snapshot::default();
    // Board (0, 0) is the bottom-left cell.
    snap.cells[0] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, VP);
    let bottom = 22;
    assert_eq!(fb.get(1, bottom).unwrap().ch, '█');
    assert_eq!(fb.get(2, bottom).unwrap().ch, '█');
    assert_eq!(fb.get(1, bottom).unwrap().style.fg, PieceKind::I.color());
    assert_ne!(fb.get(1, 1).unwrap().ch, '█');
}

#[test]
fn term_view_shows_status_and_overlays() {
    let mut snap = Snapshot::default();
    snap.score = 51;
    snap.lines_cleared = 1;
    snap.state = SessionState::Paused;

    let fb = GameView::default().render(&snap, VP);
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(all.contains("PAUSED"));

    let status = status_line(&snap);
    assert!(status.contains("Lines: 1"));
    assert!(status.contains("Score: 51"));

    snap.state = SessionState::GameOver;
    let fb = GameView::default().render(&snap, Viewport::new(60, 30));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Score: 51"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let mut session = Session::with_seed(3);
    session.start().unwrap();
    let snap = session.snapshot();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));
    view.render_into(&snap, Viewport::new(22, 25), &mut fb);
    assert_eq!(fb, view.render(&snap, Viewport::new(22, 25)));

    let drawn = (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).unwrap().ch == '█')
        .count();
    // Four cells, two columns each.
    assert_eq!(drawn, 8);
}

#[test]
fn term_view_clips_boards_wider_than_u16_frame() {
    let snap = Snapshot {
        width: 40000,
        height: 40000,
        cells: vec![Some(PieceKind::T)],
        ..Snapshot::default()
    };

    let fb = GameView::default().render(&snap, Viewport::new(30, 10));
    assert_eq!((fb.width(), fb.height()), (30, 10));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
