//! GameView: maps an engine [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::Snapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, SessionState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const STATUS: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        // One line below the frame is reserved for the status line.
        let start_y = viewport.height.saturating_sub(frame_h.saturating_add(1)) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Board row 0 is the bottom of the well, screen row 0 is the top.
        // Cells that fall outside the viewport are skipped.
        for y in 0..snap.height {
            let screen_y = start_y.saturating_add(snap.height - y);
            if screen_y >= viewport.height {
                continue;
            }
            for x in 0..snap.width {
                let screen_x = start_x
                    .saturating_add(1)
                    .saturating_add(x.saturating_mul(self.cell_w));
                if screen_x >= viewport.width {
                    break;
                }
                match snap.kind_at(x as i32, y as i32) {
                    Some(kind) => {
                        let style = CellStyle::new(kind.color(), WELL_BG).bold();
                        fb.fill_rect(screen_x, screen_y, self.cell_w, 1, '█', style);
                    }
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG);
                        fb.fill_rect(screen_x, screen_y, self.cell_w, 1, ' ', style);
                        fb.put_char(screen_x, screen_y, '·', style);
                    }
                }
            }
        }

        let status = status_line(snap);
        let status_x = viewport
            .width
            .saturating_sub(status.chars().count() as u16)
            / 2;
        fb.put_str(status_x, start_y.saturating_add(frame_h), &status, STATUS);

        let overlay = match snap.state {
            SessionState::Paused => Some("PAUSED"),
            SessionState::GameOver => Some("GAME OVER"),
            _ => None,
        };
        if let Some(text) = overlay {
            let x = start_x.saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            fb.put_str(x, start_y.saturating_add(frame_h / 2), text, STATUS.bold());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(right, y, '┐', BORDER);
        fb.put_char(x, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        fb.fill_rect(x.saturating_add(1), y, w - 2, 1, '─', BORDER);
        fb.fill_rect(x.saturating_add(1), bottom, w - 2, 1, '─', BORDER);
        fb.fill_rect(x, y.saturating_add(1), 1, h - 2, '│', BORDER);
        fb.fill_rect(right, y.saturating_add(1), 1, h - 2, '│', BORDER);
    }
}

/// "Lines: N  Score: N  <state>"
pub fn status_line(snap: &Snapshot) -> String {
    let message = match snap.state {
        SessionState::Idle => "press r to start",
        SessionState::Running => "running",
        SessionState::Paused => "paused",
        SessionState::GameOver => "game over, r to restart",
    };
    format!(
        "Lines: {}  Score: {}  {}",
        snap.lines_cleared, snap.score, message
    )
}
