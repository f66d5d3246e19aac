//! Terminal rendering for the session engine.
//!
//! Rendering goes snapshot → framebuffer → terminal. Only the last step does
//! I/O, so the view can be tested without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetrominoes_engine as engine;
pub use tetrominoes_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph};
pub use game_view::{status_line, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
