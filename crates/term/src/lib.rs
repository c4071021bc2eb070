//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer by [`GameView`], and [`TerminalRenderer`] sends only the
//! changed runs to the terminal. [`TerminalFrontend`] glues both to the
//! engine's `Renderer` seam.

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod renderer;

pub use termtris_core as core;
pub use termtris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use frontend::TerminalFrontend;
pub use game_view::{piece_color, AnchorY, GameView, Layout, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
