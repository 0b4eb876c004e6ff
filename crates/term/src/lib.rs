//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. Board
//! snapshots are drawn into a plain framebuffer, which is then flushed to the
//! terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` free of terminal I/O
//! - Make the view testable without a terminal (see [`GameView`])
//! - Redraw only what changed between ticks

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Tone};
pub use game_view::{banner_text, Anchor, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
