//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`] and provides a
//! queued [`TerminalInput`] that implements the core's
//! [`InputSource`](crate::core::InputSource) seam.

pub mod map;
pub mod terminal;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
pub use terminal::{TerminalInput, QUEUE_CAPACITY};
