//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and exposes
//! them to the game loop as a non-blocking [`termtris_engine::InputSource`].

pub mod map;
pub mod source;

pub use termtris_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::CrosstermInput;
