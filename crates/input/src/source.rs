use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use termtris_engine::InputSource;

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads pending crossterm key events without blocking.
///
/// Only key presses count; repeats, releases and non-key events are dropped.
/// Unmapped keys are consumed and yield `None` for that poll.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll_action(&mut self) -> Result<Option<GameAction>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}
