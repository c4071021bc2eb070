use std::time::{Duration, Instant};

use anyhow::Result;
use termtris_core::GameSnapshot;
use termtris_types::GameAction;

/// Non-blocking source of player actions.
pub trait InputSource {
    /// Return at most one pending action, or `None` if nothing usable is queued.
    fn poll_action(&mut self) -> Result<Option<GameAction>>;
}

/// Draws a snapshot of the game.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

/// Monotonic time source.
pub trait Clock {
    /// Time since an arbitrary fixed epoch.
    fn now(&self) -> Duration;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll_action(&mut self) -> Result<Option<GameAction>> {
        (**self).poll_action()
    }
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).render(snapshot)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}
