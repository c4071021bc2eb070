//! Single-threaded frame loop.
//!
//! Each [`GameLoop::step`] polls at most one action, applies it, advances
//! gravity by the wall-clock delta since the previous step and renders.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use termtris_core::{GameSnapshot, GameState};
use termtris_types::GameAction;
use tracing::{debug, info};

use crate::ports::{Clock, InputSource, Renderer};

pub struct GameLoop<I, R, C> {
    state: GameState,
    input: I,
    renderer: R,
    clock: C,
    /// Clock reading at the previous step
    last: Duration,
    quit: bool,
    frames: u64,
    snapshot: GameSnapshot,
}

impl<I, R, C> GameLoop<I, R, C>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    pub fn new(state: GameState, input: I, renderer: R, clock: C) -> Self {
        let last = clock.now();
        Self {
            state,
            input,
            renderer,
            clock,
            last,
            quit: false,
            frames: 0,
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One iteration: input, gravity, render.
    pub fn step(&mut self) -> Result<()> {
        if let Some(action) = self.input.poll_action()? {
            self.handle_action(action);
        }

        let now = self.clock.now();
        let delta = now.saturating_sub(self.last);
        self.last = now;
        self.state.tick(delta);

        self.state.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot)?;
        self.frames += 1;
        Ok(())
    }

    fn handle_action(&mut self, action: GameAction) {
        if action == GameAction::Quit {
            info!("quit requested");
            self.quit = true;
            return;
        }
        let changed = self.state.apply_action(action);
        debug!(action = action.as_str(), changed, "action applied");
    }

    /// Step until quit, sleeping `frame` between iterations.
    pub fn run(&mut self, frame: Duration) -> Result<()> {
        info!(frame_ms = frame.as_millis() as u64, "game loop started");
        while !self.quit {
            self.step()?;
            if self.quit {
                break;
            }
            thread::sleep(frame);
        }
        info!(
            frames = self.frames,
            score = self.state.score(),
            lines = self.state.lines(),
            level = self.state.level(),
            "game loop stopped"
        );
        Ok(())
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
