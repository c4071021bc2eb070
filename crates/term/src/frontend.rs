use std::io::{self, Write};

use anyhow::Result;
use crossterm::terminal;
use termtris_engine::Renderer;
use tracing::debug;

use crate::core::GameSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

/// Fallback when the terminal size cannot be queried.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

/// Game-loop renderer that draws snapshots to the terminal.
pub struct TerminalFrontend<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    /// Fixed viewport; `None` follows the live terminal size.
    fixed: Option<Viewport>,
    last_viewport: Option<Viewport>,
}

impl TerminalFrontend<io::Stdout> {
    pub fn new() -> Self {
        Self::build(TerminalRenderer::new(), None)
    }
}

impl Default for TerminalFrontend<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalFrontend<W> {
    /// Render to `out` at a fixed size instead of the live terminal.
    pub fn with_writer(out: W, viewport: Viewport) -> Self {
        Self::build(TerminalRenderer::with_writer(out), Some(viewport))
    }

    fn build(renderer: TerminalRenderer<W>, fixed: Option<Viewport>) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            fixed,
            last_viewport: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn writer(&self) -> &W {
        self.renderer.writer()
    }

    fn viewport(&self) -> Viewport {
        self.fixed.unwrap_or_else(|| {
            terminal::size()
                .map(|(w, h)| Viewport::new(w, h))
                .unwrap_or(DEFAULT_VIEWPORT)
        })
    }
}

impl<W: Write> Renderer for TerminalFrontend<W> {
    fn render(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let viewport = self.viewport();
        if self.last_viewport != Some(viewport) {
            debug!(width = viewport.width, height = viewport.height, "viewport changed");
            self.renderer.invalidate();
            self.last_viewport = Some(viewport);
        }
        self.view.render_into(snapshot, viewport, &mut self.fb);
        self.renderer.present(&mut self.fb)
    }
}
