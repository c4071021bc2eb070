//! TerminalRenderer: flushes framebuffers to a terminal, sending only what changed.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Double-buffered terminal writer.
///
/// `W` is stdout in the game and a byte buffer in tests.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// What the terminal currently shows; `None` forces a full redraw.
    front: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            front: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.front = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Show `back`, then swap it with the previous frame so the caller can
    /// draw the next frame into the old buffer without allocating.
    pub fn present(&mut self, back: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut front = match self.front.take() {
            Some(front) if same_size(&front, back) => {
                encode_diff_into(&front, back, &mut self.buf)?;
                front
            }
            _ => {
                encode_full_into(back, &mut self.buf)?;
                FrameBuffer::new(back.width(), back.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut front, back);
        self.front = Some(front);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    (a.width(), a.height()) == (b.width(), b.height())
}

/// Tracks the last style sent so runs of equal style cost nothing.
struct StyleCursor(Option<CellStyle>);

impl StyleCursor {
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        if self.0 == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        self.0 = Some(style);
        Ok(())
    }
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a clear-and-repaint of the whole frame into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = StyleCursor(None);
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let glyph = fb.get(x, y).unwrap_or_default();
            style.apply(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
    }
    finish(out)
}

/// Encode only the runs that differ between `prev` and `next` into `out`.
///
/// Both frames must have the same size. Nothing is written when they match.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let runs = changed_runs(prev, next);
    if runs.is_empty() {
        return Ok(());
    }
    let mut style = StyleCursor(None);
    for (x, y, len) in runs {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let glyph = next.get(cx, y).unwrap_or_default();
            style.apply(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
    }
    finish(out)
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal horizontal runs `(x, y, len)` of differing glyphs, top to bottom.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let width = next.width() as usize;
    if width == 0 {
        return Vec::new();
    }
    if !same_size(prev, next) {
        return (0..next.height()).map(|y| (0, y, next.width())).collect();
    }

    let mut runs = Vec::new();
    let rows = prev.glyphs().chunks(width).zip(next.glyphs().chunks(width));
    for (y, (a, b)) in rows.enumerate() {
        let mut x = 0;
        while x < width {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < width && a[x] != b[x] {
                x += 1;
            }
            runs.push((start as u16, y as u16, (x - start) as u16));
        }
    }
    runs
}
