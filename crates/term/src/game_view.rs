//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure (no I/O), so layout is unit-tested directly.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, Rotation, GRID_HEIGHT, GRID_WIDTH};

/// Columns between the board frame and the side panel.
const PANEL_GAP: u16 = 2;
/// Width reserved for the side panel.
const PANEL_W: u16 = 16;

const CONTROLS: [&str; 8] = [
    "<- -> move",
    "down  soft drop",
    "up/spc drop",
    "r/x   rotate",
    "z     rotate ccw",
    "p     pause",
    "n     new game",
    "q     quit",
];

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Screen positions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame (border included)
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left column of the side panel, if it fits
    pub panel_x: Option<u16>,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = GRID_WIDTH as u16 * self.cell_w + 2;
        let frame_h = GRID_HEIGHT as u16 * self.cell_h + 2;

        let with_panel = frame_w + PANEL_GAP + PANEL_W;
        let show_panel = viewport.width >= with_panel;
        let total_w = if show_panel { with_panel } else { frame_w };

        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: show_panel.then(|| frame_x + frame_w + PANEL_GAP),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Reuse one framebuffer across frames; nothing allocates unless the
    /// viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let layout = self.layout(viewport);

        self.draw_well(fb, &layout, snap);
        if let Some(panel_x) = layout.panel_x {
            self.draw_side_panel(fb, snap, panel_x, layout.frame_y);
        }

        match snap.phase {
            Phase::Running => {}
            Phase::Paused => draw_overlay(fb, &layout, &["PAUSED", "p to resume"]),
            Phase::GameOver => draw_overlay(fb, &layout, &["GAME OVER", "n new game"]),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &GameSnapshot) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        draw_border(fb, layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h, border);

        let empty = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (ch, style) = match cell {
                    Some(kind) => ('█', block_style(*kind)),
                    None => ('·', empty),
                };
                self.fill_board_cell(fb, layout, x as i8, y as i8, ch, style);
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
                for (dx, dy) in get_shape(active.kind, active.rotation) {
                    self.fill_board_cell(fb, layout, active.x + dx, ghost_y + dy, '░', ghost);
                }
            }
            for (x, y) in active.cells() {
                self.fill_board_cell(fb, layout, x, y, '█', block_style(active.kind));
            }
        }
    }

    /// Fill the terminal rectangle of board cell (x, y); off-board cells are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..GRID_WIDTH as i8).contains(&x) || !(0..GRID_HEIGHT as i8).contains(&y) {
            return;
        }
        let px = layout.frame_x + 1 + x as u16 * self.cell_w;
        let py = layout.frame_y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = top;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        self.draw_mini_piece(fb, x, y + 1, snap.preview);
        y += 4;

        let help = value.dim();
        for line in CONTROLS {
            if y >= fb.height() {
                break;
            }
            fb.put_str(x, y, line, help);
            y += 1;
        }
    }

    /// Spawn-orientation shape in a 4x2 cell box (spawn shapes only use box rows 1-2).
    fn draw_mini_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = block_style(kind);
        for (dx, dy) in get_shape(kind, Rotation::North) {
            let px = x + dx as u16 * self.cell_w;
            let py = y + (dy as u16).saturating_sub(1);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let (right, bottom) = (x + w - 1, y + h - 1);

    for cx in x + 1..right {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', style);
        fb.put_char(right, cy, '│', style);
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(right, y, '┐', style);
    fb.put_char(x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
}

/// Centered lines over the middle of the board frame.
fn draw_overlay(fb: &mut FrameBuffer, layout: &Layout, lines: &[&str]) {
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let mid_y = layout.frame_y + layout.frame_h / 2;
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, mid_y + i as u16, text, if i == 0 { style } else { style.dim() });
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(piece_color(kind), WELL_BG).bold()
}
