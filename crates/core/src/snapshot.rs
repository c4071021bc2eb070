use crate::pieces::Piece;
use crate::types::{Cell, PieceKind, Phase, GRID_HEIGHT, GRID_WIDTH};

/// Read-only copy of everything a frontend needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Locked cells, rows top to bottom
    pub grid: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<Piece>,
    /// Landing row of the active piece origin
    pub ghost_y: Option<i8>,
    pub preview: PieceKind,
    pub phase: Phase,
    pub episode: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Cell contents with the active piece drawn over the locked grid
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        if let Some(active) = &self.active {
            if active
                .cells()
                .iter()
                .any(|&(cx, cy)| cx as isize == x as isize && cy as isize == y as isize)
            {
                return Some(active.kind);
            }
        }
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            ghost_y: None,
            preview: PieceKind::I,
            phase: Phase::Running,
            episode: 0,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: 0,
        }
    }
}
