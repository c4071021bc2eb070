//! Pieces module - tetromino shapes, the falling piece, and wall-kick rotation
//!
//! Every kind has four rotation states, each described by the 4 occupied
//! cells of a 4x4 box whose top-left corner is the piece origin.

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y, WALL_KICKS};

/// Offset of a single mino relative to piece origin, as (column, row)
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Shape table indexed by `[kind.index()][rotation.index()]`.
///
/// Row 0 of each box is the top row. S and Z only have two distinct states;
/// O looks the same in all four.
pub const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O
    [
        [(1, 1), (2, 1), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (2, 2)],
    ],
    // T
    [
        [(1, 1), (0, 2), (1, 2), (2, 2)],
        [(1, 1), (1, 2), (2, 2), (1, 3)],
        [(0, 2), (1, 2), (2, 2), (1, 3)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
    ],
    // Z
    [
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(2, 1), (1, 2), (2, 2), (1, 3)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(2, 1), (1, 2), (2, 2), (1, 3)],
    ],
    // J
    [
        [(0, 1), (0, 2), (1, 2), (2, 2)],
        [(1, 1), (2, 1), (1, 2), (1, 3)],
        [(0, 2), (1, 2), (2, 2), (2, 3)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 1), (0, 2), (1, 2), (2, 2)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 1), (1, 1), (1, 2), (1, 3)],
    ],
];

/// Get the shape (mino offsets) for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// The falling piece.
///
/// Movement and rotation are unconditional; callers check the placement
/// against the grid first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn origin in its spawn rotation
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, Rotation::North, SPAWN_X, SPAWN_Y)
    }

    pub fn at(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Translate the origin
    pub fn move_by(&mut self, dx: i8, dy: i8) {
        self.x += dx;
        self.y += dy;
    }

    /// Step the rotation state forward (clockwise) or back, modulo 4
    pub fn rotate(&mut self, clockwise: bool) {
        self.rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
    }

    /// Absolute (column, row) cells in the current rotation
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.cells_with(None)
    }

    /// Absolute cells as if the piece had `rotation` instead of its own.
    ///
    /// Lets callers probe a rotation without touching the piece.
    pub fn cells_with(&self, rotation: Option<Rotation>) -> [(i8, i8); 4] {
        let shape = get_shape(self.kind, rotation.unwrap_or(self.rotation));
        shape.map(|(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Resolve a rotation request against the wall-kick table.
///
/// `fits(dx, dy, rotation)` reports whether the piece, shifted by the offset
/// and turned to `rotation`, would be a legal placement. Returns the new
/// rotation and the first offset that fits, or `None` if every kick fails.
pub fn try_rotate(
    piece: &Piece,
    clockwise: bool,
    fits: impl Fn(i8, i8, Rotation) -> bool,
) -> Option<(Rotation, (i8, i8))> {
    let candidate = if clockwise {
        piece.rotation.rotate_cw()
    } else {
        piece.rotation.rotate_ccw()
    };

    WALL_KICKS
        .iter()
        .copied()
        .find(|&(dx, dy)| fits(dx, dy, candidate))
        .map(|offset| (candidate, offset))
}
