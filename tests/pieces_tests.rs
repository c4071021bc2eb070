//! Pieces tests - shape tables and kick resolution

use proptest::prelude::*;

use termtris::core::{try_rotate, Grid, Piece};
use termtris::types::{PieceKind, Rotation, WALL_KICKS};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0usize..7).prop_map(|i| PieceKind::ALL[i])
}

#[test]
fn spawn_shapes_fit_an_empty_grid() {
    let grid = Grid::new();
    for kind in PieceKind::ALL {
        let piece = Piece::new(kind);
        assert!(grid.is_valid(&piece, 0, 0, None), "{:?}", kind);
        for (_, y) in piece.cells() {
            assert!((1..=2).contains(&y), "{:?} spawns outside rows 1-2", kind);
        }
    }
}

#[test]
fn o_piece_looks_the_same_in_every_rotation() {
    let piece = Piece::new(PieceKind::O);
    let north = piece.cells();
    for r in 0..4 {
        assert_eq!(piece.cells_with(Some(Rotation::from_index(r))), north);
    }
}

#[test]
fn kick_order_is_stay_left_right_up() {
    assert_eq!(WALL_KICKS[0], (0, 0));
    assert_eq!(WALL_KICKS[1], (-1, 0));
    assert_eq!(WALL_KICKS[2], (1, 0));
    assert_eq!(WALL_KICKS[3], (0, -1));
}

proptest! {
    #[test]
    fn four_rotations_restore_piece(
        kind in kind_strategy(),
        start in 0usize..4,
        x in -2i8..8,
        y in -2i8..18,
        clockwise in any::<bool>(),
    ) {
        let original = Piece::at(kind, Rotation::from_index(start), x, y);
        let mut piece = original;
        for _ in 0..4 {
            piece.rotate(clockwise);
        }
        prop_assert_eq!(piece, original);
    }

    #[test]
    fn unobstructed_rotation_uses_no_kick(
        kind in kind_strategy(),
        start in 0usize..4,
        x in 1i8..5,
        y in 2i8..14,
    ) {
        let grid = Grid::new();
        let piece = Piece::at(kind, Rotation::from_index(start), x, y);
        let result = try_rotate(&piece, true, |dx, dy, r| grid.is_valid(&piece, dx, dy, Some(r)));
        prop_assert_eq!(result, Some((piece.rotation.rotate_cw(), (0, 0))));
    }

    #[test]
    fn resolved_rotation_always_fits(
        kind in kind_strategy(),
        start in 0usize..4,
        x in -2i8..9,
        y in -1i8..18,
        clockwise in any::<bool>(),
    ) {
        let grid = Grid::from_rows(&["ZZZZ..ZZZZ", "ZZZ....ZZZ"]);
        let piece = Piece::at(kind, Rotation::from_index(start), x, y);
        let fits = |dx, dy, r| grid.is_valid(&piece, dx, dy, Some(r));
        if let Some((rotation, (dx, dy))) = try_rotate(&piece, clockwise, fits) {
            let mut moved = piece;
            moved.rotation = rotation;
            moved.move_by(dx, dy);
            prop_assert!(grid.is_valid(&moved, 0, 0, None));
            prop_assert!(WALL_KICKS.contains(&(dx, dy)));
        }
    }
}
